use dioxus::prelude::*;

use crate::auth_context::AuthContext;
use crate::routes::Route;

/// Top bar shared by every page.
#[component]
pub fn Navbar() -> Element {
    let mut auth = use_context::<AuthContext>();
    let route: Route = use_route();
    let nav = use_navigator();

    let link_class = |active: bool| {
        if active {
            "text-rose-600 font-semibold"
        } else {
            "text-gray-600 hover:text-rose-600"
        }
    };

    rsx! {
        header { class: "sticky top-0 z-40 bg-white/90 backdrop-blur border-b border-gray-100",
            nav { class: "mx-auto max-w-7xl px-4 h-16 flex items-center justify-between",
                Link { to: Route::Home {}, class: "text-xl font-bold text-rose-600", "ScortRio" }
                div { class: "flex items-center gap-6 text-sm",
                    Link {
                        to: Route::Listings {},
                        class: link_class(matches!(route, Route::Listings {} | Route::CityListings { .. })),
                        "Acompanhantes"
                    }
                    Link {
                        to: Route::PlansPage {},
                        class: link_class(matches!(route, Route::PlansPage {})),
                        "Planos"
                    }
                    if auth.is_authenticated() {
                        if auth.is_admin() {
                            Link {
                                to: Route::Admin {},
                                class: link_class(matches!(route, Route::Admin {})),
                                "Moderação"
                            }
                        }
                        Link {
                            to: Route::Dashboard {},
                            class: link_class(matches!(
                                route,
                                Route::Dashboard {} | Route::ProfileEditor {} | Route::Photos {} | Route::Plans {}
                            )),
                            "Minha conta"
                        }
                        button {
                            class: "text-gray-500 hover:text-gray-900",
                            onclick: move |_| {
                                auth.logout();
                                nav.push(Route::Home {});
                            },
                            "Sair"
                        }
                    } else {
                        Link {
                            to: Route::Login {},
                            class: link_class(matches!(route, Route::Login {})),
                            "Entrar"
                        }
                        Link {
                            to: Route::Register {},
                            class: "rounded-xl bg-rose-500 px-4 py-2 font-semibold text-white hover:bg-rose-600",
                            "Anunciar"
                        }
                    }
                }
            }
        }

        main { class: "min-h-screen bg-gray-50", Outlet::<Route> {} }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "flex flex-col items-center justify-center py-24 text-center",
            h1 { class: "text-4xl font-bold text-gray-900 mb-2", "Página não encontrada" }
            p { class: "text-gray-500 mb-6", "/{path}" }
            Link { to: Route::Home {}, class: "text-rose-600 hover:underline", "Voltar ao início" }
        }
    }
}
