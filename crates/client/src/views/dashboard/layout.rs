use dioxus::prelude::*;

use crate::auth_context::{use_require_auth, AuthContext};
use crate::components::ui::Spinner;
use crate::routes::Route;

#[component]
pub fn DashboardLayout() -> Element {
    let auth = use_context::<AuthContext>();
    let route: Route = use_route();

    if !use_require_auth() {
        return rsx! { Spinner {} };
    }

    let name = auth.user().map(|u| u.name).unwrap_or_default();
    let items = [
        (Route::Dashboard {}, "📊 Dashboard"),
        (Route::ProfileEditor {}, "👤 Meu Perfil"),
        (Route::Photos {}, "📷 Minhas Fotos"),
        (Route::Plans {}, "⭐ Planos"),
    ];

    rsx! {
        div { class: "mx-auto max-w-7xl px-4 py-8 flex flex-col gap-8 md:flex-row",
            aside { class: "md:w-60 shrink-0",
                p { class: "mb-4 text-sm text-gray-500", "Olá, {name}" }
                nav { class: "flex flex-col gap-1",
                    for (target, label) in items {
                        Link {
                            key: "{label}",
                            class: if target == route { "rounded-xl bg-rose-50 px-4 py-2 font-semibold text-rose-600" } else { "rounded-xl px-4 py-2 text-gray-600 hover:bg-gray-100" },
                            to: target.clone(),
                            "{label}"
                        }
                    }
                }
            }
            section { class: "flex-1 min-w-0", Outlet::<Route> {} }
        }
    }
}
