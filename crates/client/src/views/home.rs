use dioxus::prelude::*;
use futures_util::future::join;
use vitrine_shared::SortMode;

use crate::auth_context::AuthContext;
use crate::components::ui::{Button, Spinner};
use crate::components::ListingCard;
use crate::listing_query::{FilterChange, ListingQuery};
use crate::log_warn;
use crate::routes::Route;
use crate::taxonomy::Taxonomies;

/// Landing page: city search, most popular listings and city shortcuts.
#[component]
pub fn Home() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = use_navigator();
    let mut city = use_signal(String::new);

    let data = use_resource(move || async move {
        let api = auth.manager.peek().client();
        let mut featured = ListingQuery::new();
        featured.set_filter(FilterChange::Sort(SortMode::Popular));
        let (taxonomies, _) = join(Taxonomies::load_filters(&api), featured.fetch_page(&api)).await;
        let taxonomies = taxonomies.unwrap_or_else(|e| {
            log_warn!("Failed to load cities: {e}");
            Taxonomies::default()
        });
        (taxonomies, featured)
    });

    let Some((taxonomies, featured)) = data.read().clone() else {
        return rsx! { Spinner {} };
    };

    rsx! {
        section { class: "bg-gradient-to-br from-rose-500 to-pink-600 text-white",
            div { class: "mx-auto max-w-4xl px-4 py-20 text-center",
                h1 { class: "text-4xl md:text-5xl font-bold mb-4", "Acompanhantes no Rio de Janeiro" }
                p { class: "text-lg text-rose-100 mb-8", "Perfis verificados, contato direto pelo WhatsApp." }
                form {
                    class: "mx-auto flex max-w-xl gap-2",
                    onsubmit: move |e| {
                        e.prevent_default();
                        let slug = city.read().clone();
                        if slug.is_empty() {
                            nav.push(Route::Listings {});
                        } else {
                            nav.push(Route::CityListings { cidade: slug });
                        }
                    },
                    select {
                        class: "flex-1 rounded-xl px-4 py-3 text-gray-900",
                        value: "{city}",
                        onchange: move |e| city.set(e.value()),
                        option { value: "", "Todas as cidades" }
                        for c in taxonomies.cities.iter() {
                            option { key: "{c.id}", value: "{c.slug}", "{c.name}" }
                        }
                    }
                    Button { r#type: "submit".to_string(), class: "bg-gray-900 hover:bg-black", "Buscar" }
                }
            }
        }

        section { class: "mx-auto max-w-7xl px-4 py-12",
            div { class: "mb-6 flex items-center justify-between",
                h2 { class: "text-2xl font-bold text-gray-900", "Mais populares" }
                Link { to: Route::Listings {}, class: "text-rose-600 hover:underline", "Ver todas →" }
            }
            if featured.is_empty_result() || featured.error().is_some() {
                p { class: "text-gray-500", "Nenhum perfil em destaque no momento." }
            } else {
                div { class: "grid grid-cols-2 gap-4 md:grid-cols-3 lg:grid-cols-4",
                    for listing in featured.listings().iter().take(8).cloned() {
                        ListingCard { key: "{listing.id}", listing }
                    }
                }
            }
        }

        if !taxonomies.cities.is_empty() {
            section { class: "mx-auto max-w-7xl px-4 pb-16",
                h2 { class: "text-2xl font-bold text-gray-900 mb-4", "Cidades" }
                div { class: "flex flex-wrap gap-2",
                    for c in taxonomies.cities.iter() {
                        Link {
                            key: "{c.id}",
                            to: Route::CityListings { cidade: c.slug.clone() },
                            class: "rounded-full bg-white px-4 py-2 text-sm shadow-sm hover:text-rose-600",
                            "{c.name} ({c.count})"
                        }
                    }
                }
            }
        }
    }
}
