//! Public listing browser with filters and pagination.

use dioxus::prelude::*;
use vitrine_shared::SortMode;

use crate::auth_context::AuthContext;
use crate::components::ui::{Alert, AlertKind, Button, ButtonVariant, Checkbox, Select, Spinner, TextInput};
use crate::components::{ListingCard, Pagination};
use crate::listing_query::{FilterChange, ListingQuery};
use crate::log_warn;
use crate::taxonomy::Taxonomies;

#[component]
pub fn Listings() -> Element {
    rsx! {
        ListingBrowser { city: None }
    }
}

#[component]
pub fn CityListings(cidade: String) -> Element {
    rsx! {
        ListingBrowser { key: "{cidade}", city: Some(cidade.clone()) }
    }
}

#[component]
pub fn ListingBrowser(city: Option<String>) -> Element {
    let auth = use_context::<AuthContext>();
    let mut query = use_signal(|| ListingQuery::from_route(city.as_deref(), None));

    let taxonomies = use_resource(move || async move {
        let api = auth.manager.peek().client();
        Taxonomies::load_filters(&api).await.map_err(|e| {
            log_warn!("Failed to load filter taxonomies: {e}");
            e
        })
    });

    // Refetch whenever the filters or the page change. Responses are
    // sequence-checked, so a slow older page never replaces a newer one.
    let params = use_memo(move || query.read().query_params());
    use_effect(move || {
        params.read();
        let request = query.write().begin_fetch();
        let api = auth.manager.peek().client();
        spawn(async move {
            let result = api.list_listings(&request.params).await;
            query.write().apply(request.seq, result);
        });
    });

    let tax = taxonomies
        .read()
        .as_ref()
        .and_then(|r| r.as_ref().ok())
        .cloned()
        .unwrap_or_default();

    let q = query.read();
    let filters = q.filters().clone();
    let title_city = if filters.city.is_empty() {
        "Todas as Cidades".to_string()
    } else {
        tax.city_name(&filters.city).to_string()
    };
    let city_options: Vec<(String, String)> = tax
        .cities
        .iter()
        .map(|c| (c.slug.clone(), c.name.clone()))
        .collect();
    let category_options: Vec<(String, String)> = tax
        .categories
        .iter()
        .map(|c| (c.slug.clone(), c.name.clone()))
        .collect();
    let sort_options: Vec<(String, String)> = SortMode::ALL
        .iter()
        .map(|m| (m.as_str().to_string(), m.label().to_string()))
        .collect();

    rsx! {
        div { class: "mx-auto max-w-7xl px-4 py-8",
            div { class: "mb-6",
                h1 { class: "text-3xl font-bold text-gray-900", "Acompanhantes em {title_city}" }
                p { class: "text-gray-500", "{q.total()} resultados encontrados" }
            }

            div { class: "mb-8 grid gap-4 rounded-2xl bg-white p-4 shadow-sm md:grid-cols-3 lg:grid-cols-6",
                Select {
                    label: "Cidade",
                    value: filters.city.clone(),
                    options: city_options,
                    empty_label: "Todas as cidades".to_string(),
                    onchange: move |e: FormEvent| query.write().set_filter(FilterChange::City(e.value())),
                }
                Select {
                    label: "Categoria",
                    value: filters.category.clone(),
                    options: category_options,
                    empty_label: "Todas".to_string(),
                    onchange: move |e: FormEvent| query.write().set_filter(FilterChange::Category(e.value())),
                }
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1.5", "Preço mínimo" }
                    TextInput {
                        value: filters.price_min.clone(),
                        placeholder: Some("R$".to_string()),
                        oninput: move |e: FormEvent| query.write().set_filter(FilterChange::PriceMin(e.value())),
                    }
                }
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1.5", "Preço máximo" }
                    TextInput {
                        value: filters.price_max.clone(),
                        placeholder: Some("R$".to_string()),
                        oninput: move |e: FormEvent| query.write().set_filter(FilterChange::PriceMax(e.value())),
                    }
                }
                Select {
                    label: "Ordenar por",
                    value: filters.sort.as_str().to_string(),
                    options: sort_options,
                    onchange: move |e: FormEvent| {
                        let sort = SortMode::parse(&e.value()).unwrap_or_default();
                        query.write().set_filter(FilterChange::Sort(sort));
                    },
                }
                div { class: "flex flex-col justify-end gap-2",
                    Checkbox {
                        label: "Verificadas",
                        checked: filters.verified_only,
                        onchange: move |on| query.write().set_filter(FilterChange::VerifiedOnly(on)),
                    }
                    Checkbox {
                        label: "Online agora",
                        checked: filters.online_only,
                        onchange: move |on| query.write().set_filter(FilterChange::OnlineOnly(on)),
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| query.write().clear_filters(),
                        "Limpar filtros"
                    }
                }
            }

            if let Some(error) = q.error() {
                Alert { kind: AlertKind::Error, message: error.to_string() }
            }

            if q.is_loading() && q.listings().is_empty() {
                Spinner {}
            } else if q.is_empty_result() {
                div { class: "py-16 text-center",
                    p { class: "text-lg font-semibold text-gray-900", "Nenhuma acompanhante encontrada" }
                    p { class: "text-gray-500", "Tente ajustar os filtros da busca." }
                }
            } else {
                div { class: "grid grid-cols-2 gap-4 md:grid-cols-3 lg:grid-cols-4",
                    for listing in q.listings().iter().cloned() {
                        ListingCard { key: "{listing.id}", listing }
                    }
                }
            }

            Pagination {
                page: q.page(),
                total_pages: q.total_pages(),
                on_previous: move |_| {
                    query.write().previous_page();
                },
                on_next: move |_| {
                    query.write().next_page();
                },
                on_select: move |number| query.write().go_to_page(number),
            }
        }
    }
}
