use dioxus::prelude::*;
use vitrine_shared::{format_currency, format_phone, ListingDetail};

use crate::auth_context::AuthContext;
use crate::components::ui::{Alert, AlertKind, Badge, BadgeVariant, Button, ButtonVariant, Card, Spinner};
use crate::components::PlanBadge;
use crate::routes::Route;
use crate::tracking::{contact, track_favorite, ContactAction, SystemLinkOpener};

#[component]
pub fn ListingDetailView(slug: String) -> Element {
    let auth = use_context::<AuthContext>();
    let mut slug_signal = use_signal(|| slug.clone());
    if *slug_signal.peek() != slug {
        slug_signal.set(slug.clone());
    }

    let listing = use_resource(move || async move {
        let slug = slug_signal();
        auth.manager
            .peek()
            .client()
            .get_listing(&slug)
            .await
            .map_err(|e| e.user_message())
    });

    match &*listing.read() {
        None => rsx! { Spinner {} },
        Some(Err(message)) => rsx! {
            div { class: "mx-auto max-w-3xl px-4 py-16",
                Alert { kind: AlertKind::Error, message: message.clone() }
                Link { to: Route::Listings {}, class: "text-rose-600 hover:underline", "← Voltar para a busca" }
            }
        },
        Some(Ok(detail)) => rsx! {
            ListingProfile { detail: detail.clone() }
        },
    }
}

#[component]
fn ListingProfile(detail: ListingDetail) -> Element {
    let auth = use_context::<AuthContext>();
    let mut selected = use_signal(|| 0usize);
    let summary = &detail.summary;

    let photos = detail.gallery.clone();
    let main_photo = photos
        .get(selected())
        .map(|p| p.large.clone())
        .unwrap_or_else(|| detail.cover_url().to_string());

    let attributes: Vec<(&str, String)> = [
        ("Altura", detail.height.map(|h| format!("{h} cm"))),
        ("Peso", detail.weight.map(|w| format!("{w} kg"))),
        ("Medidas", Some(detail.measurements.clone())),
        ("Olhos", Some(detail.eye_color.clone())),
        ("Cabelo", Some(detail.hair_color.clone())),
        ("Etnia", Some(detail.ethnicity.clone())),
        ("Silicone", Some(detail.silicone.clone())),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.filter(|v| !v.is_empty()).map(|v| (label, v)))
    .collect();

    let rates: Vec<(&str, f64)> = [
        ("30 minutos", detail.half_hour_rate),
        ("1 hora", summary.hourly_rate),
        ("Pernoite", detail.overnight_rate),
    ]
    .into_iter()
    .filter(|(_, value)| *value > 0.0)
    .collect();

    let on_contact = {
        let detail = detail.clone();
        move |action: ContactAction| {
            let detail = detail.clone();
            spawn(async move {
                let api = auth.client();
                contact(&api, &detail, action, &SystemLinkOpener).await;
            });
        }
    };
    let on_whatsapp = on_contact.clone();
    let on_phone = on_contact;
    let listing_id = summary.id;
    let phone_label = format_phone(if detail.phone.is_empty() {
        &detail.whatsapp
    } else {
        &detail.phone
    });

    rsx! {
        div { class: "mx-auto max-w-6xl px-4 py-8 grid gap-8 lg:grid-cols-5",
            div { class: "lg:col-span-3",
                div { class: "aspect-[3/4] overflow-hidden rounded-2xl bg-gray-100",
                    if !main_photo.is_empty() {
                        img { class: "h-full w-full object-cover", src: "{main_photo}", alt: "{summary.name}" }
                    }
                }
                if photos.len() > 1 {
                    div { class: "mt-3 grid grid-cols-5 gap-2",
                        for (index, photo) in photos.iter().enumerate() {
                            button {
                                key: "{photo.id}",
                                class: if index == selected() { "ring-2 ring-rose-500 rounded-lg overflow-hidden" } else { "rounded-lg overflow-hidden opacity-80 hover:opacity-100" },
                                onclick: move |_| selected.set(index),
                                img { class: "aspect-square w-full object-cover", src: "{photo.thumbnail}" }
                            }
                        }
                    }
                }
            }

            div { class: "lg:col-span-2 space-y-6",
                div {
                    div { class: "flex items-center gap-2 mb-1",
                        PlanBadge { plan: summary.plan }
                        if summary.verified {
                            Badge { variant: BadgeVariant::Success, "✔ Verificada" }
                        }
                        if summary.online {
                            Badge { variant: BadgeVariant::Success, "Online" }
                        }
                    }
                    h1 { class: "text-3xl font-bold text-gray-900",
                        "{summary.name}"
                        if let Some(age) = summary.age {
                            span { class: "font-normal text-gray-500", ", {age} anos" }
                        }
                    }
                    if !summary.headline.is_empty() {
                        p { class: "text-gray-600", "{summary.headline}" }
                    }
                    p { class: "text-sm text-gray-500",
                        "📍 {summary.neighborhood} {summary.city} {summary.state}"
                    }
                }

                Card { class: "p-4 space-y-3",
                    if !detail.whatsapp.is_empty() {
                        Button {
                            class: "w-full bg-green-500 hover:bg-green-600",
                            onclick: move |_| on_whatsapp(ContactAction::WhatsApp),
                            "💬 Chamar no WhatsApp"
                        }
                    }
                    if !phone_label.is_empty() {
                        Button {
                            variant: ButtonVariant::Secondary,
                            class: "w-full",
                            onclick: move |_| on_phone(ContactAction::Phone),
                            "📞 {phone_label}"
                        }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "w-full",
                        onclick: move |_| {
                            spawn(async move {
                                track_favorite(&auth.client(), listing_id).await;
                            });
                        },
                        "♡ Favoritar"
                    }
                }

                if !rates.is_empty() {
                    Card { class: "p-4",
                        h2 { class: "font-semibold text-gray-900 mb-2", "Valores" }
                        for (label, value) in rates {
                            div { key: "{label}", class: "flex justify-between text-sm py-1",
                                span { class: "text-gray-600", "{label}" }
                                span { class: "font-semibold", "{format_currency(value)}" }
                            }
                        }
                        div { class: "mt-2 flex gap-3 text-xs text-gray-500",
                            if detail.accepts_pix { span { "Pix" } }
                            if detail.accepts_card { span { "Cartão" } }
                            if summary.has_own_place { span { "Com local" } }
                        }
                    }
                }

                if !detail.description.is_empty() {
                    Card { class: "p-4",
                        h2 { class: "font-semibold text-gray-900 mb-2", "Sobre mim" }
                        p { class: "text-sm text-gray-700 whitespace-pre-line", "{detail.description}" }
                    }
                }

                if !attributes.is_empty() {
                    Card { class: "p-4",
                        h2 { class: "font-semibold text-gray-900 mb-2", "Características" }
                        dl { class: "grid grid-cols-2 gap-2 text-sm",
                            for (label, value) in attributes {
                                div { key: "{label}",
                                    dt { class: "text-gray-500", "{label}" }
                                    dd { class: "font-medium text-gray-900", "{value}" }
                                }
                            }
                        }
                    }
                }

                if !detail.services.is_empty() {
                    Card { class: "p-4",
                        h2 { class: "font-semibold text-gray-900 mb-2", "Serviços" }
                        div { class: "flex flex-wrap gap-2",
                            for service in detail.services.iter() {
                                Badge { key: "{service.id}", "{service.name}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
