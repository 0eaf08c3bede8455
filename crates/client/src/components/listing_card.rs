use dioxus::prelude::*;
use vitrine_shared::{format_currency, Listing, ModerationStatus, PlanTier};

use crate::components::ui::{Badge, BadgeVariant};
use crate::routes::Route;

/// One result in the listing grid.
#[component]
pub fn ListingCard(listing: Listing) -> Element {
    let photo = if listing.thumbnail.is_empty() {
        listing.main_photo.clone()
    } else {
        listing.thumbnail.clone()
    };
    let location = [listing.neighborhood.as_str(), listing.city.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    rsx! {
        Link {
            to: Route::ListingDetailView { slug: listing.slug.clone() },
            class: "group block overflow-hidden rounded-2xl bg-white shadow-sm hover:shadow-lg transition-shadow",
            div { class: "relative aspect-[3/4] bg-gray-100",
                if !photo.is_empty() {
                    img {
                        class: "h-full w-full object-cover group-hover:scale-105 transition-transform",
                        src: "{photo}",
                        alt: "{listing.name}",
                        loading: "lazy",
                    }
                }
                div { class: "absolute top-2 left-2 flex gap-1",
                    PlanBadge { plan: listing.plan }
                    if listing.online {
                        Badge { variant: BadgeVariant::Success, "Online" }
                    }
                }
            }
            div { class: "p-3",
                div { class: "flex items-center gap-1",
                    h3 { class: "font-semibold text-gray-900 truncate", "{listing.name}" }
                    if let Some(age) = listing.age {
                        span { class: "text-sm text-gray-500", ", {age}" }
                    }
                    if listing.verified {
                        span { class: "text-blue-500", title: "Verificada", "✔" }
                    }
                }
                if !location.is_empty() {
                    p { class: "text-xs text-gray-500 truncate", "{location}" }
                }
                if listing.hourly_rate > 0.0 {
                    p { class: "mt-1 text-sm font-bold text-rose-600",
                        "{format_currency(listing.hourly_rate)}/h"
                    }
                }
            }
        }
    }
}

#[component]
pub fn PlanBadge(plan: PlanTier) -> Element {
    match plan {
        PlanTier::Vip => rsx! { Badge { variant: BadgeVariant::Vip, "👑 VIP" } },
        PlanTier::Premium => rsx! { Badge { variant: BadgeVariant::Premium, "⭐ Premium" } },
        PlanTier::Free => rsx! {},
    }
}

#[component]
pub fn StatusBadge(status: Option<ModerationStatus>) -> Element {
    let variant = match status {
        Some(ModerationStatus::Published) => BadgeVariant::Success,
        Some(ModerationStatus::Pending) => BadgeVariant::Warning,
        Some(ModerationStatus::Rejected) => BadgeVariant::Danger,
        Some(ModerationStatus::Unknown) | None => BadgeVariant::Default,
    };
    let label = status.map(ModerationStatus::label).unwrap_or("Sem perfil");
    rsx! {
        Badge { variant, "{label}" }
    }
}
