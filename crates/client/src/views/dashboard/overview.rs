use dioxus::prelude::*;
use vitrine_shared::{DashboardStats, ModerationStatus, PlanTier};

use crate::auth_context::AuthContext;
use crate::components::ui::{Alert, AlertKind, Card, Spinner};
use crate::components::{PlanBadge, StatusBadge};
use crate::routes::Route;

fn plan_message(stats: &DashboardStats) -> String {
    match stats.plan.unwrap_or_default() {
        PlanTier::Free => "Você está no plano gratuito. Faça upgrade para mais destaque!".to_string(),
        _ => match stats.days_remaining {
            Some(days) if days > 0 => format!("{days} dias restantes"),
            _ => "Seu plano expirou".to_string(),
        },
    }
}

#[component]
pub fn Dashboard() -> Element {
    let auth = use_context::<AuthContext>();
    let stats = use_resource(move || async move {
        auth.client()
            .dashboard_stats()
            .await
            .map_err(|e| e.user_message())
    });

    let stats = match &*stats.read() {
        None => return rsx! { Spinner {} },
        Some(Err(message)) => {
            return rsx! { Alert { kind: AlertKind::Error, message: message.clone() } };
        }
        Some(Ok(stats)) => stats.clone(),
    };
    let engagement = stats.stats.clone().unwrap_or_default();
    let plan = stats.plan.unwrap_or_default();
    let counters = [
        ("Visualizações", engagement.views.to_string()),
        ("Cliques WhatsApp", engagement.whatsapp_clicks.to_string()),
        ("Cliques Telefone", engagement.phone_clicks.to_string()),
        ("Favoritos", engagement.favorites.to_string()),
        ("Contatos", engagement.total_contacts().to_string()),
        ("Conversão", format!("{:.1}%", engagement.conversion_rate)),
    ];

    rsx! {
        if !stats.has_listing {
            Alert {
                kind: AlertKind::Info,
                message: "Você ainda não criou seu perfil. Complete-o para aparecer nas buscas.".to_string(),
            }
        }
        if stats.listing_status == Some(ModerationStatus::Pending) {
            Alert {
                kind: AlertKind::Warning,
                message: "Seu perfil está em análise. Você será notificada quando for aprovado.".to_string(),
            }
        }

        div { class: "mb-6 flex flex-wrap items-center gap-3",
            h1 { class: "text-2xl font-bold text-gray-900 mr-2", "Dashboard" }
            StatusBadge { status: stats.listing_status }
            PlanBadge { plan }
        }

        if stats.has_listing {
            div { class: "grid grid-cols-2 gap-4 lg:grid-cols-3",
                for (label, value) in counters {
                    Card { key: "{label}", class: "p-5",
                        p { class: "text-sm text-gray-500", "{label}" }
                        p { class: "text-3xl font-bold text-gray-900", "{value}" }
                    }
                }
            }

            Card { class: "mt-6 p-5 flex items-center justify-between",
                div {
                    p { class: "font-semibold text-gray-900", "Plano {plan.label()}" }
                    p { class: "text-sm text-gray-500", "{plan_message(&stats)}" }
                }
                Link {
                    to: Route::Plans {},
                    class: "rounded-xl bg-rose-500 px-4 py-2 text-sm font-semibold text-white hover:bg-rose-600",
                    if plan == PlanTier::Free { "Fazer Upgrade" } else { "Renovar Plano" }
                }
            }
        } else {
            Link {
                to: Route::ProfileEditor {},
                class: "inline-block rounded-xl bg-rose-500 px-6 py-3 font-semibold text-white hover:bg-rose-600",
                "Criar meu perfil"
            }
        }
    }
}
