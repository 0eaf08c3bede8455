use dioxus::prelude::*;
use vitrine_shared::format_currency;

use crate::auth_context::{use_require_auth, AuthContext};
use crate::checkout::{checkout, PlansOverview};
use crate::components::ui::{Alert, AlertKind, Button, ButtonVariant, Card, Spinner};
use crate::components::PlanBadge;
use crate::tracking::SystemLinkOpener;

#[component]
pub fn Plans() -> Element {
    let auth = use_context::<AuthContext>();
    let mut processing = use_signal(|| None::<String>);
    let mut error = use_signal(|| None::<String>);

    let overview = use_resource(move || async move {
        PlansOverview::load(&auth.manager.peek().client())
            .await
            .map_err(|e| e.user_message())
    });

    let overview = match &*overview.read() {
        None => return rsx! { Spinner {} },
        Some(Err(message)) => {
            return rsx! { Alert { kind: AlertKind::Error, message: message.clone() } };
        }
        Some(Ok(overview)) => overview.clone(),
    };

    rsx! {
        div { class: "mb-6",
            h1 { class: "text-2xl font-bold text-gray-900", "Planos" }
            p { class: "text-gray-500", "Aumente sua visibilidade e receba mais contatos" }
        }

        if let Some(label) = overview.remaining_label() {
            Card { class: "mb-6 p-4 flex items-center gap-3",
                PlanBadge { plan: overview.current }
                span { class: "text-sm text-gray-600", "{label}" }
            }
        }

        if let Some(message) = error.cloned() {
            Alert { kind: AlertKind::Error, message }
        }

        div { class: "grid gap-6 md:grid-cols-3",
            for plan in overview.plans.iter().cloned() {
                Card {
                    key: "{plan.id}",
                    class: Some(if overview.is_current(&plan) { "p-6 ring-2 ring-rose-500" } else { "p-6" }.to_string()),
                    h2 { class: "text-xl font-bold text-gray-900", "{plan.name}" }
                    p { class: "mt-2 text-3xl font-bold text-rose-600",
                        if plan.is_free() { "Grátis" } else { "{format_currency(plan.price)}" }
                    }
                    if plan.duration_days > 0 {
                        p { class: "text-sm text-gray-500", "{plan.duration_days} dias" }
                    }
                    ul { class: "my-4 space-y-1 text-sm text-gray-600",
                        for benefit in plan.benefits.iter() {
                            li { key: "{benefit}", "✓ {benefit}" }
                        }
                    }
                    if overview.is_current(&plan) {
                        Button { variant: ButtonVariant::Secondary, class: "w-full", disabled: true, "Plano atual" }
                    } else if !plan.is_free() {
                        Button {
                            class: "w-full",
                            disabled: processing().is_some(),
                            onclick: {
                                let plan_id = plan.id.clone();
                                move |_| {
                                    let plan_id = plan_id.clone();
                                    async move {
                                        error.set(None);
                                        processing.set(Some(plan_id.clone()));
                                        if let Err(message) = checkout(&auth.client(), &plan_id, &SystemLinkOpener).await {
                                            error.set(Some(message));
                                        }
                                        processing.set(None);
                                    }
                                }
                            },
                            if processing().as_deref() == Some(plan.id.as_str()) {
                                "Processando…"
                            } else if overview.is_upgrade(&plan) {
                                "Fazer upgrade"
                            } else {
                                "Assinar"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// `/planos` outside the dashboard shell, behind the same login guard.
#[component]
pub fn PlansPage() -> Element {
    if !use_require_auth() {
        return rsx! { Spinner {} };
    }
    rsx! {
        div { class: "mx-auto max-w-5xl px-4 py-8", Plans {} }
    }
}
