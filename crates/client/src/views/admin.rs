use dioxus::prelude::*;
use vitrine_shared::format_date_str;

use crate::auth_context::{use_require_auth, AuthContext};
use crate::components::ui::{Alert, AlertKind, Button, ButtonVariant, Card, Spinner, TextInput};
use crate::moderation::ModerationQueue;

#[component]
pub fn Admin() -> Element {
    let auth = use_context::<AuthContext>();
    let signed_in = use_require_auth();
    let mut queue = use_signal(|| None::<ModerationQueue>);
    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| None::<String>);
    let mut reasons = use_signal(std::collections::HashMap::<u64, String>::new);

    use_effect(move || {
        if !auth.is_admin() || queue.peek().is_some() {
            return;
        }
        let api = auth.client();
        spawn(async move {
            match ModerationQueue::load(&api).await {
                Ok(loaded) => queue.set(Some(loaded)),
                Err(e) => {
                    error.set(Some(e.user_message()));
                    queue.set(Some(ModerationQueue::default()));
                }
            }
        });
    });

    if !signed_in {
        return rsx! { Spinner {} };
    }
    if !auth.is_admin() {
        return rsx! {
            div { class: "mx-auto max-w-3xl px-4 py-16",
                Alert { kind: AlertKind::Error, message: "Acesso restrito a administradores.".to_string() }
            }
        };
    }
    let Some(current) = queue.read().clone() else {
        return rsx! { Spinner {} };
    };

    rsx! {
        div { class: "mx-auto max-w-5xl px-4 py-8",
            h1 { class: "text-2xl font-bold text-gray-900 mb-1", "Moderação" }
            p { class: "text-gray-500 mb-6", "{current.len()} perfis aguardando análise" }

            if let Some(message) = success.cloned() {
                Alert { kind: AlertKind::Success, message }
            }
            if let Some(message) = error.cloned() {
                Alert { kind: AlertKind::Error, message }
            }

            if current.is_empty() {
                Card { class: "p-12 text-center text-gray-500", "Nenhum perfil pendente." }
            }

            div { class: "space-y-4",
                for listing in current.pending().iter().cloned() {
                    Card { key: "{listing.detail.summary.id}", class: "p-5 flex flex-col gap-4 md:flex-row",
                        img {
                            class: "h-32 w-24 rounded-lg object-cover bg-gray-100",
                            src: "{listing.detail.cover_url()}",
                        }
                        div { class: "flex-1 min-w-0",
                            h2 { class: "font-semibold text-gray-900", "{listing.detail.summary.name}" }
                            p { class: "text-sm text-gray-500",
                                "{listing.detail.summary.city} · {listing.detail.whatsapp}"
                            }
                            if let Some(birth) = format_date_str(&listing.birth_date) {
                                p { class: "text-sm text-gray-500", "Nascimento: {birth}" }
                            }
                            p { class: "mt-2 text-sm text-gray-700 line-clamp-3", "{listing.detail.description}" }
                            p { class: "mt-1 text-xs text-gray-400", "{listing.detail.gallery.len()} fotos" }
                        }
                        div { class: "flex flex-col gap-2 md:w-64",
                            Button {
                                onclick: {
                                    let id = listing.detail.summary.id;
                                    move |_| async move {
                                        error.set(None);
                                        success.set(None);
                                        let mut updated = queue.peek().clone().unwrap_or_default();
                                        match updated.approve(&auth.client(), id).await {
                                            Ok(()) => success.set(Some("Perfil aprovado".to_string())),
                                            Err(e) => error.set(Some(e.user_message())),
                                        }
                                        queue.set(Some(updated));
                                    }
                                },
                                "Aprovar"
                            }
                            TextInput {
                                value: reasons.read().get(&listing.detail.summary.id).cloned().unwrap_or_default(),
                                placeholder: Some("Motivo da reprovação".to_string()),
                                oninput: {
                                    let id = listing.detail.summary.id;
                                    move |e: FormEvent| {
                                        reasons.write().insert(id, e.value());
                                    }
                                },
                            }
                            Button {
                                variant: ButtonVariant::Danger,
                                onclick: {
                                    let id = listing.detail.summary.id;
                                    move |_| async move {
                                        error.set(None);
                                        success.set(None);
                                        let reason = reasons.peek().get(&id).cloned().unwrap_or_default();
                                        let mut updated = queue.peek().clone().unwrap_or_default();
                                        match updated.reject(&auth.client(), id, &reason).await {
                                            Ok(()) => {
                                                reasons.write().remove(&id);
                                                success.set(Some("Perfil reprovado".to_string()));
                                            }
                                            Err(e) => error.set(Some(e.to_string())),
                                        }
                                        queue.set(Some(updated));
                                    }
                                },
                                "Reprovar"
                            }
                        }
                    }
                }
            }
        }
    }
}
