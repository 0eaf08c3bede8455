use dioxus::prelude::*;

use crate::auth_context::AuthContext;
use crate::components::ui::{Alert, AlertKind, Button, Card, CardBody, CardHeader, Field, InputType};
use crate::routes::Route;

const SENT_FALLBACK: &str = "Se o e-mail estiver cadastrado, você receberá as instruções em instantes.";

#[component]
pub fn ForgotPassword() -> Element {
    let auth = use_context::<AuthContext>();
    let mut email = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut sent = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    rsx! {
        div { class: "flex items-center justify-center px-4 py-16",
            Card { class: "w-full max-w-md",
                CardHeader {
                    title: "Recuperar senha".to_string(),
                    subtitle: Some("Enviaremos um link para redefinir sua senha".to_string()),
                }
                CardBody {
                    if let Some(e) = error.cloned() {
                        Alert { kind: AlertKind::Error, message: e }
                    }

                    if let Some(message) = sent.cloned() {
                        Alert { kind: AlertKind::Success, message }
                    } else {
                        form {
                            class: "space-y-5",
                            onsubmit: move |e| async move {
                                e.prevent_default();
                                if is_submitting() {
                                    return;
                                }
                                is_submitting.set(true);
                                error.set(None);

                                match auth.forgot_password(email.cloned()).await {
                                    Ok(message) if message.is_empty() => sent.set(Some(SENT_FALLBACK.to_string())),
                                    Ok(message) => sent.set(Some(message)),
                                    Err(e) => error.set(Some(e.to_string())),
                                }
                                is_submitting.set(false);
                            },
                            Field {
                                label: "E-mail".to_string(),
                                value: email.cloned(),
                                placeholder: Some("seu@email.com".to_string()),
                                input_type: Some(InputType::Email),
                                oninput: move |e: FormEvent| email.set(e.value()),
                            }
                            Button {
                                r#type: "submit".to_string(),
                                class: "w-full py-3",
                                disabled: is_submitting(),
                                if is_submitting() { "Enviando…" } else { "Enviar link" }
                            }
                        }
                    }

                    p { class: "mt-6 text-center text-sm",
                        Link { to: Route::Login {}, class: "text-rose-600 hover:underline", "← Voltar para o login" }
                    }
                }
            }
        }
    }
}
