use dioxus::prelude::*;

use crate::auth_context::AuthContext;
use crate::components::ui::{Alert, AlertKind, Button, Card, CardBody, CardHeader, Field, InputType};
use crate::routes::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_context::<AuthContext>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);
    let nav = use_navigator();

    rsx! {
        div { class: "flex items-center justify-center px-4 py-16",
            Card { class: "w-full max-w-md",
                CardHeader {
                    title: "Entrar".to_string(),
                    subtitle: Some("Acesse sua conta de anunciante".to_string()),
                }
                CardBody {
                    if let Some(e) = error.cloned() {
                        Alert { kind: AlertKind::Error, message: e }
                    }

                    form {
                        class: "space-y-5",
                        onsubmit: move |e| async move {
                            e.prevent_default();
                            if is_submitting() {
                                return;
                            }
                            is_submitting.set(true);
                            error.set(None);

                            match auth.login(email.cloned(), password.cloned()).await {
                                Ok(()) => {
                                    nav.push(Route::Dashboard {});
                                }
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
                        Field {
                            label: "Senha".to_string(),
                            value: password.cloned(),
                            placeholder: Some("••••••••".to_string()),
                            input_type: Some(InputType::Password),
                            oninput: move |e: FormEvent| password.set(e.value()),
                        }
                        div { class: "text-right",
                            Link {
                                to: Route::ForgotPassword {},
                                class: "text-sm text-rose-600 hover:underline",
                                "Esqueci minha senha"
                            }
                        }
                        Button {
                            r#type: "submit".to_string(),
                            class: "w-full py-3",
                            disabled: is_submitting(),
                            if is_submitting() { "Entrando…" } else { "Entrar" }
                        }
                    }

                    p { class: "mt-6 text-center text-sm text-gray-500",
                        "Ainda não tem conta? "
                        Link { to: Route::Register {}, class: "font-medium text-rose-600 hover:underline", "Cadastre-se" }
                    }
                }
            }
        }
    }
}
