use dioxus::prelude::*;
use vitrine_shared::RegisterForm;

use crate::auth_context::AuthContext;
use crate::components::ui::{Alert, AlertKind, Button, Card, CardBody, CardHeader, Checkbox, Field, InputType};
use crate::routes::Route;

#[component]
pub fn Register() -> Element {
    let auth = use_context::<AuthContext>();
    let mut form = use_signal(RegisterForm::default);
    let mut error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);
    let nav = use_navigator();

    let current = form.read().clone();

    rsx! {
        div { class: "flex items-center justify-center px-4 py-16",
            Card { class: "w-full max-w-md",
                CardHeader {
                    title: "Criar conta".to_string(),
                    subtitle: Some("Anuncie seu perfil gratuitamente".to_string()),
                }
                CardBody {
                    if let Some(e) = error.cloned() {
                        Alert { kind: AlertKind::Error, message: e }
                    }

                    form {
                        class: "space-y-4",
                        onsubmit: move |e| async move {
                            e.prevent_default();
                            if is_submitting() {
                                return;
                            }
                            is_submitting.set(true);
                            error.set(None);

                            match auth.register(form.cloned()).await {
                                Ok(()) => {
                                    nav.push(Route::Dashboard {});
                                }
                                Err(e) => error.set(Some(e.to_string())),
                            }
                            is_submitting.set(false);
                        },
                        Field {
                            label: "Nome artístico *".to_string(),
                            value: current.name.clone(),
                            placeholder: Some("Como você quer ser chamada".to_string()),
                            oninput: move |e: FormEvent| form.write().name = e.value(),
                        }
                        Field {
                            label: "E-mail *".to_string(),
                            value: current.email.clone(),
                            placeholder: Some("seu@email.com".to_string()),
                            input_type: Some(InputType::Email),
                            oninput: move |e: FormEvent| form.write().email = e.value(),
                        }
                        Field {
                            label: "WhatsApp".to_string(),
                            value: current.whatsapp.clone(),
                            placeholder: Some("21999999999".to_string()),
                            input_type: Some(InputType::Tel),
                            oninput: move |e: FormEvent| form.write().whatsapp = e.value(),
                        }
                        Field {
                            label: "Senha *".to_string(),
                            value: current.password.clone(),
                            placeholder: Some("Mínimo 6 caracteres".to_string()),
                            input_type: Some(InputType::Password),
                            oninput: move |e: FormEvent| form.write().password = e.value(),
                        }
                        Field {
                            label: "Confirmar senha *".to_string(),
                            value: current.confirm_password.clone(),
                            placeholder: Some("Digite a senha novamente".to_string()),
                            input_type: Some(InputType::Password),
                            oninput: move |e: FormEvent| form.write().confirm_password = e.value(),
                        }
                        Checkbox {
                            label: "Aceito os termos de uso".to_string(),
                            checked: current.accepts_terms,
                            onchange: move |on| form.write().accepts_terms = on,
                        }
                        Button {
                            r#type: "submit".to_string(),
                            class: "w-full py-3",
                            disabled: is_submitting(),
                            if is_submitting() { "Criando conta…" } else { "Criar conta" }
                        }
                    }

                    p { class: "mt-6 text-center text-sm text-gray-500",
                        "Já tem conta? "
                        Link { to: Route::Login {}, class: "font-medium text-rose-600 hover:underline", "Entrar" }
                    }
                }
            }
        }
    }
}
