use dioxus::prelude::*;
use futures_util::future::join;
use vitrine_shared::Taxonomy;

use crate::auth_context::AuthContext;
use crate::components::ui::{
    Alert, AlertKind, Button, Card, Checkbox, Field, InputType, Select, Spinner,
};
use crate::profile_form::{load_profile, ProfileForm, STATES};
use crate::taxonomy::Taxonomies;

fn id_options(items: &[Taxonomy]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|t| (t.id.to_string(), t.name.clone()))
        .collect()
}

#[component]
pub fn ProfileEditor() -> Element {
    let auth = use_context::<AuthContext>();
    let mut form = use_signal(ProfileForm::default);
    let mut taxonomies = use_signal(Taxonomies::default);
    let mut loaded = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    use_future(move || async move {
        let api = auth.manager.peek().client();
        let (tax, profile) = join(Taxonomies::load_all(&api), load_profile(&api)).await;
        match tax {
            Ok(tax) => taxonomies.set(tax),
            Err(e) => error.set(Some(e.user_message())),
        }
        match profile {
            Ok(profile) => form.set(profile),
            Err(e) => error.set(Some(e.user_message())),
        }
        loaded.set(true);
    });

    if !loaded() {
        return rsx! { Spinner {} };
    }

    let f = form.read().clone();
    let tax = taxonomies.read().clone();
    let states: Vec<(String, String)> = STATES
        .iter()
        .map(|(uf, name)| (uf.to_string(), name.to_string()))
        .collect();

    rsx! {
        h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Meu Perfil" }

        if let Some(message) = success.cloned() {
            Alert { kind: AlertKind::Success, message }
        }
        if let Some(message) = error.cloned() {
            Alert { kind: AlertKind::Error, message }
        }

        form {
            class: "space-y-6",
            onsubmit: move |e| async move {
                e.prevent_default();
                if saving() {
                    return;
                }
                saving.set(true);
                error.set(None);
                success.set(None);

                let current = form.read().clone();
                match auth.save_profile(current).await {
                    Ok(message) => success.set(Some(message)),
                    Err(e) => error.set(Some(e.to_string())),
                }
                saving.set(false);
            },

            Card { class: "p-6 space-y-4",
                h2 { class: "font-semibold text-gray-900", "Informações básicas" }
                div { class: "grid gap-4 md:grid-cols-2",
                    Field {
                        label: "Nome artístico".to_string(),
                        value: f.name.clone(),
                        oninput: move |e: FormEvent| form.write().name = e.value(),
                    }
                    Field {
                        label: "Data de nascimento".to_string(),
                        value: f.birth_date.clone(),
                        input_type: Some(InputType::Date),
                        oninput: move |e: FormEvent| form.write().birth_date = e.value(),
                    }
                }
                Field {
                    label: "Headline".to_string(),
                    value: f.headline.clone(),
                    placeholder: Some("Uma frase que te descreva".to_string()),
                    oninput: move |e: FormEvent| form.write().headline = e.value(),
                }
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1.5", "Descrição" }
                    textarea {
                        class: "w-full rounded-xl border border-gray-200 px-4 py-3 text-sm focus:border-rose-500 focus:outline-none",
                        rows: "5",
                        value: "{f.description}",
                        oninput: move |e| form.write().description = e.value(),
                    }
                }
            }

            Card { class: "p-6 space-y-4",
                h2 { class: "font-semibold text-gray-900", "Localização e categoria" }
                div { class: "grid gap-4 md:grid-cols-2",
                    Select {
                        label: "Estado".to_string(),
                        value: f.state.clone(),
                        options: states,
                        onchange: move |e: FormEvent| form.write().state = e.value(),
                    }
                    Select {
                        label: "Cidade".to_string(),
                        value: f.city_id.clone(),
                        options: id_options(&tax.cities),
                        empty_label: "Selecione".to_string(),
                        onchange: move |e: FormEvent| form.write().city_id = e.value(),
                    }
                    Select {
                        label: "Bairro".to_string(),
                        value: f.neighborhood_id.clone(),
                        options: id_options(&tax.neighborhoods),
                        empty_label: "Selecione".to_string(),
                        onchange: move |e: FormEvent| form.write().neighborhood_id = e.value(),
                    }
                    Select {
                        label: "Categoria".to_string(),
                        value: f.category_id.clone(),
                        options: id_options(&tax.categories),
                        empty_label: "Selecione".to_string(),
                        onchange: move |e: FormEvent| form.write().category_id = e.value(),
                    }
                }
            }

            Card { class: "p-6 space-y-4",
                h2 { class: "font-semibold text-gray-900", "Contato" }
                div { class: "grid gap-4 md:grid-cols-2",
                    Field {
                        label: "WhatsApp".to_string(),
                        value: f.whatsapp.clone(),
                        input_type: Some(InputType::Tel),
                        placeholder: Some("21999999999".to_string()),
                        oninput: move |e: FormEvent| form.write().whatsapp = e.value(),
                    }
                    Field {
                        label: "Telefone".to_string(),
                        value: f.phone.clone(),
                        input_type: Some(InputType::Tel),
                        oninput: move |e: FormEvent| form.write().phone = e.value(),
                    }
                }
            }

            Card { class: "p-6 space-y-4",
                h2 { class: "font-semibold text-gray-900", "Características" }
                div { class: "grid gap-4 md:grid-cols-3",
                    Field {
                        label: "Altura (cm)".to_string(),
                        value: f.height.clone(),
                        input_type: Some(InputType::Number),
                        oninput: move |e: FormEvent| form.write().height = e.value(),
                    }
                    Field {
                        label: "Peso (kg)".to_string(),
                        value: f.weight.clone(),
                        input_type: Some(InputType::Number),
                        oninput: move |e: FormEvent| form.write().weight = e.value(),
                    }
                    Field {
                        label: "Medidas".to_string(),
                        value: f.measurements.clone(),
                        placeholder: Some("90-60-90".to_string()),
                        oninput: move |e: FormEvent| form.write().measurements = e.value(),
                    }
                    Field {
                        label: "Cor dos olhos".to_string(),
                        value: f.eye_color.clone(),
                        oninput: move |e: FormEvent| form.write().eye_color = e.value(),
                    }
                    Field {
                        label: "Cor do cabelo".to_string(),
                        value: f.hair_color.clone(),
                        oninput: move |e: FormEvent| form.write().hair_color = e.value(),
                    }
                    Field {
                        label: "Etnia".to_string(),
                        value: f.ethnicity.clone(),
                        oninput: move |e: FormEvent| form.write().ethnicity = e.value(),
                    }
                    Field {
                        label: "Silicone".to_string(),
                        value: f.silicone.clone(),
                        oninput: move |e: FormEvent| form.write().silicone = e.value(),
                    }
                }
            }

            Card { class: "p-6 space-y-4",
                h2 { class: "font-semibold text-gray-900", "Valores" }
                div { class: "grid gap-4 md:grid-cols-3",
                    Field {
                        label: "Meia hora (R$)".to_string(),
                        value: f.half_hour_rate.clone(),
                        input_type: Some(InputType::Number),
                        oninput: move |e: FormEvent| form.write().half_hour_rate = e.value(),
                    }
                    Field {
                        label: "1 hora (R$)".to_string(),
                        value: f.hourly_rate.clone(),
                        input_type: Some(InputType::Number),
                        oninput: move |e: FormEvent| form.write().hourly_rate = e.value(),
                    }
                    Field {
                        label: "Pernoite (R$)".to_string(),
                        value: f.overnight_rate.clone(),
                        input_type: Some(InputType::Number),
                        oninput: move |e: FormEvent| form.write().overnight_rate = e.value(),
                    }
                }
                div { class: "flex flex-wrap gap-6",
                    Checkbox {
                        label: "Tenho local".to_string(),
                        checked: f.has_own_place,
                        onchange: move |on| form.write().has_own_place = on,
                    }
                    Checkbox {
                        label: "Aceito cartão".to_string(),
                        checked: f.accepts_card,
                        onchange: move |on| form.write().accepts_card = on,
                    }
                    Checkbox {
                        label: "Aceito Pix".to_string(),
                        checked: f.accepts_pix,
                        onchange: move |on| form.write().accepts_pix = on,
                    }
                }
            }

            if !tax.services.is_empty() {
                Card { class: "p-6 space-y-4",
                    h2 { class: "font-semibold text-gray-900", "Serviços" }
                    div { class: "grid grid-cols-2 gap-2 md:grid-cols-3",
                        for service in tax.services.iter().cloned() {
                            Checkbox {
                                key: "{service.id}",
                                label: service.name.clone(),
                                checked: f.has_service(service.id),
                                onchange: move |_| form.write().toggle_service(service.id),
                            }
                        }
                    }
                }
            }

            Button {
                r#type: "submit".to_string(),
                class: "w-full py-3 md:w-auto md:px-10",
                disabled: saving(),
                if saving() { "Salvando…" } else { "Salvar perfil" }
            }
        }
    }
}
