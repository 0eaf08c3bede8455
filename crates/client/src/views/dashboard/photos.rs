use dioxus::prelude::*;

use crate::auth_context::AuthContext;
use crate::components::ui::{Alert, AlertKind, Badge, BadgeVariant, Button, ButtonVariant, Card, Spinner};
use crate::endpoints::UploadFile;
use crate::gallery::Gallery;
use crate::log_warn;

#[component]
pub fn Photos() -> Element {
    let auth = use_context::<AuthContext>();
    let mut gallery = use_signal(|| None::<Gallery>);
    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    use_future(move || async move {
        let api = auth.manager.peek().client();
        match Gallery::load(&api).await {
            Ok(loaded) => gallery.set(Some(loaded)),
            Err(e) => {
                error.set(Some(e.user_message()));
                gallery.set(Some(Gallery::default()));
            }
        }
    });

    let Some(current) = gallery.read().clone() else {
        return rsx! { Spinner {} };
    };
    let count = current.photos().len();

    rsx! {
        div { class: "mb-6 flex items-center justify-between",
            div {
                h1 { class: "text-2xl font-bold text-gray-900", "Minhas Fotos" }
                p { class: "text-sm text-gray-500", "A primeira foto é a capa do seu perfil. JPG, PNG ou WebP, até 5MB." }
            }
            label { class: "cursor-pointer rounded-xl bg-rose-500 px-4 py-2 text-sm font-semibold text-white hover:bg-rose-600",
                if busy() { "Enviando…" } else { "+ Adicionar fotos" }
                input {
                    r#type: "file",
                    class: "hidden",
                    accept: "image/jpeg,image/jpg,image/png,image/webp",
                    multiple: true,
                    disabled: busy(),
                    onchange: move |e: FormEvent| async move {
                        let mut files = Vec::new();
                        for file in e.files() {
                            match file.read_bytes().await {
                                Ok(bytes) => files.push(UploadFile::new(
                                    file.name(),
                                    file.content_type().unwrap_or_default(),
                                    bytes.to_vec(),
                                )),
                                Err(err) => log_warn!("Could not read {}: {err}", file.name()),
                            }
                        }
                        if files.is_empty() {
                            return;
                        }

                        busy.set(true);
                        error.set(None);
                        success.set(None);
                        let mut updated = gallery.peek().clone().unwrap_or_default();
                        let report = updated.upload_batch(&auth.client(), &files).await;
                        gallery.set(Some(updated));
                        success.set(report.success_message());
                        error.set(report.error_message().map(str::to_string));
                        busy.set(false);
                    },
                }
            }
        }

        if let Some(message) = success.cloned() {
            Alert { kind: AlertKind::Success, message }
        }
        if let Some(message) = error.cloned() {
            Alert { kind: AlertKind::Error, message }
        }

        if current.is_empty() {
            Card { class: "p-12 text-center text-gray-500", "Você ainda não enviou nenhuma foto." }
        } else {
            div { class: "grid grid-cols-2 gap-4 md:grid-cols-3 lg:grid-cols-4",
                for (index, photo) in current.photos().iter().cloned().enumerate() {
                    Card { key: "{photo.id}", class: "overflow-hidden",
                        div { class: "relative aspect-[3/4] bg-gray-100",
                            img { class: "h-full w-full object-cover", src: "{photo.medium}" }
                            if index == 0 {
                                div { class: "absolute top-2 left-2",
                                    Badge { variant: BadgeVariant::Vip, "Capa" }
                                }
                            }
                        }
                        div { class: "flex items-center justify-between gap-1 p-2",
                            Button {
                                variant: ButtonVariant::Ghost,
                                disabled: busy() || index == 0,
                                onclick: move |_| async move {
                                    busy.set(true);
                                    let mut updated = gallery.peek().clone().unwrap_or_default();
                                    updated.reorder(&auth.client(), index, index.saturating_sub(1)).await;
                                    gallery.set(Some(updated));
                                    busy.set(false);
                                },
                                "←"
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                disabled: busy() || index == 0,
                                onclick: move |_| async move {
                                    busy.set(true);
                                    let mut updated = gallery.peek().clone().unwrap_or_default();
                                    updated.set_cover(&auth.client(), index).await;
                                    gallery.set(Some(updated));
                                    busy.set(false);
                                },
                                "Capa"
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                disabled: busy() || index + 1 >= count,
                                onclick: move |_| async move {
                                    busy.set(true);
                                    let mut updated = gallery.peek().clone().unwrap_or_default();
                                    updated.reorder(&auth.client(), index, index + 1).await;
                                    gallery.set(Some(updated));
                                    busy.set(false);
                                },
                                "→"
                            }
                            Button {
                                variant: ButtonVariant::Danger,
                                disabled: busy(),
                                onclick: move |_| async move {
                                    busy.set(true);
                                    error.set(None);
                                    success.set(None);
                                    let mut updated = gallery.peek().clone().unwrap_or_default();
                                    match updated.delete(&auth.client(), photo.id).await {
                                        Ok(()) => success.set(Some("Foto excluída!".to_string())),
                                        Err(message) => error.set(Some(message)),
                                    }
                                    gallery.set(Some(updated));
                                    busy.set(false);
                                },
                                "🗑"
                            }
                        }
                    }
                }
            }
        }
    }
}
