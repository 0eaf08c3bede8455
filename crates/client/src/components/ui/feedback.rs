//! Badges, spinners and alert banners.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Success,
    Warning,
    Danger,
    Vip,
    Premium,
}

#[component]
pub fn Badge(#[props(default)] variant: BadgeVariant, children: Element) -> Element {
    let variant_class = match variant {
        BadgeVariant::Default => "bg-gray-100 text-gray-600",
        BadgeVariant::Success => "bg-green-100 text-green-700",
        BadgeVariant::Warning => "bg-amber-100 text-amber-700",
        BadgeVariant::Danger => "bg-red-100 text-red-700",
        BadgeVariant::Vip => "bg-gradient-to-r from-amber-400 to-yellow-500 text-white font-bold",
        BadgeVariant::Premium => "bg-gradient-to-r from-purple-500 to-violet-600 text-white font-semibold",
    };
    rsx! {
        span { class: "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs {variant_class}",
            {children}
        }
    }
}

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "flex items-center justify-center min-h-[300px]",
            div { class: "animate-spin rounded-full h-12 w-12 border-4 border-rose-500 border-t-transparent" }
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Warning,
    Info,
}

#[component]
pub fn Alert(kind: AlertKind, message: String) -> Element {
    let class = match kind {
        AlertKind::Success => "bg-green-50 border-green-200 text-green-700",
        AlertKind::Error => "bg-red-50 border-red-200 text-red-700",
        AlertKind::Warning => "bg-amber-50 border-amber-200 text-amber-700",
        AlertKind::Info => "bg-blue-50 border-blue-200 text-blue-700",
    };
    rsx! {
        div { class: "mb-4 rounded-xl border p-3 text-sm {class}", "{message}" }
    }
}
