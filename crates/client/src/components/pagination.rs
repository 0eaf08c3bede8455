use dioxus::prelude::*;

use crate::components::ui::{Button, ButtonVariant};
use crate::listing_query::page_window;

/// Numbered page links shown at once.
const WINDOW: u32 = 5;

#[component]
pub fn Pagination(
    page: u32,
    total_pages: u32,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
    on_select: EventHandler<u32>,
) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }
    rsx! {
        nav { class: "mt-8 flex items-center justify-center gap-4",
            Button {
                variant: ButtonVariant::Secondary,
                disabled: page <= 1,
                onclick: move |_| on_previous.call(()),
                "← Anterior"
            }
            div { class: "flex items-center gap-2",
                for number in page_window(page, total_pages, WINDOW) {
                    button {
                        key: "{number}",
                        class: if number == page { "h-10 w-10 rounded-xl bg-rose-500 font-medium text-white" } else { "h-10 w-10 rounded-xl bg-gray-100 font-medium text-gray-600 hover:bg-gray-200" },
                        onclick: move |_| on_select.call(number),
                        "{number}"
                    }
                }
            }
            Button {
                variant: ButtonVariant::Secondary,
                disabled: page >= total_pages,
                onclick: move |_| on_next.call(()),
                "Próxima →"
            }
        }
    }
}
