//! Vitrine client entry point (web or desktop, chosen by feature).

#![allow(non_snake_case)]

use dioxus::prelude::*;
use vitrine_client::{auth_context::AuthProvider, routes::Route};

fn main() {
    vitrine_client::logging::init();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "ScortRio" }
        document::Script { src: "https://cdn.tailwindcss.com" }

        AuthProvider {
            Router::<Route> {}
        }
    }
}
