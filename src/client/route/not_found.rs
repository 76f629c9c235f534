use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Title { "Página não encontrada | {SITE_NAME}" }
        Page {
            class: "centered",
            h1 { "404" }
            p { "Nada encontrado em /{path}." }
            Link {
                to: Route::Home {},
                class: "btn",
                "Voltar ao início"
            }
        }
    }
}
