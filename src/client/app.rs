use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, model::accessibility::Accessibility, router::Route};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(Accessibility::default()));

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Escolha de 6 a 10 números para o bolão da Mega-Sena"
        }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
