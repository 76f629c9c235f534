use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{client::model::error::ApiError, model::stats::StatsDto};

#[cfg(feature = "web")]
use crate::client::api::get_top_numbers;

/// Most chosen numbers; refetches whenever `refresh` changes.
#[component]
pub fn StatsPanel(refresh: Signal<u32>) -> Element {
    let mut stats = use_signal(|| None::<Result<StatsDto, ApiError>>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refresh();
        get_top_numbers().await
    });

    #[cfg(feature = "web")]
    use_effect(move || match &*future.read_unchecked() {
        Some(Ok(data)) => stats.set(Some(Ok(data.clone()))),
        Some(Err(err)) => {
            tracing::error!("Failed to fetch stats: {}", err);
            stats.set(Some(Err(err.clone())));
        }
        None => (),
    });

    rsx!(
        section {
            class: "card stats",
            h2 { "Números mais escolhidos" }
            match stats() {
                Some(Ok(data)) => rsx! {
                    p { "{data.total_volantes} volantes registrados" }
                    if data.top_numbers.is_empty() {
                        p { class: "muted", "Nenhum volante registrado ainda." }
                    } else {
                        ol {
                            class: "top-numbers",
                            for entry in data.top_numbers {
                                li {
                                    key: "{entry.number}",
                                    span { class: "number selected", "{entry.number:02}" }
                                    span { class: "muted", "{entry.count}x" }
                                }
                            }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    p { class: "error", "{err.message}" }
                },
                None => rsx! {
                    p { class: "muted", "Carregando..." }
                },
            }
        }
    )
}
