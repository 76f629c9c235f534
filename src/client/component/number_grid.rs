use std::collections::BTreeSet;

use dioxus::prelude::*;

use crate::model::volante::{MAX_NUMBER, MAX_SELECTION, MIN_NUMBER};

/// Outcome of clicking a number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Selected,
    Deselected,
    /// Selection already holds the maximum amount of numbers.
    LimitReached,
}

/// Adds or removes `number`, refusing to grow past [`MAX_SELECTION`].
pub fn toggle_number(selected: &mut BTreeSet<u8>, number: u8) -> Toggle {
    if selected.remove(&number) {
        Toggle::Deselected
    } else if selected.len() >= MAX_SELECTION {
        Toggle::LimitReached
    } else {
        selected.insert(number);
        Toggle::Selected
    }
}

pub fn selection_hint(count: usize) -> String {
    format!("{} números selecionados", count)
}

#[component]
pub fn NumberGrid(mut selected: Signal<BTreeSet<u8>>, on_limit: EventHandler<()>) -> Element {
    let current = selected();

    rsx!(
        div {
            class: "numbers-grid",
            role: "group",
            aria_label: "Números de 1 a 60",
            for number in MIN_NUMBER..=MAX_NUMBER {
                button {
                    key: "{number}",
                    r#type: "button",
                    class: if current.contains(&number) { "number selected" } else { "number" },
                    aria_pressed: "{current.contains(&number)}",
                    onclick: move |_| {
                        let outcome = selected.with_mut(|s| toggle_number(s, number));
                        if outcome == Toggle::LimitReached {
                            on_limit.call(());
                        }
                    },
                    "{number:02}"
                }
            }
        }
        p {
            class: "selection-hint",
            aria_live: "polite",
            {selection_hint(current.len())}
        }
    )
}
