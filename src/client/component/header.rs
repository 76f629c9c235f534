use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaCircleHalfStroke, FaMinus, FaPlus, FaUserShield},
    Icon,
};

use crate::client::{
    constant::{FONT_SIZE_KEY, HIGH_CONTRAST_KEY, SITE_NAME},
    model::accessibility::Accessibility,
    router::Route,
    storage,
};

#[component]
pub fn Header() -> Element {
    let mut accessibility = use_context::<Signal<Accessibility>>();
    let settings = accessibility();

    let mut change_font = move |increase: bool| {
        accessibility.with_mut(|a| {
            if increase {
                a.increase_font();
            } else {
                a.decrease_font();
            }
        });
        storage::save(FONT_SIZE_KEY, &accessibility().font_size.to_string());
    };

    let toggle_contrast = move |_| {
        accessibility.with_mut(|a| a.high_contrast = !a.high_contrast);
        storage::save(
            HIGH_CONTRAST_KEY,
            if accessibility().high_contrast {
                "true"
            } else {
                "false"
            },
        );
    };

    rsx!(header {
        class: "header",
        Link {
            to: Route::Home {},
            class: "brand",
            {SITE_NAME}
        }
        div {
            class: "toolbar",
            role: "toolbar",
            aria_label: "Acessibilidade",
            button {
                class: "btn btn-outline",
                r#type: "button",
                aria_label: "Diminuir fonte",
                onclick: move |_| change_font(false),
                Icon { width: 14, height: 14, icon: FaMinus }
            }
            span {
                class: "font-size-display",
                aria_live: "polite",
                "{settings.font_size}%"
            }
            button {
                class: "btn btn-outline",
                r#type: "button",
                aria_label: "Aumentar fonte",
                onclick: move |_| change_font(true),
                Icon { width: 14, height: 14, icon: FaPlus }
            }
            button {
                class: if settings.high_contrast { "btn btn-outline active" } else { "btn btn-outline" },
                r#type: "button",
                aria_pressed: "{settings.high_contrast}",
                aria_label: "Alto contraste",
                onclick: toggle_contrast,
                Icon { width: 14, height: 14, icon: FaCircleHalfStroke }
            }
            Link {
                to: Route::Admin {},
                class: "btn btn-outline",
                Icon { width: 14, height: 14, icon: FaUserShield }
                span { "Admin" }
            }
        }
    })
}
