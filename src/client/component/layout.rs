use dioxus::prelude::*;

use crate::client::{
    component::Header,
    constant::{FONT_SIZE_KEY, HIGH_CONTRAST_KEY},
    model::accessibility::{parse_font_size, Accessibility},
    router::Route,
    storage,
};

#[component]
pub fn Layout() -> Element {
    let mut accessibility = use_context::<Signal<Accessibility>>();

    // Restore saved reader preferences once
    use_future(move || async move {
        let font_size = storage::load(FONT_SIZE_KEY)
            .await
            .and_then(|saved| parse_font_size(&saved));
        let high_contrast = storage::load(HIGH_CONTRAST_KEY).await.as_deref() == Some("true");

        accessibility.with_mut(|a| {
            if let Some(font_size) = font_size {
                a.font_size = font_size;
            }
            a.high_contrast = high_contrast;
        });
    });

    let settings = accessibility();
    let contrast_class = if settings.high_contrast {
        "high-contrast"
    } else {
        ""
    };
    let font_px = settings.font_px();

    rsx!(div {
        class: "app {contrast_class}",
        style: "font-size: {font_px}px",
        Header {  }
        Outlet::<Route> {}
    })
}
