use dioxus::prelude::*;

/// How long the popup stays on screen.
pub const POPUP_DURATION_MS: u32 = 3_000;

/// Transient confirmation shown while `message` is set.
#[component]
pub fn SuccessPopup(mut message: Signal<Option<String>>) -> Element {
    #[cfg(feature = "web")]
    use_effect(move || {
        if message().is_some() {
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(POPUP_DURATION_MS).await;
                message.set(None);
            });
        }
    });

    rsx!(
        if let Some(text) = message() {
            div {
                class: "success-popup show",
                role: "status",
                "{text}"
            }
        }
    )
}
