use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{component::Page, constant::SITE_NAME},
    model::admin::{MIN_PASSWORD_LENGTH, RESET_CONFIRMATION_CODE},
};

#[cfg(feature = "web")]
use crate::client::{
    api::admin::{
        get_entry_status, logout, reset_database, toggle_entries, verify_password, verify_token,
    },
    constant::ADMIN_TOKEN_KEY,
    storage,
};

#[derive(Clone, Debug, PartialEq)]
enum Session {
    Checking,
    LoggedOut,
    LoggedIn(String),
}

#[component]
pub fn Admin() -> Element {
    let mut session = use_signal(|| {
        if cfg!(feature = "web") {
            Session::Checking
        } else {
            Session::LoggedOut
        }
    });
    let mut password = use_signal(String::new);
    let mut login_error = use_signal(|| None::<String>);
    let mut accept_new_entries = use_signal(|| None::<bool>);
    let mut confirmation = use_signal(String::new);
    let mut message = use_signal(|| None::<Result<String, String>>);

    // Resume a stored session if its token still verifies
    #[cfg(feature = "web")]
    use_future(move || async move {
        let Some(token) = storage::load(ADMIN_TOKEN_KEY).await else {
            session.set(Session::LoggedOut);
            return;
        };

        match verify_token(&token).await {
            Ok(_) => session.set(Session::LoggedIn(token)),
            Err(err) => {
                tracing::info!("Stored admin token rejected: {}", err);
                storage::remove(ADMIN_TOKEN_KEY);
                session.set(Session::LoggedOut);
            }
        }
    });

    // Load the accepting-entries flag once logged in
    #[cfg(feature = "web")]
    use_effect(move || {
        if let Session::LoggedIn(token) = session() {
            spawn(async move {
                match get_entry_status(&token).await {
                    Ok(status) => accept_new_entries.set(Some(status.accept_new_entries)),
                    Err(err) => {
                        tracing::error!("Failed to fetch entry status: {}", err);
                        if err.status == 401 || err.status == 403 {
                            storage::remove(ADMIN_TOKEN_KEY);
                            session.set(Session::LoggedOut);
                        } else {
                            message.set(Some(Err(err.message)));
                        }
                    }
                }
            });
        }
    });

    let on_login = move |evt: Event<FormData>| {
        evt.prevent_default();
        let value = password();

        if value.chars().count() < MIN_PASSWORD_LENGTH {
            login_error.set(Some(format!(
                "A senha deve ter no mínimo {} caracteres.",
                MIN_PASSWORD_LENGTH
            )));
            return;
        }

        #[cfg(feature = "web")]
        spawn(async move {
            match verify_password(value).await {
                Ok(dto) => {
                    storage::save(ADMIN_TOKEN_KEY, &dto.token);
                    password.set(String::new());
                    login_error.set(None);
                    session.set(Session::LoggedIn(dto.token));
                }
                Err(err) => login_error.set(Some(err.message)),
            }
        });
    };

    let on_toggle = move |_| {
        #[cfg(feature = "web")]
        if let Session::LoggedIn(token) = session() {
            spawn(async move {
                match toggle_entries(&token, None).await {
                    Ok(status) => {
                        accept_new_entries.set(Some(status.accept_new_entries));
                        message.set(Some(Ok(if status.accept_new_entries {
                            "Novos volantes liberados.".to_string()
                        } else {
                            "Novos volantes pausados.".to_string()
                        })));
                    }
                    Err(err) => message.set(Some(Err(err.message))),
                }
            });
        }
    };

    let on_reset = move |evt: Event<FormData>| {
        evt.prevent_default();
        let code = confirmation();

        if code != RESET_CONFIRMATION_CODE {
            message.set(Some(Err(format!(
                "Digite {} para confirmar.",
                RESET_CONFIRMATION_CODE
            ))));
            return;
        }

        #[cfg(feature = "web")]
        if let Session::LoggedIn(token) = session() {
            spawn(async move {
                match reset_database(&token, code).await {
                    Ok(result) => {
                        confirmation.set(String::new());
                        message.set(Some(Ok(format!(
                            "{} volantes removidos.",
                            result.deleted
                        ))));
                    }
                    Err(err) => message.set(Some(Err(err.message))),
                }
            });
        }
    };

    let on_logout = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            if let Err(err) = logout().await {
                tracing::warn!("Logout request failed: {}", err);
            }
            storage::remove(ADMIN_TOKEN_KEY);
        });

        accept_new_entries.set(None);
        message.set(None);
        session.set(Session::LoggedOut);
    };

    rsx! {
        Title { "Admin | {SITE_NAME}" }
        Page {
            class: "admin",
            match session() {
                Session::Checking => rsx! {
                    p { class: "muted", "Verificando sessão..." }
                },
                Session::LoggedOut => rsx! {
                    section {
                        class: "card",
                        h1 { "Área administrativa" }
                        form {
                            onsubmit: on_login,
                            label { r#for: "password", "Senha" }
                            input {
                                id: "password",
                                r#type: "password",
                                autocomplete: "current-password",
                                value: "{password}",
                                oninput: move |evt| password.set(evt.value()),
                            }
                            button { class: "btn btn-primary", r#type: "submit", "Entrar" }
                        }
                        if let Some(error) = login_error() {
                            p { class: "error", role: "alert", "{error}" }
                        }
                    }
                },
                Session::LoggedIn(_) => rsx! {
                    section {
                        class: "card",
                        div {
                            class: "row",
                            h1 { "Painel administrativo" }
                            button { class: "btn btn-outline", onclick: on_logout, "Sair" }
                        }
                        div {
                            class: "row",
                            match accept_new_entries() {
                                Some(true) => rsx! { p { "Recebendo novos volantes." } },
                                Some(false) => rsx! { p { "Novos volantes pausados." } },
                                None => rsx! { p { class: "muted", "Carregando..." } },
                            }
                            button {
                                class: "btn",
                                disabled: accept_new_entries().is_none(),
                                onclick: on_toggle,
                                if accept_new_entries() == Some(false) { "Liberar envios" } else { "Pausar envios" }
                            }
                        }
                    }
                    section {
                        class: "card danger",
                        h2 { "Apagar todos os volantes" }
                        p {
                            class: "muted",
                            "Esta ação não pode ser desfeita. Digite {RESET_CONFIRMATION_CODE} para confirmar."
                        }
                        form {
                            onsubmit: on_reset,
                            input {
                                r#type: "text",
                                aria_label: "Código de confirmação",
                                value: "{confirmation}",
                                oninput: move |evt| confirmation.set(evt.value()),
                            }
                            button { class: "btn btn-danger", r#type: "submit", "Apagar" }
                        }
                    }
                    if let Some(result) = message() {
                        match result {
                            Ok(text) => rsx! { p { class: "success", role: "status", "{text}" } },
                            Err(text) => rsx! { p { class: "error", role: "alert", "{text}" } },
                        }
                    }
                },
            }
        }
    }
}
