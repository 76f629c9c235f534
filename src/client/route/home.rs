use std::collections::BTreeSet;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{NumberGrid, Page, StatsPanel, SuccessPopup},
        constant::SITE_NAME,
        model::error::ApiError,
    },
    model::volante::{CreateVolanteDto, MAX_SELECTION, MIN_SELECTION},
    util::cpf::{clean_cpf, is_valid_cpf, CPF_LENGTH},
};

#[cfg(feature = "web")]
use crate::client::api::submit_volante;

const PAUSED_MESSAGE: &str =
    "O sistema não está aceitando novas sugestões no momento. Por favor, tente novamente mais tarde.";

/// Inline message for the CPF field while the user types.
pub fn cpf_input_hint(sanitized: &str) -> Option<&'static str> {
    if sanitized.is_empty() {
        None
    } else if sanitized.len() != CPF_LENGTH {
        Some("CPF deve ter 11 dígitos.")
    } else if !is_valid_cpf(sanitized) {
        Some("CPF inválido.")
    } else {
        None
    }
}

/// Checks done before sending, mirroring the server rules the user can fix locally.
pub fn precheck(cpf: &str, selected: usize) -> Result<(), &'static str> {
    if !is_valid_cpf(cpf) {
        return Err("CPF inválido.");
    }
    if !(MIN_SELECTION..=MAX_SELECTION).contains(&selected) {
        return Err("Selecione entre 6 e 10 números.");
    }
    Ok(())
}

/// Message shown for a failed submission.
pub fn submission_error_message(err: &ApiError) -> String {
    if err.status == 403 {
        PAUSED_MESSAGE.to_string()
    } else if err.message.is_empty() {
        "Falha ao registrar volante.".to_string()
    } else {
        err.message.clone()
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Feedback {
    Info(String),
    Error(String),
}

#[component]
pub fn Home() -> Element {
    let mut name = use_signal(String::new);
    let mut cpf = use_signal(String::new);
    let mut selected = use_signal(BTreeSet::<u8>::new);
    let mut feedback = use_signal(|| None::<Feedback>);
    let mut popup = use_signal(|| None::<String>);
    let mut submit_data = use_signal(|| None::<CreateVolanteDto>);
    let mut should_submit = use_signal(|| false);
    let mut stats_refresh = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if should_submit() {
            match submit_data() {
                Some(dto) => Some(submit_volante(&dto).await),
                None => None,
            }
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    popup.set(Some("Volante registrado com sucesso!".to_string()));
                    feedback.set(None);
                    name.set(String::new());
                    cpf.set(String::new());
                    selected.set(BTreeSet::new());
                    stats_refresh.set(stats_refresh() + 1);
                }
                Err(err) => {
                    tracing::error!("Failed to submit volante: {}", err);
                    feedback.set(Some(Feedback::Error(submission_error_message(err))));
                }
            }
            should_submit.set(false);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let numbers: Vec<u8> = selected().into_iter().collect();
        let cpf_value = clean_cpf(&cpf());

        if let Err(message) = precheck(&cpf_value, numbers.len()) {
            feedback.set(Some(Feedback::Error(message.to_string())));
            return;
        }

        feedback.set(Some(Feedback::Info("Enviando...".to_string())));
        submit_data.set(Some(CreateVolanteDto {
            name: name().trim().to_string(),
            cpf: cpf_value,
            numbers,
        }));
        should_submit.set(true);
    };

    let cpf_hint = cpf_input_hint(&cpf());
    let submitting = should_submit();

    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "home",
            section {
                class: "card",
                h1 { "Monte seu volante" }
                p {
                    class: "muted",
                    "Escolha de {MIN_SELECTION} a {MAX_SELECTION} números entre 1 e 60."
                }
                form {
                    onsubmit: on_submit,
                    label {
                        r#for: "nome",
                        "Nome"
                    }
                    input {
                        id: "nome",
                        name: "nome",
                        r#type: "text",
                        required: true,
                        minlength: "3",
                        autocomplete: "name",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    label {
                        r#for: "cpf",
                        "CPF"
                    }
                    input {
                        id: "cpf",
                        name: "cpf",
                        r#type: "text",
                        inputmode: "numeric",
                        required: true,
                        maxlength: "14",
                        aria_invalid: "{cpf_hint.is_some()}",
                        value: "{cpf}",
                        oninput: move |evt| cpf.set(clean_cpf(&evt.value())),
                    }
                    if let Some(hint) = cpf_hint {
                        p { class: "field-error", "{hint}" }
                    }
                    NumberGrid {
                        selected,
                        on_limit: move |_| {
                            feedback.set(Some(Feedback::Error(format!(
                                "Selecione no máximo {} números.",
                                MAX_SELECTION
                            ))));
                        },
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting,
                        "Enviar volante"
                    }
                }
                match feedback() {
                    Some(Feedback::Info(message)) => rsx! {
                        p { class: "success", role: "status", "{message}" }
                    },
                    Some(Feedback::Error(message)) => rsx! {
                        p { class: "error", role: "alert", "{message}" }
                    },
                    None => rsx! {},
                }
            }
            StatsPanel { refresh: stats_refresh }
            SuccessPopup { message: popup }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_hint_follows_typing() {
        assert_eq!(cpf_input_hint(""), None);
        assert_eq!(cpf_input_hint("5299"), Some("CPF deve ter 11 dígitos."));
        assert_eq!(cpf_input_hint("52998224724"), Some("CPF inválido."));
        assert_eq!(cpf_input_hint("52998224725"), None);
    }

    #[test]
    fn precheck_requires_valid_cpf_and_count() {
        assert_eq!(precheck("11111111111", 6), Err("CPF inválido."));
        assert_eq!(
            precheck("52998224725", 5),
            Err("Selecione entre 6 e 10 números.")
        );
        assert_eq!(precheck("52998224725", 10), Ok(()));
    }

    #[test]
    fn paused_submissions_get_their_own_message() {
        let paused = ApiError {
            status: 403,
            message: "O sistema não está aceitando novas sugestões no momento.".to_string(),
        };
        assert_eq!(submission_error_message(&paused), PAUSED_MESSAGE);

        let invalid = ApiError {
            status: 400,
            message: "CPF inválido.".to_string(),
        };
        assert_eq!(submission_error_message(&invalid), "CPF inválido.");
    }
}
