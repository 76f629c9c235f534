use thiserror::Error;

/// Reasons a volante submission is rejected.
///
/// Checked in declaration order; the first failing rule wins. The display strings
/// are shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Nome, CPF e números são obrigatórios.")]
    MissingFields,

    #[error("Nome deve ter pelo menos 3 caracteres.")]
    NameTooShort,

    #[error("CPF inválido.")]
    InvalidCpf,

    /// Any repeated or out-of-range value rejects the whole submission.
    #[error("Não repita números e use apenas valores entre 1 e 60.")]
    DuplicateOrOutOfRangeNumbers,

    #[error("É permitido escolher entre 6 e 10 números.")]
    CountOutOfRange,

    #[error("Este nome e CPF já possuem um volante registrado.")]
    DuplicateSubmission,
}
