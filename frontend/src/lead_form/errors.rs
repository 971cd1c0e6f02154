use thiserror::Error;

/// Per-field problems. The `Display` text is what the form shows under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Nome é obrigatório")]
    NameRequired,
    #[error("Nome deve ter pelo menos 2 caracteres")]
    NameTooShort,
    #[error("Apenas letras são permitidas")]
    NameInvalidCharacters,
    #[error("Telefone é obrigatório")]
    PhoneRequired,
    #[error("Telefone inválido")]
    PhoneInvalid,
    #[error("A data deve ser a partir de amanhã")]
    DateTooEarly,
    #[error("A data não pode ser mais de 2 anos no futuro")]
    DateTooLate,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeadFormError {
    #[error("Campos inválidos: {0} campo(s) precisam de correção")]
    SubmitBlocked(usize),
    #[error("Já existe um envio em andamento")]
    SubmissionInProgress,
    #[error("Não foi possível enviar o pedido: {0}")]
    SubmissionFailed(String),
}
