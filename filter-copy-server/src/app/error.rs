use vtex_filter_client_sdk::client::error::TransferError;

#[derive(Debug, thiserror::Error)]
pub enum FilterCopyError {
    #[error("Debes subir un archivo JSON.")]
    MissingFile,

    #[error("{0}")]
    MalformedInput(String),

    #[error("El archivo JSON no contiene 'filters'.")]
    NoFilters,

    #[error(transparent)]
    Transfer(#[from] TransferError),
}

impl FilterCopyError {
    /// Text shown in the result panel of the form.
    pub fn user_message(&self) -> String {
        match self {
            FilterCopyError::NoFilters => self.to_string(),
            _ => format!("Error: {}", self),
        }
    }
}
