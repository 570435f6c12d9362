use vtex_filter_interfaces::api::{error::ServerError, filter::types::FilterId};

#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("Error obteniendo filtro {filter_id}: {body}")]
    RemoteRead {
        filter_id: FilterId,
        status: u16,
        body: String,
    },

    #[error("Error subiendo {name}: {body}")]
    RemoteWrite {
        name: String,
        status: u16,
        body: String,
    },

    #[error(transparent)]
    Unclassified(#[from] ServerError),
}

impl TransferError {
    /// Classifies a failed read. Only a status answer counts as a remote read
    /// error; transport and decoding failures stay unclassified.
    pub fn from_read(filter_id: &FilterId, error: ServerError) -> Self {
        match error {
            ServerError::ServerError(status, body, _, _) => TransferError::RemoteRead {
                filter_id: filter_id.clone(),
                status,
                body,
            },
            other => TransferError::Unclassified(other),
        }
    }

    pub fn from_write(name: &str, error: ServerError) -> Self {
        match error {
            ServerError::ServerError(status, body, _, _) => TransferError::RemoteWrite {
                name: name.to_string(),
                status,
                body,
            },
            other => TransferError::Unclassified(other),
        }
    }

    /// Status answered by the remote tenant, if the failure was a status answer.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransferError::RemoteRead { status, .. }
            | TransferError::RemoteWrite { status, .. } => Some(*status),
            TransferError::Unclassified(_) => None,
        }
    }
}
