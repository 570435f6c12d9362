use actix_multipart::form::{bytes::Bytes, text::Text, MultipartForm, MultipartFormConfig};

use crate::app::filter_copy_server::{Submission, UploadedFile};

/// Multipart body posted by the copy form.
#[derive(Debug, MultipartForm)]
pub struct TransferForm {
    pub origen: Option<Text<String>>,
    pub destino: Option<Text<String>>,
    pub file: Option<Bytes>,
    pub continuar: Option<Text<String>>,
}

impl From<TransferForm> for Submission {
    fn from(form: TransferForm) -> Self {
        Submission {
            source_account: form.origen.map(|text| text.0),
            destination_account: form.destino.map(|text| text.0),
            file: form.file.map(|file| UploadedFile {
                file_name: file.file_name,
                content: file.data.to_vec(),
            }),
            // an unchecked checkbox is not sent at all
            continue_on_error: form.continuar.is_some(),
        }
    }
}

pub fn multipart_config(upload_limit_bytes: usize) -> MultipartFormConfig {
    MultipartFormConfig::default()
        .total_limit(upload_limit_bytes)
        .memory_limit(upload_limit_bytes)
}
