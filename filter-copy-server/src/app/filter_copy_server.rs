use std::time::Duration;

use vtex_filter_client_sdk::{
    client::{
        delay::{DelayPolicy, FixedInterval},
        transfer::{transfer_filters, TransferMode, TransferReport, TransferRequest},
    },
    external_api::filter_api::{is_valid_account, FilterApiClient},
};
use vtex_filter_interfaces::api::filter::interface::FilterClientInterface;

use super::{error::FilterCopyError, upload::parse_filter_ids};
use crate::Env;

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content: Vec<u8>,
}

/// Fields of one form submission, as received.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub source_account: Option<String>,
    pub destination_account: Option<String>,
    pub file: Option<UploadedFile>,
    pub continue_on_error: bool,
}

pub struct FilterCopyServer {
    client: Box<dyn FilterClientInterface>,
    delay: Box<dyn DelayPolicy>,
}

impl FilterCopyServer {
    /// Creates the server with the platform client and the fixed pause
    /// configured in `env`.
    pub fn new(env: &Env) -> Self {
        let client = FilterApiClient::new(&env.platform_url_template)
            .with_timeout(env.request_timeout_secs.map(Duration::from_secs));
        log::info!(
            "Using platform url template {} with a {}ms pause between filters",
            env.platform_url_template,
            env.transfer_delay_ms
        );
        Self::with_collaborators(
            Box::new(client),
            Box::new(FixedInterval::from_millis(env.transfer_delay_ms)),
        )
    }

    pub fn with_collaborators(
        client: Box<dyn FilterClientInterface>,
        delay: Box<dyn DelayPolicy>,
    ) -> Self {
        Self { client, delay }
    }

    /// Validates a submission and runs the transfer it describes. Nothing is
    /// sent to the platform unless the file lists at least one filter.
    pub async fn copy_filters(
        &self,
        submission: Submission,
    ) -> Result<TransferReport, FilterCopyError> {
        let file = match submission.file {
            Some(file) if file.file_name.as_deref().is_some_and(|n| !n.is_empty()) => file,
            _ => return Err(FilterCopyError::MissingFile),
        };
        let filter_ids = parse_filter_ids(&file.content)?;
        let source_account = required_account(submission.source_account, "origen")?;
        let destination_account = required_account(submission.destination_account, "destino")?;

        let mode = if submission.continue_on_error {
            TransferMode::ContinueOnError
        } else {
            TransferMode::AbortOnError
        };
        let request = TransferRequest {
            source_account,
            destination_account,
            filter_ids,
            mode,
        };
        let report = transfer_filters(self.client.as_ref(), self.delay.as_ref(), &request).await?;
        Ok(report)
    }
}

fn required_account(value: Option<String>, field: &str) -> Result<String, FilterCopyError> {
    let account = match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => v,
        _ => {
            return Err(FilterCopyError::MalformedInput(format!(
                "Debes indicar la cuenta {}.",
                field
            )))
        }
    };
    if !is_valid_account(&account) {
        return Err(FilterCopyError::MalformedInput(format!(
            "La cuenta {} '{}' no es válida.",
            field, account
        )));
    }
    Ok(account)
}
