use vtex_filter_interfaces::api::filter::{
    interface::{fallback_display_name, FilterClientInterface},
    types::FilterId,
};

use super::{delay::DelayPolicy, error::TransferError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransferMode {
    /// Stop at the first failing filter and report only the error.
    #[default]
    AbortOnError,
    /// Record the failure and keep going with the next filter.
    ContinueOnError,
}

#[derive(Debug, Clone)]
pub struct TransferRequest {
    pub source_account: String,
    pub destination_account: String,
    pub filter_ids: Vec<FilterId>,
    pub mode: TransferMode,
}

#[derive(Debug)]
pub enum ItemOutcome {
    Copied,
    Failed(TransferError),
}

#[derive(Debug)]
pub struct TransferItem {
    /// 1-based position in the request.
    pub index: usize,
    pub total: usize,
    pub filter_id: FilterId,
    pub label: String,
    pub outcome: ItemOutcome,
}

impl TransferItem {
    pub fn log_line(&self) -> String {
        match &self.outcome {
            ItemOutcome::Copied => format!(
                "{}/{} - {} copiado correctamente",
                self.index, self.total, self.label
            ),
            ItemOutcome::Failed(e) => format!(
                "{}/{} - {} falló: {}",
                self.index, self.total, self.label, e
            ),
        }
    }
}

#[derive(Debug, Default)]
pub struct TransferReport {
    pub items: Vec<TransferItem>,
}

impl TransferReport {
    pub fn copied_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item.outcome, ItemOutcome::Copied))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.items.len() - self.copied_count()
    }

    /// Log lines joined with newlines, in request order.
    pub fn log(&self) -> String {
        self.items
            .iter()
            .map(TransferItem::log_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Copies the requested filters one by one from the source account to the
/// destination account.
///
/// Items are processed strictly in order and `delay` is awaited after each
/// processed item, the last one included. In `AbortOnError` mode the first
/// failure ends the run and is returned as the error; filters written before
/// it stay on the destination.
pub async fn transfer_filters(
    client: &dyn FilterClientInterface,
    delay: &dyn DelayPolicy,
    request: &TransferRequest,
) -> Result<TransferReport, TransferError> {
    let total = request.filter_ids.len();
    log::info!(
        "transferring {} filters from {} to {}",
        total,
        request.source_account,
        request.destination_account
    );
    let mut report = TransferReport::default();
    for (i, filter_id) in request.filter_ids.iter().enumerate() {
        let index = i + 1;
        let (label, result) = copy_filter(
            client,
            &request.source_account,
            &request.destination_account,
            filter_id,
        )
        .await;
        let outcome = match result {
            Ok(()) => {
                log::info!(
                    "{}/{} filter {} copied as {}",
                    index, total, filter_id, label
                );
                ItemOutcome::Copied
            }
            Err(e) => {
                log::error!("{}/{} filter {} failed: {}", index, total, filter_id, e);
                if request.mode == TransferMode::AbortOnError {
                    log::warn!(
                        "transfer aborted, {} filters already copied to {}",
                        report.copied_count(),
                        request.destination_account
                    );
                    return Err(e);
                }
                ItemOutcome::Failed(e)
            }
        };
        report.items.push(TransferItem {
            index,
            total,
            filter_id: filter_id.clone(),
            label,
            outcome,
        });
        delay.wait().await;
    }
    log::info!(
        "transfer finished: {} copied, {} failed",
        report.copied_count(),
        report.failed_count()
    );
    Ok(report)
}

// Returns the label to log along with the result, so a failed item still has one.
async fn copy_filter(
    client: &dyn FilterClientInterface,
    source_account: &str,
    destination_account: &str,
    filter_id: &FilterId,
) -> (String, Result<(), TransferError>) {
    let filter = match client.get_filter(source_account, filter_id).await {
        Ok(filter) => filter,
        Err(e) => {
            return (
                fallback_display_name(filter_id),
                Err(TransferError::from_read(filter_id, e)),
            )
        }
    };
    let name = filter.display_name(filter_id);
    let result = client
        .put_filter(destination_account, &filter)
        .await
        .map_err(|e| TransferError::from_write(&name, e));
    (name, result)
}
