use serde::Deserialize;

pub mod api;
pub mod app;

#[derive(Debug, Deserialize)]
pub struct Env {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_platform_url_template")]
    pub platform_url_template: String,
    #[serde(default = "default_transfer_delay_ms")]
    pub transfer_delay_ms: u64,
    pub request_timeout_secs: Option<u64>,

    #[serde(default = "default_upload_limit_bytes")]
    pub upload_limit_bytes: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_platform_url_template() -> String {
    vtex_filter_client_sdk::external_api::filter_api::DEFAULT_URL_TEMPLATE.to_string()
}

fn default_transfer_delay_ms() -> u64 {
    1000
}

fn default_upload_limit_bytes() -> usize {
    2 * 1024 * 1024
}
