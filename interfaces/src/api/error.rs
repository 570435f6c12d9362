#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Server error status={0}, message={1}, url={2}, request={3}")]
    ServerError(u16, String, String, String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Malformed URL: {0}")]
    MalformedUrl(String),
}
