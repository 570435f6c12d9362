use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    HttpMessage,
};
use std::time::Instant;
use thiserror::Error;
use tracing::Span;
use tracing_actix_web::RootSpanBuilder;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt as _,
    util::{SubscriberInitExt as _, TryInitError},
    EnvFilter,
};

use crate::env::Env;

#[derive(Error, Debug)]
pub enum InitLoggerError {
    #[error("Failed to load logger environment: {0}")]
    EnvError(#[from] envy::Error),

    #[error("Failed to initialize logger: {0}")]
    TryInitError(#[from] TryInitError),
}

/// Installs the global subscriber, configured from `ENV` and `APP_LOG`. `log`
/// records emitted by the application crates are forwarded to it as well.
pub fn init_logger() -> Result<(), InitLoggerError> {
    let env = envy::from_env::<Env>()?;
    let env_filter = EnvFilter::new(env.app_log);

    if env.env.is_local() {
        // Log to stdout
        let subscriber = fmt::Layer::new().with_line_number(true);
        tracing_subscriber::registry()
            .with(subscriber)
            .with(env_filter)
            .try_init()?;
    } else {
        let subscriber = fmt::Layer::new()
            .with_target(false)
            .with_span_events(fmt::format::FmtSpan::NEW | fmt::format::FmtSpan::CLOSE)
            .json();
        tracing_subscriber::registry()
            .with(subscriber)
            .with(env_filter)
            .try_init()?;
    }
    Ok(())
}

/// Root span of every request: method, path and a fresh `request_id`, then
/// the status and latency once the response is ready.
pub struct RequestSpanBuilder;

impl RootSpanBuilder for RequestSpanBuilder {
    fn on_request_start(request: &ServiceRequest) -> Span {
        request.extensions_mut().insert(Instant::now());
        tracing::info_span!(
            "http-request",
            method = %request.method(),
            path = %request.path(),
            request_id = %uuid::Uuid::new_v4(),
            status_code = tracing::field::Empty,
            latency_ms = tracing::field::Empty,
        )
    }

    fn on_request_end<B: MessageBody>(
        span: Span,
        outcome: &Result<ServiceResponse<B>, actix_web::Error>,
    ) {
        match outcome {
            Ok(response) => {
                span.record("status_code", response.status().as_u16());
                if let Some(start) = response.request().extensions().get::<Instant>() {
                    span.record("latency_ms", start.elapsed().as_millis() as u64);
                }
                tracing::info!(parent: &span, "request-end");
            }
            Err(error) => {
                tracing::error!(parent: &span, error = %error, "request failed");
            }
        }
    }
}
