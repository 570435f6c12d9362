use std::io;

use actix_web::{web::Data, App, HttpServer};
use filter_copy_server::{
    api::{form::multipart_config, routes::filter_copy_scope, state::State},
    Env,
};
use server_common::{
    health_check::{health_check, set_package_info},
    logger::{init_logger, RequestSpanBuilder},
};
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    set_package_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    init_logger().map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to initialize logger: {}", e),
        )
    })?;

    let env: Env = envy::from_env().map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to parse environment variables: {}", e),
        )
    })?;
    log::info!("Starting filter copy server on {}:{}", env.host, env.port);

    let state = Data::new(State::new(&env));
    let upload_limit_bytes = env.upload_limit_bytes;
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::<RequestSpanBuilder>::new())
            .app_data(multipart_config(upload_limit_bytes))
            .app_data(state.clone())
            .service(health_check)
            .service(filter_copy_scope())
    })
    .bind((env.host.as_str(), env.port))?
    .run()
    .await
}
