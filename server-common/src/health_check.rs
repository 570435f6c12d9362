use std::sync::OnceLock;

use actix_web::{get, web::Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthCheckResponse {
    pub name: String,
    pub version: String,
}

#[get("/health-check")]
pub async fn health_check() -> Json<HealthCheckResponse> {
    let (name, version) = load_name_and_version();
    Json(HealthCheckResponse { name, version })
}

/// Package information of the running binary
static PACKAGE_INFO: OnceLock<PackageInfo> = OnceLock::new();

#[derive(Clone, Debug)]
pub struct PackageInfo {
    pub name: String,
    pub version: String,
}

/// Records the binary's name and version, usually from `CARGO_PKG_NAME` and
/// `CARGO_PKG_VERSION`. Only the first call has an effect.
pub fn set_package_info(name: &str, version: &str) {
    let _ = PACKAGE_INFO.set(PackageInfo {
        name: name.to_string(),
        version: version.to_string(),
    });
}

pub fn load_name_and_version() -> (String, String) {
    let info = PACKAGE_INFO.get_or_init(|| PackageInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    });
    (info.name.clone(), info.version.clone())
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};

    use super::*;

    #[actix_web::test]
    async fn test_health_check() {
        set_package_info("filter-copy-server", "0.1.0");
        let app = test::init_service(App::new().service(health_check)).await;
        let req = test::TestRequest::get().uri("/health-check").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["name"], "filter-copy-server");
        assert_eq!(body["version"], "0.1.0");
    }
}
