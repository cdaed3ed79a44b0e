//! API 라우트 설정 모듈
//!
//! 관리자 사용자 API와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(json_config())
//!     .app_data(web::Data::from(user_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::config::Environment;
use crate::handlers;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_user_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/admin/user")
            .service(handlers::users::create_user)
    );
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_admin_api",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": Environment::current().as_str(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
