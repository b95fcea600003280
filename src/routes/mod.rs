//! API 라우트 설정 모듈
//!
//! | 메서드 | 경로 | 핸들러 |
//! |--------|------|--------|
//! | `POST` | `/register` | [`handlers::auth::register`] |
//! | `POST` | `/login` | [`handlers::auth::login`] |
//! | `GET` | `/health` | [`health_check`] |
//!
//! # Examples
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(web::Data::new(state))
//!     .configure(configure_all_routes)
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(handlers::auth::json_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::register)
        .service(handlers::auth::login);
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AppState;
    use actix_web::{test as actix_test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory(4)))
                .configure(configure_all_routes),
        )
        .await;

        let request = actix_test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "phone_auth_service");
    }

    #[actix_web::test]
    async fn test_get_on_register_is_not_routed() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory(4)))
                .configure(configure_all_routes),
        )
        .await;

        let request = actix_test::TestRequest::get().uri("/register").to_request();
        let response = actix_test::call_service(&app, request).await;

        assert!(response.status().is_client_error());
    }
}
