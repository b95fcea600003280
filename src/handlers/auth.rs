//! # Authentication HTTP Handlers
//!
//! | 메서드 | 경로 | 성공 | 실패 |
//! |--------|------|------|------|
//! | `POST` | `/register` | 201 `{message, userId}` | 400, 409, 500 |
//! | `POST` | `/login` | 200 `Login successful!` | 400, 401, 500 |
//!
//! 두 엔드포인트 모두 `{ "phone": "...", "password": "..." }` 본문을 받습니다.

use actix_web::http::header::ContentType;
use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::core::AppState;
use crate::domain::dto::users::CredentialsRequest;
use crate::errors::AppError;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input";

/// 요청 본문 최대 크기 (16 KiB)
const JSON_BODY_LIMIT: usize = 16 * 1024;

/// JSON 추출기 설정
///
/// 디코딩 실패(잘못된 JSON, 필드 누락, 문자열이 아닌 필드, 크기 초과)를
/// 모두 `ValidationError`로 바꿔 서비스 공통 에러 본문으로 응답합니다.
/// `Content-Type` 헤더가 없거나 달라도 본문을 JSON으로 해석합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .content_type_required(false)
        .error_handler(|err, req: &HttpRequest| {
            log::debug!("요청 본문 디코딩 실패 - {} {}: {}", req.method(), req.path(), err);
            AppError::ValidationError(INVALID_INPUT_MESSAGE.to_string()).into()
        })
}

#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<CredentialsRequest>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();
    let response = state.user_service.register(request).await?;

    Ok(HttpResponse::Created().json(response))
}

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<CredentialsRequest>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();
    state.user_service.login(request).await?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(LOGIN_SUCCESS_MESSAGE))
}
