use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{WebError, WebResult};
use crate::session::{CurrentUser, USER_COOKIE, derive_user_id};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user_id: String,
}

#[utoipa::path(
    post,
    path = "/api/session",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session cookie set", body = SessionResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "session"
)]
pub async fn login(jar: CookieJar, Json(req): Json<LoginRequest>) -> WebResult<Response> {
    req.validate()?;

    let user_id = derive_user_id(&req.name);
    if user_id.is_empty() {
        return Err(WebError::BadRequest("Name is required".to_string()));
    }

    let cookie = Cookie::build((USER_COOKIE, user_id.clone()))
        .path("/")
        .http_only(true)
        .build();

    Ok((jar.add(cookie), Json(SessionResponse { user_id })).into_response())
}

#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "Current session", body = SessionResponse),
        (status = 401, description = "Not authenticated")
    ),
    tag = "session"
)]
pub async fn get_session(user: CurrentUser) -> WebResult<Response> {
    match user.0 {
        Some(user_id) => Ok(Json(SessionResponse { user_id }).into_response()),
        None => Err(WebError::Unauthorized),
    }
}

#[utoipa::path(
    delete,
    path = "/api/session",
    responses(
        (status = 204, description = "Session cleared")
    ),
    tag = "session"
)]
pub async fn logout(jar: CookieJar) -> Response {
    let removal = Cookie::build((USER_COOKIE, "")).path("/").build();
    (jar.remove(removal), StatusCode::NO_CONTENT).into_response()
}
