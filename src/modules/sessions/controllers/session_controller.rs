//! Session controller for HTTP endpoints
//!
//! The gate middleware has already resolved the identity by the time these
//! handlers run, so `/auth/me` just echoes what is in the request extensions.

use actix_web::{web, HttpRequest, HttpResponse};

use crate::middleware::bearer_token;
use crate::modules::sessions::models::UserIdentity;
use crate::modules::sessions::services::SessionService;

/// Current signed-in identity
///
/// GET /auth/me
pub async fn me(identity: web::ReqData<UserIdentity>) -> HttpResponse {
    HttpResponse::Ok().json(identity.into_inner())
}

/// Revoke the presented session token
///
/// POST /auth/signout
pub async fn sign_out(
    request: HttpRequest,
    sessions: web::Data<SessionService>,
) -> HttpResponse {
    if let Some(token) = bearer_token(request.headers()) {
        sessions.sign_out(token);
    }

    tracing::info!("Session signed out");
    HttpResponse::NoContent().finish()
}

/// Configure session routes
pub fn configure_session_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/me", web::get().to(me))
            .route("/signout", web::post().to(sign_out)),
    );
}
