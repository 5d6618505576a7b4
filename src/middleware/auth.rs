use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    http::header::HeaderMap,
    Error, HttpMessage,
};
use futures_util::future::LocalBoxFuture;

use crate::core::AppError;
use crate::modules::sessions::services::SessionService;

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Session gate middleware.
///
/// Everything except `/` and `/health` requires a valid session token. On
/// success the resolved identity is stored in request extensions for the
/// handlers; the pricing core itself never reads it.
pub struct SessionGate {
    sessions: Arc<SessionService>,
}

impl SessionGate {
    pub fn new(sessions: Arc<SessionService>) -> Self {
        Self { sessions }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionGateMiddleware<S>;
    type Future = Ready<std::result::Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionGateMiddleware {
            service: Rc::new(service),
            sessions: self.sessions.clone(),
        }))
    }
}

pub struct SessionGateMiddleware<S> {
    service: Rc<S>,
    sessions: Arc<SessionService>,
}

impl<S, B> Service<ServiceRequest> for SessionGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, std::result::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        let sessions = self.sessions.clone();

        Box::pin(async move {
            // Health check and the service index stay public
            let path = req.path();
            if path == "/health" || path == "/" {
                return svc.call(req).await;
            }

            let token = bearer_token(req.headers()).ok_or_else(|| {
                Error::from(AppError::unauthorized("Missing bearer session token"))
            })?;

            let identity = sessions.current_user(token).ok_or_else(|| {
                tracing::warn!(path = %path, "Rejected invalid or expired session token");
                Error::from(AppError::unauthorized("Invalid or expired session"))
            })?;

            req.extensions_mut().insert(identity);

            svc.call(req).await
        })
    }
}
