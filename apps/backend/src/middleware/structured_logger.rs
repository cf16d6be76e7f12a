//! One `request_completed` event per request, levelled by status class.
//!
//! Each event carries the matched route pattern and, for game routes, the
//! game id from the path, so one game's traffic can be filtered out of the log.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error as ActixError, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let route = req.match_pattern().unwrap_or_else(|| "unmatched".to_string());
        let trace_id = req
            .extensions()
            .get::<String>()
            .cloned()
            .unwrap_or_else(|| "unknown".to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let (status, game_id) = match &result {
                Ok(res) => (res.status(), request_game_id(res.request())),
                Err(err) => (err.as_response_error().status_code(), None),
            };
            let status_code = status.as_u16();
            let duration_us = start.elapsed().as_micros() as u64;
            let game_id = game_id.unwrap_or_default();

            if status.is_server_error() {
                error!(http.method=%method, http.route=%route, url.path=%path, game_id=%game_id, http.status_code=status_code, duration_us, trace_id=%trace_id, "request_completed");
            } else if status.is_client_error() {
                warn!(http.method=%method, http.route=%route, url.path=%path, game_id=%game_id, http.status_code=status_code, duration_us, trace_id=%trace_id, "request_completed");
            } else {
                info!(http.method=%method, http.route=%route, url.path=%path, game_id=%game_id, http.status_code=status_code, duration_us, trace_id=%trace_id, "request_completed");
            }

            result
        })
    }
}

/// `{id}` segment of a `/api/games/{id}/...` request, once routing has run.
fn request_game_id(req: &HttpRequest) -> Option<String> {
    req.match_info().get("id").map(str::to_string)
}
