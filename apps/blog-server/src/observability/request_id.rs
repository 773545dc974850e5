//! Request ID propagation.
//!
//! An `X-Request-ID` sent by the client or a load balancer is kept as-is.
//! Otherwise the id `TracingLogger` generated for the request span is used.
//! Either way the id is echoed back in the response headers.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::middleware::Next;
use actix_web::{Error, HttpMessage};
use tracing_actix_web::RequestId;

/// Header name for request ID.
pub static REQUEST_ID_HEADER: &str = "x-request-id";

/// Must be registered inside `TracingLogger` (wrapped before it).
pub async fn echo_request_id(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let incoming = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .filter(|value| !value.is_empty())
        .cloned();

    let request_id = match incoming {
        Some(value) => {
            tracing::debug!(request_id = ?value, "Keeping caller-supplied request id");
            Some(value)
        }
        None => req
            .extensions()
            .get::<RequestId>()
            .and_then(|id| HeaderValue::from_str(&id.to_string()).ok()),
    };

    let mut res = next.call(req).await?;

    match request_id {
        Some(value) => {
            res.headers_mut()
                .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
        }
        None => tracing::debug!("No request id on request, TracingLogger not installed?"),
    }

    Ok(res)
}
