//! Optional capability gate for admin routes.
//!
//! When no token is configured the gate is open and every caller is admitted.
//! With a token, callers must present it either as `Authorization: Bearer <token>`
//! or in the `kindred_admin_token` cookie.

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum_extra::extract::cookie::CookieJar;
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use http::StatusCode;
use http::request::Parts;

/// Cookie carrying the admin token for browser sessions.
pub const KINDRED_ADMIN_TOKEN: &str = "kindred_admin_token";

#[derive(Debug, Clone, Default)]
pub struct AdminGate {
    token: Option<Arc<str>>,
}

impl AdminGate {
    pub fn open() -> Self {
        Self { token: None }
    }

    /// An empty or absent token leaves the gate open.
    pub fn from_token(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()).map(Arc::from),
        }
    }

    pub fn is_open(&self) -> bool {
        self.token.is_none()
    }

    pub fn permits(&self, presented: Option<&str>) -> bool {
        match (&self.token, presented) {
            (None, _) => true,
            (Some(expected), Some(given)) => constant_time_eq(expected.as_bytes(), given.as_bytes()),
            (Some(_), None) => false,
        }
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Marker extractor: present in a handler's arguments means the caller passed the gate.
///
/// Rejects with 401 when a token is configured and the request does not carry it.
#[derive(Debug, Clone, Copy)]
pub struct AdminAccess;

impl<S> FromRequestParts<S> for AdminAccess
where
    AdminGate: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // Resolve synchronously and hand back a 'static future (see axum-core 0.5 signature).
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let gate = AdminGate::from_ref(state);

        let presented = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .map(|auth| auth.token().to_owned())
            .or_else(|| {
                CookieJar::from_headers(&parts.headers)
                    .get(KINDRED_ADMIN_TOKEN)
                    .map(|c| c.value().to_owned())
            });

        let allowed = gate.permits(presented.as_deref());

        async move {
            if allowed {
                Ok(Self)
            } else {
                tracing::debug!("admin request rejected: missing or wrong token");
                Err(StatusCode::UNAUTHORIZED)
            }
        }
    }
}
