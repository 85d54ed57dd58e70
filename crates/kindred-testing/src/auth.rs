//! Admin credentials for integration tests.
//!
//! When the site runs with `ADMIN_TOKEN` set, admin routes expect the token as a
//! bearer header or in the `kindred_admin_token` cookie. `MockAdmin` builds both.

use http::header::{AUTHORIZATION, COOKIE};
use http::{HeaderName, HeaderValue};

use kindred_session::admin::KINDRED_ADMIN_TOKEN;

pub const TEST_ADMIN_TOKEN: &str = "test-admin-token";

pub struct MockAdmin {
    pub token: String,
}

impl Default for MockAdmin {
    fn default() -> Self {
        Self::new(TEST_ADMIN_TOKEN)
    }
}

impl MockAdmin {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// `Authorization: Bearer <token>`
    pub fn header(&self) -> (HeaderName, HeaderValue) {
        let value = HeaderValue::from_str(&format!("Bearer {}", self.token)).unwrap();
        (AUTHORIZATION, value)
    }

    /// `Cookie: kindred_admin_token=<token>`
    pub fn cookie(&self) -> (HeaderName, HeaderValue) {
        let value =
            HeaderValue::from_str(&format!("{KINDRED_ADMIN_TOKEN}={}", self.token)).unwrap();
        (COOKIE, value)
    }
}
