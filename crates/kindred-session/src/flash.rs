//! One-shot notices carried across a redirect in a signed cookie.
//!
//! A handler queues a notice with [`push_flash`] before redirecting; the next
//! rendered page drains the queue with [`take_flashes`], which also clears the
//! cookie.

use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};

/// Cookie name holding the queued notices.
pub const KINDRED_FLASH: &str = "kindred_flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }
}

/// Derive the cookie signing key from an arbitrary-length secret.
///
/// `Key` needs 64 bytes of material; SHA-512 of the secret provides exactly that.
///
/// ```
/// use kindred_session::flash::signing_key;
///
/// let a = signing_key("secret");
/// let b = signing_key("secret");
/// assert_eq!(a.master(), b.master());
/// ```
pub fn signing_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// Append a notice to the queue stored in the jar.
pub fn push_flash(jar: SignedCookieJar, flash: Flash) -> SignedCookieJar {
    let mut queued = peek_flashes(&jar);
    queued.push(flash);
    match serde_json::to_string(&queued) {
        Ok(value) => jar.add(flash_cookie(value)),
        Err(e) => {
            tracing::warn!(error = %e, "failed to encode flash notices");
            jar
        }
    }
}

/// Drain all queued notices. The cookie is cleared only when something was queued.
pub fn take_flashes(jar: SignedCookieJar) -> (SignedCookieJar, Vec<Flash>) {
    let flashes = peek_flashes(&jar);
    if flashes.is_empty() {
        return (jar, flashes);
    }
    (jar.remove(flash_cookie(String::new())), flashes)
}

fn peek_flashes(jar: &SignedCookieJar) -> Vec<Flash> {
    jar.get(KINDRED_FLASH)
        .and_then(|c| serde_json::from_str(c.value()).ok())
        .unwrap_or_default()
}

fn flash_cookie(value: String) -> Cookie<'static> {
    Cookie::build((KINDRED_FLASH, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
