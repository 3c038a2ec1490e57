//! One-shot notifications carried across a redirect in a cookie.
//!
//! The contact form sets a flash before redirecting to `/`; the next page
//! rendered reads it, shows it, and clears the cookie.

use axum::http::{header, HeaderMap, HeaderValue};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD as B64, Engine};
use serde::{Deserialize, Serialize};

pub const FLASH_COOKIE: &str = "folio_flash";

/// Seconds a flash survives if never displayed.
const FLASH_MAX_AGE: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
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

    fn encode(&self) -> String {
        // serializing a two-field struct cannot fail
        let json = serde_json::to_vec(self).unwrap_or_default();
        B64.encode(json)
    }

    /// Parse a raw cookie value. Tampered or stale values yield `None`.
    pub fn decode(raw: &str) -> Option<Self> {
        let bytes = B64.decode(raw).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    /// `Set-Cookie` value storing this flash.
    pub fn set_cookie(&self) -> HeaderValue {
        let cookie = format!(
            "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
            FLASH_COOKIE,
            self.encode(),
            FLASH_MAX_AGE
        );
        // base64url output is always a valid header value
        HeaderValue::from_str(&cookie).unwrap_or_else(|_| clear_cookie())
    }
}

/// Raw value of the flash cookie, if the request carries one.
pub fn cookie_value(headers: &HeaderMap) -> Option<&str> {
    for value in headers.get_all(header::COOKIE) {
        let Ok(cookie_str) = value.to_str() else {
            continue;
        };
        for cookie in cookie_str.split(';') {
            if let Some((name, value)) = cookie.trim().split_once('=') {
                if name == FLASH_COOKIE {
                    return Some(value);
                }
            }
        }
    }
    None
}

/// `Set-Cookie` value that expires the flash cookie.
pub fn clear_cookie() -> HeaderValue {
    HeaderValue::from_static("folio_flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_cookie(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    fn pending(headers: &HeaderMap) -> Option<Flash> {
        cookie_value(headers).and_then(Flash::decode)
    }

    #[test]
    fn test_cookie_carries_flash() {
        let flash = Flash::success("Thank you. We will be in touch soon.");
        let set_cookie = flash.set_cookie();
        let set_cookie = set_cookie.to_str().unwrap();
        assert!(set_cookie.starts_with("folio_flash="));
        assert!(set_cookie.contains("Path=/"));

        let pair = set_cookie.split(';').next().unwrap();
        let headers = request_with_cookie(&format!("theme=dark; {}", pair));
        assert_eq!(pending(&headers), Some(flash));
    }

    #[test]
    fn test_no_cookie_means_no_flash() {
        assert_eq!(cookie_value(&HeaderMap::new()), None);
        assert_eq!(cookie_value(&request_with_cookie("theme=dark")), None);
    }

    #[test]
    fn test_garbage_cookie_is_found_but_not_decoded() {
        let headers = request_with_cookie("folio_flash=%%%not-base64");
        assert_eq!(cookie_value(&headers), Some("%%%not-base64"));
        assert_eq!(pending(&headers), None);
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        assert!(clear_cookie().to_str().unwrap().contains("Max-Age=0"));
    }
}
