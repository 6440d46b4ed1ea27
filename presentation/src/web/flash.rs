//! One-shot flash messages carried in an HMAC-SHA256 signed cookie

use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use hmac::{Hmac, Mac};
use sha2::Sha256;

pub const FLASH_COOKIE: &str = "llm_qa_flash";

type HmacSha256 = Hmac<Sha256>;

/// Signs and verifies flash cookie values
///
/// Cookie value layout: `<hex message>.<hex mac>`.
pub struct FlashSigner {
    mac: HmacSha256,
}

impl FlashSigner {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            mac: HmacSha256::new_from_slice(secret.as_ref())
                .expect("HMAC accepts keys of any length"),
        }
    }

    pub fn sign(&self, message: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(message.as_bytes());
        format!(
            "{}.{}",
            hex::encode(message),
            hex::encode(mac.finalize().into_bytes())
        )
    }

    /// Return the message if the signature matches
    pub fn verify(&self, value: &str) -> Option<String> {
        let (payload, tag) = value.split_once('.')?;
        let message = hex::decode(payload).ok()?;
        let tag = hex::decode(tag).ok()?;

        let mut mac = self.mac.clone();
        mac.update(&message);
        mac.verify_slice(&tag).ok()?;

        String::from_utf8(message).ok()
    }

    /// `Set-Cookie` value storing a signed `message`
    pub fn set_cookie(&self, message: &str) -> String {
        format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            FLASH_COOKIE,
            self.sign(message)
        )
    }
}

/// `Set-Cookie` value that deletes the flash cookie
pub fn clear_cookie() -> String {
    format!("{}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax", FLASH_COOKIE)
}

/// Find cookie `name` among the request's `Cookie` headers
pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}
