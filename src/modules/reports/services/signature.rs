use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Sign a canonical body with the shared gateway secret.
///
/// HMAC-SHA-256 over the UTF-8 bytes of `canonical_body`, hex-encoded
/// lowercase. Pure; must be called after canonical serialization so the
/// signed bytes and the transmitted bytes are identical. A wrong secret just
/// yields a different signature, detected only by the remote verifier.
pub fn sign(secret: &str, canonical_body: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(canonical_body.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
