use std::collections::BTreeMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha256};

use crate::error::Result;

/// Length of the obfuscated preference key the cipher key is derived from
pub const PREFS_KEY_LEN: usize = 26;

// Fixed infix the app splices into the middle of the preference key before
// hashing. Shipped in the APK; not secret.
const KEY_INFIX: &str = "a!k@ES2,g86AX&D8vn2]";

/// Preference values that can be the cipher-key source.
///
/// The key is the only value stored in the clear; it is recognizable by
/// its fixed length of 26 characters. Several candidates can match;
/// callers derive a key from each and keep whichever decrypts cleanly.
pub fn candidate_keys(settings: &BTreeMap<String, String>) -> Vec<&String> {
    settings
        .values()
        .filter(|value| value.len() == PREFS_KEY_LEN)
        .collect()
}

/// Derive the 256-bit AES key from a preference key candidate: split the
/// candidate in half, interpose the fixed infix, SHA-256 the result.
pub fn derive_cipher_key(prefs_key: &str) -> [u8; 32] {
    let half = prefs_key.len() / 2;
    let mut material = String::with_capacity(prefs_key.len() + KEY_INFIX.len());
    material.push_str(&prefs_key[..half]);
    material.push_str(KEY_INFIX);
    material.push_str(&prefs_key[half..]);

    Sha256::digest(material.as_bytes()).into()
}

/// Decode one base64 ciphertext value as stored by the app.
///
/// The app strips base64 padding on write; re-pad with `len % 4` '='
/// characters before decoding. That repair is kept byte-for-byte
/// compatible with the vendor tooling, which under-pads the
/// `len % 4 == 3` case and fails on such values, and so does this.
pub fn decode_ciphertext(value: &str) -> Result<Vec<u8>> {
    let mut padded = value.to_string();
    for _ in 0..(value.len() % 4) {
        padded.push('=');
    }
    Ok(STANDARD.decode(padded.as_bytes())?)
}
