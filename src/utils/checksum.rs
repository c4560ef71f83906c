//! Content checksum for configuration snapshots.
//!
//! Used to compare two serialized documents, not to protect them.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};

/// SHA-256 over `bytes`, encoded as unpadded URL-safe base64
pub fn checksum(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    URL_SAFE_NO_PAD.encode(digest)
}
