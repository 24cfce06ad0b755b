//! History fingerprints
//!
//! SHA-256 over the JSON encoding of a result history. Two runs with the
//! same parameters and seed must produce the same fingerprint.

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of `value` serialized as JSON
pub fn fingerprint<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let bytes = serde_json::to_vec(value)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_stable() {
        let a = fingerprint(&vec![0.25, 0.75]).unwrap();
        let b = fingerprint(&vec![0.25, 0.75]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_fingerprint_sensitive() {
        let a = fingerprint(&vec![0.25, 0.75]).unwrap();
        let b = fingerprint(&vec![0.25, 0.750000001]).unwrap();
        assert_ne!(a, b);
    }
}
