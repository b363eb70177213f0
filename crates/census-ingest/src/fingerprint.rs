use sha2::Digest;

/// SHA-256 of the source bytes, hex encoded.
///
/// Identical input bytes always produce identical results, so callers can
/// memoize on this key.
pub fn content_fingerprint(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    hex::encode(digest)
}
