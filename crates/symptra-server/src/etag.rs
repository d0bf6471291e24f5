//! ETag computation for rendered reports.
//!
//! Reports are deterministic, so the tag is simply a SHA-256 over the body:
//! the same selection always yields the same tag.

use sha2::{Digest, Sha256};

/// Strong ETag (quoted hex digest) for `body`.
pub fn compute_etag(body: &[u8]) -> String {
  let hash = Sha256::digest(body);
  format!("\"{}\"", hex::encode(hash))
}
