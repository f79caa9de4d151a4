//! BLAKE3 digests for resource contents

use blake3::Hasher;

/// Hash prefix for BLAKE3 hashes
pub const HASH_PREFIX: &str = "blake3:";

/// Calculate the BLAKE3 digest of a byte slice
pub fn hash_bytes(bytes: &[u8]) -> String {
    let mut hasher = Hasher::new();
    hasher.update(bytes);
    format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex())
}
