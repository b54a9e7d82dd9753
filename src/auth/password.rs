use bcrypt::{BcryptError, DEFAULT_COST, hash, verify};

/// bcrypt only looks at the first 72 bytes of its input; longer passwords
/// are cut to that prefix before hashing so hash and check agree.
const BCRYPT_MAX_BYTES: usize = 72;

fn truncated(plain: &str) -> &[u8] {
    let bytes = plain.as_bytes();
    &bytes[..bytes.len().min(BCRYPT_MAX_BYTES)]
}

/// Hash a plaintext password with a salted adaptive hash (bcrypt, default cost).
pub fn hash_password(plain: &str) -> Result<String, BcryptError> {
    hash(truncated(plain), DEFAULT_COST)
}

/// Check a plaintext password against a stored bcrypt hash.
pub fn verify_password(plain: &str, hashed: &str) -> Result<bool, BcryptError> {
    verify(truncated(plain), hashed)
}
