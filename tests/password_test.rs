//! Unit tests for password hashing and verification-code generation.
//! No running server or database is needed.
//!
//! Run with: `cargo test --test password_test`
use oficios_backend::auth::password::{hash_password, verify_password};
use oficios_backend::auth::verification::generate_code;

#[test]
fn test_hash_and_verify_roundtrip() {
    let hash = hash_password("hunter2!").expect("hashing should succeed");

    assert!(hash.starts_with("$2"), "expected a bcrypt hash, got {hash}");
    assert!(verify_password("hunter2!", &hash).unwrap());
}

#[test]
fn test_wrong_password_is_rejected() {
    let hash = hash_password("correct-horse").unwrap();

    assert!(!verify_password("battery-staple", &hash).unwrap());
}

#[test]
fn test_hashes_are_salted() {
    let a = hash_password("same-password").unwrap();
    let b = hash_password("same-password").unwrap();

    assert_ne!(a, b, "two hashes of the same password must differ by salt");
}

#[test]
fn test_password_is_truncated_to_72_bytes() {
    // bcrypt only reads the first 72 bytes; the prefix must be enough to
    // verify against a hash of a longer password.
    let long = "a".repeat(100);
    let prefix = "a".repeat(72);

    let hash = hash_password(&long).unwrap();
    assert!(verify_password(&prefix, &hash).unwrap());

    // A password differing only past byte 72 also verifies.
    let mut other = "a".repeat(72);
    other.push_str("bbbb");
    assert!(verify_password(&other, &hash).unwrap());
}

#[test]
fn test_verification_code_is_six_digits() {
    for _ in 0..100 {
        let code = generate_code();
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()), "bad code {code}");
    }
}
