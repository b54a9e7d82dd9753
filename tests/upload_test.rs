//! Unit tests for upload filename sanitization.
//!
//! Run with: `cargo test --test upload_test`
use oficios_backend::handlers::upload::sanitize_filename;

#[test]
fn test_safe_names_pass_through() {
    assert_eq!(sanitize_filename("receipt_2024-03.png"), "receipt_2024-03.png");
    assert_eq!(sanitize_filename("INE.frente.jpg"), "INE.frente.jpg");
}

#[test]
fn test_spaces_and_symbols_become_underscores() {
    assert_eq!(sanitize_filename("my photo (1).png"), "my_photo__1_.png");
    assert_eq!(sanitize_filename("a/b\\c:d.txt"), "a_b_c_d.txt");
}

#[test]
fn test_non_ascii_becomes_underscores() {
    assert_eq!(sanitize_filename("fachada_año.png"), "fachada_a_o.png");
}

#[test]
fn test_path_traversal_is_neutralized() {
    let clean = sanitize_filename("../../etc/passwd");
    assert!(!clean.contains('/'), "sanitized name kept a slash: {clean}");
}
