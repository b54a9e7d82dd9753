use rand::Rng;

/// Generate a 6-digit numeric code. Used as the email-verification code and
/// as the collision-avoidance prefix for uploaded filenames.
pub fn generate_code() -> String {
    let mut rng = rand::thread_rng();
    (0..6).map(|_| char::from(b'0' + rng.gen_range(0..10u8))).collect()
}
