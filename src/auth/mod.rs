pub mod password;
pub mod verification;
