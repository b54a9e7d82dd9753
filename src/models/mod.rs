pub mod categories;
pub mod client_details;
pub mod proposals;
pub mod services;
pub mod users;
pub mod worker_categories;
pub mod worker_details;
