pub mod health;
pub mod service_info;
