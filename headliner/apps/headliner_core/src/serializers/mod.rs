pub mod api_error;
pub mod service_info;
