pub mod order_repo;
pub mod request_log_repo;
