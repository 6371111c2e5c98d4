pub mod checkout;
pub mod error;
pub mod id;
pub mod money;
pub mod order;
pub mod payment_model;
pub mod provider;
pub mod request;
pub mod request_log;
