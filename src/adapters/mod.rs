pub mod api_errors;
pub mod checkout;
pub mod mollie_client;
