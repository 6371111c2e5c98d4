pub mod dispatch;
pub mod interceptor;
pub mod offline;
pub mod registry;
pub mod return_url;
