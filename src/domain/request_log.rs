use {
    super::id::OrderId,
    super::request::RemoteResource,
    chrono::{DateTime, Utc},
    uuid::Uuid,
};

pub struct NewRequestLogEntry {
    pub id: Uuid,
    pub order_id: Option<String>,
    pub api_method: String,
    pub response_status: i32,
    pub response_body: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl NewRequestLogEntry {
    pub fn created(order_id: &OrderId, resource: &RemoteResource) -> Self {
        Self {
            id: Uuid::now_v7(),
            order_id: Some(order_id.to_string()),
            api_method: resource.api_method.as_str().to_string(),
            response_status: 201,
            response_body: serde_json::json!({
                "id": resource.id.as_str(),
                "checkout_url": resource.checkout_url(),
            }),
            created_at: Utc::now(),
        }
    }

    /// `api_method` is empty when the flavor was never determined.
    pub fn exception(order_id: Option<&OrderId>, code: u16, message: &str, api_method: &str) -> Self {
        Self {
            id: Uuid::now_v7(),
            order_id: order_id.map(|id| id.to_string()),
            api_method: api_method.to_string(),
            response_status: i32::from(code),
            response_body: serde_json::json!({
                "code": code,
                "message": message,
            }),
            created_at: Utc::now(),
        }
    }
}
