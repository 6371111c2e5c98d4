use {
    crate::domain::{
        error::GatewayError,
        provider::{BoxFuture, RequestLog},
        request_log::NewRequestLogEntry,
    },
    sqlx::PgPool,
};

pub async fn insert_request_log(pool: &PgPool, entry: &NewRequestLogEntry) -> Result<(), GatewayError> {
    sqlx::query(
        r#"
        INSERT INTO provider_request_log (id, order_id, api_method, response_status, response_body, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(entry.id)
    .bind(entry.order_id.as_deref())
    .bind(&entry.api_method)
    .bind(entry.response_status)
    .bind(&entry.response_body)
    .bind(entry.created_at)
    .execute(pool)
    .await?;

    Ok(())
}

#[derive(Clone)]
pub struct PgRequestLog {
    pool: PgPool,
}

impl PgRequestLog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl RequestLog for PgRequestLog {
    fn record<'a>(&'a self, entry: &'a NewRequestLogEntry) -> BoxFuture<'a, Result<(), GatewayError>> {
        Box::pin(insert_request_log(&self.pool, entry))
    }
}
