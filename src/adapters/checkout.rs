use {
    crate::{
        AppState,
        adapters::api_errors::ApiError,
        domain::{
            checkout::{CheckoutRequest, Execution, RequestParams, SessionState},
            error::GatewayError,
            id::OrderId,
        },
    },
    axum::{
        Form, Json,
        extract::{Path, Query, State, rejection::FormRejection},
        http::{HeaderMap, StatusCode},
        response::{IntoResponse, Redirect, Response},
    },
    std::collections::HashMap,
    uuid::Uuid,
};

pub const REMOTE_ACCESS_TOKEN_HEADER: &str = "x-remote-access-token";

/// `POST /checkout/{order_id}/execute` — the shop's order-execute step.
///
/// The form body is optional. A POST without one carries its parameters in
/// the query string.
pub async fn execute_payment_handler(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Result<Response, ApiError> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(FormRejection::InvalidFormContentType(_)) => HashMap::new(),
        Err(rejection) => return Ok(rejection.into_response()),
    };
    let order_id = OrderId::new(order_id)?;
    let mut order = state
        .orders
        .find_order(&order_id)
        .await?
        .ok_or_else(|| GatewayError::NotFound(format!("order {order_id}")))?;

    let session = session_from(&query, &headers);
    // Body parameters win over query parameters of the same name.
    let params: RequestParams = query.into_iter().chain(form).collect();
    let checkout = CheckoutRequest::new(params, session);

    let amount = *order.total();
    let execution = state
        .gateway
        .execute_payment(&amount, &mut order, &checkout)
        .await;

    Ok(into_response(execution))
}

fn session_from(query: &HashMap<String, String>, headers: &HeaderMap) -> SessionState {
    let sid = query
        .get("sid")
        .filter(|sid| !sid.is_empty())
        .map(|sid| format!("sid={sid}"));
    let token = headers
        .get(REMOTE_ACCESS_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::now_v7().simple().to_string());
    SessionState::new(sid, token)
}

fn into_response(execution: Execution) -> Response {
    match execution {
        Execution::Redirect(url) => Redirect::to(&url).into_response(),
        Execution::AwaitingCheckout(id) => (
            StatusCode::ACCEPTED,
            Json(serde_json::json!({
                "status": "awaiting_checkout",
                "transaction_id": id.as_str(),
            })),
        )
            .into_response(),
        Execution::Finished(true) => {
            (StatusCode::OK, Json(serde_json::json!({"status": "paid"}))).into_response()
        }
        Execution::Finished(false) => (
            StatusCode::PAYMENT_REQUIRED,
            Json(serde_json::json!({"status": "not_paid"})),
        )
            .into_response(),
        Execution::Failed(failure) => (
            StatusCode::PAYMENT_REQUIRED,
            Json(serde_json::json!({
                "error_code": failure.code,
                "message": failure.message,
            })),
        )
            .into_response(),
    }
}
