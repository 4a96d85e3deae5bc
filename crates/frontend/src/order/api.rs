use contracts::domain::order::{Order, OrderDraft};
use contracts::domain::payment::{Payment, PaymentDraft};
use gloo_net::http::Request;
use serde::Deserialize;

const API_ORDERS: &str = "/api/orders";
const API_PAYMENTS: &str = "/api/payments";

/// FastAPI-style error body: `{"detail": "..."}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// 주문 생성
///
/// Non-success responses surface the server's `detail` message when present,
/// otherwise a generic failure message.
pub async fn create_order(draft: &OrderDraft) -> Result<Order, String> {
    let response = Request::post(API_ORDERS)
        .json(draft)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail);
        return Err(detail.unwrap_or_else(|| "주문 생성에 실패했습니다.".to_string()));
    }

    let order: Order = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(order)
}

/// 결제 생성 — 주문 생성 성공 후에만 호출된다
pub async fn create_payment(draft: &PaymentDraft) -> Result<Payment, String> {
    let response = Request::post(API_PAYMENTS)
        .json(draft)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err("결제 처리에 실패했습니다.".to_string());
    }

    let payment: Payment = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(payment)
}
