//! 주문 제출 워크플로우
//!
//! Two strictly sequential, dependent calls: the payment is only created
//! after the order exists. Every failure is terminal for the attempt; there
//! are no retries and no compensating order cancellation — an order whose
//! payment failed stays on the backend for reconciliation and is reported
//! here as a first-class outcome.

use super::api;
use contracts::domain::order::{Order, OrderDraft};
use contracts::domain::payment::{Payment, PaymentDraft, PaymentMethod};

/// Backend gateway seam, mockable in tests.
#[allow(async_fn_in_trait)]
pub trait StorefrontGateway {
    async fn create_order(&self, draft: &OrderDraft) -> Result<Order, String>;
    async fn create_payment(&self, draft: &PaymentDraft) -> Result<Payment, String>;
}

/// Live gateway over `order::api`.
pub struct ApiGateway;

impl StorefrontGateway for ApiGateway {
    async fn create_order(&self, draft: &OrderDraft) -> Result<Order, String> {
        api::create_order(draft).await
    }

    async fn create_payment(&self, draft: &PaymentDraft) -> Result<Payment, String> {
        api::create_payment(draft).await
    }
}

/// 제출 단계 — 관찰자 콜백으로 보고된다
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    CreatingOrder,
    CreatingPayment,
}

/// 제출 결과
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// 주문 생성 실패 — 결제는 시도되지 않았다
    OrderFailed(String),
    /// 주문은 생성되었으나 결제가 실패했다
    PaymentFailed { order_id: i64, message: String },
    /// 주문과 결제 모두 성공
    Completed { order_id: i64 },
}

/// 주문 제출: 주문 생성 → 결제 생성
///
/// The caller validates the draft first; this function only drives the two
/// network steps. `on_phase` fires before each step starts.
pub async fn submit_order<G, F>(
    gateway: &G,
    draft: &OrderDraft,
    method: PaymentMethod,
    on_phase: F,
) -> SubmitOutcome
where
    G: StorefrontGateway,
    F: Fn(SubmitPhase),
{
    on_phase(SubmitPhase::CreatingOrder);
    let order = match gateway.create_order(draft).await {
        Ok(order) => order,
        Err(message) => return SubmitOutcome::OrderFailed(message),
    };

    on_phase(SubmitPhase::CreatingPayment);
    let payment_draft = PaymentDraft {
        order_id: order.id,
        method,
    };
    match gateway.create_payment(&payment_draft).await {
        Ok(_) => SubmitOutcome::Completed { order_id: order.id },
        Err(message) => SubmitOutcome::PaymentFailed {
            order_id: order.id,
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::order::OrderStatus;
    use contracts::domain::payment::PaymentStatus;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    struct MockGateway {
        order_result: Result<Order, String>,
        payment_result: Result<Payment, String>,
        order_calls: Cell<u32>,
        payment_calls: Cell<u32>,
        payment_drafts: RefCell<Vec<PaymentDraft>>,
    }

    impl MockGateway {
        fn new(order_result: Result<Order, String>, payment_result: Result<Payment, String>) -> Self {
            Self {
                order_result,
                payment_result,
                order_calls: Cell::new(0),
                payment_calls: Cell::new(0),
                payment_drafts: RefCell::new(Vec::new()),
            }
        }
    }

    impl StorefrontGateway for MockGateway {
        async fn create_order(&self, _draft: &OrderDraft) -> Result<Order, String> {
            self.order_calls.set(self.order_calls.get() + 1);
            self.order_result.clone()
        }

        async fn create_payment(&self, draft: &PaymentDraft) -> Result<Payment, String> {
            self.payment_calls.set(self.payment_calls.get() + 1);
            self.payment_drafts.borrow_mut().push(draft.clone());
            self.payment_result.clone()
        }
    }

    fn order(id: i64) -> Order {
        Order {
            id,
            product_id: 1,
            quantity: 100,
            unit_price: 50.0,
            total_price: 5_000.0,
            status: OrderStatus::Pending,
            created_at: None,
        }
    }

    fn payment(order_id: i64) -> Payment {
        Payment {
            id: 1,
            order_id,
            method: PaymentMethod::Card,
            amount: 5_000.0,
            status: PaymentStatus::Approved,
            transaction_id: None,
            created_at: None,
        }
    }

    fn draft() -> OrderDraft {
        OrderDraft {
            product_id: 1,
            customer_name: "홍길동".to_string(),
            customer_email: "hong@example.com".to_string(),
            target_url: "https://example.com/profile".to_string(),
            quantity: 100,
            notes: String::new(),
        }
    }

    #[test]
    fn test_failed_order_issues_no_payment_call() {
        let gw = MockGateway::new(Err("재고 없음".to_string()), Ok(payment(42)));

        let outcome = block_on(submit_order(&gw, &draft(), PaymentMethod::Card, |_| {}));

        assert_eq!(outcome, SubmitOutcome::OrderFailed("재고 없음".to_string()));
        assert_eq!(gw.order_calls.get(), 1);
        assert_eq!(gw.payment_calls.get(), 0);
    }

    #[test]
    fn test_success_calls_each_endpoint_once() {
        let gw = MockGateway::new(Ok(order(42)), Ok(payment(42)));

        let outcome = block_on(submit_order(&gw, &draft(), PaymentMethod::Kakaopay, |_| {}));

        assert_eq!(outcome, SubmitOutcome::Completed { order_id: 42 });
        assert_eq!(gw.order_calls.get(), 1);
        assert_eq!(gw.payment_calls.get(), 1);

        let drafts = gw.payment_drafts.borrow();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].order_id, 42);
        assert_eq!(drafts[0].method, PaymentMethod::Kakaopay);
    }

    #[test]
    fn test_payment_failure_carries_created_order_id() {
        let gw = MockGateway::new(Ok(order(7)), Err("승인 거절".to_string()));

        let outcome = block_on(submit_order(&gw, &draft(), PaymentMethod::Card, |_| {}));

        assert_eq!(
            outcome,
            SubmitOutcome::PaymentFailed {
                order_id: 7,
                message: "승인 거절".to_string(),
            }
        );
        assert_eq!(gw.order_calls.get(), 1);
        assert_eq!(gw.payment_calls.get(), 1);
    }

    #[test]
    fn test_phases_reported_in_order() {
        let gw = MockGateway::new(Ok(order(1)), Ok(payment(1)));
        let phases = RefCell::new(Vec::new());

        block_on(submit_order(&gw, &draft(), PaymentMethod::Card, |phase| {
            phases.borrow_mut().push(phase);
        }));

        assert_eq!(
            *phases.borrow(),
            vec![SubmitPhase::CreatingOrder, SubmitPhase::CreatingPayment]
        );
    }

    #[test]
    fn test_failed_order_reports_single_phase() {
        let gw = MockGateway::new(Err("오류".to_string()), Ok(payment(1)));
        let phases = RefCell::new(Vec::new());

        block_on(submit_order(&gw, &draft(), PaymentMethod::Card, |phase| {
            phases.borrow_mut().push(phase);
        }));

        assert_eq!(*phases.borrow(), vec![SubmitPhase::CreatingOrder]);
    }
}
