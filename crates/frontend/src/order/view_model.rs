use super::workflow::{self, ApiGateway, SubmitOutcome, SubmitPhase};
use contracts::domain::order::OrderDraft;
use contracts::domain::payment::PaymentMethod;
use contracts::domain::product::Product;
use contracts::pricing::{quote, Quote};
use crate::shared::format::format_won;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the order modal form.
///
/// Quantity starts at the product's minimum; the quote is recomputed on every
/// quantity change, with no debouncing.
#[derive(Clone)]
pub struct OrderFormViewModel {
    pub product: Product,
    pub quantity: RwSignal<u32>,
    pub customer_name: RwSignal<String>,
    pub customer_email: RwSignal<String>,
    pub target_url: RwSignal<String>,
    pub notes: RwSignal<String>,
    pub method: RwSignal<PaymentMethod>,
    pub error: RwSignal<Option<String>>,
    pub submitting: RwSignal<bool>,
}

impl OrderFormViewModel {
    pub fn new(product: Product) -> Self {
        let min = product.min_quantity;
        Self {
            product,
            quantity: RwSignal::new(min),
            customer_name: RwSignal::new(String::new()),
            customer_email: RwSignal::new(String::new()),
            target_url: RwSignal::new(String::new()),
            notes: RwSignal::new(String::new()),
            method: RwSignal::new(PaymentMethod::default()),
            error: RwSignal::new(None),
            submitting: RwSignal::new(false),
        }
    }

    /// 현재 수량 기준 견적
    pub fn quote(&self) -> Quote {
        quote(&self.product, self.quantity.get())
    }

    /// 총액 표시 문자열 (할인 적용 시 주석 포함)
    pub fn price_text(&self) -> String {
        let q = self.quote();
        if q.has_discount() {
            format!("{} ({}% 할인 적용)", format_won(q.total), q.discount_percent())
        } else {
            format_won(q.total)
        }
    }

    /// 수량 입력 힌트 ("최소: 1,000개 / 최대: 100,000개")
    pub fn quantity_hint(&self) -> String {
        use crate::shared::format::format_number;
        format!(
            "최소: {}개 / 최대: {}개",
            format_number(self.product.min_quantity as i64),
            format_number(self.product.max_quantity as i64)
        )
    }

    fn draft(&self) -> OrderDraft {
        OrderDraft {
            product_id: self.product.id,
            customer_name: self.customer_name.get(),
            customer_email: self.customer_email.get(),
            target_url: self.target_url.get(),
            quantity: self.quantity.get(),
            notes: self.notes.get(),
        }
    }

    /// 주문 제출
    ///
    /// Validation failures never reach the network. `on_done` runs once on
    /// full success so the host can close the modal.
    pub fn submit_command(&self, on_done: Rc<dyn Fn(())>) {
        if self.submitting.get() {
            return;
        }

        let draft = self.draft();
        if let Err(msg) = draft.validate() {
            self.error.set(Some(msg));
            return;
        }

        let method = self.method.get();
        let error = self.error;
        let submitting = self.submitting;
        error.set(None);
        submitting.set(true);

        wasm_bindgen_futures::spawn_local(async move {
            let outcome =
                workflow::submit_order(&ApiGateway, &draft, method, |_phase: SubmitPhase| {}).await;
            submitting.set(false);

            match outcome {
                SubmitOutcome::Completed { order_id } => {
                    show_alert(&format!("✅ 주문이 완료되었습니다! 주문번호: {}", order_id));
                    (on_done)(());
                }
                SubmitOutcome::OrderFailed(message) => {
                    error.set(Some(message));
                }
                SubmitOutcome::PaymentFailed { order_id, message } => {
                    // The order exists on the backend; tell the user which one.
                    error.set(Some(format!("{} (주문번호: {})", message, order_id)));
                }
            }
        });
    }
}

fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
