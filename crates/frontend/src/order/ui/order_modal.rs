use crate::order::view_model::OrderFormViewModel;
use crate::shared::icons::icon;
use contracts::domain::payment::PaymentMethod;
use contracts::domain::product::Product;
use leptos::prelude::*;
use std::rc::Rc;

/// 주문 모달 폼
///
/// Opens with the quantity preset to the product minimum; the total price is
/// recomputed live on every quantity input.
#[component]
#[allow(non_snake_case)]
pub fn OrderModal(product: Product, on_done: Callback<()>) -> impl IntoView {
    let vm = OrderFormViewModel::new(product);

    let product_name = vm.product.name.clone();
    let quantity_hint = vm.quantity_hint();
    let min = vm.product.min_quantity;
    let max = vm.product.max_quantity;

    // Signals are Copy; bind them so the view closures below stay independent.
    let quantity = vm.quantity;
    let customer_name = vm.customer_name;
    let customer_email = vm.customer_email;
    let target_url = vm.target_url;
    let notes = vm.notes;
    let method = vm.method;
    let error = vm.error;
    let submitting = vm.submitting;

    let price_text = {
        let vm = vm.clone();
        move || vm.price_text()
    };

    let handle_quantity_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        quantity.set(value.parse::<u32>().unwrap_or(0));
    };

    let handle_method_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        if let Some(m) = PaymentMethod::from_str(&value) {
            method.set(m);
        }
    };

    let handle_submit = move |_| {
        vm.submit_command(Rc::new(move |_| on_done.run(())));
    };

    let handle_cancel = move |_| on_done.run(());

    view! {
        <div class="order-form">
            <div class="modal-header">
                <h2 class="modal-title">"주문하기"</h2>
                <button class="button button--icon modal__close" on:click=handle_cancel>
                    {icon("x")}
                </button>
            </div>

            <div class="modal-body">
                <div class="order-form__product">{product_name}</div>

                <div class="form-group">
                    <label class="form-label" for="quantity">"수량"</label>
                    <input
                        id="quantity"
                        class="form-input"
                        type="number"
                        min=min.to_string()
                        max=max.to_string()
                        prop:value=move || quantity.get().to_string()
                        on:input=handle_quantity_input
                    />
                    <small class="form-hint" id="quantityHint">{quantity_hint}</small>
                </div>

                <div class="order-form__total">
                    <span>"총 결제 금액"</span>
                    <span class="order-form__total-value" id="totalPrice">{price_text}</span>
                </div>

                <div class="form-group">
                    <label class="form-label" for="customerName">"이름"</label>
                    <input
                        id="customerName"
                        class="form-input"
                        type="text"
                        prop:value=move || customer_name.get()
                        on:input=move |ev| customer_name.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label class="form-label" for="customerEmail">"이메일"</label>
                    <input
                        id="customerEmail"
                        class="form-input"
                        type="email"
                        prop:value=move || customer_email.get()
                        on:input=move |ev| customer_email.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label class="form-label" for="targetUrl">"대상 URL"</label>
                    <input
                        id="targetUrl"
                        class="form-input"
                        type="url"
                        placeholder="https://instagram.com/..."
                        prop:value=move || target_url.get()
                        on:input=move |ev| target_url.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label class="form-label" for="notes">"요청 사항"</label>
                    <textarea
                        id="notes"
                        class="form-input"
                        prop:value=move || notes.get()
                        on:input=move |ev| notes.set(event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-group">
                    <label class="form-label" for="paymentMethod">"결제 수단"</label>
                    <select
                        id="paymentMethod"
                        class="form-input"
                        on:change=handle_method_change
                    >
                        {PaymentMethod::ALL
                            .into_iter()
                            .map(|m| view! {
                                <option value=m.as_str()>{m.label()}</option>
                            })
                            .collect_view()}
                    </select>
                </div>

                {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

                <button
                    class="button button--primary order-form__submit"
                    disabled=move || submitting.get()
                    on:click=handle_submit
                >
                    {move || if submitting.get() { "처리 중..." } else { "주문 제출" }}
                </button>
            </div>
        </div>
    }
}
