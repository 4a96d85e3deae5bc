use crate::catalog::state::CatalogState;
use crate::catalog::view_model::product_cards;
use crate::order::ui::OrderModal;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use leptos::prelude::*;

/// 상품 카드 그리드
///
/// 빈 목록이면 빈 상태 메시지를, 로드 실패면 오류 배너를 표시한다.
#[component]
#[allow(non_snake_case)]
pub fn ProductGrid() -> impl IntoView {
    let state = use_context::<CatalogState>().expect("CatalogState not found in context");
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let cards = move || {
        let platforms = state.platforms.get();
        product_cards(&state.products.get(), &platforms)
    };

    let open_order_modal = move |product_id: i64| {
        let Some(product) = state
            .products
            .get_untracked()
            .into_iter()
            .find(|p| p.id == product_id)
        else {
            log::error!("상품을 찾을 수 없습니다: id={}", product_id);
            return;
        };

        modal_stack.push_with_frame(Some("order-modal".to_string()), move |handle| {
            let product = product.clone();
            view! {
                <OrderModal
                    product=product
                    on_done=Callback::new({
                        let handle = handle.clone();
                        move |_| handle.close()
                    })
                />
            }
            .into_any()
        });
    };

    view! {
        <div class="product-section" id="products">
            {move || state.products_error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show
                when=move || !state.products.get().is_empty()
                fallback=|| view! {
                    <div class="empty-state">
                        {icon("box")}
                        <p class="empty-state__text">"상품이 없습니다."</p>
                    </div>
                }
            >
                <div class="product-grid">
                    <For
                        each=cards
                        key=|card| card.id
                        children=move |card| {
                            let id = card.id;
                            let show_badge = card.show_discount_badge;
                            let icon_style = format!(
                                "background-color: {}20; color: {};",
                                card.color, card.color
                            );
                            view! {
                                <div class="card product-card">
                                    <div class="product-card__head">
                                        <div class="platform-icon platform-icon--small" style=icon_style>
                                            <i class=card.icon></i>
                                        </div>
                                        <div>
                                            <h5 class="product-card__title">{card.name}</h5>
                                            <small class="product-card__platform">{card.platform_name}</small>
                                        </div>
                                    </div>

                                    <p class="product-card__description">{card.description}</p>

                                    <div class="product-card__details">
                                        <div class="detail-item">
                                            {icon("clock")}
                                            <span>{format!("배송: {}", card.delivery_time)}</span>
                                        </div>
                                        <div class="detail-item">
                                            {icon("arrow-down")}
                                            <span>{format!("최소: {}", card.min_quantity_text)}</span>
                                        </div>
                                        <div class="detail-item">
                                            {icon("arrow-up")}
                                            <span>{format!("최대: {}", card.max_quantity_text)}</span>
                                        </div>
                                    </div>

                                    <div class="product-card__footer">
                                        <div>
                                            <div class="price-tag">{card.price_text}</div>
                                            <div class="price-unit">"개당 가격"</div>
                                        </div>
                                        <button
                                            class="button button--primary"
                                            on:click=move |_| open_order_modal(id)
                                        >
                                            {icon("cart")}
                                            " 주문"
                                        </button>
                                    </div>

                                    <Show when=move || show_badge>
                                        <div class="product-card__badge-row">
                                            <span class="discount-badge">
                                                {icon("tag")}
                                                " 대량 구매 시 최대 20% 할인"
                                            </span>
                                        </div>
                                    </Show>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
