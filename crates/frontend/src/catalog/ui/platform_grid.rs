use crate::catalog::state::CatalogState;
use leptos::prelude::*;

/// 플랫폼 카드 그리드 — 카드 클릭 시 해당 플랫폼으로 상품을 필터링한다
#[component]
#[allow(non_snake_case)]
pub fn PlatformGrid() -> impl IntoView {
    let state = use_context::<CatalogState>().expect("CatalogState not found in context");

    let select = move |id: String| {
        state.apply_filter(Some(id));
        scroll_to_products();
    };

    view! {
        <div class="platform-grid" id="platforms">
            <For
                each=move || state.platforms.get()
                key=|p| p.id.clone()
                children=move |platform| {
                    let id = platform.id.clone();
                    let icon_style = format!(
                        "background-color: {}20; color: {};",
                        platform.color, platform.color
                    );
                    view! {
                        <div class="card platform-card" on:click=move |_| select(id.clone())>
                            <div class="platform-card__body">
                                <div class="platform-icon" style=icon_style>
                                    <i class=platform.icon.clone()></i>
                                </div>
                                <h5 class="platform-card__title">{platform.name.clone()}</h5>
                                <p class="platform-card__subtitle">"성장 서비스"</p>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

fn scroll_to_products() {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(el) = document.get_element_by_id("products") {
            el.scroll_into_view();
        }
    }
}
