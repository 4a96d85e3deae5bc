use crate::catalog::state::CatalogState;
use crate::catalog::view_model::filter_buttons;
use leptos::prelude::*;

/// 플랫폼 필터 버튼 바 — "전체" 버튼 + 플랫폼별 토글 버튼
#[component]
#[allow(non_snake_case)]
pub fn PlatformFilterBar() -> impl IntoView {
    let state = use_context::<CatalogState>().expect("CatalogState not found in context");

    let buttons = move || {
        let platforms = state.platforms.get();
        let filter = state.filter.get();
        filter_buttons(&platforms, filter.as_deref())
    };

    view! {
        <div class="filter-bar" id="platformFilter">
            <For
                each=buttons
                key=|b| b.platform_id.clone()
                children=move |button| {
                    let target = button.platform_id.clone();
                    let icon = button.icon.clone();
                    view! {
                        <button
                            type="button"
                            class="button button--outline"
                            class:active=button.active
                            on:click=move |_| state.apply_filter(target.clone())
                        >
                            {icon.map(|cls| view! { <i class=cls></i> })}
                            " "
                            {button.label.clone()}
                        </button>
                    }
                }
            />
        </div>
    }
}
