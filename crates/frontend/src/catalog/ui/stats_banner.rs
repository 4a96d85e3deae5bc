use crate::catalog::state::CatalogState;
use crate::shared::format::format_number;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const ANIMATION_STEPS: i64 = 50;
const STEP_MS: u32 = 30;

/// 히어로 영역 통계 카운터 (상품 수 / 완료된 주문 수)
#[component]
#[allow(non_snake_case)]
pub fn StatsBanner() -> impl IntoView {
    let state = use_context::<CatalogState>().expect("CatalogState not found in context");

    let total_products = Signal::derive(move || state.stats.get().total_products);
    let completed_orders = Signal::derive(move || state.stats.get().completed_orders);

    view! {
        <div class="stats-banner">
            <div class="stat-card">
                <div class="stat-card__icon">{icon("products")}</div>
                <div class="stat-card__content">
                    <div class="stat-card__label">"등록 상품"</div>
                    <div class="stat-card__value">
                        <AnimatedCounter target=total_products />
                    </div>
                </div>
            </div>
            <div class="stat-card">
                <div class="stat-card__icon">{icon("orders")}</div>
                <div class="stat-card__content">
                    <div class="stat-card__label">"완료된 주문"</div>
                    <div class="stat-card__value">
                        <AnimatedCounter target=completed_orders />
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Counts up from zero to `target` in fixed steps.
///
/// Restarting while a run is in flight is resolved by an epoch guard: the
/// last-started animation wins.
#[component]
#[allow(non_snake_case)]
pub fn AnimatedCounter(#[prop(into)] target: Signal<i64>) -> impl IntoView {
    let display = RwSignal::new(0_i64);
    let epoch = RwSignal::new(0_u64);

    Effect::new(move |_| {
        let goal = target.get();
        let run = epoch.get_untracked() + 1;
        epoch.set(run);

        if goal <= 0 {
            display.set(goal.max(0));
            return;
        }

        spawn_local(async move {
            let increment = (goal as f64 / ANIMATION_STEPS as f64).max(1.0);
            let mut current = 0.0;
            loop {
                TimeoutFuture::new(STEP_MS).await;
                if epoch.get_untracked() != run {
                    // A newer animation has started; yield to it.
                    return;
                }
                current += increment;
                if current >= goal as f64 {
                    display.set(goal);
                    return;
                }
                display.set(current as i64);
            }
        });
    });

    view! {
        <span class="counter">{move || format_number(display.get())}</span>
    }
}
