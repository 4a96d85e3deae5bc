use crate::catalog::state::CatalogState;
use crate::catalog::ui::{PlatformFilterBar, PlatformGrid, ProductGrid, StatsBanner};
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the catalog store and modal service to the whole app via context.
    let catalog = CatalogState::new();
    provide_context(catalog);
    provide_context(ModalStackService::new());

    // Initial loads: platforms, unfiltered products, stats.
    catalog.load_platforms();
    catalog.load_products(None);
    catalog.load_stats();

    view! {
        <main class="storefront">
            <section class="hero">
                <h1 class="hero__title">"SNS 성장 서비스"</h1>
                <p class="hero__subtitle">"플랫폼별 맞춤 성장 서비스를 주문하세요"</p>
                <StatsBanner />
            </section>

            <section class="section">
                <h2 class="section__title">"플랫폼"</h2>
                <PlatformGrid />
            </section>

            <section class="section">
                <h2 class="section__title">"상품"</h2>
                <PlatformFilterBar />
                <ProductGrid />
            </section>

            <ModalHost />
        </main>
    }
}
