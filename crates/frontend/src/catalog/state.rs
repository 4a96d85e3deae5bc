use super::api;
use contracts::domain::platform::Platform;
use contracts::domain::product::Product;
use contracts::stats::StoreStats;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Process-wide catalog state, provided once via Leptos context.
///
/// Product loads fully replace the previous set. Overlapping loads resolve
/// last-write-wins: there is no sequencing token or cancellation.
#[derive(Clone, Copy)]
pub struct CatalogState {
    pub platforms: RwSignal<Vec<Platform>>,
    pub products: RwSignal<Vec<Product>>,
    /// `None` = 전체 상품
    pub filter: RwSignal<Option<String>>,
    pub stats: RwSignal<StoreStats>,
    pub products_error: RwSignal<Option<String>>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            platforms: RwSignal::new(Vec::new()),
            products: RwSignal::new(Vec::new()),
            filter: RwSignal::new(None),
            stats: RwSignal::new(StoreStats::default()),
            products_error: RwSignal::new(None),
        }
    }

    /// 플랫폼 로드 — 실패는 콘솔 로그만 남긴다 (사용자에게는 표시하지 않음)
    pub fn load_platforms(self) {
        spawn_local(async move {
            match api::fetch_platforms().await {
                Ok(v) => self.platforms.set(v),
                Err(e) => log::error!("플랫폼 로드 오류: {}", e),
            }
        });
    }

    /// 상품 로드 — 실패 시 사용자에게 오류 메시지를 표시한다
    pub fn load_products(self, filter: Option<String>) {
        self.filter.set(filter.clone());
        spawn_local(async move {
            match api::fetch_products(filter.as_deref()).await {
                Ok(v) => {
                    self.products.set(v);
                    self.products_error.set(None);
                }
                Err(e) => {
                    log::error!("상품 로드 오류: {}", e);
                    self.products_error
                        .set(Some("상품을 불러오는 중 오류가 발생했습니다.".to_string()));
                }
            }
        });
    }

    /// 통계 로드 — 실패는 콘솔 로그만 남긴다
    pub fn load_stats(self) {
        spawn_local(async move {
            match api::fetch_stats().await {
                Ok(v) => self.stats.set(v),
                Err(e) => log::error!("통계 로드 오류: {}", e),
            }
        });
    }

    /// 필터 버튼/플랫폼 카드 클릭 처리: `None`은 "전체"
    pub fn apply_filter(self, platform: Option<String>) {
        self.load_products(platform);
    }
}
