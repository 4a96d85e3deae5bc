use serde::{Deserialize, Serialize};

/// `GET /api/stats` — 메인 배너 카운터
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StoreStats {
    pub total_products: i64,
    pub completed_orders: i64,
}
