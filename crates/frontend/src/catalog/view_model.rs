//! Pure view models for the catalog: state in, render-ready data out.
//!
//! No DOM access here, so everything is testable on the host.

use crate::shared::format::{format_number, format_price};
use contracts::domain::platform::Platform;
use contracts::domain::product::Product;

/// Icon/color used when a product references a platform the platform list
/// does not contain.
pub const FALLBACK_ICON: &str = "fas fa-star";
pub const FALLBACK_COLOR: &str = "#666";

const DEFAULT_DESCRIPTION: &str = "고품질 서비스 제공";
const DEFAULT_DELIVERY: &str = "1-3일";

/// 상품 카드 표시 데이터
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: i64,
    pub name: String,
    pub platform_name: String,
    pub icon: String,
    pub color: String,
    pub description: String,
    pub delivery_time: String,
    pub min_quantity_text: String,
    pub max_quantity_text: String,
    pub price_text: String,
    pub show_discount_badge: bool,
}

/// 상품 + 플랫폼 목록 → 카드 데이터
pub fn product_card(product: &Product, platforms: &[Platform]) -> ProductCard {
    let platform = platforms.iter().find(|p| p.id == product.platform);

    ProductCard {
        id: product.id,
        name: product.name.clone(),
        platform_name: platform
            .map(|p| p.name.clone())
            .unwrap_or_else(|| product.platform.clone()),
        icon: platform
            .map(|p| p.icon.clone())
            .unwrap_or_else(|| FALLBACK_ICON.to_string()),
        color: platform
            .map(|p| p.color.clone())
            .unwrap_or_else(|| FALLBACK_COLOR.to_string()),
        description: product
            .description
            .clone()
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        delivery_time: product
            .delivery_time
            .clone()
            .unwrap_or_else(|| DEFAULT_DELIVERY.to_string()),
        min_quantity_text: format!("{}개", format_number(product.min_quantity as i64)),
        max_quantity_text: format!("{}개", format_number(product.max_quantity as i64)),
        price_text: format!("₩{}", format_price(product.base_price)),
        show_discount_badge: product.bulk_discount_eligible(),
    }
}

/// 상품 목록 전체 → 카드 목록 (빈 목록은 빈 카드 목록)
pub fn product_cards(products: &[Product], platforms: &[Platform]) -> Vec<ProductCard> {
    products
        .iter()
        .map(|p| product_card(p, platforms))
        .collect()
}

/// 플랫폼 필터 버튼
#[derive(Debug, Clone, PartialEq)]
pub struct FilterButton {
    /// `None` = "전체" 버튼
    pub platform_id: Option<String>,
    pub label: String,
    pub icon: Option<String>,
    pub active: bool,
}

/// 필터 버튼 목록 — "전체"가 항상 앞에 오고, 정확히 하나만 active
pub fn filter_buttons(platforms: &[Platform], filter: Option<&str>) -> Vec<FilterButton> {
    let mut buttons = Vec::with_capacity(platforms.len() + 1);

    buttons.push(FilterButton {
        platform_id: None,
        label: "전체".to_string(),
        icon: None,
        active: filter.is_none(),
    });

    for p in platforms {
        buttons.push(FilterButton {
            platform_id: Some(p.id.clone()),
            label: p.name.clone(),
            icon: Some(p.icon.clone()),
            active: filter == Some(p.id.as_str()),
        });
    }

    buttons
}
