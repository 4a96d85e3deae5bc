use contracts::domain::platform::{Platform, PlatformsResponse};
use contracts::domain::product::Product;
use contracts::stats::StoreStats;
use gloo_net::http::Request;

const API_PLATFORMS: &str = "/api/platforms";
const API_PRODUCTS: &str = "/api/products";
const API_STATS: &str = "/api/stats";

/// 플랫폼 목록 조회
pub async fn fetch_platforms() -> Result<Vec<Platform>, String> {
    let response = Request::get(API_PLATFORMS)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: PlatformsResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data.platforms)
}

/// 상품 목록 조회 (플랫폼 필터 선택 사항)
pub async fn fetch_products(platform: Option<&str>) -> Result<Vec<Product>, String> {
    let url = match platform {
        Some(id) => format!("{}?platform={}", API_PRODUCTS, urlencoding::encode(id)),
        None => API_PRODUCTS.to_string(),
    };

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: Vec<Product> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// 통계 카운터 조회
pub async fn fetch_stats() -> Result<StoreStats, String> {
    let response = Request::get(API_STATS)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: StoreStats = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
