//! 수량 구간별 할인 가격 계산
//!
//! The discount schedule is the storefront's one piece of business logic that
//! must stay bit-for-bit stable: tiers are inclusive lower bounds, evaluated
//! highest first, and the total is rounded half-up to the whole won.

use crate::domain::product::Product;

/// One discount tier: orders of at least `min_quantity` get `rate` off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountTier {
    pub min_quantity: u32,
    pub rate: f64,
}

/// 할인 구간표 (내림차순)
pub const DISCOUNT_TIERS: [DiscountTier; 3] = [
    DiscountTier {
        min_quantity: 10_000,
        rate: 0.20,
    },
    DiscountTier {
        min_quantity: 5_000,
        rate: 0.15,
    },
    DiscountTier {
        min_quantity: 1_000,
        rate: 0.10,
    },
];

/// 수량에 따른 할인율 (0.0 / 0.10 / 0.15 / 0.20)
pub fn discount_rate(quantity: u32) -> f64 {
    DISCOUNT_TIERS
        .iter()
        .find(|tier| quantity >= tier.min_quantity)
        .map(|tier| tier.rate)
        .unwrap_or(0.0)
}

/// 계산된 주문 금액
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub quantity: u32,
    pub discount_rate: f64,
    /// 할인 적용 후 개당 가격
    pub unit_price: f64,
    /// 총액 (원 단위 반올림)
    pub total: i64,
}

impl Quote {
    /// Zero quote, displayed as `₩0` when no product/quantity is selected.
    pub fn zero() -> Self {
        Self {
            quantity: 0,
            discount_rate: 0.0,
            unit_price: 0.0,
            total: 0,
        }
    }

    pub fn has_discount(&self) -> bool {
        self.discount_rate > 0.0
    }

    /// 할인율 (%) — 표시용 ("10% 할인 적용")
    pub fn discount_percent(&self) -> u32 {
        (self.discount_rate * 100.0).round() as u32
    }
}

/// 총 가격 계산
///
/// `quantity == 0` yields `Quote::zero()`; otherwise
/// `unit = base_price × (1 − rate)` and `total = round(unit × quantity)`.
pub fn quote(product: &Product, quantity: u32) -> Quote {
    if quantity == 0 {
        return Quote::zero();
    }

    let rate = discount_rate(quantity);
    let unit_price = product.base_price * (1.0 - rate);
    let total = (unit_price * quantity as f64).round() as i64;

    Quote {
        quantity,
        discount_rate: rate,
        unit_price,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(base_price: f64) -> Product {
        Product {
            id: 1,
            name: "테스트 상품".to_string(),
            platform: "instagram".to_string(),
            service_type: None,
            description: None,
            delivery_time: None,
            min_quantity: 100,
            max_quantity: 100_000,
            base_price,
        }
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(discount_rate(0), 0.0);
        assert_eq!(discount_rate(999), 0.0);
        assert_eq!(discount_rate(1_000), 0.10);
        assert_eq!(discount_rate(4_999), 0.10);
        assert_eq!(discount_rate(5_000), 0.15);
        assert_eq!(discount_rate(9_999), 0.15);
        assert_eq!(discount_rate(10_000), 0.20);
        assert_eq!(discount_rate(1_000_000), 0.20);
    }

    #[test]
    fn test_rate_is_monotonic() {
        let mut prev = 0.0;
        for q in (0..20_000).step_by(100) {
            let rate = discount_rate(q);
            assert!(rate >= prev, "rate dropped at quantity {q}");
            prev = rate;
        }
    }

    #[test]
    fn test_quote_1000_at_1000() {
        let q = quote(&product(1000.0), 1_000);
        assert_eq!(q.unit_price, 900.0);
        assert_eq!(q.total, 900_000);
        assert_eq!(q.discount_percent(), 10);
    }

    #[test]
    fn test_quote_1000_at_10000() {
        let q = quote(&product(1000.0), 10_000);
        assert_eq!(q.unit_price, 800.0);
        assert_eq!(q.total, 8_000_000);
        assert_eq!(q.discount_percent(), 20);
    }

    #[test]
    fn test_quote_no_discount_below_1000() {
        let q = quote(&product(50.0), 999);
        assert_eq!(q.unit_price, 50.0);
        assert_eq!(q.total, 49_950);
        assert!(!q.has_discount());
    }

    #[test]
    fn test_quote_zero_quantity() {
        let q = quote(&product(1000.0), 0);
        assert_eq!(q, Quote::zero());
        assert_eq!(q.total, 0);
    }

    #[test]
    fn test_total_rounds_half_up() {
        // 10.5 * 0.9 = 9.45/unit; 9.45 * 101 = 954.45 → 954
        let q = quote(&product(10.5), 1_001);
        assert_eq!(q.total, (10.5 * 0.9 * 1_001.0_f64).round() as i64);
    }
}
