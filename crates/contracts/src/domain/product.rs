use serde::{Deserialize, Serialize};

/// 성장 서비스 상품
///
/// `platform` is a foreign key into the platform list; the renderer falls
/// back to a default icon/color when it does not resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub platform: String,
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub delivery_time: Option<String>,
    pub min_quantity: u32,
    pub max_quantity: u32,
    /// 기본 단가 (원)
    pub base_price: f64,
}

impl Product {
    /// Quantity bounds check: `[min_quantity, max_quantity]`, inclusive.
    pub fn quantity_in_range(&self, quantity: u32) -> bool {
        quantity >= self.min_quantity && quantity <= self.max_quantity
    }

    /// Products sold in bulk carry the "대량 구매 할인" badge.
    pub fn bulk_discount_eligible(&self) -> bool {
        self.min_quantity >= 1000
    }

    /// 데이터 검증
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("상품명은 비어 있을 수 없습니다".into());
        }
        if self.min_quantity < 1 {
            return Err("최소 수량은 1 이상이어야 합니다".into());
        }
        if self.max_quantity < self.min_quantity {
            return Err("최대 수량은 최소 수량 이상이어야 합니다".into());
        }
        if self.base_price < 0.0 {
            return Err("단가는 음수일 수 없습니다".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: 1,
            name: "인스타그램 팔로워".to_string(),
            platform: "instagram".to_string(),
            service_type: Some("instagram_followers".to_string()),
            description: None,
            delivery_time: Some("1-3일".to_string()),
            min_quantity: 100,
            max_quantity: 100_000,
            base_price: 50.0,
        }
    }

    #[test]
    fn test_quantity_in_range() {
        let p = sample();
        assert!(p.quantity_in_range(100));
        assert!(p.quantity_in_range(100_000));
        assert!(!p.quantity_in_range(99));
        assert!(!p.quantity_in_range(100_001));
    }

    #[test]
    fn test_bulk_discount_eligible() {
        let mut p = sample();
        assert!(!p.bulk_discount_eligible());
        p.min_quantity = 1000;
        assert!(p.bulk_discount_eligible());
    }

    #[test]
    fn test_validate() {
        assert!(sample().validate().is_ok());

        let mut p = sample();
        p.min_quantity = 0;
        assert!(p.validate().is_err());

        let mut p = sample();
        p.max_quantity = 50;
        assert!(p.validate().is_err());

        let mut p = sample();
        p.base_price = -1.0;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_deserialize_api_sample() {
        // Optional fields may be missing entirely in the API payload.
        let json = r#"{
            "id": 7,
            "name": "유튜브 구독자",
            "platform": "youtube",
            "min_quantity": 50,
            "max_quantity": 10000,
            "base_price": 120.5
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, 7);
        assert_eq!(p.description, None);
        assert_eq!(p.delivery_time, None);
        assert!(p.validate().is_ok());
    }
}
