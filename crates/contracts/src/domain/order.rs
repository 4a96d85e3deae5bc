use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 주문 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
    Refunded,
}

/// 주문 생성 요청 (`POST /api/orders` body)
///
/// Built fresh per submission attempt; never persisted client-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderDraft {
    pub product_id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub target_url: String,
    pub quantity: u32,
    pub notes: String,
}

impl OrderDraft {
    /// 주문 데이터 검증 (네트워크 호출 전에 수행)
    pub fn validate(&self) -> Result<(), String> {
        if self.customer_name.trim().is_empty() {
            return Err("이름을 입력해주세요".into());
        }
        if !is_email_shaped(&self.customer_email) {
            return Err("올바른 이메일 주소를 입력해주세요".into());
        }
        if self.target_url.trim().is_empty() {
            return Err("대상 URL을 입력해주세요".into());
        }
        if !self.target_url.starts_with("http://") && !self.target_url.starts_with("https://") {
            return Err("URL은 http:// 또는 https://로 시작해야 합니다".into());
        }
        if self.quantity < 1 {
            return Err("수량은 1 이상이어야 합니다".into());
        }
        Ok(())
    }
}

/// Minimal email shape check: non-empty local part, a domain with a dot.
fn is_email_shaped(s: &str) -> bool {
    let s = s.trim();
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// 생성된 주문 (`POST /api/orders` response)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub product_id: i64,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
    pub status: OrderStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> OrderDraft {
        OrderDraft {
            product_id: 1,
            customer_name: "홍길동".to_string(),
            customer_email: "hong@example.com".to_string(),
            target_url: "https://instagram.com/hong".to_string(),
            quantity: 100,
            notes: String::new(),
        }
    }

    #[test]
    fn test_valid_draft() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_missing_name_rejected() {
        let mut d = draft();
        d.customer_name = "  ".to_string();
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_email_shape() {
        for bad in ["", "hong", "hong@", "@example.com", "hong@example"] {
            let mut d = draft();
            d.customer_email = bad.to_string();
            assert!(d.validate().is_err(), "accepted bad email {bad:?}");
        }
    }

    #[test]
    fn test_url_scheme_required() {
        let mut d = draft();
        d.target_url = "instagram.com/hong".to_string();
        assert!(d.validate().is_err());
        d.target_url = "http://instagram.com/hong".to_string();
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut d = draft();
        d.quantity = 0;
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_order_status_wire_format() {
        let order: Order = serde_json::from_str(
            r#"{"id":42,"product_id":1,"quantity":100,"unit_price":50.0,
                "total_price":5000.0,"status":"pending"}"#,
        )
        .unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.created_at, None);
    }
}
