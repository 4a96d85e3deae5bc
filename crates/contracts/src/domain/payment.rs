use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 결제 수단
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Kakaopay,
    Naverpay,
    BankTransfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Card,
        PaymentMethod::Kakaopay,
        PaymentMethod::Naverpay,
        PaymentMethod::BankTransfer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Kakaopay => "kakaopay",
            PaymentMethod::Naverpay => "naverpay",
            PaymentMethod::BankTransfer => "bank_transfer",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == s)
    }

    /// 화면 표시용 한글 라벨
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "신용카드",
            PaymentMethod::Kakaopay => "카카오페이",
            PaymentMethod::Naverpay => "네이버페이",
            PaymentMethod::BankTransfer => "무통장입금",
        }
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Card
    }
}

/// 결제 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Approved,
    Failed,
    Refunded,
}

/// 결제 생성 요청 (`POST /api/payments` body)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentDraft {
    pub order_id: i64,
    pub method: PaymentMethod,
}

/// 생성된 결제 (`POST /api/payments` response)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub order_id: i64,
    pub method: PaymentMethod,
    pub amount: f64,
    pub status: PaymentStatus,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_wire_format() {
        let json = serde_json::to_string(&PaymentDraft {
            order_id: 7,
            method: PaymentMethod::Kakaopay,
        })
        .unwrap();
        assert_eq!(json, r#"{"order_id":7,"method":"kakaopay"}"#);
    }

    #[test]
    fn test_method_round_trip() {
        for m in PaymentMethod::ALL {
            assert_eq!(PaymentMethod::from_str(m.as_str()), Some(m));
        }
        assert_eq!(PaymentMethod::from_str("bitcoin"), None);
    }
}
