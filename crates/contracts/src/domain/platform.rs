use serde::{Deserialize, Serialize};

/// 지원 플랫폼 (인스타그램, 유튜브, 스레드 등)
///
/// Loaded once at startup from `GET /api/platforms` and read-only afterwards.
/// `icon` is a CSS icon class token, `color` a hex string like `#E1306C`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

/// `GET /api/platforms` response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformsResponse {
    pub platforms: Vec<Platform>,
}
