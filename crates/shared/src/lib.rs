//! # Contentgate 共有ユーティリティ
//!
//! このクレートは、ゲートウェイの各クレートから使用される
//! 共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のクレート（infra, gateway）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - 外部クレートへの依存は最小限に抑える（observability は feature で分離）

pub mod api_response;
pub mod error_response;
pub mod health;
pub mod observability;

pub use api_response::ApiResponse;
pub use error_response::ErrorResponse;
pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
