//! DTO (Data Transfer Object)
//!
//! - `http`: HTTP status API のレスポンス
//! - `conversion`: Domain Model → DTO の変換

pub mod conversion;
pub mod http;
