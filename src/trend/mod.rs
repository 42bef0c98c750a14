//! 외부 트렌드 수집과 응답 정규화

pub mod fetcher;
pub mod normalize;
pub mod prompts;

pub use fetcher::{TrendError, TrendFetcher};
pub use normalize::{TrendPayload, parse_cafe_features, parse_menu_trends};
