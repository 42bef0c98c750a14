//! 트렌드 항목 타입 정의

use serde::{Deserialize, Serialize};

/// 인기 메뉴 트렌드 항목
///
/// Perplexity 검색 결과에서 수집되며, `menu`만 필수이고 나머지는 없을 수 있다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuTrendItem {
    /// 메뉴 이름 (필수)
    pub menu: String,

    /// 인기 이유
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why_popular: Option<String>,

    /// 부가 설명
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// 해당 메뉴를 제공하는 예시 카페
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_cafe: Option<String>,
}

/// 인기 카페 특징 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CafeFeatureItem {
    /// 특징 이름 (필수)
    pub feature: String,

    /// 효과적인 이유
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why_effective: Option<String>,

    /// 부가 설명
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// 해당 특징을 갖춘 예시 카페
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_cafe: Option<String>,
}

impl MenuTrendItem {
    /// 요약 한 줄에 쓸 근거 텍스트. 비어 있지 않은 whyPopular가 우선, 다음이 description.
    pub fn rationale(&self) -> &str {
        non_empty(self.why_popular.as_deref())
            .or_else(|| non_empty(self.description.as_deref()))
            .unwrap_or("")
    }
}

impl CafeFeatureItem {
    /// 요약 한 줄에 쓸 근거 텍스트. 비어 있지 않은 whyEffective가 우선, 다음이 description.
    pub fn rationale(&self) -> &str {
        non_empty(self.why_effective.as_deref())
            .or_else(|| non_empty(self.description.as_deref()))
            .unwrap_or("")
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|s| !s.is_empty())
}
