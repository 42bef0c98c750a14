//! 월간 종합 인사이트 합성

use anyhow::Result;
use serde_json::Value;

use crate::insight::extract::extract_json_object;
use crate::llm::LLMClient;
use crate::types::indicators::{fmt_count, fmt_rate};
use crate::types::{CafeFeatureItem, Indicators, MenuTrendItem};

/// 보고서 생성에 쓰는 분석가 페르소나
pub const ANALYST_PERSONA: &str = "당신은 친절하고 신뢰할 수 있는 카페 인사이트 분석가입니다.";

/// 트렌드 블록에 포함할 최대 항목 수
const TOP_ITEMS: usize = 3;

/// 수집된 항목이 없을 때 쓰는 자리표시 문구
const NO_DATA_LINE: &str = "- (수집 없음)";

/// 메뉴 트렌드 요약 블록 생성. 항목당 한 줄, 입력 순서 유지.
pub fn compose_menu_text(menus: &[MenuTrendItem]) -> String {
    let lines: Vec<String> = menus
        .iter()
        .take(TOP_ITEMS)
        .map(|m| {
            format!(
                "- {}: {} (예: {})",
                m.menu,
                m.rationale(),
                m.example_cafe.as_deref().unwrap_or("N/A")
            )
        })
        .collect();
    if lines.is_empty() {
        NO_DATA_LINE.to_string()
    } else {
        lines.join("\n")
    }
}

/// 카페 특징 요약 블록 생성. 형식은 [`compose_menu_text`]와 동일.
pub fn compose_feature_text(features: &[CafeFeatureItem]) -> String {
    let lines: Vec<String> = features
        .iter()
        .take(TOP_ITEMS)
        .map(|f| {
            format!(
                "- {}: {} (예: {})",
                f.feature,
                f.rationale(),
                f.example_cafe.as_deref().unwrap_or("N/A")
            )
        })
        .collect();
    if lines.is_empty() {
        NO_DATA_LINE.to_string()
    } else {
        lines.join("\n")
    }
}

/// 월간 인사이트 프롬프트 조립
///
/// 입력이 같으면 결과도 같은 순수 함수. KPI가 비어 있으면 "N/A" 또는 0.0%로 표기한다.
pub fn build_monthly_prompt(indicators: &Indicators, menu_text: &str, feature_text: &str) -> String {
    let month_label = &indicators.month;
    let kpis = &indicators.kpis;

    format!(
        r#"당신은 카페 경영 인사이트를 제공하는 데이터 분석가입니다.
아래 "지난달 KPI"를 기반으로 사장님께 직접 이야기하듯, 친근하지만 신뢰감 있는 말투로 핵심 결론과 실행 조언을 작성하세요.

**중요:**
- "insights_text" 필드는 사장님께 보고하듯 모든 내용을 하나의 단락 줄글로 작성하세요.
- 불릿포인트, 번호, 줄바꿈 없이 자연스럽게 이어진 문장만 사용하세요.
- KPI 수치, 실행 방법, 트렌드 내용을 모두 포함해 작성하세요.
- 다른 필드(insights, actions, trendNotes)는 기존 형식을 유지하세요.

[지난달 KPI: {month_label}]
- 방문 수(visits): {visits}
- 신규 고객 수(newCustomers): {new_customers}
- 재방문율(revisitRate): {revisit_rate}
- 쿠폰 사용률(couponUseRate): {coupon_use_rate}
- 챌린지 참여 수(challengeJoin): {challenge_join}

[최근 트렌드 요약]
[메뉴]
{menu_text}

[카페 특징]
{feature_text}

요청 형식(JSON 한 개의 객체):
{{
  "type": "monthly_insight",
  "period": "{month_label}",
  "kpis": {{
    "visits": <int>,
    "newCustomers": <int>,
    "revisitRate": <float>,
    "couponUseRate": <float>,
    "challengeJoin": <int>
  }},
  "insights_text": "<사장님에게 드리는 줄글 설명 — 모든 KPI, 인사이트, 실행 항목, 트렌드 내용을 하나로 자연스럽게 이어서 작성.>",
  "insights": [
    {{"title": "핵심 결론 1", "detail": "수치 근거 포함"}},
    {{"title": "핵심 결론 2", "detail": "..."}}
  ],
  "actions": [
    {{"title": "실행 항목 1", "detail": "구체적인 실행 방법"}},
    {{"title": "실행 항목 2", "detail": "..."}}
  ],
  "trendNotes": {{
    "menus": ["참고 포인트 1", "2", "3"],
    "features": ["참고 포인트 1", "2", "3"]
  }}
}}
모든 텍스트는 한국어로 작성하세요."#,
        month_label = month_label,
        visits = fmt_count(kpis.visits),
        new_customers = fmt_count(kpis.new_customers),
        revisit_rate = fmt_rate(kpis.revisit_rate),
        coupon_use_rate = fmt_rate(kpis.coupon_use_rate),
        challenge_join = fmt_count(kpis.challenge_join),
        menu_text = menu_text,
        feature_text = feature_text,
    )
}

/// 지표 + 트렌드로 월간 종합 인사이트 JSON 생성
///
/// 생성 엔드포인트를 정확히 한 번 호출한다. 응답에서 JSON 객체를 추출하지 못해도
/// 오류로 보지 않고 `{"raw": <원문>}`을 돌려준다. 전송/설정 오류는 그대로 전파된다.
pub async fn synthesize_monthly_insight(
    llm: &LLMClient,
    indicators: &Indicators,
    menus: &[MenuTrendItem],
    features: &[CafeFeatureItem],
) -> Result<Value> {
    let menu_text = compose_menu_text(menus);
    let feature_text = compose_feature_text(features);
    let prompt = build_monthly_prompt(indicators, &menu_text, &feature_text);

    let content = llm.prompt(ANALYST_PERSONA, &prompt).await?;
    Ok(extract_json_object(&content))
}
