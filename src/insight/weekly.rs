//! 주간 비교 인사이트 (일요일 변형)

use anyhow::Result;
use serde_json::{Value, json};

use crate::insight::monthly::ANALYST_PERSONA;
use crate::llm::LLMClient;
use crate::types::Kpis;
use crate::types::indicators::{fmt_count, fmt_rate};

/// 이번 주 / 지난주 지표 쌍
#[derive(Debug, Clone)]
pub struct WeeklyIndicators {
    pub this_week: Kpis,
    pub last_week: Kpis,
}

/// 샘플 주간 지표 (목데이터)
///
/// TODO: 분석 웨어하우스 질의로 교체.
pub fn sample_weekly_indicators() -> WeeklyIndicators {
    WeeklyIndicators {
        this_week: Kpis {
            visits: Some(340),
            new_customers: Some(50),
            revisit_rate: Some(0.32),
            ..Default::default()
        },
        last_week: Kpis {
            visits: Some(280),
            new_customers: Some(60),
            revisit_rate: Some(0.28),
            ..Default::default()
        },
    }
}

/// 주간 비교 프롬프트 조립
pub fn build_weekly_prompt(indicators: &WeeklyIndicators) -> String {
    format!(
        r#"당신은 카페 데이터를 분석하여 인사이트를 생성하는 데이터 분석가입니다.

다음은 지난주와 이번 주의 카페 지표입니다:

지난주:
- 방문 수: {lw_visits}
- 신규 고객 수: {lw_new}
- 재방문율: {lw_rate}

이번 주:
- 방문 수: {tw_visits}
- 신규 고객 수: {tw_new}
- 재방문율: {tw_rate}

이 데이터를 바탕으로 두 주를 비교하는 인사이트를 줄글로 작성해주세요.
모든 응답은 한국어로 작성해주세요."#,
        lw_visits = fmt_count(indicators.last_week.visits),
        lw_new = fmt_count(indicators.last_week.new_customers),
        lw_rate = fmt_rate(indicators.last_week.revisit_rate),
        tw_visits = fmt_count(indicators.this_week.visits),
        tw_new = fmt_count(indicators.this_week.new_customers),
        tw_rate = fmt_rate(indicators.this_week.revisit_rate),
    )
}

/// 주간 비교 인사이트 생성. 생성 호출은 한 번.
pub async fn get_weekly_comparison_insight(
    llm: &LLMClient,
    indicators: &WeeklyIndicators,
) -> Result<Value> {
    let prompt = build_weekly_prompt(indicators);
    let content = llm.prompt(ANALYST_PERSONA, &prompt).await?;

    Ok(json!({
        "type": "weekly_comparison",
        "content": content,
    }))
}
