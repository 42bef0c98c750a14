//! 인사이트 생성 파이프라인
//!
//! 지표 조회 -> 트렌드 수집 -> 정규화 -> LLM 합성 -> 출력/저장.
//! 호출 간 공유 상태는 없고, 네트워크 호출은 순차적으로 일어난다.

use anyhow::Result;
use chrono::{Datelike, Utc, Weekday};
use rand::Rng;
use serde_json::{Value, json};

pub mod extract;
pub mod monthly;
pub mod weekly;

use crate::config::Config;
use crate::llm::LLMClient;
use crate::metrics::{get_monthly_indicators, kst, sample_indicators};
use crate::outlet;
use crate::trend::{TrendFetcher, parse_cafe_features, parse_menu_trends};

pub use extract::extract_json_object;
pub use monthly::synthesize_monthly_insight;

/// 일간 잡이 생성할 인사이트 종류
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InsightKind {
    /// 지난주 대비 비교 (일요일)
    WeeklyComparison,
    /// 인기 메뉴 트렌드
    PopularMenus,
    /// 인기 카페 특징
    CafeFeatures,
}

/// 요일 기반 인사이트 종류 선택
///
/// 일요일엔 과거 지표 비교, 그 외에는 트렌드 두 종류 중 무작위.
pub fn choose_insight_kind(weekday: Weekday) -> InsightKind {
    if weekday == Weekday::Sun {
        return InsightKind::WeeklyComparison;
    }
    if rand::rng().random_bool(0.5) {
        InsightKind::PopularMenus
    } else {
        InsightKind::CafeFeatures
    }
}

/// 월간 인사이트 파이프라인 실행
///
/// 설정/전송/응답 구조 오류는 그대로 전파되고, 트렌드 본문 파싱 실패는
/// 빈 트렌드 블록으로 흡수되어 보고서 생성은 계속 진행된다.
pub async fn launch(config: &Config) -> Result<()> {
    let indicators = if config.use_mock {
        sample_indicators()
    } else {
        get_monthly_indicators(config.cafe_id, None)
    };

    let fetcher = TrendFetcher::new(&config.trend)?;
    let llm = LLMClient::new(&config.llm)?;
    if config.verbose {
        llm.check_connection().await?;
    }

    println!("🔄 카페 트렌드 수집 중...");
    let menus_raw = fetcher.fetch_menu_trends().await?;
    let features_raw = fetcher.fetch_cafe_features().await?;

    let menus = parse_menu_trends(menus_raw.into(), None);
    let features = parse_cafe_features(features_raw.into(), None);
    if config.verbose {
        println!(
            "🔍 정규화 결과: 메뉴 {}건, 특징 {}건",
            menus.len(),
            features.len()
        );
    }

    println!("🔄 월간 인사이트 합성 중...");
    let report = synthesize_monthly_insight(&llm, &indicators, &menus, &features).await?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    let path = outlet::save_report(&config.output_path, config.cafe_id, &indicators.month, &report)?;
    println!("✅ 보고서 저장 완료: {}", path.display());

    Ok(())
}

/// 일간 인사이트 생성 (요일 규칙에 따라 종류 선택)
pub async fn generate_daily_insight(config: &Config) -> Result<Value> {
    let today = Utc::now().with_timezone(&kst());
    let kind = choose_insight_kind(today.weekday());

    match kind {
        InsightKind::WeeklyComparison => {
            let llm = LLMClient::new(&config.llm)?;
            let indicators = weekly::sample_weekly_indicators();
            weekly::get_weekly_comparison_insight(&llm, &indicators).await
        }
        InsightKind::PopularMenus => {
            let fetcher = TrendFetcher::new(&config.trend)?;
            let content = fetcher.fetch_menu_trends().await?;
            Ok(json!({ "type": "popular_menus", "content": content }))
        }
        InsightKind::CafeFeatures => {
            let fetcher = TrendFetcher::new(&config.trend)?;
            let content = fetcher.fetch_cafe_features().await?;
            Ok(json!({ "type": "cafe_features", "content": content }))
        }
    }
}
