//! 온디맨드 인사이트 HTTP 서비스
//!
//! 응답은 항상 정형 JSON 봉투다. 처리 중 오류가 나면 500과
//! `{ok:false, error}`를 돌려주고 비정형 실패는 내보내지 않는다.

use anyhow::Result;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::config::Config;
use crate::insight::synthesize_monthly_insight;
use crate::llm::LLMClient;
use crate::metrics::{get_monthly_indicators, sample_indicators};
use crate::trend::{TrendFetcher, parse_cafe_features, parse_menu_trends};

/// 핸들러 공유 상태. 설정은 불변이라 잠금이 필요 없다.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// `/insight` 질의 파라미터
#[derive(Debug, Deserialize)]
pub struct InsightQuery {
    #[serde(rename = "cafeId")]
    pub cafe_id: u32,

    /// 지표를 목데이터로 사용할지 (기본 true)
    #[serde(default = "default_use_mock")]
    pub use_mock: bool,

    /// 원시 응답 일부 포함 여부
    #[serde(default)]
    pub include_debug: bool,
}

fn default_use_mock() -> bool {
    true
}

/// 라우터 구성
pub fn build_router(config: Arc<Config>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/insight", get(get_insight))
        .with_state(AppState { config })
}

/// 서비스 기동
pub async fn serve(config: Config) -> Result<()> {
    let addr = config.serve_addr.clone();
    let app = build_router(Arc::new(config));

    println!("🚀 인사이트 API 기동: http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<Value> {
    Json(json!({ "ok": true, "message": "healthy" }))
}

async fn get_insight(
    State(state): State<AppState>,
    Query(query): Query<InsightQuery>,
) -> (StatusCode, Json<Value>) {
    match run_insight(&state.config, &query).await {
        Ok(payload) => (StatusCode::OK, Json(payload)),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "ok": false, "error": e.to_string() })),
        ),
    }
}

/// 인사이트 생성 한 사이클: 지표 -> 트렌드 수집 -> 정규화 -> 합성
async fn run_insight(config: &Config, query: &InsightQuery) -> Result<Value> {
    let indicators = if query.use_mock {
        sample_indicators()
    } else {
        get_monthly_indicators(query.cafe_id, None)
    };

    let fetcher = TrendFetcher::new(&config.trend)?;
    let llm = LLMClient::new(&config.llm)?;

    let menus_raw = fetcher.fetch_menu_trends().await?;
    let features_raw = fetcher.fetch_cafe_features().await?;

    let menus = parse_menu_trends(menus_raw.as_str().into(), None);
    let features = parse_cafe_features(features_raw.as_str().into(), None);

    let report = synthesize_monthly_insight(&llm, &indicators, &menus, &features).await?;

    let mut payload = json!({
        "ok": true,
        "cafeId": query.cafe_id,
        "report": report,
    });

    if query.include_debug {
        payload["debug"] = json!({
            "menus_raw_head": head(&menus_raw, 500),
            "features_raw_head": head(&features_raw, 500),
            "menus_parsed_len": menus.len(),
            "features_parsed_len": features.len(),
        });
    }

    Ok(payload)
}

/// 문자 단위 앞부분 절단. 한글 경계에서 바이트 절단이 일어나지 않게 한다.
fn head(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
