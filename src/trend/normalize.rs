//! 트렌드 응답 정규화 - Perplexity 원문을 타입화된 트렌드 항목 리스트로 변환
//!
//! 검색형 LLM이 돌려주는 본문은 JSON 배열일 수도, 마크다운에 감싸진 배열일 수도,
//! 잘린 JSON이나 그냥 산문일 수도 있다. 이 모듈은 어떤 입력이 와도 실패하지 않고
//! 최악의 경우 빈 리스트를 돌려준다. 보고서 합성 단계가 항상 진행될 수 있어야 하기 때문.

use serde_json::{Map, Value};

use crate::types::{CafeFeatureItem, MenuTrendItem};

/// 정규화가 받아들이는 세 가지 입력 형태
///
/// 문자열(원문), 느슨한 레코드 리스트, 이미 타입화된 항목 리스트.
#[derive(Debug, Clone)]
pub enum TrendPayload {
    /// JSON 배열이 들어있을 것으로 기대되는 원문 텍스트
    Text(String),
    /// 혼합 항목 리스트. 객체 형태만 살아남고 나머지는 버린다.
    Records(Vec<Value>),
    /// 이미 파싱된 메뉴 트렌드 리스트
    Menus(Vec<MenuTrendItem>),
    /// 이미 파싱된 카페 특징 리스트
    Features(Vec<CafeFeatureItem>),
}

impl From<String> for TrendPayload {
    fn from(text: String) -> Self {
        TrendPayload::Text(text)
    }
}

impl From<&str> for TrendPayload {
    fn from(text: &str) -> Self {
        TrendPayload::Text(text.to_string())
    }
}

/// 원문 텍스트를 JSON 객체 배열로 최대한 복구해서 파싱
///
/// 1. 전체를 JSON 배열로 엄격 파싱
/// 2. 실패 시 첫 `[` ~ 마지막 `]` 부분 문자열로 재시도 (마크다운 펜스, 앞뒤 산문 제거)
/// 3. 그래도 실패하면 단일 JSON 객체로 파싱해 한 개짜리 배열로 래핑
/// 4. 전부 실패하면 빈 배열
pub fn coerce_json_array(text: &str) -> Vec<Map<String, Value>> {
    if let Some(records) = parse_object_array(text) {
        return records;
    }

    if let (Some(start), Some(end)) = (text.find('['), text.rfind(']'))
        && start < end
        && let Some(records) = parse_object_array(&text[start..=end])
    {
        return records;
    }

    if let Ok(Value::Object(obj)) = serde_json::from_str::<Value>(text) {
        return vec![obj];
    }

    Vec::new()
}

/// JSON 배열 파싱 후 객체 원소만 남긴다. 배열이 아니면 None.
fn parse_object_array(text: &str) -> Option<Vec<Map<String, Value>>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => Some(keep_objects(items)),
        _ => None,
    }
}

/// 혼합 리스트에서 객체 형태만 입력 순서대로 남긴다.
fn keep_objects(items: Vec<Value>) -> Vec<Map<String, Value>> {
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(obj) => Some(obj),
            _ => None,
        })
        .collect()
}

/// 메뉴 항목 키 호환 처리
///
/// Perplexity가 키를 살짝 다르게 줄 때가 있다.
/// - `example` -> `exampleCafe`
///
/// 정식 키가 이미 있으면 그대로 둔다 (재적용해도 결과가 같다).
fn map_menu_keys(obj: &mut Map<String, Value>) {
    if !obj.contains_key("exampleCafe")
        && let Some(example) = obj.get("example").cloned()
    {
        obj.insert("exampleCafe".to_string(), example);
    }
}

/// 카페 특징 항목 키 호환 처리
///
/// - `example` -> `exampleCafe`
/// - `whyPopular` -> `whyEffective`
fn map_feature_keys(obj: &mut Map<String, Value>) {
    if !obj.contains_key("exampleCafe")
        && let Some(example) = obj.get("example").cloned()
    {
        obj.insert("exampleCafe".to_string(), example);
    }
    if !obj.contains_key("whyEffective")
        && let Some(why) = obj.get("whyPopular").cloned()
    {
        obj.insert("whyEffective".to_string(), why);
    }
}

/// payload를 느슨한 레코드 배열로 환원
fn ensure_record_array(payload: TrendPayload) -> Vec<Map<String, Value>> {
    match payload {
        TrendPayload::Text(text) => coerce_json_array(&text),
        TrendPayload::Records(items) => keep_objects(items),
        // 반대 종류의 타입화 리스트가 들어오면 레코드로 풀어서 재검증한다.
        TrendPayload::Menus(items) => typed_to_records(&items),
        TrendPayload::Features(items) => typed_to_records(&items),
    }
}

fn typed_to_records<T: serde::Serialize>(items: &[T]) -> Vec<Map<String, Value>> {
    items
        .iter()
        .filter_map(|item| match serde_json::to_value(item) {
            Ok(Value::Object(obj)) => Some(obj),
            _ => None,
        })
        .collect()
}

fn truncate<T>(mut items: Vec<T>, max_items: Option<usize>) -> Vec<T> {
    if let Some(max) = max_items {
        items.truncate(max);
    }
    items
}

/// 메뉴 트렌드 payload를 `Vec<MenuTrendItem>`로 정규화
///
/// 필수 필드(`menu`)가 없거나 타입이 맞지 않는 레코드는 조용히 버리고
/// 나머지 레코드는 입력 순서 그대로 살린다. 어떤 입력에도 실패하지 않는다.
pub fn parse_menu_trends(payload: TrendPayload, max_items: Option<usize>) -> Vec<MenuTrendItem> {
    let payload = match payload {
        TrendPayload::Menus(items) => return truncate(items, max_items),
        other => other,
    };

    let items = ensure_record_array(payload)
        .into_iter()
        .filter_map(|mut obj| {
            map_menu_keys(&mut obj);
            serde_json::from_value::<MenuTrendItem>(Value::Object(obj)).ok()
        })
        .collect();

    truncate(items, max_items)
}

/// 카페 특징 payload를 `Vec<CafeFeatureItem>`로 정규화
///
/// 계약은 [`parse_menu_trends`]와 동일. 필수 필드는 `feature`.
pub fn parse_cafe_features(
    payload: TrendPayload,
    max_items: Option<usize>,
) -> Vec<CafeFeatureItem> {
    let payload = match payload {
        TrendPayload::Features(items) => return truncate(items, max_items),
        other => other,
    };

    let items = ensure_record_array(payload)
        .into_iter()
        .filter_map(|mut obj| {
            map_feature_keys(&mut obj);
            serde_json::from_value::<CafeFeatureItem>(Value::Object(obj)).ok()
        })
        .collect();

    truncate(items, max_items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_well_formed_array() {
        let raw = r#"[
            {"menu": "흑임자 라떼", "whyPopular": "고소한 맛", "exampleCafe": "카페A"},
            {"menu": "말차 크로플", "description": "바삭한 식감"}
        ]"#;
        let items = parse_menu_trends(raw.into(), None);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].menu, "흑임자 라떼");
        assert_eq!(items[1].menu, "말차 크로플");
        assert_eq!(items[1].description.as_deref(), Some("바삭한 식감"));
    }

    #[test]
    fn test_parse_array_wrapped_in_markdown() {
        let raw = "최근 트렌드는 다음과 같습니다.\n```json\n[{\"menu\": \"아인슈페너\"}]\n```\n참고하세요.";
        let items = parse_menu_trends(raw.into(), None);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].menu, "아인슈페너");
    }

    #[test]
    fn test_parse_bare_object_wraps_to_single_item() {
        let raw = r#"{"feature": "좌석 콘센트", "whyEffective": "카공족 수요"}"#;
        let items = parse_cafe_features(raw.into(), None);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].feature, "좌석 콘센트");
    }

    #[test]
    fn test_malformed_text_returns_empty() {
        for raw in [
            "지난달 카페 트렌드를 정리해 드릴게요.",
            "[{\"menu\": \"잘린 JSON",
            "",
            "[]",
        ] {
            assert!(parse_menu_trends(raw.into(), None).is_empty(), "raw={raw:?}");
        }
    }

    #[test]
    fn test_invalid_records_dropped_without_aborting() {
        let raw = r#"[
            {"menu": "흑임자 라떼"},
            {"whyPopular": "menu 키가 없음"},
            {"menu": 123},
            {"menu": "아인슈페너"}
        ]"#;
        let items = parse_menu_trends(raw.into(), None);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].menu, "흑임자 라떼");
        assert_eq!(items[1].menu, "아인슈페너");
    }

    #[test]
    fn test_synonym_keys_remapped() {
        let raw = r#"[{"menu": "말차 라떼", "example": "카페B"}]"#;
        let items = parse_menu_trends(raw.into(), None);
        assert_eq!(items[0].example_cafe.as_deref(), Some("카페B"));

        let raw = r#"[{"feature": "루프탑", "whyPopular": "사진 명소", "example": "카페C"}]"#;
        let features = parse_cafe_features(raw.into(), None);
        assert_eq!(features[0].why_effective.as_deref(), Some("사진 명소"));
        assert_eq!(features[0].example_cafe.as_deref(), Some("카페C"));
    }

    #[test]
    fn test_canonical_key_wins_over_synonym() {
        let raw = r#"[{"menu": "말차 라떼", "example": "카페B", "exampleCafe": "카페A"}]"#;
        let items = parse_menu_trends(raw.into(), None);
        assert_eq!(items[0].example_cafe.as_deref(), Some("카페A"));
    }

    #[test]
    fn test_synonym_mapping_idempotent() {
        let mut obj = json!({"menu": "라떼", "example": "카페B"})
            .as_object()
            .cloned()
            .unwrap();
        super::map_menu_keys(&mut obj);
        let once = obj.clone();
        super::map_menu_keys(&mut obj);
        assert_eq!(obj, once);
        assert_eq!(obj["exampleCafe"], json!("카페B"));
    }

    #[test]
    fn test_records_payload_keeps_only_objects() {
        let payload = TrendPayload::Records(vec![
            json!({"menu": "라떼"}),
            json!("문자열 항목"),
            json!(42),
            json!({"menu": "모카"}),
        ]);
        let items = parse_menu_trends(payload, None);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].menu, "라떼");
        assert_eq!(items[1].menu, "모카");
    }

    #[test]
    fn test_typed_payload_passes_through_with_truncation() {
        let typed = vec![
            MenuTrendItem {
                menu: "라떼".to_string(),
                why_popular: None,
                description: None,
                example_cafe: None,
            },
            MenuTrendItem {
                menu: "모카".to_string(),
                why_popular: None,
                description: None,
                example_cafe: None,
            },
        ];
        let items = parse_menu_trends(TrendPayload::Menus(typed.clone()), Some(1));
        assert_eq!(items, vec![typed[0].clone()]);

        let all = parse_menu_trends(TrendPayload::Menus(typed.clone()), None);
        assert_eq!(all, typed);
    }

    #[test]
    fn test_mismatched_typed_payload_yields_empty() {
        // 메뉴 파서에 특징 리스트가 들어오면 필수 필드가 없어 전부 탈락한다.
        let features = vec![CafeFeatureItem {
            feature: "루프탑".to_string(),
            why_effective: None,
            description: None,
            example_cafe: None,
        }];
        assert!(parse_menu_trends(TrendPayload::Features(features), None).is_empty());
    }

    #[test]
    fn test_truncation_preserves_order() {
        let raw = r#"[{"menu": "1"}, {"menu": "2"}, {"menu": "3"}, {"menu": "4"}]"#;
        let items = parse_menu_trends(raw.into(), Some(3));
        assert_eq!(items.len(), 3);
        let names: Vec<&str> = items.iter().map(|m| m.menu.as_str()).collect();
        assert_eq!(names, vec!["1", "2", "3"]);
    }
}
