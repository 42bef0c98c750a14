//! 생성 응답에서 JSON 객체 추출
//!
//! 생성형 LLM은 JSON 앞뒤에 산문을 붙이곤 한다. 여기서는 가장 넓은
//! 중괄호 구간을 찾아 엄격 파싱하고, 실패하면 원문을 그대로 보존한
//! `{"raw": ...}`로 내려간다. 이 함수는 절대 오류를 내지 않는다.

use regex::Regex;
use serde_json::{Value, json};
use std::sync::LazyLock;

static JSON_OBJECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("valid regex literal"));

/// 자유 형식 텍스트에서 JSON 객체 하나를 추출
///
/// 중괄호 구간이 없거나 파싱에 실패하면 `{"raw": <원문 전체>}`를 돌려준다.
pub fn extract_json_object(content: &str) -> Value {
    if let Some(found) = JSON_OBJECT_RE.find(content)
        && let Ok(value) = serde_json::from_str::<Value>(found.as_str())
    {
        return value;
    }
    json!({ "raw": content })
}
