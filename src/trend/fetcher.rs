//! 검색형 LLM(Perplexity) 트렌드 수집 클라이언트

use std::time::Duration;

use serde_json::{Value, json};

use crate::config::TrendConfig;
use crate::trend::prompts;

/// 트렌드 수집 실패 분류
///
/// 설정/전송/응답 구조 오류는 호출자에게 그대로 전파된다.
/// 본문 파싱 문제는 여기서 다루지 않는다 - 원문은 정규화 단계에서 흡수한다.
#[derive(Debug, thiserror::Error)]
pub enum TrendError {
    #[error("PERPLEXITY_API_KEY is not set")]
    MissingApiKey,

    #[error("trend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("trend endpoint returned status {status}: {body}")]
    BadStatus { status: reqwest::StatusCode, body: String },

    #[error("unexpected trend response shape: {0}")]
    Shape(String),
}

/// 트렌드 수집기
///
/// 반환하는 문자열은 신뢰할 수 없는 원문이다. 호출자는 반드시
/// [`crate::trend::normalize`]를 거쳐 사용해야 한다.
pub struct TrendFetcher {
    config: TrendConfig,
    client: reqwest::Client,
}

impl TrendFetcher {
    /// 수집기 생성. 자격 증명이 없으면 네트워크 호출 전에 실패한다.
    pub fn new(config: &TrendConfig) -> Result<Self, TrendError> {
        if config.api_key.trim().is_empty() {
            return Err(TrendError::MissingApiKey);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            config: config.clone(),
            client,
        })
    }

    /// 프롬프트 하나로 검색형 채팅 완성 호출을 수행하고 본문 텍스트를 돌려준다.
    pub async fn fetch_cafe_trend(&self, prompt: &str) -> Result<String, TrendError> {
        let url = format!("{}/chat/completions", self.config.api_base_url);
        let body = json!({
            "model": self.config.model,
            "messages": [
                {"role": "system", "content": "Be precise and concise."},
                {"role": "user", "content": prompt}
            ],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        });

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TrendError::BadStatus { status, body });
        }

        let payload: Value = resp.json().await?;
        extract_message_content(&payload)
    }

    /// 인기 메뉴 트렌드 원문 수집
    pub async fn fetch_menu_trends(&self) -> Result<String, TrendError> {
        self.fetch_cafe_trend(&prompts::menu_trend_prompt()).await
    }

    /// 인기 카페 특징 원문 수집
    pub async fn fetch_cafe_features(&self) -> Result<String, TrendError> {
        self.fetch_cafe_trend(&prompts::cafe_feature_prompt()).await
    }
}

/// `choices[0].message.content` 경로에서 본문을 꺼낸다. 경로가 없으면 Shape 오류.
fn extract_message_content(payload: &Value) -> Result<String, TrendError> {
    payload
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| TrendError::Shape(payload.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrendConfig;

    #[test]
    fn test_missing_api_key_fails_fast() {
        let config = TrendConfig {
            api_key: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            TrendFetcher::new(&config),
            Err(TrendError::MissingApiKey)
        ));
    }

    #[test]
    fn test_extract_message_content() {
        let payload = serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "[{\"menu\": \"라떼\"}]"}}]
        });
        assert_eq!(
            extract_message_content(&payload).unwrap(),
            "[{\"menu\": \"라떼\"}]"
        );
    }

    #[test]
    fn test_extract_message_content_shape_error() {
        let payload = serde_json::json!({"error": {"message": "rate limited"}});
        assert!(matches!(
            extract_message_content(&payload),
            Err(TrendError::Shape(_))
        ));
    }
}
