//! LLM 클라이언트 - 보고서 생성 엔드포인트에 대한 통합 인터페이스

use anyhow::Result;
use std::time::Duration;

use crate::config::LLMConfig;

mod providers;

use providers::ProviderClient;

/// LLM 클라이언트
///
/// 호출당 정확히 한 번의 아웃바운드 요청을 보낸다. 재시도/캐시는 하지 않는다.
#[derive(Clone)]
pub struct LLMClient {
    config: LLMConfig,
    client: ProviderClient,
}

impl LLMClient {
    /// 새 LLM 클라이언트 생성
    pub fn new(config: &LLMConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            anyhow::bail!("LLM api_key is not set (OPENAI_API_KEY)");
        }
        let client = ProviderClient::new(config)?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// 단일 턴 대화. 제한 시간을 넘기면 전송 오류로 실패한다.
    pub async fn prompt(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let agent = self
            .client
            .create_agent(&self.config.model, system_prompt, &self.config);

        let timeout = Duration::from_secs(self.config.timeout_seconds);
        match tokio::time::timeout(timeout, agent.prompt(user_prompt)).await {
            Ok(result) => result,
            Err(_) => anyhow::bail!(
                "LLM call timed out after {}s",
                self.config.timeout_seconds
            ),
        }
    }

    /// 모델 연결 상태 점검
    pub async fn check_connection(&self) -> Result<()> {
        println!("🔄 모델 연결 확인 중...");
        match self
            .prompt("You are a helpful assistant.", "Hello")
            .await
        {
            Ok(_) => {
                println!("✅ 모델 연결 정상");
                Ok(())
            }
            Err(e) => {
                eprintln!("❌ 모델 연결 실패: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LLMConfig;

    #[test]
    fn test_missing_api_key_fails_fast() {
        let config = LLMConfig {
            api_key: String::new(),
            ..Default::default()
        };
        assert!(LLMClient::new(&config).is_err());
    }

    #[test]
    fn test_client_construction_with_key() {
        let config = LLMConfig {
            api_key: "test-key".to_string(),
            ..Default::default()
        };
        assert!(LLMClient::new(&config).is_ok());
    }
}
