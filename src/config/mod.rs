use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

/// LLM Provider 종류
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum LLMProvider {
    #[serde(rename = "openai")]
    #[default]
    OpenAI,
    #[serde(rename = "moonshot")]
    Moonshot,
    #[serde(rename = "deepseek")]
    DeepSeek,
    #[serde(rename = "openrouter")]
    OpenRouter,
    #[serde(rename = "ollama")]
    Ollama,
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::OpenAI => write!(f, "openai"),
            LLMProvider::Moonshot => write!(f, "moonshot"),
            LLMProvider::DeepSeek => write!(f, "deepseek"),
            LLMProvider::OpenRouter => write!(f, "openrouter"),
            LLMProvider::Ollama => write!(f, "ollama"),
        }
    }
}

impl std::str::FromStr for LLMProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(LLMProvider::OpenAI),
            "moonshot" => Ok(LLMProvider::Moonshot),
            "deepseek" => Ok(LLMProvider::DeepSeek),
            "openrouter" => Ok(LLMProvider::OpenRouter),
            "ollama" => Ok(LLMProvider::Ollama),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// 애플리케이션 설정
///
/// 프로세스 시작 시 한 번 구성하고 각 컴포넌트 생성자에 참조로 전달한다.
/// 핵심 로직(정규화/추출)은 환경 변수를 직접 읽지 않는다.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// 대상 카페 ID
    pub cafe_id: u32,

    /// 지표를 목데이터로 사용할지 여부
    pub use_mock: bool,

    /// 보고서 저장 경로
    pub output_path: PathBuf,

    /// HTTP 서비스 바인딩 주소
    pub serve_addr: String,

    /// 보고서 생성용 LLM 설정
    pub llm: LLMConfig,

    /// 트렌드 수집(검색형 LLM) 설정
    pub trend: TrendConfig,

    /// 상세 로그 출력 여부
    pub verbose: bool,
}

/// 보고서 생성 LLM 설정
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LLMConfig {
    /// LLM Provider 종류
    pub provider: LLMProvider,

    /// LLM API KEY
    pub api_key: String,

    /// LLM API 기본 주소
    pub api_base_url: String,

    /// 보고서 생성에 사용할 모델
    pub model: String,

    /// 최대 tokens
    pub max_tokens: u32,

    /// 온도. 창의성보다 일관성이 중요해서 낮게 고정한다.
    pub temperature: f64,

    /// 호출 제한 시간 (초)
    pub timeout_seconds: u64,
}

/// 트렌드 수집 설정
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TrendConfig {
    /// Perplexity API KEY
    pub api_key: String,

    /// 검색형 채팅 완성 API 기본 주소
    pub api_base_url: String,

    /// 검색형 모델
    pub model: String,

    /// 온도
    pub temperature: f64,

    /// 최대 tokens
    pub max_tokens: u32,

    /// 호출 제한 시간 (초)
    pub timeout_seconds: u64,
}

impl Config {
    /// 파일에서 설정 로드
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cafe_id: 1,
            use_mock: true,
            output_path: PathBuf::from("./insight.reports"),
            serve_addr: String::from("0.0.0.0:8080"),
            llm: LLMConfig::default(),
            trend: TrendConfig::default(),
            verbose: false,
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: LLMProvider::default(),
            api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            api_base_url: String::from("https://api.openai.com/v1"),
            model: String::from("gpt-4o"),
            max_tokens: 4096,
            temperature: 0.2,
            timeout_seconds: 60,
        }
    }
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("PERPLEXITY_API_KEY").unwrap_or_default(),
            api_base_url: String::from("https://api.perplexity.ai"),
            model: String::from("sonar-pro"),
            temperature: 0.7,
            max_tokens: 500,
            timeout_seconds: 60,
        }
    }
}

// Include tests
#[cfg(test)]
mod tests;
