use crate::config::{Config, LLMProvider};
use clap::Parser;
use std::path::PathBuf;

/// cafe-insight - 카페 KPI와 실시간 트렌드를 결합해 인사이트 보고서를 생성하는 엔진
#[derive(Parser, Debug)]
#[command(name = "cafe-insight")]
#[command(
    about = "AI-based insight report generator for cafe businesses. It combines monthly KPIs with live cafe trends and synthesizes a structured Korean-language narrative report."
)]
#[command(version)]
pub struct Args {
    /// 대상 카페 ID
    #[arg(long)]
    pub cafe_id: Option<u32>,

    /// 지표를 목데이터 대신 실제 조회로 사용
    #[arg(long)]
    pub no_mock: bool,

    /// 보고서 저장 경로
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,

    /// 설정 파일 경로
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// HTTP 서비스 모드로 기동
    #[arg(long)]
    pub serve: bool,

    /// 서비스 바인딩 주소
    #[arg(long)]
    pub serve_addr: Option<String>,

    /// 요일 규칙에 따른 일간 인사이트 생성
    #[arg(long)]
    pub daily: bool,

    /// 보고서 생성 모델
    #[arg(long)]
    pub model: Option<String>,

    /// LLM API 기본 주소
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// 온도 파라미터
    #[arg(long)]
    pub temperature: Option<f64>,

    /// LLM Provider (openai, moonshot, deepseek, openrouter, ollama)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// Perplexity API KEY
    #[arg(long)]
    pub trend_api_key: Option<String>,

    /// 상세 로그 출력
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// CLI 인자를 설정으로 변환
    ///
    /// 우선순위: CLI 인자 > 명시한 설정 파일 > ./cafe-insight.toml > 기본값
    pub fn into_config(self) -> Config {
        let mut config = if let Some(config_path) = &self.config {
            Config::from_file(config_path).unwrap_or_else(|_| {
                panic!("⚠️ 경고: 설정 파일을 읽을 수 없습니다: {:?}", config_path)
            })
        } else {
            let default_config_path = std::env::current_dir()
                .unwrap_or_else(|_| std::path::PathBuf::from("."))
                .join("cafe-insight.toml");

            if default_config_path.exists() {
                Config::from_file(&default_config_path).unwrap_or_else(|_| {
                    panic!(
                        "⚠️ 경고: 기본 설정 파일을 읽을 수 없습니다: {:?}",
                        default_config_path
                    )
                })
            } else {
                Config::default()
            }
        };

        if let Some(cafe_id) = self.cafe_id {
            config.cafe_id = cafe_id;
        }
        if self.no_mock {
            config.use_mock = false;
        }
        if let Some(output_path) = self.output_path {
            config.output_path = output_path;
        }
        if let Some(serve_addr) = self.serve_addr {
            config.serve_addr = serve_addr;
        }

        if let Some(provider_str) = self.llm_provider {
            if let Ok(provider) = provider_str.parse::<LLMProvider>() {
                config.llm.provider = provider;
            } else {
                eprintln!("⚠️ 경고: 알 수 없는 provider: {}, 기본값을 사용합니다", provider_str);
            }
        }
        if let Some(model) = self.model {
            config.llm.model = model;
        }
        if let Some(llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url;
        }
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }
        if let Some(trend_api_key) = self.trend_api_key {
            config.trend.api_key = trend_api_key;
        }
        if self.verbose {
            config.verbose = true;
        }

        config
    }
}
