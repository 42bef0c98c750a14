#[cfg(test)]
mod tests {
    use crate::config::{Config, LLMProvider, TrendConfig};
    use std::path::PathBuf;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.cafe_id, 1);
        assert!(config.use_mock);
        assert_eq!(config.output_path, PathBuf::from("./insight.reports"));
        assert_eq!(config.serve_addr, "0.0.0.0:8080");
        assert!(!config.verbose);
    }

    #[test]
    fn test_llm_config_default() {
        let config = Config::default();

        assert_eq!(config.llm.provider, LLMProvider::OpenAI);
        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.llm.temperature, 0.2);
        assert_eq!(config.llm.timeout_seconds, 60);
    }

    #[test]
    fn test_trend_config_default() {
        let trend = TrendConfig::default();

        assert_eq!(trend.api_base_url, "https://api.perplexity.ai");
        assert_eq!(trend.model, "sonar-pro");
        assert_eq!(trend.temperature, 0.7);
        assert_eq!(trend.max_tokens, 500);
        assert_eq!(trend.timeout_seconds, 60);
    }

    #[test]
    fn test_llm_provider_default() {
        let provider = LLMProvider::default();
        assert_eq!(provider, LLMProvider::OpenAI);
    }

    #[test]
    fn test_llm_provider_from_str() {
        assert_eq!(
            "openai".parse::<LLMProvider>().unwrap(),
            LLMProvider::OpenAI
        );
        assert_eq!(
            "moonshot".parse::<LLMProvider>().unwrap(),
            LLMProvider::Moonshot
        );
        assert_eq!(
            "deepseek".parse::<LLMProvider>().unwrap(),
            LLMProvider::DeepSeek
        );
        assert_eq!(
            "openrouter".parse::<LLMProvider>().unwrap(),
            LLMProvider::OpenRouter
        );
        assert_eq!(
            "ollama".parse::<LLMProvider>().unwrap(),
            LLMProvider::Ollama
        );

        assert!("invalid".parse::<LLMProvider>().is_err());
    }

    #[test]
    fn test_llm_provider_display() {
        assert_eq!(LLMProvider::OpenAI.to_string(), "openai");
        assert_eq!(LLMProvider::Moonshot.to_string(), "moonshot");
        assert_eq!(LLMProvider::DeepSeek.to_string(), "deepseek");
        assert_eq!(LLMProvider::OpenRouter.to_string(), "openrouter");
        assert_eq!(LLMProvider::Ollama.to_string(), "ollama");
    }

    #[test]
    fn test_config_from_toml() {
        use std::io::Write;

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("cafe-insight.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"
cafe_id = 7
use_mock = false
output_path = "/tmp/reports"
serve_addr = "127.0.0.1:9000"
verbose = true

[llm]
provider = "deepseek"
api_key = "test-key"
api_base_url = "https://api.deepseek.com"
model = "deepseek-chat"
max_tokens = 2048
temperature = 0.2
timeout_seconds = 30

[trend]
api_key = "pplx-test"
api_base_url = "https://api.perplexity.ai"
model = "sonar-pro"
temperature = 0.7
max_tokens = 500
timeout_seconds = 30
"#
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.cafe_id, 7);
        assert!(!config.use_mock);
        assert_eq!(config.llm.provider, LLMProvider::DeepSeek);
        assert_eq!(config.llm.model, "deepseek-chat");
        assert_eq!(config.trend.api_key, "pplx-test");
        assert!(config.verbose);
    }

    #[test]
    fn test_config_from_missing_file_fails() {
        let path = PathBuf::from("/nonexistent/cafe-insight.toml");
        assert!(Config::from_file(&path).is_err());
    }
}
