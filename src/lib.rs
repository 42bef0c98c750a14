pub mod cli;
pub mod config;
pub mod insight;
pub mod llm;
pub mod metrics;
pub mod outlet;
pub mod server;
pub mod trend;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use insight::launch;
