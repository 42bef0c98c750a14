pub mod indicators;
pub mod trend;

pub use indicators::{Indicators, Kpis};
pub use trend::{CafeFeatureItem, MenuTrendItem};
