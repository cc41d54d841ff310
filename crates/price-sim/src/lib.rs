mod config;
mod generators;
mod history;

pub use config::TickerConfig;
pub use generators::PriceGenerator;
pub use history::{PriceHistory, PriceSample};
