use crate::config::TickerConfig;

#[derive(Debug, Clone)]
pub struct PriceGenerator {
    state: u64,
    price: f64,
    config: TickerConfig,
}

impl PriceGenerator {
    pub fn new(seed: u64, start_price: f64, config: TickerConfig) -> Self {
        assert!(
            start_price.is_finite() && start_price > 0.0,
            "start_price must be finite and positive"
        );
        assert!(
            config.noise_rate.is_finite() && config.noise_rate >= 0.0,
            "noise_rate must be finite and non-negative"
        );
        assert!(
            config.reversion_rate.is_finite() && config.reversion_rate >= 0.0,
            "reversion_rate must be finite and non-negative"
        );
        assert!(
            config.floor.is_finite() && config.floor > 0.0,
            "floor must be finite and positive"
        );

        Self {
            state: seed,
            price: start_price,
            config,
        }
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn tick(&mut self) -> f64 {
        let unit = next_unit(&mut self.state);
        let noise_factor = (unit - 0.5) * 2.0 * self.config.noise_rate;
        let noisy = self.price * (1.0 + noise_factor);
        let reversion = self.config.reversion_rate * (self.config.target - self.price);
        let next = noisy + reversion;
        self.price = next.max(self.config.floor);
        self.price
    }
}

fn next_u64(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state
}

// Uniform in [0, 1): the divisor is 2^64, one past u64::MAX.
fn next_unit(state: &mut u64) -> f64 {
    let value = next_u64(state);
    (value as f64) / ((u64::MAX as f64) + 1.0)
}
