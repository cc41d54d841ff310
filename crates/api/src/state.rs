use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use price_sim::TickerConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    pub ticker: TickerConfig,
    pub price_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ticker: TickerConfig::default(),
            price_seed: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StartSessionError {
    SessionIdOverflow,
}

#[derive(Clone, Debug)]
pub struct AppState {
    next_session_id: Arc<AtomicU64>,
    config: GameConfig,
}

impl AppState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            next_session_id: Arc::new(AtomicU64::new(0)),
            config,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn start_session(&self) -> Result<u64, StartSessionError> {
        let previous = self
            .next_session_id
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                current.checked_add(1)
            })
            .map_err(|_| StartSessionError::SessionIdOverflow)?;

        Ok(previous + 1)
    }

    /// A fixed `price_seed` pins every session to the same deterministic
    /// price path; otherwise each session mixes its id with caller-supplied
    /// entropy.
    pub fn session_seed(&self, session_id: u64, entropy: u64) -> u64 {
        match self.config.price_seed {
            Some(seed) => seed,
            None => entropy ^ session_id.wrapping_mul(0x9E37_79B9_7F4A_7C15),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_next_session_id_for_test(config: GameConfig, next_session_id: u64) -> Self {
        Self {
            next_session_id: Arc::new(AtomicU64::new(next_session_id)),
            config,
        }
    }
}
