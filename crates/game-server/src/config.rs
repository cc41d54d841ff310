use std::{
    env, fmt,
    net::{AddrParseError, SocketAddr},
};

use api::GameConfig;
use price_sim::TickerConfig;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TICK_INTERVAL_MS: u64 = 500;
const DEFAULT_START_PRICE: f64 = 91_000.0;
const MIN_TICK_INTERVAL_MS: u64 = 10;
const MAX_TICK_INTERVAL_MS: u64 = 10_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub tick_interval_ms: u64,
    pub start_price: f64,
    pub price_seed: Option<u64>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidListenAddr(AddrParseError),
    InvalidTickIntervalMs,
    InvalidStartPrice,
    InvalidPriceSeed,
    NonUnicodeListenAddr,
    NonUnicodeTickIntervalMs,
    NonUnicodeStartPrice,
    NonUnicodePriceSeed,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidListenAddr(err) => {
                write!(f, "GAME_SERVER_ADDR is not a valid socket address: {err}")
            }
            Self::InvalidTickIntervalMs => {
                write!(
                    f,
                    "GAME_TICK_INTERVAL_MS must be an integer between {MIN_TICK_INTERVAL_MS} and {MAX_TICK_INTERVAL_MS}"
                )
            }
            Self::InvalidStartPrice => {
                write!(f, "GAME_START_PRICE must be a finite positive number")
            }
            Self::InvalidPriceSeed => {
                write!(f, "GAME_PRICE_SEED must be an unsigned 64-bit integer")
            }
            Self::NonUnicodeListenAddr => {
                write!(f, "GAME_SERVER_ADDR contains non-unicode data")
            }
            Self::NonUnicodeTickIntervalMs => {
                write!(f, "GAME_TICK_INTERVAL_MS contains non-unicode data")
            }
            Self::NonUnicodeStartPrice => {
                write!(f, "GAME_START_PRICE contains non-unicode data")
            }
            Self::NonUnicodePriceSeed => {
                write!(f, "GAME_PRICE_SEED contains non-unicode data")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidListenAddr(err) => Some(err),
            _ => None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = match env::var("GAME_SERVER_ADDR") {
            Ok(value) => value.parse().map_err(ConfigError::InvalidListenAddr)?,
            Err(env::VarError::NotPresent) => DEFAULT_LISTEN_ADDR
                .parse()
                .expect("default listen address must be valid"),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeListenAddr);
            }
        };

        let tick_interval_ms = match env::var("GAME_TICK_INTERVAL_MS") {
            Ok(value) => {
                let parsed: u64 = value
                    .parse()
                    .map_err(|_| ConfigError::InvalidTickIntervalMs)?;
                if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&parsed) {
                    return Err(ConfigError::InvalidTickIntervalMs);
                }
                parsed
            }
            Err(env::VarError::NotPresent) => DEFAULT_TICK_INTERVAL_MS,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeTickIntervalMs);
            }
        };

        let start_price = match env::var("GAME_START_PRICE") {
            Ok(value) => {
                let parsed: f64 = value.parse().map_err(|_| ConfigError::InvalidStartPrice)?;
                if !parsed.is_finite() || parsed <= 0.0 {
                    return Err(ConfigError::InvalidStartPrice);
                }
                parsed
            }
            Err(env::VarError::NotPresent) => DEFAULT_START_PRICE,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeStartPrice);
            }
        };

        let price_seed = match env::var("GAME_PRICE_SEED") {
            Ok(value) => Some(value.parse().map_err(|_| ConfigError::InvalidPriceSeed)?),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodePriceSeed);
            }
        };

        Ok(Self {
            listen_addr,
            tick_interval_ms,
            start_price,
            price_seed,
        })
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            ticker: TickerConfig {
                target: self.start_price,
                tick_interval_ms: self.tick_interval_ms,
                ..TickerConfig::default()
            },
            price_seed: self.price_seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{env, sync::Mutex};

    use super::{Config, ConfigError};

    static ENV_LOCK: Mutex<()> = Mutex::new(());
    const ENV_ADDR_KEY: &str = "GAME_SERVER_ADDR";
    const ENV_TICK_KEY: &str = "GAME_TICK_INTERVAL_MS";
    const ENV_PRICE_KEY: &str = "GAME_START_PRICE";
    const ENV_SEED_KEY: &str = "GAME_PRICE_SEED";

    struct EnvVarGuard {
        key: &'static str,
        previous: Option<std::ffi::OsString>,
    }

    impl EnvVarGuard {
        fn set(key: &'static str, value: &str) -> Self {
            let previous = env::var_os(key);
            env::set_var(key, value);
            Self { key, previous }
        }

        fn unset(key: &'static str) -> Self {
            let previous = env::var_os(key);
            env::remove_var(key);
            Self { key, previous }
        }

        #[cfg(unix)]
        fn set_os(key: &'static str, value: std::ffi::OsString) -> Self {
            let previous = env::var_os(key);
            env::set_var(key, value);
            Self { key, previous }
        }
    }

    impl Drop for EnvVarGuard {
        fn drop(&mut self) {
            match self.previous.take() {
                Some(value) => env::set_var(self.key, value),
                None => env::remove_var(self.key),
            }
        }
    }

    fn reset_config_env_baseline() -> [EnvVarGuard; 4] {
        [
            EnvVarGuard::unset(ENV_ADDR_KEY),
            EnvVarGuard::unset(ENV_TICK_KEY),
            EnvVarGuard::unset(ENV_PRICE_KEY),
            EnvVarGuard::unset(ENV_SEED_KEY),
        ]
    }

    #[test]
    fn defaults_apply_when_env_is_unset() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.tick_interval_ms, 500);
        assert_eq!(config.start_price, 91_000.0);
        assert_eq!(config.price_seed, None);
    }

    #[test]
    fn uses_listen_address_override_from_env() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();
        let _guard = EnvVarGuard::set(ENV_ADDR_KEY, "127.0.0.1:9090");

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:9090".parse().unwrap());
    }

    #[test]
    fn returns_error_for_invalid_listen_address_override() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();
        let _guard = EnvVarGuard::set(ENV_ADDR_KEY, "not-an-addr");

        let err = Config::from_env().unwrap_err();

        assert!(matches!(err, ConfigError::InvalidListenAddr(_)));
    }

    #[test]
    fn uses_tick_interval_override_from_env() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();
        let _guard = EnvVarGuard::set(ENV_TICK_KEY, "100");

        let config = Config::from_env().unwrap();

        assert_eq!(config.tick_interval_ms, 100);
        assert_eq!(config.game_config().ticker.tick_interval_ms, 100);
    }

    #[test]
    fn rejects_tick_intervals_outside_the_supported_band() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();

        for value in ["0", "9", "10001", "fast"] {
            let _guard = EnvVarGuard::set(ENV_TICK_KEY, value);
            let err = Config::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidTickIntervalMs));
        }
    }

    #[test]
    fn start_price_override_becomes_the_reversion_target() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();
        let _guard = EnvVarGuard::set(ENV_PRICE_KEY, "50000");

        let config = Config::from_env().unwrap();

        assert_eq!(config.start_price, 50_000.0);
        assert_eq!(config.game_config().ticker.target, 50_000.0);
    }

    #[test]
    fn rejects_non_positive_or_non_finite_start_price() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();

        for value in ["0", "-1", "inf", "NaN", "price"] {
            let _guard = EnvVarGuard::set(ENV_PRICE_KEY, value);
            let err = Config::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidStartPrice));
        }
    }

    #[test]
    fn price_seed_override_pins_sessions_to_a_fixed_path() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();
        let _guard = EnvVarGuard::set(ENV_SEED_KEY, "42");

        let config = Config::from_env().unwrap();

        assert_eq!(config.price_seed, Some(42));
        assert_eq!(config.game_config().price_seed, Some(42));
    }

    #[test]
    fn returns_error_for_invalid_price_seed() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();
        let _guard = EnvVarGuard::set(ENV_SEED_KEY, "-1");

        let err = Config::from_env().unwrap_err();

        assert!(matches!(err, ConfigError::InvalidPriceSeed));
    }

    #[cfg(unix)]
    #[test]
    fn returns_error_for_non_unicode_env_var() {
        use std::os::unix::ffi::OsStringExt;

        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();
        let _guard = EnvVarGuard::set_os(
            ENV_ADDR_KEY,
            std::ffi::OsString::from_vec(vec![0x66, 0x6f, 0x80]),
        );

        let err = Config::from_env().unwrap_err();

        assert!(matches!(err, ConfigError::NonUnicodeListenAddr));
    }
}
