use std::env;
use std::sync::{Mutex, MutexGuard};

use lazy_static;
use serde_json;

use error::{InputError, InputResult};

/// Environment variable holding a JSON object of overrides, e.g.
/// `BOT_CONFIG='{"ARCHERY_WEIGHT": 0.5}'`.
pub const CONFIG_VAR: &str = "BOT_CONFIG";

pub fn config() -> &'static Config {
    &*SINGLETON
}

lazy_static! {
    static ref INITIALIZER: Mutex<Option<Config>> = Mutex::new(None);
    static ref SINGLETON: Config = lock_initializer().take().unwrap_or_default();
}

pub fn init_config(config: Config) {
    *lock_initializer() = Some(config);
    lazy_static::initialize(&SINGLETON);
    if lock_initializer().take().is_some() {
        warn!("config was read before initialization, overrides ignored");
    }
}

fn lock_initializer<'mutex>() -> MutexGuard<'mutex, Option<Config>> {
    INITIALIZER
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn read_config() -> InputResult<Config> {
    match env::var(CONFIG_VAR) {
        Ok(raw) => Config::from_json_str(&raw),
        Err(_) => Ok(Config::default()),
    }
}

trait FromJson: Sized {
    fn from_json(value: &serde_json::Value) -> Option<Self>;
}

macro_rules! impl_from_json {
    ($type:ty, $method:ident) => {
        impl FromJson for $type {
            fn from_json(value: &serde_json::Value) -> Option<$type> {
                value.$method()
            }
        }
    };
}

impl_from_json!(i64, as_i64);
impl_from_json!(f64, as_f64);

macro_rules! impl_config {
    ($($name:ident: $type:ty = $value:expr),* $(,)*) => {
        #[derive(Debug, Clone, PartialEq)]
        pub struct Config {
            $(
                pub $name: $type
            ),*
        }

        impl Default for Config {
            fn default() -> Config {
                Config {
                    $(
                        $name: $value
                    ),*
                }
            }
        }

        impl Config {
            pub fn from_json(json: &serde_json::Value) -> InputResult<Config> {
                let mut config = Config::default();
                $(
                    let key = stringify!($name).to_uppercase();
                    if let Some(value) = json.get(key.as_str()) {
                        config.$name = FromJson::from_json(value)
                            .ok_or(InputError::Config { key })?;
                    }
                )*
                Ok(config)
            }
        }
    };
}

impl Config {
    pub fn from_json_str(raw: &str) -> InputResult<Config> {
        let json: serde_json::Value = serde_json::from_str(raw).map_err(InputError::InvalidJson)?;
        if !json.is_object() {
            return Err(InputError::ConfigNotObject);
        }
        Config::from_json(&json)
    }
}

impl_config! {
    correct_move_bonus: f64 = 0.5,
    hurdles_weight: f64 = 1.0,
    archery_weight: f64 = 1.0,
    skating_weight: f64 = 1.0,
    diving_weight: f64 = 1.0,
    skating_max_risk: i64 = 5,
    skating_stun_penalty: f64 = 6.0,
    throw_range: i64 = 4,
    low_cover_reduction: f64 = 0.5,
    high_cover_reduction: f64 = 0.75,
    hero_range: f64 = 2000.0,
    hero_speed: f64 = 1000.0,
    zombie_speed: f64 = 400.0,
    turn_budget_ms: f64 = 50.0,
}
