use serde::Deserialize;
use std::env;

use crate::models::PricingConfig;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub api: ApiConfig,
    pub booking: BookingConfig,
    pub grid: GridConfig,
    pub circuit_breaker: CircuitBreakerConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub rust_log: String,
}

// Настройки удалённого API (филиалы, планировки, тарифы)
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

// Правила бронирования
#[derive(Debug, Clone, Deserialize)]
pub struct BookingConfig {
    /// Minimum stay, in days. Anything shorter is rejected up front.
    pub min_stay_days: i64,
    /// How far ahead a start date may be picked, in days.
    pub max_advance_days: i64,
    /// Rate card applied when neither the room nor the branch has one.
    pub default_tiers: PricingConfig,
}

// Пределы сетки планировки комнаты
#[derive(Debug, Clone, Deserialize)]
pub struct GridConfig {
    pub min_cols: u16,
    pub max_cols: u16,
    pub min_rows: u16,
    pub max_rows: u16,
}

// Настройки Circuit Breaker
#[derive(Debug, Clone, Deserialize)]
pub struct CircuitBreakerConfig {
    pub failure_threshold: u32,
    pub timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> Self {
        // Подхватываем .env, если он есть
        let _ = dotenvy::dotenv();

        Config {
            app: AppConfig {
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "seat_booking=debug".to_string()),
            },
            api: ApiConfig {
                base_url: env::var("BOOKING_API_URL")
                    .unwrap_or_else(|_| "http://localhost:8000/api".to_string()),
                timeout_seconds: env::var("BOOKING_API_TIMEOUT_SECONDS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .expect("BOOKING_API_TIMEOUT_SECONDS must be a valid number"),
            },
            booking: BookingConfig {
                min_stay_days: env::var("MIN_STAY_DAYS")
                    .unwrap_or_else(|_| "7".to_string())
                    .parse()
                    .expect("MIN_STAY_DAYS must be a valid number"),
                max_advance_days: env::var("MAX_ADVANCE_DAYS")
                    .unwrap_or_else(|_| "90".to_string())
                    .parse()
                    .expect("MAX_ADVANCE_DAYS must be a valid number"),
                default_tiers: PricingConfig {
                    price_1w: env::var("DEFAULT_PRICE_1W")
                        .unwrap_or_else(|_| "500".to_string())
                        .parse()
                        .expect("DEFAULT_PRICE_1W must be a valid number"),
                    price_2w: env::var("DEFAULT_PRICE_2W")
                        .unwrap_or_else(|_| "900".to_string())
                        .parse()
                        .expect("DEFAULT_PRICE_2W must be a valid number"),
                    price_3w: env::var("DEFAULT_PRICE_3W")
                        .unwrap_or_else(|_| "1200".to_string())
                        .parse()
                        .expect("DEFAULT_PRICE_3W must be a valid number"),
                    price_1m: env::var("DEFAULT_PRICE_1M")
                        .unwrap_or_else(|_| "1500".to_string())
                        .parse()
                        .expect("DEFAULT_PRICE_1M must be a valid number"),
                },
            },
            grid: GridConfig {
                min_cols: 2,
                max_cols: env::var("GRID_MAX_COLS")
                    .unwrap_or_else(|_| "20".to_string())
                    .parse()
                    .expect("GRID_MAX_COLS must be a valid number"),
                min_rows: 2,
                max_rows: env::var("GRID_MAX_ROWS")
                    .unwrap_or_else(|_| "25".to_string())
                    .parse()
                    .expect("GRID_MAX_ROWS must be a valid number"),
            },
            circuit_breaker: CircuitBreakerConfig {
                failure_threshold: env::var("CIRCUIT_BREAKER_FAILURE_THRESHOLD")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .expect("CIRCUIT_BREAKER_FAILURE_THRESHOLD must be a valid number"),
                timeout_seconds: env::var("CIRCUIT_BREAKER_TIMEOUT_SECONDS")
                    .unwrap_or_else(|_| "60".to_string())
                    .parse()
                    .expect("CIRCUIT_BREAKER_TIMEOUT_SECONDS must be a valid number"),
            },
        }
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            min_stay_days: 7,
            max_advance_days: 90,
            default_tiers: PricingConfig {
                price_1w: 500,
                price_2w: 900,
                price_3w: 1200,
                price_1m: 1500,
            },
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min_cols: 2,
            max_cols: 20,
            min_rows: 2,
            max_rows: 25,
        }
    }
}
