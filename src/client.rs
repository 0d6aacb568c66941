//! client.rs
//!
//! Клиент для удалённого API бронирования (филиалы, планировки комнат,
//! тарифы, праздничные дни).
//!
//! Ключевые компоненты:
//! 1.  **CircuitBreaker**: защита от постоянных запросов к неработающему
//!     сервису. После порога сбоев запросы временно блокируются.
//! 2.  **ApiClient**: инкапсулирует все HTTP-вызовы к API. Все сетевые
//!     вызовы защищены с помощью `CircuitBreaker`.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::models::{Branch, Holiday, PricingConfig, PricingRule, RoomLayout};

/// Состояния Circuit Breaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitState {
    /// Нормальный режим - запросы разрешены.
    Closed,
    /// Режим блокировки после множественных сбоев.
    Open,
    /// Тестовый режим - один пробный запрос после таймаута.
    HalfOpen,
}

#[derive(Debug)]
pub struct CircuitBreaker {
    state: RwLock<CircuitState>,
    failure_count: AtomicU32,
    last_failure: RwLock<Option<Instant>>,
    failure_threshold: u32,
    timeout_duration: Duration,
}

impl CircuitBreaker {
    pub fn new(failure_threshold: u32, timeout_seconds: u64) -> Self {
        Self {
            state: RwLock::new(CircuitState::Closed),
            failure_count: AtomicU32::new(0),
            last_failure: RwLock::new(None),
            failure_threshold,
            timeout_duration: Duration::from_secs(timeout_seconds),
        }
    }

    /// Можно ли выполнить следующий запрос.
    pub fn can_execute(&self) -> bool {
        let state = *self.state.read().unwrap();

        match state {
            CircuitState::Closed | CircuitState::HalfOpen => true,
            CircuitState::Open => {
                let timed_out = self
                    .last_failure
                    .read()
                    .unwrap()
                    .map_or(true, |at| at.elapsed() >= self.timeout_duration);

                if timed_out {
                    *self.state.write().unwrap() = CircuitState::HalfOpen;
                    info!("Circuit breaker transitioning to HalfOpen state");
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn record_success(&self) {
        let mut state = self.state.write().unwrap();

        match *state {
            CircuitState::HalfOpen => {
                *state = CircuitState::Closed;
                self.failure_count.store(0, Ordering::Relaxed);
                info!("Circuit breaker recovered - transitioning to Closed state");
            }
            CircuitState::Closed => {
                self.failure_count.store(0, Ordering::Relaxed);
            }
            CircuitState::Open => {}
        }
    }

    pub fn record_failure(&self) {
        let failure_count = self.failure_count.fetch_add(1, Ordering::Relaxed) + 1;
        *self.last_failure.write().unwrap() = Some(Instant::now());

        let mut state = self.state.write().unwrap();

        match *state {
            CircuitState::Closed => {
                if failure_count >= self.failure_threshold {
                    *state = CircuitState::Open;
                    error!(
                        "Circuit breaker OPENED - {} failures reached threshold {}",
                        failure_count, self.failure_threshold
                    );
                }
            }
            CircuitState::HalfOpen => {
                *state = CircuitState::Open;
                warn!("Circuit breaker test failed - returning to Open state");
            }
            CircuitState::Open => {}
        }
    }

    pub fn state(&self) -> CircuitState {
        *self.state.read().unwrap()
    }
}

/// Ошибки при обращении к API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Circuit Breaker разомкнут - запрос заблокирован.
    #[error("booking API temporarily unavailable (circuit breaker open)")]
    Unavailable,
    #[error("booking API request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("booking API returned status {status}")]
    Status { status: reqwest::StatusCode },
}

/// Клиент API бронирования.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http_client: reqwest::Client,
    circuit_breaker: Arc<CircuitBreaker>,
}

impl ApiClient {
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            http_client: reqwest::Client::builder()
                .timeout(Duration::from_secs(config.api.timeout_seconds))
                .build()
                .expect("Failed to create HTTP client"),
            circuit_breaker: Arc::new(CircuitBreaker::new(
                config.circuit_breaker.failure_threshold,
                config.circuit_breaker.timeout_seconds,
            )),
        }
    }

    pub fn circuit_state(&self) -> CircuitState {
        self.circuit_breaker.state()
    }

    /// Выполняет операцию, пропуская её через Circuit Breaker.
    async fn execute_with_circuit_breaker<F, T>(&self, operation: F) -> Result<T, ApiError>
    where
        F: std::future::Future<Output = Result<T, ApiError>>,
    {
        if !self.circuit_breaker.can_execute() {
            warn!("Circuit breaker is OPEN - blocking booking API request");
            return Err(ApiError::Unavailable);
        }

        match operation.await {
            Ok(result) => {
                self.circuit_breaker.record_success();
                Ok(result)
            }
            Err(e) => {
                error!("Booking API request failed: {:?}", e);
                self.circuit_breaker.record_failure();
                Err(e)
            }
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let operation = async {
            let response = self.http_client.get(&url).send().await?;
            if !response.status().is_success() {
                return Err(ApiError::Status {
                    status: response.status(),
                });
            }
            Ok(response.json::<T>().await?)
        };
        self.execute_with_circuit_breaker(operation).await
    }

    async fn put_json<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let operation = async {
            let response = self.http_client.put(&url).json(body).send().await?;
            if !response.status().is_success() {
                return Err(ApiError::Status {
                    status: response.status(),
                });
            }
            Ok(())
        };
        self.execute_with_circuit_breaker(operation).await
    }

    /// Все филиалы с этажами и комнатами.
    pub async fn get_branches(&self) -> Result<Vec<Branch>, ApiError> {
        self.get_json("/branches").await
    }

    /// Сохранённая планировка комнаты.
    pub async fn get_room_layout(&self, room_id: &str) -> Result<RoomLayout, ApiError> {
        self.get_json(&format!("/rooms/{room_id}/layout")).await
    }

    /// Сохраняет планировку комнаты.
    pub async fn save_room_layout(
        &self,
        room_id: &str,
        layout: &RoomLayout,
    ) -> Result<(), ApiError> {
        info!(
            room_id,
            seats = layout.seat_positions.len(),
            elements = layout.elements.len(),
            "Saving room layout"
        );
        self.put_json(&format!("/rooms/{room_id}/layout"), layout)
            .await
    }

    pub async fn get_pricing_rules(&self) -> Result<Vec<PricingRule>, ApiError> {
        self.get_json("/pricing-rules").await
    }

    pub async fn update_pricing_rule(
        &self,
        branch_id: i64,
        is_ac: bool,
        tiers: &PricingConfig,
    ) -> Result<(), ApiError> {
        info!(branch_id, is_ac, "Updating pricing rule");
        let rule = PricingRule {
            branch_id,
            is_ac,
            tiers: *tiers,
        };
        self.put_json("/pricing-rules", &rule).await
    }

    pub async fn get_holidays(&self) -> Result<Vec<Holiday>, ApiError> {
        self.get_json("/holidays").await
    }

    /// Филиалы и тарифы одним заходом - страницы администрирования
    /// запрашивают их вместе.
    pub async fn load_catalog(&self) -> Result<(Vec<Branch>, Vec<PricingRule>), ApiError> {
        futures::try_join!(self.get_branches(), self.get_pricing_rules())
    }
}
