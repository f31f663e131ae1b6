use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use rand::Rng;
use serde::{Deserialize, Serialize};
use shared::contract::{format_ether, ContractGameConfig, ContractGameResult, ContractOutcome, MIN_BET_WEI, WEI_PER_ETH};
use shared::rate_limit::{RequestThrottle, RetryPolicy, RATE_LIMIT_ERROR};
use shared::WheelColor;

use crate::config::get_api_base_url;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlayRequest {
    chosen_color: u8,
    bet_amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfigResponse {
    pub config: ContractGameConfig,
    #[serde(with = "shared::contract::wei")]
    pub max_bet: u128,
}

/// Talks to the HTTP gateway in front of the game contract.
pub struct GatewayClient {
    base_url: String,
    policy: RetryPolicy,
    throttle: RefCell<RequestThrottle>,
}

impl GatewayClient {
    pub fn new(base_url: String) -> Self {
        let policy = RetryPolicy::default();
        Self {
            base_url,
            throttle: RefCell::new(RequestThrottle::new(policy.min_request_interval)),
            policy,
        }
    }

    async fn wait_for_slot(&self) {
        let wait = self.throttle.borrow_mut().wait_before(js_sys::Date::now() as u64);
        if !wait.is_zero() {
            TimeoutFuture::new(wait.as_millis() as u32).await;
        }
    }

    async fn fetch_config_once(&self) -> Result<GameConfigResponse, String> {
        let response = Request::get(&format!("{}/api/game/config", self.base_url))
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        response
            .json::<GameConfigResponse>()
            .await
            .map_err(|e| format!("Error parsing game config: {:?}", e))
    }

    pub async fn game_config(&self) -> Result<GameConfigResponse, String> {
        let mut attempt = 0;
        loop {
            self.wait_for_slot().await;
            match self.fetch_config_once().await {
                Ok(config) => return Ok(config),
                Err(e) if self.policy.should_retry(attempt, &e) => {
                    let backoff = self.policy.backoff_for(attempt);
                    log::warn!(
                        "Rate limit hit, retrying in {}ms... (attempt {}/{})",
                        backoff.as_millis(),
                        attempt + 1,
                        self.policy.max_attempts
                    );
                    TimeoutFuture::new(backoff.as_millis() as u32).await;
                    attempt += 1;
                }
                Err(e) if shared::rate_limit::is_rate_limit_error(&e) => {
                    return Err(RATE_LIMIT_ERROR.to_string())
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Places the bet. Never retried, a repeat could place a second bet.
    pub async fn play(&self, chosen: WheelColor, bet_amount: u128) -> Result<ContractGameResult, String> {
        self.wait_for_slot().await;

        let body = PlayRequest {
            chosen_color: chosen.index(),
            bet_amount: bet_amount.to_string(),
        };
        let response = Request::post(&format!("{}/api/game/play", self.base_url))
            .json(&body)
            .map_err(|e| format!("Failed to build request: {:?}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if response.status() == 429 {
            return Err(RATE_LIMIT_ERROR.to_string());
        }
        if !response.ok() {
            let detail = response.text().await.unwrap_or_default();
            return Err(format!("Game failed ({}): {}", response.status(), detail));
        }

        let result = response
            .json::<ContractGameResult>()
            .await
            .map_err(|e| format!("Invalid game result received from contract: {:?}", e))?;

        log::info!(
            "🎲 Contract result: chose {} got {} ({:?}), bet {} ETH, payout {} ETH",
            result.chosen_color,
            result.result_color,
            result.outcome(),
            format_ether(result.bet_amount),
            format_ether(result.payout)
        );
        Ok(result)
    }
}

/// Where spin outcomes come from.
#[derive(Clone)]
pub enum OutcomeSource {
    Gateway(Rc<GatewayClient>),
    /// Offline play: outcomes are drawn in the browser.
    Local,
}

impl PartialEq for OutcomeSource {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Gateway(a), Self::Gateway(b)) => Rc::ptr_eq(a, b),
            (Self::Local, Self::Local) => true,
            _ => false,
        }
    }
}

pub fn local_game_config() -> GameConfigResponse {
    GameConfigResponse {
        config: ContractGameConfig {
            min_bet: MIN_BET_WEI,
            max_bet_percentage: 5,
            dev_fee_percentage: 2,
            win_multiplier: 2,
        },
        max_bet: WEI_PER_ETH / 100,
    }
}

impl OutcomeSource {
    pub fn from_environment() -> Self {
        if crate::config::is_demo_mode() {
            log::info!("Demo mode: outcomes are drawn locally");
            Self::Local
        } else {
            Self::Gateway(Rc::new(GatewayClient::new(get_api_base_url())))
        }
    }

    pub async fn game_config(&self) -> Result<GameConfigResponse, String> {
        match self {
            Self::Gateway(client) => client.game_config().await,
            Self::Local => Ok(local_game_config()),
        }
    }

    pub async fn play(&self, chosen: WheelColor, bet_amount: u128) -> Result<ContractGameResult, String> {
        match self {
            Self::Gateway(client) => client.play(chosen, bet_amount).await,
            Self::Local => Ok(draw_local(chosen, bet_amount)),
        }
    }
}

fn draw_local(chosen: WheelColor, bet_amount: u128) -> ContractGameResult {
    let mut rng = rand::thread_rng();
    let result_color = WheelColor::ALL[rng.gen_range(0..WheelColor::ALL.len())];
    let outcome = if result_color == chosen {
        ContractOutcome::Win
    } else {
        ContractOutcome::Lose
    };
    let payout = match outcome {
        ContractOutcome::Win => bet_amount.saturating_mul(u128::from(local_game_config().config.win_multiplier)),
        ContractOutcome::Lose => 0,
    };

    ContractGameResult {
        player: "local".to_string(),
        chosen_color: chosen.index(),
        result_color: result_color.index(),
        bet_amount,
        payout,
        outcome: Some(outcome as u8),
        timestamp: (js_sys::Date::now() / 1000.0) as u64,
        random_seed: rng.gen::<u64>().to_string(),
    }
}
