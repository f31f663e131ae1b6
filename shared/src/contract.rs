//! Types returned by the game contract and the bet arithmetic the client
//! shows before a transaction is sent.
//!
//! Amounts are wei. They travel as decimal strings because JSON numbers
//! cannot hold `uint256` values.

use serde::{Deserialize, Serialize};

use crate::error::{BetError, SpinError};
use crate::sector_map::WheelColor;

pub const ETH_DECIMALS: usize = 18;
pub const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;
/// 0.0001 ETH
pub const MIN_BET_WEI: u128 = 100_000_000_000_000;

/// The contract encodes 0 as a win and 1 as a loss.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ContractOutcome {
    Win = 0,
    Lose = 1,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContractGameResult {
    pub player: String,
    pub chosen_color: u8,
    pub result_color: u8,
    #[serde(with = "wei")]
    pub bet_amount: u128,
    #[serde(with = "wei")]
    pub payout: u128,
    #[serde(default)]
    pub outcome: Option<u8>,
    pub timestamp: u64,
    pub random_seed: String,
}

impl ContractGameResult {
    /// The color the wheel must land on.
    pub fn result_color(&self) -> Result<WheelColor, SpinError> {
        WheelColor::from_index(self.result_color)
    }

    pub fn chosen_color(&self) -> Result<WheelColor, SpinError> {
        WheelColor::from_index(self.chosen_color)
    }

    /// Some gateway responses leave `outcome` out. It is then derived from
    /// the two colors.
    pub fn outcome(&self) -> ContractOutcome {
        match self.outcome {
            Some(0) => ContractOutcome::Win,
            Some(_) => ContractOutcome::Lose,
            None if self.chosen_color == self.result_color => ContractOutcome::Win,
            None => ContractOutcome::Lose,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContractGameConfig {
    #[serde(with = "wei")]
    pub min_bet: u128,
    pub max_bet_percentage: u32,
    pub dev_fee_percentage: u32,
    pub win_multiplier: u32,
}

/// Parses a decimal ETH amount such as `"0.0001"` into wei.
pub fn parse_ether(amount: &str) -> Result<u128, BetError> {
    let malformed = || BetError::Malformed(amount.to_string());
    let trimmed = amount.trim();

    let (whole, fraction) = match trimmed.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (trimmed, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return Err(malformed());
    }
    if !whole.chars().all(|c| c.is_ascii_digit())
        || !fraction.chars().all(|c| c.is_ascii_digit())
        || fraction.len() > ETH_DECIMALS
    {
        return Err(malformed());
    }

    let whole_wei = if whole.is_empty() {
        0
    } else {
        whole
            .parse::<u128>()
            .ok()
            .and_then(|w| w.checked_mul(WEI_PER_ETH))
            .ok_or_else(malformed)?
    };
    let fraction_wei = if fraction.is_empty() {
        0
    } else {
        format!("{:0<width$}", fraction, width = ETH_DECIMALS)
            .parse::<u128>()
            .map_err(|_| malformed())?
    };

    whole_wei.checked_add(fraction_wei).ok_or_else(malformed)
}

/// Formats wei as ETH with trailing zeros removed.
pub fn format_ether(wei: u128) -> String {
    let whole = wei / WEI_PER_ETH;
    let fraction = wei % WEI_PER_ETH;
    if fraction == 0 {
        return whole.to_string();
    }
    let fraction = format!("{:0>width$}", fraction, width = ETH_DECIMALS);
    format!("{}.{}", whole, fraction.trim_end_matches('0'))
}

/// Checks a bet typed by the player against the contract limits.
pub fn validate_bet(amount: &str, max_bet: u128) -> Result<u128, BetError> {
    let wei = parse_ether(amount)?;
    if wei < MIN_BET_WEI {
        return Err(BetError::BelowMinimum {
            min: format_ether(MIN_BET_WEI),
        });
    }
    if wei > max_bet {
        return Err(BetError::AboveMaximum {
            min: format_ether(MIN_BET_WEI),
            max: format_ether(max_bet),
        });
    }
    Ok(wei)
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct BetBreakdown {
    pub bet_amount: u128,
    pub dev_fee: u128,
    pub total_required: u128,
    pub potential_win: u128,
}

impl BetBreakdown {
    pub fn new(bet_amount: u128, config: &ContractGameConfig) -> Self {
        let dev_fee = bet_amount.saturating_mul(u128::from(config.dev_fee_percentage)) / 100;
        Self {
            bet_amount,
            dev_fee,
            total_required: bet_amount.saturating_add(dev_fee),
            potential_win: bet_amount.saturating_mul(u128::from(config.win_multiplier)),
        }
    }
}

/// Serde adapter for wei amounts: written as decimal strings, read from
/// strings or plain JSON integers.
pub mod wei {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Text(text) => text.parse().map_err(de::Error::custom),
            Raw::Number(n) => Ok(u128::from(n)),
        }
    }
}
