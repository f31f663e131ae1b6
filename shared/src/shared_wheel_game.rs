use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::sector_map::WheelColor;

pub const WIN_POINTS: u32 = 10;
pub const LOSE_POINTS: u32 = 0;
/// How long the WIN!/LOSE! banner stays up after the wheel stops.
pub const RESULT_DISPLAY_MS: u32 = 2000;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
}

/// What the player sees once the wheel has stopped.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RoundResult {
    pub outcome: Outcome,
    pub message: String,
    pub points: u32,
    pub chosen_color: WheelColor,
    pub landed_color: WheelColor,
}

impl RoundResult {
    pub fn new(chosen_color: WheelColor, landed_color: WheelColor) -> Self {
        let (outcome, message, points) = if chosen_color == landed_color {
            (Outcome::Win, "WIN!", WIN_POINTS)
        } else {
            (Outcome::Lose, "LOSE!", LOSE_POINTS)
        };
        Self {
            outcome,
            message: message.to_string(),
            points,
            chosen_color,
            landed_color,
        }
    }

    pub fn is_win(&self) -> bool {
        self.outcome == Outcome::Win
    }
}

/// Round bookkeeping around the wheel. `is_spinning` is the single guard that
/// keeps spins from overlapping.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct WheelGame {
    pub is_spinning: bool,
    pub points: u32,
    pub chosen_color: Option<WheelColor>,
    pub last_result: Option<RoundResult>,
    pub show_result: bool,
}

impl WheelGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_spin(&mut self, chosen_color: WheelColor) -> Result<(), GameError> {
        if self.is_spinning {
            return Err(GameError::SpinInFlight);
        }
        self.is_spinning = true;
        self.chosen_color = Some(chosen_color);
        self.last_result = None;
        self.show_result = false;
        Ok(())
    }

    /// Called once the wheel animation has landed on `landed_color`.
    pub fn complete_spin(&mut self, landed_color: WheelColor) -> Result<RoundResult, GameError> {
        let chosen_color = match (self.is_spinning, self.chosen_color) {
            (true, Some(chosen)) => chosen,
            _ => return Err(GameError::NoSpinInFlight),
        };

        let result = RoundResult::new(chosen_color, landed_color);
        self.points += result.points;
        self.is_spinning = false;
        self.last_result = Some(result.clone());
        self.show_result = true;
        Ok(result)
    }

    /// Releases the guard when no outcome arrived, so nothing was animated.
    pub fn cancel_spin(&mut self) {
        self.is_spinning = false;
        self.chosen_color = None;
    }

    pub fn hide_result(&mut self) {
        self.show_result = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_awards_points() {
        let mut game = WheelGame::new();
        game.start_spin(WheelColor::Pink).unwrap();
        let result = game.complete_spin(WheelColor::Pink).unwrap();
        assert!(result.is_win());
        assert_eq!(result.message, "WIN!");
        assert_eq!(game.points, WIN_POINTS);
        assert!(!game.is_spinning);
        assert!(game.show_result);
    }

    #[test]
    fn test_loss_keeps_points() {
        let mut game = WheelGame::new();
        game.start_spin(WheelColor::Green).unwrap();
        game.complete_spin(WheelColor::Green).unwrap();
        game.start_spin(WheelColor::Green).unwrap();
        let result = game.complete_spin(WheelColor::Orange).unwrap();
        assert_eq!(result.outcome, Outcome::Lose);
        assert_eq!(result.landed_color, WheelColor::Orange);
        assert_eq!(game.points, WIN_POINTS);
    }

    #[test]
    fn test_overlapping_spin_rejected() {
        let mut game = WheelGame::new();
        game.start_spin(WheelColor::Orange).unwrap();
        assert_eq!(game.start_spin(WheelColor::Pink), Err(GameError::SpinInFlight));
        assert_eq!(game.chosen_color, Some(WheelColor::Orange));
    }

    #[test]
    fn test_complete_without_spin_rejected() {
        let mut game = WheelGame::new();
        assert_eq!(
            game.complete_spin(WheelColor::Orange),
            Err(GameError::NoSpinInFlight)
        );
    }

    #[test]
    fn test_cancel_releases_guard() {
        let mut game = WheelGame::new();
        game.start_spin(WheelColor::Orange).unwrap();
        game.cancel_spin();
        assert!(game.start_spin(WheelColor::Green).is_ok());
    }

    #[test]
    fn test_hide_result_keeps_last_round() {
        let mut game = WheelGame::new();
        game.start_spin(WheelColor::Orange).unwrap();
        game.complete_spin(WheelColor::Orange).unwrap();
        game.hide_result();
        assert!(!game.show_result);
        assert!(game.last_result.is_some());
        assert_eq!(game.points, WIN_POINTS);
    }
}
