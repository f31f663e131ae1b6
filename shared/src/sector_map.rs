use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SpinError;

/// The three wheel colors. The discriminant is the color index the game
/// contract uses for `chosenColor` / `resultColor`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum WheelColor {
    Orange = 0,
    Pink = 1,
    Green = 2,
}

impl WheelColor {
    pub const ALL: [WheelColor; 3] = [WheelColor::Orange, WheelColor::Pink, WheelColor::Green];

    pub fn from_index(index: u8) -> Result<Self, SpinError> {
        match index {
            0 => Ok(Self::Orange),
            1 => Ok(Self::Pink),
            2 => Ok(Self::Green),
            other => Err(SpinError::InvalidTargetColor(other)),
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Orange => "ORANGE",
            Self::Pink => "PINK",
            Self::Green => "GREEN",
        }
    }

    /// Swatch color used for buttons and the result banner.
    pub fn hex(self) -> &'static str {
        match self {
            Self::Orange => "#ff9a2d",
            Self::Pink => "#ee4d9f",
            Self::Green => "#4ddc4d",
        }
    }
}

impl TryFrom<u8> for WheelColor {
    type Error = SpinError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

impl FromStr for WheelColor {
    type Err = SpinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ORANGE" => Ok(Self::Orange),
            "PINK" => Ok(Self::Pink),
            "GREEN" => Ok(Self::Green),
            _ => Err(SpinError::UnknownColorName(s.to_string())),
        }
    }
}

impl fmt::Display for WheelColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fixed angular range of the wheel, inclusive at both ends.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Sector {
    pub start: f64,
    pub end: f64,
    pub color: WheelColor,
}

impl Sector {
    pub const fn new(start: f64, end: f64, color: WheelColor) -> Self {
        Self { start, end, color }
    }

    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.start && angle <= self.end
    }

    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

// Matches the artwork of the wheel image. Adjacent sectors are offset by one
// degree so no boundary value belongs to two sectors.
pub const COLOR_SECTORS: [Sector; 3] = [
    Sector::new(0.0, 120.0, WheelColor::Green),
    Sector::new(121.0, 240.0, WheelColor::Pink),
    Sector::new(241.0, 360.0, WheelColor::Orange),
];

/// Angle to color lookup over [`COLOR_SECTORS`].
pub struct SectorMap;

impl SectorMap {
    /// Brings any angle, including negative ones, into `[0, 360)`.
    pub fn normalize(angle: f64) -> f64 {
        ((angle % 360.0) + 360.0) % 360.0
    }

    pub fn lookup(angle: f64) -> WheelColor {
        let normalized = Self::normalize(angle);
        COLOR_SECTORS
            .iter()
            .find(|sector| sector.contains(normalized))
            .map(|sector| sector.color)
            // The one-degree seams between sectors fall through to the last
            // sector, which also owns the wrap point.
            .unwrap_or(COLOR_SECTORS[COLOR_SECTORS.len() - 1].color)
    }

    pub fn sector_of(color: WheelColor) -> &'static Sector {
        match color {
            WheelColor::Green => &COLOR_SECTORS[0],
            WheelColor::Pink => &COLOR_SECTORS[1],
            WheelColor::Orange => &COLOR_SECTORS[2],
        }
    }

    pub fn center_of(color: WheelColor) -> f64 {
        Self::sector_of(color).center()
    }
}
