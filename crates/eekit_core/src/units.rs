use std::fmt;

use serde::Serialize;

use crate::error::Unavailable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResistanceUnit {
    Ohm,
    Kiloohm,
    Megaohm,
}

impl ResistanceUnit {
    /// Picks the display unit for a raw value in ohms.
    pub fn for_ohms(ohms: f64) -> ResistanceUnit {
        if ohms >= 1e6 {
            ResistanceUnit::Megaohm
        } else if ohms >= 1e3 {
            ResistanceUnit::Kiloohm
        } else {
            ResistanceUnit::Ohm
        }
    }

    pub fn divisor(&self) -> f64 {
        match self {
            ResistanceUnit::Ohm => 1.0,
            ResistanceUnit::Kiloohm => 1e3,
            ResistanceUnit::Megaohm => 1e6,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ResistanceUnit::Ohm => "Ω",
            ResistanceUnit::Kiloohm => "kΩ",
            ResistanceUnit::Megaohm => "MΩ",
        }
    }
}

impl fmt::Display for ResistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A resistance expressed in its display unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Resistance {
    pub ohms: f64,
    pub magnitude: f64,
    pub unit: ResistanceUnit,
}

impl Resistance {
    pub fn precision(&self, decimals: usize) -> PreciseResistance<'_> {
        PreciseResistance {
            resistance: self,
            decimals,
        }
    }
}

/// Shortest form, e.g. `4.7 kΩ`.
impl fmt::Display for Resistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}

pub struct PreciseResistance<'a> {
    resistance: &'a Resistance,
    decimals: usize,
}

impl fmt::Display for PreciseResistance<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.*} {}",
            self.decimals, self.resistance.magnitude, self.resistance.unit
        )
    }
}

pub fn scale_resistance(ohms: f64) -> Resistance {
    let unit = ResistanceUnit::for_ohms(ohms);
    Resistance {
        ohms,
        magnitude: ohms / unit.divisor(),
        unit,
    }
}

/// Equivalent-resistance rendering used by the network calculator: two
/// decimal places, e.g. `1.50 kΩ`.
pub fn format_resistance(ohms: f64) -> String {
    scale_resistance(ohms).precision(2).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
}

impl TimeUnit {
    pub fn for_seconds(seconds: f64) -> TimeUnit {
        match seconds {
            s if s < 1e-6 => TimeUnit::Nanoseconds,
            s if s < 1e-3 => TimeUnit::Microseconds,
            s if s < 1.0 => TimeUnit::Milliseconds,
            s if s < 60.0 => TimeUnit::Seconds,
            s if s < 3600.0 => TimeUnit::Minutes,
            _ => TimeUnit::Hours,
        }
    }

    /// Factor converting seconds into this unit.
    pub fn scale(&self) -> f64 {
        match self {
            TimeUnit::Nanoseconds => 1e9,
            TimeUnit::Microseconds => 1e6,
            TimeUnit::Milliseconds => 1e3,
            TimeUnit::Seconds => 1.0,
            TimeUnit::Minutes => 1.0 / 60.0,
            TimeUnit::Hours => 1.0 / 3600.0,
        }
    }

    pub fn decimals(&self) -> usize {
        match self {
            TimeUnit::Minutes | TimeUnit::Hours => 2,
            _ => 3,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "ns",
            TimeUnit::Microseconds => "µs",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "min",
            TimeUnit::Hours => "hr",
        }
    }
}

pub const NOT_AVAILABLE: &str = "N/A";
pub const INVALID: &str = "Invalid";

pub fn format_seconds(seconds: f64) -> String {
    if !seconds.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    if seconds < 0.0 {
        return INVALID.to_string();
    }
    // folds -0.0 into 0.0
    let seconds = seconds.abs();
    let unit = TimeUnit::for_seconds(seconds);
    let scaled = match unit {
        // dividing keeps minutes/hours exact for whole multiples
        TimeUnit::Minutes => seconds / 60.0,
        TimeUnit::Hours => seconds / 3600.0,
        _ => seconds * unit.scale(),
    };
    format!("{:.*} {}", unit.decimals(), scaled, unit.symbol())
}

/// Renders an estimate in the largest sensible unit, or `N/A`.
pub fn format_duration(estimate: Result<f64, Unavailable>) -> String {
    match estimate {
        Ok(seconds) => format_seconds(seconds),
        Err(_) => NOT_AVAILABLE.to_string(),
    }
}
