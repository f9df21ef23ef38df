use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ColorCodeError, ParseBandError};
use crate::units::{Resistance, ResistanceUnit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum ColorBand {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Gray,
    White,
    Gold,
    Silver,
    None,
}

/// What a band encodes in each position it can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandAttributes {
    pub digit: Option<u8>,
    /// Power of ten applied by a multiplier band.
    pub multiplier_exponent: Option<i8>,
    /// Tolerance in percent.
    pub tolerance: Option<f64>,
}

const fn attrs(digit: Option<u8>, multiplier_exponent: Option<i8>, tolerance: Option<f64>) -> BandAttributes {
    BandAttributes {
        digit,
        multiplier_exponent,
        tolerance,
    }
}

// indexed by `ColorBand as usize`
const BAND_TABLE: [BandAttributes; 13] = [
    attrs(Some(0), Some(0), None),
    attrs(Some(1), Some(1), Some(1.0)),
    attrs(Some(2), Some(2), Some(2.0)),
    attrs(Some(3), Some(3), None),
    attrs(Some(4), Some(4), None),
    attrs(Some(5), Some(5), Some(0.5)),
    attrs(Some(6), Some(6), Some(0.25)),
    attrs(Some(7), Some(7), Some(0.1)),
    attrs(Some(8), None, Some(0.05)),
    attrs(Some(9), None, None),
    attrs(None, Some(-1), Some(5.0)),
    attrs(None, Some(-2), Some(10.0)),
    attrs(None, None, Some(20.0)),
];

impl ColorBand {
    pub const ALL: [ColorBand; 13] = [
        ColorBand::Black,
        ColorBand::Brown,
        ColorBand::Red,
        ColorBand::Orange,
        ColorBand::Yellow,
        ColorBand::Green,
        ColorBand::Blue,
        ColorBand::Violet,
        ColorBand::Gray,
        ColorBand::White,
        ColorBand::Gold,
        ColorBand::Silver,
        ColorBand::None,
    ];

    pub const fn attributes(self) -> BandAttributes {
        BAND_TABLE[self as usize]
    }

    pub const fn digit(self) -> Option<u8> {
        self.attributes().digit
    }

    pub const fn multiplier_exponent(self) -> Option<i8> {
        self.attributes().multiplier_exponent
    }

    pub fn multiplier(self) -> Option<f64> {
        self.multiplier_exponent().map(|e| 10f64.powi(e.into()))
    }

    pub const fn tolerance(self) -> Option<f64> {
        self.attributes().tolerance
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorBand::Black => "Black",
            ColorBand::Brown => "Brown",
            ColorBand::Red => "Red",
            ColorBand::Orange => "Orange",
            ColorBand::Yellow => "Yellow",
            ColorBand::Green => "Green",
            ColorBand::Blue => "Blue",
            ColorBand::Violet => "Violet",
            ColorBand::Gray => "Gray",
            ColorBand::White => "White",
            ColorBand::Gold => "Gold",
            ColorBand::Silver => "Silver",
            ColorBand::None => "None",
        }
    }

    /// Bands selectable for `role`, in table order.
    pub fn choices(role: BandRole) -> impl Iterator<Item = ColorBand> {
        ColorBand::ALL.into_iter().filter(move |band| role.accepts(*band))
    }
}

impl fmt::Display for ColorBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorBand {
    type Err = ParseBandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("grey") {
            return Ok(ColorBand::Gray);
        }
        ColorBand::ALL
            .into_iter()
            .find(|band| band.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseBandError(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BandRole {
    FirstDigit,
    SecondDigit,
    Multiplier,
    Tolerance,
}

impl BandRole {
    pub const ALL: [BandRole; 4] = [
        BandRole::FirstDigit,
        BandRole::SecondDigit,
        BandRole::Multiplier,
        BandRole::Tolerance,
    ];

    pub fn accepts(self, band: ColorBand) -> bool {
        match self {
            BandRole::FirstDigit | BandRole::SecondDigit => band.digit().is_some(),
            BandRole::Multiplier => band.multiplier_exponent().is_some(),
            BandRole::Tolerance => band.tolerance().is_some(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BandRole::FirstDigit => "Band 1 (First Digit)",
            BandRole::SecondDigit => "Band 2 (Second Digit)",
            BandRole::Multiplier => "Band 3 (Multiplier)",
            BandRole::Tolerance => "Band 4 (Tolerance)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorCodeReading {
    pub bands: [ColorBand; 4],
    pub resistance: Result<Resistance, ColorCodeError>,
    /// Percent; `None` when the fourth band encodes no tolerance.
    pub tolerance: Option<f64>,
}

impl ColorCodeReading {
    pub fn resistance_label(&self) -> String {
        match &self.resistance {
            Ok(resistance) => resistance.to_string(),
            Err(_) => "Invalid Input".to_string(),
        }
    }

    pub fn tolerance_label(&self) -> String {
        match self.tolerance {
            Some(tolerance) => format!("±{tolerance}%"),
            None => "N/A".to_string(),
        }
    }
}

impl fmt::Display for ColorCodeReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.resistance_label(), self.tolerance_label())
    }
}

/// Decodes a 4-band resistor: two digits, a multiplier and a tolerance.
pub fn resolve_color_code(
    band1: ColorBand,
    band2: ColorBand,
    band3: ColorBand,
    band4: ColorBand,
) -> ColorCodeReading {
    ColorCodeReading {
        bands: [band1, band2, band3, band4],
        resistance: decode_resistance(band1, band2, band3),
        tolerance: band4.tolerance(),
    }
}

fn decode_resistance(
    band1: ColorBand,
    band2: ColorBand,
    band3: ColorBand,
) -> Result<Resistance, ColorCodeError> {
    let d1 = band1.digit().ok_or(ColorCodeError::NotADigit {
        position: 1,
        band: band1,
    })?;
    let d2 = band2.digit().ok_or(ColorCodeError::NotADigit {
        position: 2,
        band: band2,
    })?;
    let exponent = band3
        .multiplier_exponent()
        .ok_or(ColorCodeError::NotAMultiplier { band: band3 })?;

    let significand = u64::from(d1 * 10 + d2);
    Ok(exact_resistance(significand, exponent))
}

// Keeps numerator and denominator as exact integers so the single division
// rounds to the double nearest the decimal value (33 x 0.1 shows as 3.3).
fn exact_resistance(significand: u64, exponent: i8) -> Resistance {
    let (numerator, denominator) = if exponent >= 0 {
        (significand * 10u64.pow(exponent.unsigned_abs().into()), 1)
    } else {
        (significand, 10u64.pow(exponent.unsigned_abs().into()))
    };
    let ohms = numerator as f64 / denominator as f64;
    let unit = ResistanceUnit::for_ohms(ohms);
    Resistance {
        ohms,
        magnitude: numerator as f64 / (denominator as f64 * unit.divisor()),
        unit,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResistorSpec {
    pub bands: [ColorBand; 4],
}

impl Default for ResistorSpec {
    fn default() -> Self {
        Self {
            bands: [
                ColorBand::Brown,
                ColorBand::Black,
                ColorBand::Red,
                ColorBand::Gold,
            ],
        }
    }
}

impl ResistorSpec {
    pub fn band(&self, role: BandRole) -> ColorBand {
        self.bands[role as usize]
    }

    pub fn set_band(&mut self, role: BandRole, band: ColorBand) {
        self.bands[role as usize] = band;
    }

    pub fn resolve(&self) -> ColorCodeReading {
        let [b1, b2, b3, b4] = self.bands;
        resolve_color_code(b1, b2, b3, b4)
    }
}
