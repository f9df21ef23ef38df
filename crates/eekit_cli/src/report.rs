use std::fmt;

use eekit_core::units::{NOT_AVAILABLE, format_resistance};
use eekit_core::{BandRole, CircuitMode, ColorBand, ColorCodeReading, RcParameters, RcTiming};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DecodeReport {
    pub bands: [ColorBand; 4],
    pub ohms: Option<f64>,
    pub resistance: String,
    pub tolerance_percent: Option<f64>,
    pub tolerance: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&ColorCodeReading> for DecodeReport {
    fn from(reading: &ColorCodeReading) -> Self {
        Self {
            bands: reading.bands,
            ohms: reading.resistance.as_ref().ok().map(|r| r.ohms),
            resistance: reading.resistance_label(),
            tolerance_percent: reading.tolerance,
            tolerance: reading.tolerance_label(),
            error: reading.resistance.as_ref().err().map(|e| e.to_string()),
        }
    }
}

impl fmt::Display for DecodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [b1, b2, b3, b4] = self.bands;
        writeln!(f, "bands:      {b1} {b2} {b3} {b4}")?;
        match &self.error {
            Some(error) => writeln!(f, "resistance: {} ({error})", self.resistance)?,
            None => writeln!(f, "resistance: {}", self.resistance)?,
        }
        write!(f, "tolerance:  {}", self.tolerance)
    }
}

#[derive(Debug, Serialize)]
pub struct NetworkReport {
    pub mode: CircuitMode,
    pub values: Vec<f64>,
    pub skipped: Vec<String>,
    pub ohms: f64,
    pub equivalent: String,
}

impl NetworkReport {
    pub fn new(mode: CircuitMode, values: Vec<f64>, skipped: Vec<String>, ohms: f64) -> Self {
        Self {
            mode,
            values,
            skipped,
            ohms,
            equivalent: format_resistance(ohms),
        }
    }
}

impl fmt::Display for NetworkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "mode:       {}", self.mode)?;
        if !self.skipped.is_empty() {
            writeln!(f, "skipped:    {}", self.skipped.join(", "))?;
        }
        write!(f, "equivalent: {}", self.equivalent)
    }
}

#[derive(Debug, Serialize)]
pub struct RcReport {
    pub parameters: RcParameters,
    pub time_constant_seconds: Option<f64>,
    pub charge_seconds: Option<f64>,
    pub discharge_seconds: Option<f64>,
    pub time_constant: String,
    pub charge: String,
    pub discharge: String,
}

impl RcReport {
    pub fn new(parameters: RcParameters, timing: &RcTiming) -> Self {
        Self {
            parameters,
            time_constant_seconds: timing.time_constant.ok(),
            charge_seconds: timing.charge.ok(),
            discharge_seconds: timing.discharge.ok(),
            time_constant: timing.time_constant_label(),
            charge: timing.charge_label(),
            discharge: timing.discharge_label(),
        }
    }
}

impl fmt::Display for RcReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "time constant (τ): {}", self.time_constant)?;
        writeln!(f, "charge time:       {}", self.charge)?;
        write!(f, "discharge time:    {}", self.discharge)
    }
}

fn multiplier_label(band: ColorBand) -> String {
    match band.multiplier() {
        Some(m) => format!("×{m}"),
        None => "-".to_string(),
    }
}

/// The color table with the roles each band can take.
pub fn band_table() -> String {
    let mut out = format!(
        "{:<8}{:<7}{:<12}{:<11}{}\n",
        "band", "digit", "multiplier", "tolerance", "roles"
    );
    for band in ColorBand::ALL {
        let digit = band
            .digit()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        let tolerance = band
            .tolerance()
            .map(|t| format!("±{t}%"))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let roles: Vec<&str> = BandRole::ALL
            .into_iter()
            .filter(|role| role.accepts(band))
            .map(|role| match role {
                BandRole::FirstDigit => "1",
                BandRole::SecondDigit => "2",
                BandRole::Multiplier => "3",
                BandRole::Tolerance => "4",
            })
            .collect();
        out.push_str(&format!(
            "{:<8}{:<7}{:<12}{:<11}{}\n",
            band.name(),
            digit,
            multiplier_label(band),
            tolerance,
            roles.join(",")
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use eekit_core::{estimate_rc, resolve_color_code};

    #[test]
    fn test_decode_report() {
        let reading = resolve_color_code(
            ColorBand::Yellow,
            ColorBand::Violet,
            ColorBand::Red,
            ColorBand::Gold,
        );
        let report = DecodeReport::from(&reading);
        assert_eq!(report.ohms, Some(4700.0));
        assert_eq!(
            report.to_string(),
            "bands:      Yellow Violet Red Gold\nresistance: 4.7 kΩ\ntolerance:  ±5%"
        );
    }

    #[test]
    fn test_invalid_decode_report() {
        let reading = resolve_color_code(
            ColorBand::Brown,
            ColorBand::Black,
            ColorBand::White,
            ColorBand::Black,
        );
        let report = DecodeReport::from(&reading);
        assert_eq!(report.ohms, None);
        insta::assert_snapshot!(report.error.clone().unwrap_or_default(), @"band 3 (White) has no multiplier");
        assert_eq!(
            report.to_string(),
            "bands:      Brown Black White Black\nresistance: Invalid Input (band 3 (White) has no multiplier)\ntolerance:  N/A"
        );
    }

    #[test]
    fn test_network_report() {
        let report = NetworkReport::new(
            CircuitMode::Parallel,
            vec![100.0, 100.0],
            vec!["abc".to_string()],
            50.0,
        );
        assert_eq!(
            report.to_string(),
            "mode:       parallel\nskipped:    abc\nequivalent: 50.00 Ω"
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mode"], "parallel");
        assert_eq!(json["ohms"], 50.0);
    }

    #[test]
    fn test_rc_report() {
        let params = RcParameters::new(1e-6, 1000.0, 5.0, 0.0);
        let report = RcReport::new(params, &estimate_rc(&params));
        assert_eq!(report.time_constant_seconds, Some(0.001));
        assert_eq!(report.discharge_seconds, None);
        assert_eq!(
            report.to_string(),
            "time constant (τ): 1.000 ms\ncharge time:       N/A\ndischarge time:    N/A"
        );
    }

    #[test]
    fn test_band_table() {
        let table = band_table();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 14);
        insta::assert_snapshot!(lines[11].trim_end(), @"Gold    -      ×0.1        ±5%        3,4");
        insta::assert_snapshot!(lines[13].trim_end(), @"None    -      -           ±20%       4");
    }
}
