use serde::Serialize;

use crate::error::Unavailable;
use crate::quantity::parse_number;
use crate::units::format_duration;

/// Inputs of the RC estimator. `None` means the field was left empty or is
/// not a number.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RcParameters {
    /// Farads.
    pub capacitance: Option<f64>,
    /// Ohms.
    pub resistance: Option<f64>,
    /// Volts; also the source voltage when charging.
    pub initial_voltage: Option<f64>,
    /// Volts.
    pub target_voltage: Option<f64>,
}

impl RcParameters {
    pub fn new(capacitance: f64, resistance: f64, initial_voltage: f64, target_voltage: f64) -> Self {
        Self {
            capacitance: Some(capacitance),
            resistance: Some(resistance),
            initial_voltage: Some(initial_voltage),
            target_voltage: Some(target_voltage),
        }
    }

    /// Reads raw form fields; anything that is not a finite number is absent.
    pub fn parse(capacitance: &str, resistance: &str, initial_voltage: &str, target_voltage: &str) -> Self {
        Self {
            capacitance: parse_number(capacitance),
            resistance: parse_number(resistance),
            initial_voltage: parse_number(initial_voltage),
            target_voltage: parse_number(target_voltage),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RcTiming {
    /// τ = R·C in seconds.
    pub time_constant: Result<f64, Unavailable>,
    /// Seconds to charge from 0 V towards the initial voltage until the target is reached.
    pub charge: Result<f64, Unavailable>,
    /// Seconds to discharge from the initial voltage down to the target.
    pub discharge: Result<f64, Unavailable>,
}

impl RcTiming {
    fn unavailable(reason: Unavailable) -> Self {
        Self {
            time_constant: Err(reason),
            charge: Err(reason),
            discharge: Err(reason),
        }
    }

    pub fn time_constant_label(&self) -> String {
        format_duration(self.time_constant)
    }

    pub fn charge_label(&self) -> String {
        format_duration(self.charge)
    }

    pub fn discharge_label(&self) -> String {
        format_duration(self.discharge)
    }
}

pub fn estimate_rc(params: &RcParameters) -> RcTiming {
    let tau = match time_constant(params) {
        Ok(tau) => tau,
        Err(reason) => {
            tracing::debug!(?params, %reason, "rc estimate withheld");
            return RcTiming::unavailable(reason);
        }
    };

    let ratio = voltage_ratio(params.initial_voltage, params.target_voltage);
    let charge = ratio.and_then(|ratio| duration(-tau * (1.0 - ratio).ln()));
    let discharge = ratio.and_then(|ratio| duration(-tau * ratio.ln()));

    tracing::trace!(tau, ?charge, ?discharge, "rc estimate");
    RcTiming {
        time_constant: Ok(tau),
        charge,
        discharge,
    }
}

fn component(value: Option<f64>) -> Result<f64, Unavailable> {
    match value {
        None => Err(Unavailable::IncompleteInput),
        Some(v) if v.is_finite() && v > 0.0 => Ok(v),
        Some(_) => Err(Unavailable::OutOfRange),
    }
}

fn time_constant(params: &RcParameters) -> Result<f64, Unavailable> {
    let capacitance = component(params.capacitance)?;
    let resistance = component(params.resistance)?;
    duration(resistance * capacitance)
}

// Vf / Vi inside the window 0 < Vf < Vi. Vf = 0 sits inside the window but
// ln(0) makes the discharge time infinite, so both durations are withheld.
fn voltage_ratio(initial: Option<f64>, target: Option<f64>) -> Result<f64, Unavailable> {
    let (Some(initial), Some(target)) = (initial, target) else {
        return Err(Unavailable::IncompleteInput);
    };
    if !(initial > 0.0 && target >= 0.0 && target < initial) {
        return Err(Unavailable::OutOfRange);
    }
    if target == 0.0 {
        return Err(Unavailable::Undefined);
    }
    Ok(target / initial)
}

fn duration(seconds: f64) -> Result<f64, Unavailable> {
    if seconds.is_finite() && seconds >= 0.0 {
        // -0.0 becomes 0.0
        Ok(seconds.abs())
    } else {
        Err(Unavailable::Undefined)
    }
}
