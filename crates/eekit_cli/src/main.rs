use anyhow::Result;
use clap::{Parser, Subcommand};
use eekit_core::quantity::parse_quantity;
use eekit_core::{CircuitMode, ColorBand, RcParameters, error::QuantityError};
use serde::Serialize;

use crate::report::{DecodeReport, NetworkReport, RcReport, band_table};

mod report;
mod tui;

#[derive(Parser, Debug)]
#[command(name = "eekit", about = "Resistor and RC calculators for EE students", version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a 4-band resistor color code
    Decode {
        /// First digit band
        band1: ColorBand,
        /// Second digit band
        band2: ColorBand,
        /// Multiplier band
        band3: ColorBand,
        /// Tolerance band
        band4: ColorBand,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Equivalent resistance of resistors in series or parallel
    Network {
        #[arg(long, short, default_value = "series")]
        mode: CircuitMode,
        /// Resistor values in ohms, engineering notation allowed (4.7k, 1Meg)
        #[arg(value_name = "OHMS", required = true, allow_negative_numbers = true)]
        values: Vec<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Time constant and charge/discharge times of an RC circuit
    Rc {
        /// Capacitance in farads (10u, 100n, ...)
        #[arg(long, short, value_parser = quantity)]
        capacitance: f64,
        /// Resistance in ohms (4.7k, 1Meg, ...)
        #[arg(long, short, value_parser = quantity)]
        resistance: f64,
        /// Initial (source) voltage
        #[arg(long, short, allow_negative_numbers = true, value_parser = quantity)]
        initial: Option<f64>,
        /// Target voltage
        #[arg(long, short, allow_negative_numbers = true, value_parser = quantity)]
        target: Option<f64>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the color bands and what they encode
    Bands,
    /// Run the interactive calculators
    Tui,
}

fn quantity(s: &str) -> Result<f64, QuantityError> {
    parse_quantity(s)
}

fn emit<T: Serialize + std::fmt::Display>(report: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

/// Reads each value as engineering notation, setting aside the malformed and
/// non-positive ones, and reduces the rest.
fn network_report(mode: CircuitMode, values: Vec<String>) -> NetworkReport {
    let mut parsed = Vec::with_capacity(values.len());
    let mut skipped = Vec::new();
    for raw in values {
        match parse_quantity(&raw) {
            Ok(v) if v > 0.0 => parsed.push(v),
            Ok(v) => {
                tracing::warn!(value = v, "skipping non-positive resistor value");
                skipped.push(raw);
            }
            Err(err) => {
                tracing::warn!(%raw, %err, "skipping malformed resistor value");
                skipped.push(raw);
            }
        }
    }
    let ohms = eekit_core::reduce_values(&parsed, mode);
    NetworkReport::new(mode, parsed, skipped, ohms)
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Decode {
            band1,
            band2,
            band3,
            band4,
            json,
        } => {
            let reading = eekit_core::resolve_color_code(band1, band2, band3, band4);
            emit(&DecodeReport::from(&reading), json)
        }
        Command::Network { mode, values, json } => emit(&network_report(mode, values), json),
        Command::Rc {
            capacitance,
            resistance,
            initial,
            target,
            json,
        } => {
            let params = RcParameters {
                capacitance: Some(capacitance),
                resistance: Some(resistance),
                initial_voltage: initial,
                target_voltage: target,
            };
            let timing = eekit_core::estimate_rc(&params);
            emit(&RcReport::new(params, &timing), json)
        }
        Command::Bands => {
            print!("{}", band_table());
            Ok(())
        }
        Command::Tui => tui::run_tui(),
    }
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_decode() {
        let args = Args::try_parse_from(["eekit", "decode", "brown", "black", "red", "gold"]).unwrap();
        match args.command {
            Command::Decode { band1, band4, json, .. } => {
                assert_eq!(band1, ColorBand::Brown);
                assert_eq!(band4, ColorBand::Gold);
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_unknown_band_is_usage_error() {
        let err = Args::try_parse_from(["eekit", "decode", "purple", "black", "red", "gold"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_parse_rc_engineering_notation() {
        let args = Args::try_parse_from(["eekit", "rc", "-c", "1u", "-r", "1k", "-i", "5", "-t", "2.5"]).unwrap();
        match args.command {
            Command::Rc {
                capacitance,
                resistance,
                initial,
                target,
                ..
            } => {
                assert!((capacitance - 1e-6).abs() < 1e-18);
                assert_eq!(resistance, 1000.0);
                assert_eq!(initial, Some(5.0));
                assert_eq!(target, Some(2.5));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_network_with_negative_value() {
        let args = Args::try_parse_from(["eekit", "network", "-m", "parallel", "100", "-5"]).unwrap();
        match args.command {
            Command::Network { mode, values, .. } => {
                assert_eq!(mode, CircuitMode::Parallel);
                assert_eq!(values, vec!["100", "-5"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_network_report_skips_unusable_values() {
        let values = ["4.7k", "abc", "-5", "0"].map(String::from).to_vec();
        let report = network_report(CircuitMode::Series, values);
        assert_eq!(report.values, vec![4700.0]);
        assert_eq!(report.skipped, vec!["abc", "-5", "0"]);
        assert_eq!(report.ohms, 4700.0);
        insta::assert_snapshot!(report.equivalent, @"4.70 kΩ");
    }

    #[test]
    fn test_network_report_reads_megaohms() {
        let values = ["2.2MΩ", "2.2MΩ"].map(String::from).to_vec();
        let report = network_report(CircuitMode::Parallel, values);
        assert!(report.skipped.is_empty());
        assert!((report.ohms - 1.1e6).abs() < 1e-6);
        insta::assert_snapshot!(report.equivalent, @"1.10 MΩ");
    }
}
