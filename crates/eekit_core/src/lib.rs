//! Computation core of the EE toolkit: a 4-band resistor color-code decoder,
//! a series/parallel network reducer and an RC charge/discharge estimator.
//! Every calculator is a pure function of its inputs.

pub mod color_code;
pub mod error;
pub mod network;
pub mod quantity;
pub mod rc_timing;
pub mod units;

pub use color_code::{BandRole, ColorBand, ColorCodeReading, ResistorSpec, resolve_color_code};
pub use error::Unavailable;
pub use network::{CircuitMode, EntryId, ResistorEntry, ResistorList, reduce_network, reduce_values};
pub use quantity::{parse_number, parse_quantity};
pub use rc_timing::{RcParameters, RcTiming, estimate_rc};
pub use units::{Resistance, ResistanceUnit, format_duration, format_resistance, scale_resistance};
