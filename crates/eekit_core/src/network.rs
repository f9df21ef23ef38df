use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{NetworkError, ParseModeError};
use crate::quantity::parse_number;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CircuitMode {
    #[default]
    Series,
    Parallel,
}

impl CircuitMode {
    pub fn toggle(self) -> CircuitMode {
        match self {
            CircuitMode::Series => CircuitMode::Parallel,
            CircuitMode::Parallel => CircuitMode::Series,
        }
    }
}

impl fmt::Display for CircuitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CircuitMode::Series => f.write_str("series"),
            CircuitMode::Parallel => f.write_str("parallel"),
        }
    }
}

impl FromStr for CircuitMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "series" | "s" => Ok(CircuitMode::Series),
            "parallel" | "p" => Ok(CircuitMode::Parallel),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Equivalent resistance of raw form entries. Entries that do not parse, are
/// not finite or are not positive are skipped; no usable entry gives 0.
pub fn reduce_network<S: AsRef<str>>(values: &[S], mode: CircuitMode) -> f64 {
    let parsed: Vec<f64> = values
        .iter()
        .filter_map(|raw| {
            let raw = raw.as_ref();
            let value = parse_number(raw);
            if value.is_none() && !raw.trim().is_empty() {
                tracing::debug!(raw, "skipping unparseable resistor value");
            }
            value
        })
        .collect();
    reduce_values(&parsed, mode)
}

/// Typed variant of [`reduce_network`], applying the same exclusion rule.
pub fn reduce_values(values: &[f64], mode: CircuitMode) -> f64 {
    let valid = values.iter().copied().filter(|v| {
        let keep = v.is_finite() && *v > 0.0;
        if !keep {
            tracing::debug!(value = v, "skipping non-positive resistor value");
        }
        keep
    });

    match mode {
        CircuitMode::Series => valid.sum(),
        CircuitMode::Parallel => {
            let reciprocal_sum: f64 = valid.map(|v| 1.0 / v).sum();
            if reciprocal_sum == 0.0 {
                0.0
            } else {
                1.0 / reciprocal_sum
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EntryId(u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResistorEntry {
    pub id: EntryId,
    pub raw: String,
}

/// Ordered resistor values as typed by the user. Ids come from a counter
/// that only grows, so an id never refers to a different entry later.
#[derive(Debug, Clone, Serialize)]
pub struct ResistorList {
    entries: Vec<ResistorEntry>,
    next_id: u64,
}

impl Default for ResistorList {
    fn default() -> Self {
        Self::new()
    }
}

impl ResistorList {
    /// Starts with a single empty entry.
    pub fn new() -> Self {
        let mut list = Self {
            entries: Vec::new(),
            next_id: 1,
        };
        list.push();
        list
    }

    pub fn entries(&self) -> &[ResistorEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&ResistorEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn entry_mut(&mut self, id: EntryId) -> Option<&mut ResistorEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Appends an empty entry and returns its id.
    pub fn push(&mut self) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(ResistorEntry {
            id,
            raw: String::new(),
        });
        id
    }

    pub fn remove(&mut self, id: EntryId) -> Result<ResistorEntry, NetworkError> {
        let pos = self.position(id).ok_or(NetworkError::UnknownEntry(id))?;
        if self.entries.len() == 1 {
            return Err(NetworkError::LastEntry);
        }
        Ok(self.entries.remove(pos))
    }

    pub fn update(&mut self, id: EntryId, raw: impl Into<String>) -> Result<(), NetworkError> {
        let entry = self.entry_mut(id).ok_or(NetworkError::UnknownEntry(id))?;
        entry.raw = raw.into();
        Ok(())
    }

    pub fn raw_values(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.raw.as_str()).collect()
    }

    pub fn equivalent(&self, mode: CircuitMode) -> f64 {
        reduce_network(self.raw_values().as_slice(), mode)
    }
}
