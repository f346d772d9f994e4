// SWSTAT: Aggregate Statistics and Plots for Simple-Wireless Simulation Traces
// Copyright (C) 2024-2025 the swstat developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//! Parsers for the fixed-format text traces written by the simulation
//! experiments.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use lazy_static::lazy_static;
use regex::Regex;

#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed trace line: {0:?}")]
    MalformedLine(String),
    #[error("Unknown PHY state: {0:?}")]
    UnknownState(String),
    #[error("Line {line} has no column {column}")]
    MissingColumn { line: usize, column: usize },
    #[error("Line {line} holds a non-numeric token {token:?} in column {column}")]
    InvalidNumber {
        line: usize,
        column: usize,
        token: String,
    },
}

/// States reported by the PHY state trace. The trace source suppresses
/// `CCA_BUSY` records, but the label still occurs in traces collected
/// with that filter removed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum_macros::EnumString,
)]
pub enum PhyState {
    #[strum(serialize = "IDLE")]
    Idle,
    #[strum(serialize = "CCA_BUSY")]
    CcaBusy,
    #[strum(serialize = "TX")]
    Tx,
    #[strum(serialize = "RX")]
    Rx,
    #[strum(serialize = "SWITCHING")]
    Switching,
    #[strum(serialize = "SLEEP")]
    Sleep,
    #[strum(serialize = "OFF")]
    Off,
}

/// One line of a PHY state trace, e.g.
/// `0.014941 0 state: IDLE start: 0.000000 duration 0.014941`.
///
/// `time` is the end of the reported interval, so `time = start + duration`;
/// records of a single node are chronologically ordered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateRecord {
    pub time: f64,
    pub node: usize,
    pub state: PhyState,
    pub start: f64,
    pub duration: f64,
}

lazy_static! {
    static ref STATE_RE: Regex =
        Regex::new(r"^\s*(\S+)\s+(\d+)\s+state:\s+(\S+)\s+start:\s+(\S+)\s+duration\s+(\S+)\s*$")
            .unwrap();
}

impl FromStr for StateRecord {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = STATE_RE
            .captures(s)
            .ok_or_else(|| TraceError::MalformedLine(s.to_string()))?;
        let num = |i: usize| {
            caps[i]
                .parse::<f64>()
                .map_err(|_| TraceError::MalformedLine(s.to_string()))
        };
        let state = caps[3]
            .parse::<PhyState>()
            .map_err(|_| TraceError::UnknownState(caps[3].to_string()))?;
        Ok(StateRecord {
            time: num(1)?,
            node: caps[2]
                .parse()
                .map_err(|_| TraceError::MalformedLine(s.to_string()))?,
            state,
            start: num(4)?,
            duration: num(5)?,
        })
    }
}

/// Read a complete PHY state trace. Blank lines are skipped, anything
/// else must parse as a [`StateRecord`].
pub fn read_state_trace(path: impl AsRef<Path>) -> Result<Vec<StateRecord>, TraceError> {
    let file = File::open(path.as_ref())?;
    let mut records = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(line.parse()?);
    }
    Ok(records)
}

/// One line of a receive-event trace: `<timestamp> <bytes>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RxEvent {
    pub time: f64,
    pub bytes: u64,
}

/// Read a receive-event trace. Lines starting with `#` are comments.
pub fn read_receive_trace(path: impl AsRef<Path>) -> Result<Vec<RxEvent>, TraceError> {
    let file = File::open(path.as_ref())?;
    let mut events = Vec::new();
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        if tokens.len() < 2 {
            return Err(TraceError::MalformedLine(line.clone()));
        }
        let time = tokens[0].parse().map_err(|_| TraceError::InvalidNumber {
            line: i + 1,
            column: 0,
            token: tokens[0].to_string(),
        })?;
        let bytes = tokens[1].parse().map_err(|_| TraceError::InvalidNumber {
            line: i + 1,
            column: 1,
            token: tokens[1].to_string(),
        })?;
        events.push(RxEvent { time, bytes });
    }
    Ok(events)
}

/// One line of a measurement trace: `<timestamp> <categoryId> ...` with
/// further value columns at fixed positions.
///
/// `fields` keeps every token of the line, so value-column indices count
/// from the start of the line.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub time: f64,
    pub cell: String,
    pub fields: Vec<String>,
}

impl Measurement {
    pub fn value(&self, column: usize) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

/// Read a measurement trace. Lines starting with `#` are comments.
pub fn read_measurements(path: impl AsRef<Path>) -> Result<Vec<Measurement>, TraceError> {
    let file = File::open(path.as_ref())?;
    let mut measurements = Vec::new();
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let fields: Vec<String> = trimmed.split_whitespace().map(str::to_string).collect();
        if fields.len() < 2 {
            return Err(TraceError::MalformedLine(line.clone()));
        }
        let time = fields[0].parse().map_err(|_| TraceError::InvalidNumber {
            line: i + 1,
            column: 0,
            token: fields[0].clone(),
        })?;
        let cell = fields[1].clone();
        measurements.push(Measurement { time, cell, fields });
    }
    Ok(measurements)
}

/// Read an arbitrary whitespace-delimited file into rows of tokens.
/// Comment (`#`) and blank lines are skipped.
pub fn read_rows(path: impl AsRef<Path>) -> Result<Vec<Vec<String>>, TraceError> {
    let file = File::open(path.as_ref())?;
    let mut rows = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        rows.push(trimmed.split_whitespace().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Extract one numeric column from parsed rows. Row numbers in errors are
/// 1-based over the data rows.
pub fn column(rows: &[Vec<String>], col: usize) -> Result<Vec<f64>, TraceError> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let token = row.get(col).ok_or(TraceError::MissingColumn {
                line: i + 1,
                column: col,
            })?;
            token.parse().map_err(|_| TraceError::InvalidNumber {
                line: i + 1,
                column: col,
                token: token.clone(),
            })
        })
        .collect()
}
