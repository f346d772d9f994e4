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
//! Row types written to the space-delimited derived data files.

use std::{fs, path::Path};

use serde::{Serialize, Serializer};

/// The derived files use fixed 6-decimal formatting; shortest-float
/// serialization would vary the column width between rows.
fn serialize_fixed<S: Serializer>(x: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{x:.6}"))
}

#[derive(Debug, Serialize)]
/// Idle time observed for one network size.
pub struct SizeIdleTime {
    pub size: usize,
    #[serde(serialize_with = "serialize_fixed")]
    pub idle_time: f64,
}

#[derive(Debug, Serialize)]
/// Success/collision counts of a single node.
pub struct NodeContention {
    pub node: usize,
    pub successes: u64,
    pub collisions: u64,
    #[serde(serialize_with = "serialize_fixed")]
    pub probability: f64,
}

#[derive(Debug, Serialize)]
/// Aggregate success/collision counts for one network size.
pub struct SizeContention {
    pub size: usize,
    pub successes: u64,
    pub collisions: u64,
    #[serde(serialize_with = "serialize_fixed")]
    pub probability: f64,
}

#[derive(Debug, Serialize)]
/// Total transmission time of a single node.
pub struct NodeTxTime {
    pub node: usize,
    #[serde(serialize_with = "serialize_fixed")]
    pub tx_time: f64,
}

#[derive(Debug, Serialize)]
/// One point of a binned rate series.
pub struct RatePoint {
    #[serde(serialize_with = "serialize_fixed")]
    pub time: f64,
    #[serde(serialize_with = "serialize_fixed")]
    pub rate: f64,
}

/// Writer for the derived data files: space-separated columns, one record
/// per line, no header row.
pub fn dat_writer(path: impl AsRef<Path>) -> std::io::Result<csv::Writer<fs::File>> {
    Ok(csv::WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .from_writer(
            fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)?,
        ))
}

#[cfg(test)]
mod test {
    use super::*;

    fn to_string(rows: impl FnOnce(&mut csv::Writer<Vec<u8>>)) -> String {
        let mut csv = csv::WriterBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .from_writer(vec![]);
        rows(&mut csv);
        csv.flush().unwrap();
        String::from_utf8(csv.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn node_contention_rows() {
        let ser = to_string(|csv| {
            csv.serialize(NodeContention {
                node: 3,
                successes: 1,
                collisions: 2,
                probability: 1.0 / 3.0,
            })
            .unwrap();
            csv.serialize(NodeContention {
                node: 4,
                successes: 0,
                collisions: 0,
                probability: f64::NAN,
            })
            .unwrap();
        });
        assert_eq!(ser, "3 1 2 0.333333\n4 0 0 NaN\n");
    }

    #[test]
    fn fixed_precision_rows() {
        let ser = to_string(|csv| {
            csv.serialize(SizeIdleTime {
                size: 10,
                idle_time: 0.5 + 0.2,
            })
            .unwrap();
            csv.serialize(NodeTxTime {
                node: 0,
                tx_time: 0.000104,
            })
            .unwrap();
        });
        assert_eq!(ser, "10 0.700000\n0 0.000104\n");
    }
}
