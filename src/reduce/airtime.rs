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

use crate::trace::{PhyState, StateRecord};

/// Per-node and total transmission durations for one trace.
#[derive(Debug, Clone, Default)]
pub struct AirtimeTotals {
    per_node: Vec<f64>,
    pub total: f64,
}

impl AirtimeTotals {
    pub fn tx_time(&self, node: usize) -> f64 {
        self.per_node.get(node).copied().unwrap_or(0.0)
    }
}

/// Sum the TX durations per node after the warmup cutoff.
pub fn transmit_times(records: &[StateRecord], warmup: f64) -> AirtimeTotals {
    let mut totals = AirtimeTotals::default();
    for r in records {
        if r.time < warmup || r.state != PhyState::Tx {
            continue;
        }
        if totals.per_node.len() <= r.node {
            totals.per_node.resize(r.node + 1, 0.0);
        }
        totals.per_node[r.node] += r.duration;
        totals.total += r.duration;
    }
    totals
}

#[cfg(test)]
mod test {
    use super::*;

    fn rec(time: f64, node: usize, state: PhyState, duration: f64) -> StateRecord {
        StateRecord {
            time,
            node,
            state,
            start: time - duration,
            duration,
        }
    }

    #[test]
    fn sums_tx_durations_per_node() {
        let records = vec![
            rec(0.9, 0, PhyState::Tx, 0.5),
            rec(1.2, 0, PhyState::Tx, 0.1),
            rec(1.5, 2, PhyState::Tx, 0.2),
            rec(1.8, 0, PhyState::Idle, 0.3),
            rec(2.0, 0, PhyState::Tx, 0.05),
        ];
        let totals = transmit_times(&records, 1.0);
        assert!((totals.tx_time(0) - 0.15).abs() < 1e-12);
        assert_eq!(totals.tx_time(1), 0.0);
        assert!((totals.tx_time(2) - 0.2).abs() < 1e-12);
        assert!((totals.total - 0.35).abs() < 1e-12);
        assert_eq!(totals.tx_time(9), 0.0);
    }
}
