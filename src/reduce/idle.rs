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

/// Total idle time observed on `node` after the warmup cutoff.
///
/// The first qualifying record may describe an idle interval that began
/// before the cutoff, so it contributes `time - warmup` rather than its
/// reported duration; every later qualifying record contributes its full
/// duration.
pub fn node_idle_time(records: &[StateRecord], node: usize, warmup: f64) -> f64 {
    let mut idle_time = 0.0;
    let mut first = true;
    for r in records {
        if r.time < warmup || r.node != node || r.state != PhyState::Idle {
            continue;
        }
        if first {
            idle_time = r.time - warmup;
            first = false;
        } else {
            idle_time += r.duration;
        }
    }
    idle_time
}

#[cfg(test)]
mod test {
    use super::*;

    fn idle(time: f64, node: usize, duration: f64) -> StateRecord {
        StateRecord {
            time,
            node,
            state: PhyState::Idle,
            start: time - duration,
            duration,
        }
    }

    #[test]
    fn first_interval_clipped_to_warmup() {
        let records = vec![idle(1.5, 0, 1.5), idle(3.0, 0, 0.2)];
        let total = node_idle_time(&records, 0, 1.0);
        assert!((total - 0.7).abs() < 1e-12);
    }

    #[test]
    fn skips_warmup_and_other_nodes() {
        let records = vec![
            idle(0.5, 0, 0.5),
            idle(2.0, 1, 0.8),
            StateRecord {
                time: 2.5,
                node: 0,
                state: PhyState::Tx,
                start: 2.4,
                duration: 0.1,
            },
            idle(3.0, 0, 0.3),
            idle(4.0, 0, 0.6),
        ];
        // first qualifying record is the one at t=3.0
        let total = node_idle_time(&records, 0, 1.0);
        assert!((total - (2.0 + 0.6)).abs() < 1e-12);
    }

    #[test]
    fn empty_trace_is_zero() {
        assert_eq!(node_idle_time(&[], 0, 1.0), 0.0);
    }
}
