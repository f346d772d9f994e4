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
//! Classification of transmissions into successes and collisions.

use crate::trace::{PhyState, StateRecord};

#[derive(Debug, thiserror::Error)]
pub enum ContentionError {
    /// The pending group drained without being classified. The grouping
    /// loop appends a node after every resolution, so parsed input cannot
    /// reach this; it guards edits to the loop.
    #[error("Empty transmission group at time {0}")]
    EmptyGroup(f64),
}

/// Per-node and aggregate success/collision counters for one trace.
#[derive(Debug, Clone, Default)]
pub struct ContentionStats {
    successes: Vec<u64>,
    collisions: Vec<u64>,
    pub num_successes: u64,
    pub num_collisions: u64,
}

impl ContentionStats {
    pub fn successes(&self, node: usize) -> u64 {
        self.successes.get(node).copied().unwrap_or(0)
    }

    pub fn collisions(&self, node: usize) -> u64 {
        self.collisions.get(node).copied().unwrap_or(0)
    }

    /// Success probability of one node. NaN when the node never had a
    /// classified transmission.
    pub fn node_probability(&self, node: usize) -> f64 {
        let s = self.successes(node) as f64;
        let c = self.collisions(node) as f64;
        s / (s + c)
    }

    /// Aggregate success probability. NaN without any classified
    /// transmission.
    pub fn probability(&self) -> f64 {
        let s = self.num_successes as f64;
        let c = self.num_collisions as f64;
        s / (s + c)
    }

    fn record_success(&mut self, node: usize) {
        if self.successes.len() <= node {
            self.successes.resize(node + 1, 0);
        }
        self.successes[node] += 1;
        self.num_successes += 1;
    }

    fn record_collision(&mut self, node: usize) {
        if self.collisions.len() <= node {
            self.collisions.resize(node + 1, 0);
        }
        self.collisions[node] += 1;
        self.num_collisions += 1;
    }
}

/// Classify every group of transmissions sharing a timestamp: a single
/// transmitting node counts as a success, two or more count as a collision
/// for every member. Records before `warmup` never join a group.
///
/// A group only resolves once a later timestamp is seen, so the group
/// pending at the end of the input stays unclassified.
pub fn classify_transmissions(
    records: &[StateRecord],
    warmup: f64,
) -> Result<ContentionStats, ContentionError> {
    let mut stats = ContentionStats::default();
    let mut last_time = 0.0;
    let mut transmissions: Vec<usize> = Vec::new();

    for r in records {
        if r.time < warmup || r.state != PhyState::Tx {
            continue;
        }
        if r.time > last_time {
            match transmissions.len() {
                1 => stats.record_success(transmissions[0]),
                n if n > 1 => {
                    for &node in &transmissions {
                        stats.record_collision(node);
                    }
                }
                _ => {
                    if last_time != 0.0 {
                        return Err(ContentionError::EmptyGroup(last_time));
                    }
                }
            }
            transmissions.clear();
            last_time = r.time;
        }
        transmissions.push(r.node);
    }

    Ok(stats)
}

#[cfg(test)]
mod test {
    use super::*;

    fn tx(time: f64, node: usize) -> StateRecord {
        StateRecord {
            time,
            node,
            state: PhyState::Tx,
            start: time,
            duration: 0.000104,
        }
    }

    #[test]
    fn lone_transmission_succeeds_and_overlap_collides() {
        let records = vec![tx(2.0, 1), tx(2.0, 2), tx(3.0, 3), tx(4.0, 4)];
        let stats = classify_transmissions(&records, 1.0).unwrap();
        assert_eq!(stats.collisions(1), 1);
        assert_eq!(stats.collisions(2), 1);
        assert_eq!(stats.successes(3), 1);
        assert_eq!(stats.num_successes, 1);
        assert_eq!(stats.num_collisions, 2);
    }

    #[test]
    fn trailing_group_stays_unclassified() {
        let records = vec![tx(2.0, 1), tx(2.0, 2), tx(3.0, 3), tx(4.0, 4)];
        let stats = classify_transmissions(&records, 1.0).unwrap();
        assert_eq!(stats.successes(4), 0);
        assert_eq!(stats.collisions(4), 0);
    }

    #[test]
    fn adjacent_groups_never_double_count() {
        // node 1 succeeds alone at t=2, then collides with node 2 at t=3
        let records = vec![tx(2.0, 1), tx(3.0, 1), tx(3.0, 2), tx(4.0, 5)];
        let stats = classify_transmissions(&records, 1.0).unwrap();
        assert_eq!(stats.successes(1), 1);
        assert_eq!(stats.collisions(1), 1);
        assert_eq!(stats.collisions(2), 1);
        assert_eq!(stats.num_successes, 1);
        assert_eq!(stats.num_collisions, 2);
    }

    #[test]
    fn warmup_records_do_not_join_groups() {
        let records = vec![tx(0.5, 1), tx(2.0, 2), tx(3.0, 3)];
        let stats = classify_transmissions(&records, 1.0).unwrap();
        assert_eq!(stats.successes(1), 0);
        assert_eq!(stats.successes(2), 1);
    }

    #[test]
    fn silent_node_probability_is_nan() {
        let stats = classify_transmissions(&[tx(2.0, 1), tx(3.0, 2)], 1.0).unwrap();
        assert!(stats.node_probability(7).is_nan());
        assert!((stats.node_probability(1) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_trace_probability_is_nan() {
        let stats = classify_transmissions(&[], 1.0).unwrap();
        assert!(stats.probability().is_nan());
    }
}
