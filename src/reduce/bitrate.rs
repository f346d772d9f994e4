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
//! Fixed-timestep binning of sparse receive events.

use crate::trace::RxEvent;

/// One closed histogram bin: all bits received in the timestep ending at
/// `time`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub time: f64,
    pub bits: u64,
}

/// Convert sparse receive events into a dense series of per-timestep bit
/// counts starting at time zero.
///
/// Timesteps without any event are emitted as zero bins, so the series has
/// no gaps; the final partial bin is flushed after the last event.
pub fn histogram(events: &[RxEvent], timestep: f64) -> Vec<Bin> {
    let mut bins = Vec::new();
    if events.is_empty() {
        return bins;
    }
    let mut bin_start = 0.0;
    let mut bits = 0;
    for ev in events {
        if ev.time < bin_start + timestep {
            bits += ev.bytes * 8;
        } else {
            bins.push(Bin {
                time: bin_start + timestep,
                bits,
            });
            bin_start += timestep;
            while bin_start + timestep <= ev.time {
                bins.push(Bin {
                    time: bin_start + timestep,
                    bits: 0,
                });
                bin_start += timestep;
            }
            bits = ev.bytes * 8;
        }
    }
    bins.push(Bin {
        time: bin_start + timestep,
        bits,
    });
    bins
}

/// Convert binned bit counts to a rate series in Mb/s.
pub fn to_mbps(bins: &[Bin], timestep: f64) -> Vec<(f64, f64)> {
    bins.iter()
        .map(|b| (b.time, b.bits as f64 / timestep / 1e6))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn ev(time: f64, bytes: u64) -> RxEvent {
        RxEvent { time, bytes }
    }

    #[test]
    fn gaps_are_zero_filled() {
        let bins = histogram(&[ev(0.05, 100), ev(0.35, 50)], 0.1);
        let expected = [(0.1, 800), (0.2, 0), (0.3, 0), (0.4, 400)];
        assert_eq!(bins.len(), expected.len());
        for (bin, (time, bits)) in bins.iter().zip(expected) {
            assert!((bin.time - time).abs() < 1e-9);
            assert_eq!(bin.bits, bits);
        }
    }

    #[test]
    fn events_in_one_bin_accumulate() {
        let bins = histogram(&[ev(0.01, 10), ev(0.05, 20), ev(0.09, 30)], 0.1);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].bits, 480);
    }

    #[test]
    fn no_events_no_bins() {
        assert!(histogram(&[], 0.1).is_empty());
    }

    #[test]
    fn rate_conversion_scales_to_mbps() {
        let rates = to_mbps(&[Bin { time: 0.1, bits: 800 }], 0.1);
        assert_eq!(rates.len(), 1);
        assert!((rates[0].1 - 0.008).abs() < 1e-12);
    }
}
