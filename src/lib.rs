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
//! Library for computing aggregate statistics and plots from the trace
//! files written by the simple-wireless simulation experiments.

pub mod records;
pub mod reduce;
pub mod render;
pub mod trace;
pub mod util;

pub mod prelude {
    pub use super::{
        reduce::{
            airtime::{transmit_times, AirtimeTotals},
            bitrate::{histogram, to_mbps, Bin},
            contention::{classify_transmissions, ContentionError, ContentionStats},
            idle::node_idle_time,
            DEFAULT_WARMUP,
        },
        trace::{PhyState, RxEvent, StateRecord, TraceError},
    };
}
