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
use std::{error::Error, fs, path::PathBuf, process};

use clap::{Parser, ValueEnum};
use plotly::common::Mode;
use rayon::prelude::*;

use swstat::{
    records::{self, NodeContention, NodeTxTime, SizeContention, SizeIdleTime},
    reduce::{airtime, contention, idle, DEFAULT_WARMUP},
    render::{self, PlotSpec},
    trace::{self, StateRecord},
    util::{self, PathBufExt},
};

/// Compute DCF performance statistics from the PHY state traces of a set
/// of network sizes.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Overwrite the input path for trace data.
    #[arg(short, long, default_value = "./")]
    data_path: PathBuf,
    /// Overwrite the output path for derived data and plots.
    #[arg(short, long, default_value = "./")]
    output_path: PathBuf,
    /// Statistic to compute.
    #[arg(short, long, value_enum, default_value_t = Task::All)]
    task: Task,
    /// Network sizes to process. Discovered from the trace files present
    /// when not given.
    #[arg(short, long, value_delimiter = ',')]
    sizes: Vec<usize>,
    /// File-name template of the state traces; `{}` expands to the size.
    #[arg(long, default_value = "wifi-dcf-state-trace.{}.dat")]
    trace_template: String,
    /// Simulated seconds to discard before statistics start.
    #[arg(short, long, default_value_t = DEFAULT_WARMUP)]
    warmup: f64,
    /// Node observed by the idle-time statistic.
    #[arg(long, default_value_t = 0)]
    node: usize,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum Task {
    /// Computes all statistics below.
    #[default]
    All,
    /// Sums the idle time observed on one node and plots it against the
    /// network size.
    IdleTimes,
    /// Classifies transmissions into successes and collisions, tabulates
    /// them per node, and plots the success probability against the
    /// network size.
    SuccessCollision,
    /// Sums the per-node transmission times.
    TransmitTimes,
}

fn main() -> Result<(), Box<dyn Error>> {
    util::init_logging();
    let args = Args::parse();

    fs::create_dir_all(&args.output_path)?;

    let sizes = if args.sizes.is_empty() {
        util::discover_sizes(&args.data_path, &args.trace_template)
    } else {
        args.sizes.clone()
    };
    if sizes.is_empty() {
        log::error!("No state traces found in {:?}!", args.data_path);
        process::exit(1);
    }

    // one pass over every trace file, shared by all tasks
    let traces = load_traces(&args, &sizes);

    if matches!(args.task, Task::All | Task::IdleTimes) {
        process_idle_times(&args, &traces)?;
    }
    if matches!(args.task, Task::All | Task::SuccessCollision) {
        process_success_collision(&args, &traces)?;
    }
    if matches!(args.task, Task::All | Task::TransmitTimes) {
        process_transmit_times(&args, &traces)?;
    }
    Ok(())
}

/// Parse the state trace of every network size, in parallel. An
/// unreadable trace is fatal; the statistics would silently lose a size
/// otherwise.
fn load_traces(args: &Args, sizes: &[usize]) -> Vec<(usize, Vec<StateRecord>)> {
    sizes
        .par_iter()
        .map(|&size| {
            let path = args
                .data_path
                .as_path()
                .then_sized(&args.trace_template, size);
            log::info!("Loading: {path:?}");
            match trace::read_state_trace(&path) {
                Ok(records) => (size, records),
                Err(e) => {
                    log::error!("Could not read {path:?}: {e}");
                    process::exit(1);
                }
            }
        })
        .collect()
}

/// Sum the idle time observed on the configured node per network size,
/// write the `(size, idle time)` table, and plot it.
fn process_idle_times(
    args: &Args,
    traces: &[(usize, Vec<StateRecord>)],
) -> Result<(), Box<dyn Error>> {
    let points: Vec<(usize, f64)> = traces
        .par_iter()
        .map(|(size, records)| (*size, idle::node_idle_time(records, args.node, args.warmup)))
        .collect();

    let mut csv = records::dat_writer(
        args.output_path
            .as_path()
            .then("wifi-dcf-idle-time-vs-num-nodes.dat"),
    )?;
    for &(size, idle_time) in &points {
        csv.serialize(SizeIdleTime { size, idle_time })?;
    }
    csv.flush()?;

    let spec = PlotSpec {
        title: "Idle time vs. number of stations".to_string(),
        xlabel: "number of stations".to_string(),
        ylabel: "Idle time (s)".to_string(),
        ymax: Some(10.0),
    };
    let plot = render::line_plot(
        points.iter().map(|&(size, _)| size as f64).collect(),
        points.iter().map(|&(_, idle_time)| idle_time).collect(),
        Mode::LinesMarkers,
        &spec,
    );
    render::write_plot(
        &plot,
        args.output_path
            .as_path()
            .then("wifi-dcf-idle-time-vs-num-nodes.html"),
    );
    Ok(())
}

/// Classify the transmissions of every network size, write the per-node
/// tables and the aggregate table, and plot the success probability.
fn process_success_collision(
    args: &Args,
    traces: &[(usize, Vec<StateRecord>)],
) -> Result<(), Box<dyn Error>> {
    let stats: Vec<(usize, contention::ContentionStats)> = traces
        .par_iter()
        .map(
            |(size, records)| match contention::classify_transmissions(records, args.warmup) {
                Ok(stats) => (*size, stats),
                Err(e) => {
                    log::error!("Inconsistent transmission grouping in the size-{size} trace: {e}");
                    process::exit(2);
                }
            },
        )
        .collect();

    // per-node tables, one file per network size; the access point is
    // node 0 and the stations are 1..=size
    for (size, stats) in &stats {
        let mut csv = records::dat_writer(
            args.output_path
                .as_path()
                .then_sized("wifi-dcf-success-collision.{}.dat", *size),
        )?;
        for node in 0..=*size {
            csv.serialize(NodeContention {
                node,
                successes: stats.successes(node),
                collisions: stats.collisions(node),
                probability: stats.node_probability(node),
            })?;
        }
        csv.flush()?;
    }

    let mut csv = records::dat_writer(
        args.output_path
            .as_path()
            .then("wifi-dcf-success-probability-vs-number-of-nodes.dat"),
    )?;
    for (size, stats) in &stats {
        csv.serialize(SizeContention {
            size: *size,
            successes: stats.num_successes,
            collisions: stats.num_collisions,
            probability: stats.probability(),
        })?;
    }
    csv.flush()?;

    let spec = PlotSpec {
        title: "Success probability vs. number of nodes".to_string(),
        xlabel: "Number of nodes".to_string(),
        ylabel: "Success probability".to_string(),
        ymax: Some(1.0),
    };
    let plot = render::line_plot(
        stats.iter().map(|&(size, _)| size as f64).collect(),
        stats.iter().map(|(_, stats)| stats.probability()).collect(),
        Mode::LinesMarkers,
        &spec,
    );
    render::write_plot(
        &plot,
        args.output_path
            .as_path()
            .then("wifi-dcf-success-probability-vs-number-of-nodes.html"),
    );
    Ok(())
}

/// Sum the per-node transmission times of every network size and write
/// one table per size.
fn process_transmit_times(
    args: &Args,
    traces: &[(usize, Vec<StateRecord>)],
) -> Result<(), Box<dyn Error>> {
    for (size, records) in traces {
        let totals = airtime::transmit_times(records, args.warmup);
        let mut csv = records::dat_writer(
            args.output_path
                .as_path()
                .then_sized("wifi-dcf-tx-times.{}.dat", *size),
        )?;
        for node in 0..=*size {
            csv.serialize(NodeTxTime {
                node,
                tx_time: totals.tx_time(node),
            })?;
        }
        csv.flush()?;
        log::info!(
            "Total transmission time for {size} stations: {:.6} s",
            totals.total
        );
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use super::*;

    const TRACE: &str = "\
0.500000 0 state: TX start: 0.400000 duration 0.100000
1.500000 0 state: IDLE start: 0.014941 duration 1.485059
2.000000 1 state: TX start: 2.000000 duration 0.000104
2.000000 2 state: TX start: 2.000000 duration 0.000104
3.000000 0 state: IDLE start: 2.800000 duration 0.200000
3.000000 3 state: TX start: 3.000000 duration 0.000104
4.000000 4 state: TX start: 4.000000 duration 0.000104
";

    fn args_for(dir: &Path) -> Args {
        Args::parse_from([
            "main",
            "--data-path",
            dir.to_str().unwrap(),
            "--output-path",
            dir.to_str().unwrap(),
            "--sizes",
            "10",
        ])
    }

    #[test]
    fn idle_time_table() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("wifi-dcf-state-trace.10.dat"), TRACE).unwrap();
        let args = args_for(dir.path());
        let traces = load_traces(&args, &[10]);

        process_idle_times(&args, &traces).unwrap();
        let idle =
            fs::read_to_string(dir.path().join("wifi-dcf-idle-time-vs-num-nodes.dat")).unwrap();
        assert_eq!(idle, "10 0.700000\n");
    }

    #[test]
    fn success_collision_tables() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("wifi-dcf-state-trace.10.dat"), TRACE).unwrap();
        let args = args_for(dir.path());
        let traces = load_traces(&args, &[10]);

        process_success_collision(&args, &traces).unwrap();
        let aggregate = fs::read_to_string(
            dir.path()
                .join("wifi-dcf-success-probability-vs-number-of-nodes.dat"),
        )
        .unwrap();
        assert_eq!(aggregate, "10 1 2 0.333333\n");

        let per_node =
            fs::read_to_string(dir.path().join("wifi-dcf-success-collision.10.dat")).unwrap();
        let lines: Vec<&str> = per_node.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[1], "1 0 1 0.000000");
        assert_eq!(lines[3], "3 1 0 1.000000");
        // the group pending at the end of the trace is never classified
        assert_eq!(lines[4], "4 0 0 NaN");
    }

    #[test]
    fn transmit_time_table() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("wifi-dcf-state-trace.10.dat"), TRACE).unwrap();
        let args = args_for(dir.path());
        let traces = load_traces(&args, &[10]);

        process_transmit_times(&args, &traces).unwrap();
        let tx = fs::read_to_string(dir.path().join("wifi-dcf-tx-times.10.dat")).unwrap();
        let lines: Vec<&str> = tx.lines().collect();
        assert_eq!(lines.len(), 11);
        // the pre-warmup transmission of node 0 does not count
        assert_eq!(lines[0], "0 0.000000");
        assert_eq!(lines[1], "1 0.000104");
    }

    #[test]
    fn reruns_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("wifi-dcf-state-trace.10.dat"), TRACE).unwrap();
        let args = args_for(dir.path());
        let traces = load_traces(&args, &[10]);

        let aggregate = dir
            .path()
            .join("wifi-dcf-success-probability-vs-number-of-nodes.dat");
        process_success_collision(&args, &traces).unwrap();
        let first = fs::read(&aggregate).unwrap();
        process_success_collision(&args, &traces).unwrap();
        let second = fs::read(&aggregate).unwrap();
        assert_eq!(first, second);
    }
}
