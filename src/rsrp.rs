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
use std::{error::Error, path::PathBuf, process};

use clap::Parser;
use itertools::Itertools;

use swstat::{
    render::{self, PlotSpec},
    trace::{self, TraceError},
    util,
};

/// Plot a measurement value over time, one marker series per cell.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Input measurement trace.
    #[arg(short, long, default_value = "lte-tcp-x2-handover.ue-measurements.dat")]
    file_name: PathBuf,
    /// Output plot file.
    #[arg(short, long, default_value = "lte-tcp-x2-handover.rsrp.html")]
    plot_name: PathBuf,
    /// Title string.
    #[arg(long, default_value = "LTE handover RSRP")]
    title: String,
    /// Zero-based column holding the plotted value.
    #[arg(long, default_value_t = 3)]
    value_col: usize,
    /// X axis label.
    #[arg(long, default_value = "Time (s)")]
    xlabel: String,
    /// Y axis label.
    #[arg(long, default_value = "RSRP (dBm)")]
    ylabel: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    util::init_logging();
    run(&Args::parse())
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let measurements = trace::read_measurements(&args.file_name)?;
    if measurements.is_empty() {
        log::error!("No data points found in {:?}, exiting...", args.file_name);
        process::exit(1);
    }

    let mut series: Vec<(String, Vec<f64>, Vec<f64>)> = Vec::new();
    for (cell, group) in &measurements
        .iter()
        .enumerate()
        .sorted_by(|a, b| a.1.cell.cmp(&b.1.cell))
        .group_by(|(_, m)| m.cell.clone())
    {
        let mut x = Vec::new();
        let mut y = Vec::new();
        for (i, m) in group {
            let token = m.value(args.value_col).ok_or(TraceError::MissingColumn {
                line: i + 1,
                column: args.value_col,
            })?;
            let value: f64 = token.parse().map_err(|_| TraceError::InvalidNumber {
                line: i + 1,
                column: args.value_col,
                token: token.to_string(),
            })?;
            x.push(m.time);
            y.push(value);
        }
        series.push((format!("cell {cell}"), x, y));
    }

    let spec = PlotSpec {
        title: args.title.clone(),
        xlabel: args.xlabel.clone(),
        ylabel: args.ylabel.clone(),
        ymax: None,
    };
    let plot = render::scatter_plot(series, &spec);
    render::write_plot(&plot, &args.plot_name);
    Ok(())
}

#[cfg(test)]
mod test {
    use std::fs;

    use super::*;

    #[test]
    fn plots_one_series_per_cell() {
        let dir = tempfile::tempdir().unwrap();
        let trace_path = dir.path().join("ue-measurements.dat");
        fs::write(
            &trace_path,
            "# time cellId rnti rsrp rsrq\n\
             0.217 1 3 -55.23 -2.77\n\
             0.233 2 0 -73.84 -5.11\n\
             0.249 1 3 -55.30 -2.79\n",
        )
        .unwrap();
        let plot_path = dir.path().join("rsrp.html");

        let args = Args::parse_from([
            "rsrp",
            "--file-name",
            trace_path.to_str().unwrap(),
            "--plot-name",
            plot_path.to_str().unwrap(),
        ]);
        run(&args).unwrap();
        assert!(plot_path.exists());
    }

    #[test]
    fn short_line_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let trace_path = dir.path().join("ue-measurements.dat");
        fs::write(&trace_path, "0.217 1 3\n").unwrap();
        let plot_path = dir.path().join("rsrp.html");

        let args = Args::parse_from([
            "rsrp",
            "--file-name",
            trace_path.to_str().unwrap(),
            "--plot-name",
            plot_path.to_str().unwrap(),
        ]);
        assert!(run(&args).is_err());
        assert!(!plot_path.exists());
    }
}
