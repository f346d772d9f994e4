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
use plotly::common::Mode;

use swstat::{
    records::{self, RatePoint},
    reduce::bitrate,
    render::{self, PlotSpec},
    trace, util,
};

/// Plot the received throughput over time from a receive-event trace.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Input receive-event trace.
    #[arg(short, long, default_value = "lte-tcp-x2-handover.tcp-receive.dat")]
    file_name: PathBuf,
    /// Output plot file.
    #[arg(short, long, default_value = "lte-tcp-x2-handover.tcp-throughput.html")]
    plot_name: PathBuf,
    /// Also write the binned rate series to this file.
    #[arg(long)]
    data_name: Option<PathBuf>,
    /// Timestep resolution in seconds.
    #[arg(short, long, default_value_t = 0.1)]
    timestep: f64,
    /// Title string.
    #[arg(long, default_value = "Lte Handover TCP throughput")]
    title: String,
    /// Fixed upper bound of the rate axis (Mb/s).
    #[arg(long, default_value_t = 20.0)]
    ymax: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    util::init_logging();
    run(&Args::parse())
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let events = trace::read_receive_trace(&args.file_name)?;
    if events.is_empty() {
        log::error!("No data points found in {:?}, exiting...", args.file_name);
        process::exit(1);
    }

    let bins = bitrate::histogram(&events, args.timestep);
    let rates = bitrate::to_mbps(&bins, args.timestep);

    if let Some(data_name) = &args.data_name {
        let mut csv = records::dat_writer(data_name)?;
        for &(time, rate) in &rates {
            csv.serialize(RatePoint { time, rate })?;
        }
        csv.flush()?;
    }

    let spec = PlotSpec {
        title: args.title.clone(),
        xlabel: "Time (s)".to_string(),
        ylabel: "Rate (Mb/s)".to_string(),
        ymax: Some(args.ymax),
    };
    let (x, y) = rates.into_iter().unzip();
    let plot = render::line_plot(x, y, Mode::Lines, &spec);
    render::write_plot(&plot, &args.plot_name);
    Ok(())
}
