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
    render::{self, PlotSpec},
    trace, util,
};

/// Plot columns of an arbitrary whitespace-delimited data file.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Input data file.
    #[arg(short, long)]
    file_name: PathBuf,
    /// Output plot file.
    #[arg(short, long)]
    plot_name: PathBuf,
    /// Title string.
    #[arg(long, default_value = "")]
    title: String,
    /// Zero-based x column of the data.
    #[arg(long, default_value_t = 0)]
    xcol: usize,
    /// Zero-based y column of the data.
    #[arg(long, default_value_t = 1)]
    ycol: usize,
    /// Zero-based y-error column; renders error bars when given.
    #[arg(long)]
    yerror: Option<usize>,
    /// Fixed upper bound of the y axis.
    #[arg(long)]
    ymax: Option<f64>,
    /// X axis label.
    #[arg(long, default_value = "")]
    xlabel: String,
    /// Y axis label.
    #[arg(long, default_value = "")]
    ylabel: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    util::init_logging();
    run(&Args::parse())
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let rows = trace::read_rows(&args.file_name)?;
    if rows.is_empty() {
        log::error!("No data points found in {:?}, exiting...", args.file_name);
        process::exit(1);
    }

    let x = trace::column(&rows, args.xcol)?;
    let y = trace::column(&rows, args.ycol)?;

    let spec = PlotSpec {
        title: args.title.clone(),
        xlabel: args.xlabel.clone(),
        ylabel: args.ylabel.clone(),
        ymax: args.ymax,
    };
    let plot = match args.yerror {
        Some(col) => render::error_bar_plot(x, y, trace::column(&rows, col)?, &spec),
        None => render::line_plot(x, y, Mode::LinesMarkers, &spec),
    };
    render::write_plot(&plot, &args.plot_name);
    Ok(())
}
