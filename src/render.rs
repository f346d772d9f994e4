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
//! Plot helpers shared by the binaries.

use std::path::Path;

use plotly::{
    common::{ErrorData, ErrorType, Mode, Title},
    layout::Axis,
    Layout, Plot, Scatter,
};

/// Labels and bounds shared by every plot.
#[derive(Debug, Clone, Default)]
pub struct PlotSpec {
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    /// Fixed upper bound of the y axis, starting at zero.
    pub ymax: Option<f64>,
}

impl PlotSpec {
    fn layout(&self) -> Layout {
        let mut y_axis = Axis::new().title(Title::with_text(self.ylabel.clone()));
        if let Some(ymax) = self.ymax {
            y_axis = y_axis.range(vec![0.0, ymax]);
        }
        Layout::new()
            .title(Title::with_text(self.title.clone()))
            .x_axis(Axis::new().title(Title::with_text(self.xlabel.clone())))
            .y_axis(y_axis)
    }
}

/// Single series drawn in the given mode.
pub fn line_plot(x: Vec<f64>, y: Vec<f64>, mode: Mode, spec: &PlotSpec) -> Plot {
    let mut plot = Plot::new();
    plot.set_layout(spec.layout());
    plot.add_trace(Scatter::new(x, y).mode(mode));
    plot
}

/// One marker series per named category.
pub fn scatter_plot(series: Vec<(String, Vec<f64>, Vec<f64>)>, spec: &PlotSpec) -> Plot {
    let mut plot = Plot::new();
    plot.set_layout(spec.layout());
    for (name, x, y) in series {
        plot.add_trace(Scatter::new(x, y).mode(Mode::Markers).name(&name));
    }
    plot
}

/// Single line series with symmetric error bars.
pub fn error_bar_plot(x: Vec<f64>, y: Vec<f64>, yerror: Vec<f64>, spec: &PlotSpec) -> Plot {
    let mut plot = Plot::new();
    plot.set_layout(spec.layout());
    plot.add_trace(
        Scatter::new(x, y)
            .mode(Mode::Lines)
            .error_y(ErrorData::new(ErrorType::Data).array(yerror)),
    );
    plot
}

/// Write the rendered plot to `path`.
pub fn write_plot(plot: &Plot, path: impl AsRef<Path>) {
    log::debug!("Plotting {:?}", path.as_ref());
    plot.write_html(path);
}
