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
//! Utility module collection of functions

use std::path::{Path, PathBuf};

use regex::Regex;

pub fn init_logging() {
    let _ = pretty_env_logger::try_init();
}

pub trait PathBufExt: Sized {
    fn then(self, p: impl AsRef<Path>) -> PathBuf;

    /// Expand the `{}` placeholder of a file-name template with the
    /// network size and append the result.
    fn then_sized(self, template: impl AsRef<str>, size: usize) -> PathBuf {
        self.then(template.as_ref().replacen("{}", &size.to_string(), 1))
    }
}

impl PathBufExt for PathBuf {
    fn then(mut self, p: impl AsRef<Path>) -> PathBuf {
        self.push(p);
        self
    }
}

impl PathBufExt for &Path {
    fn then(self, p: impl AsRef<Path>) -> PathBuf {
        let mut path = self.to_path_buf();
        path.push(p);
        path
    }
}

/// Find the network sizes for which a trace file matching `template`
/// (with a `{}` placeholder) exists under `data_path`.
pub fn discover_sizes(data_path: impl AsRef<Path>, template: &str) -> Vec<usize> {
    let pattern = data_path.as_ref().then(template.replacen("{}", "*", 1));
    let re = Regex::new(&format!(
        "^{}$",
        regex::escape(template).replacen(r"\{\}", r"(\d+)", 1)
    ))
    .unwrap();

    let mut sizes: Vec<usize> = glob::glob(&pattern.to_string_lossy())
        .into_iter()
        .flatten()
        .filter_map(|entry| entry.ok())
        .filter_map(|path| {
            let name = path.file_name()?.to_string_lossy().to_string();
            re.captures(&name)?.get(1)?.as_str().parse().ok()
        })
        .collect();
    sizes.sort_unstable();
    sizes.dedup();
    sizes
}
