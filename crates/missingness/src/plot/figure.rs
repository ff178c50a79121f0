use super::surface::{Axes, Mark, PlotSurface};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// A recorded plot: the marks in drawing order plus the axis settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Figure {
    pub marks: Vec<Mark>,
    pub axes: Axes,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Pretty-printed JSON representation.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the figure as JSON into `dir/<name>.json`.
    pub fn write_json(&self, dir: impl AsRef<Path>, name: &str) -> Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let path = dir.join(format!("{}.json", name));
        let mut file = File::create(&path)?;
        file.write_all(self.to_json()?.as_bytes())?;

        info!("Figure saved: {}", path.display());
        Ok(path)
    }
}

impl PlotSurface for Figure {
    fn draw(&mut self, mark: Mark) {
        self.marks.push(mark);
    }

    fn set_axes(&mut self, axes: Axes) {
        self.axes = axes;
    }
}

static_assertions::assert_impl_all!(Figure: Send, Sync);
