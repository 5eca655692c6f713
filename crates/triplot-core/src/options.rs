//! Configuration options for triplot.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Global configuration options for triplot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    /// Background color of rendered figures.
    pub background_color: Vec3,

    /// Default figure width in pixels.
    pub figure_width: u32,

    /// Default figure height in pixels.
    pub figure_height: u32,

    /// Fraction of the data span added as padding on each side of the axes.
    pub data_margin: f64,

    /// Target number of tick intervals per axis.
    pub target_ticks: usize,

    /// Directory that `show()` writes figure images into.
    pub output_dir: String,

    /// Filename prefix for figure images written by `show()`.
    pub output_prefix: String,

    /// Whether to draw the axes frame and tick marks.
    pub draw_axes: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            background_color: Vec3::new(1.0, 1.0, 1.0),
            figure_width: 800,
            figure_height: 600,
            data_margin: 0.05,
            target_ticks: 6,
            output_dir: ".".to_string(),
            output_prefix: "figure_".to_string(),
            draw_axes: true,
        }
    }
}

impl Options {
    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let options = serde_json::from_str(&data)?;
        Ok(options)
    }

    /// Saves options to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.figure_width, 800);
        assert_eq!(options.figure_height, 600);
        assert!((options.data_margin - 0.05).abs() < 1e-12);
        assert_eq!(options.background_color, Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_json_round_trip() {
        let mut options = Options::default();
        options.figure_width = 400;
        options.output_prefix = "plot_".to_string();

        let json = serde_json::to_string(&options).unwrap();
        let back: Options = serde_json::from_str(&json).unwrap();
        assert_eq!(back.figure_width, 400);
        assert_eq!(back.output_prefix, "plot_");
    }

    #[test]
    fn test_load_save() {
        let dir = std::env::temp_dir().join("triplot_options_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("options.json");

        let mut options = Options::default();
        options.target_ticks = 4;
        options.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded.target_ticks, 4);

        let _ = std::fs::remove_file(&path);
    }
}
