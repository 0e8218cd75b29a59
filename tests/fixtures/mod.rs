use std::path::PathBuf;

use benchplot::elements::{Point, SeriesColor};
use benchplot::phases::{AxisSpec, Renderer};
use benchplot::settings::SeriesSetting;

pub fn data_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(file_name)
}

pub fn series_setting(name: &str, color: SeriesColor, file_name: &str) -> SeriesSetting {
    SeriesSetting { name: name.to_string(), color, path: data_path(file_name) }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Axis(AxisSpec),
    Point { x: f64, y: f64, radius: f64, color: SeriesColor },
    Path(Vec<Point>, SeriesColor),
}

/// Renderer standing in for a charting library; remembers every primitive it was asked to draw.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub cmds: Vec<DrawCmd>,
}

#[allow(dead_code)]
impl RecordingRenderer {
    pub fn axes(&self) -> Vec<&AxisSpec> {
        self.cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Axis(a) => Some(a),
                _ => None,
            })
            .collect()
    }

    pub fn paths(&self) -> Vec<(&[Point], SeriesColor)> {
        self.cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Path(points, color) => Some((points.as_slice(), *color)),
                _ => None,
            })
            .collect()
    }

    pub fn points_of(&self, color: SeriesColor) -> Vec<Point> {
        self.cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Point { x, y, color: c, .. } if *c == color => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn draw_axis(&mut self, axis: &AxisSpec) -> anyhow::Result<()> {
        self.cmds.push(DrawCmd::Axis(axis.clone()));
        Ok(())
    }

    fn draw_point(&mut self, x: f64, y: f64, radius: f64, color: SeriesColor) -> anyhow::Result<()> {
        self.cmds.push(DrawCmd::Point { x, y, radius, color });
        Ok(())
    }

    fn draw_path(&mut self, points: &[Point], color: SeriesColor) -> anyhow::Result<()> {
        self.cmds.push(DrawCmd::Path(points.to_vec(), color));
        Ok(())
    }
}
