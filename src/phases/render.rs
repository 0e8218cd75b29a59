use std::fmt::Debug;

use strum_macros::Display;

use super::load::load_all;
use super::scale::{compute_x_domain, compute_y_domain, map_value, overlay};
use crate::elements::{AxisDomain, BenchmarkSeries, PixelRange, PlotArea, Point, SeriesColor};
use crate::error::{ErrorLabel, PlotError, ScaleError};
use crate::settings::{ChartSettings, CostAxisSetting, DomainReference, PlotSettings};
use crate::PlotResult;

pub const X_AXIS_TITLE: &str = "Nodes";
pub const Y_AXIS_TITLE: &str = "Seconds";

/// Series drawn with a connecting line and the expected timing dots.
pub const EXPECTED_COLOR: SeriesColor = SeriesColor::Red;

/// Drawing primitives of the charting library a chart is rendered with. Implementations own
/// every concern of the output artifact; render passes only hand them pixel coordinates.
pub trait Renderer: Debug {
    fn draw_axis(&mut self, axis: &AxisSpec) -> anyhow::Result<()>;
    fn draw_point(&mut self, x: f64, y: f64, radius: f64, color: SeriesColor) -> anyhow::Result<()>;
    fn draw_path(&mut self, points: &[Point], color: SeriesColor) -> anyhow::Result<()>;
}

#[derive(Debug, Display, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum AxisOrientation {
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

/// Everything a renderer needs to draw an axis. `offset` is the pixel position of the axis line
/// across its orientation: the y of a bottom axis, the x of a left or right axis. Only explicit
/// ticks are listed; an empty list leaves tick generation to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub orientation: AxisOrientation,
    pub domain: AxisDomain,
    pub range: PixelRange,
    pub offset: f64,
    pub title: String,
    pub ticks: Vec<AxisTick>,
}

impl AxisSpec {
    pub fn nodes(domain: AxisDomain, area: &PlotArea) -> Self {
        Self {
            orientation: AxisOrientation::Bottom,
            domain,
            range: area.x_range(),
            offset: area.height - area.padding,
            title: X_AXIS_TITLE.to_string(),
            ticks: vec![],
        }
    }

    pub fn seconds(domain: AxisDomain, area: &PlotArea) -> Self {
        Self {
            orientation: AxisOrientation::Left,
            domain,
            range: area.y_range(),
            offset: area.padding,
            title: Y_AXIS_TITLE.to_string(),
            ticks: vec![],
        }
    }

    /// Right-hand cost axis sharing the seconds domain; its two ticks are placed where their
    /// seconds values fall on the Y axis.
    pub fn cost(setting: &CostAxisSetting, domain: AxisDomain, area: &PlotArea) -> Result<Self, ScaleError> {
        let ticks = setting
            .ticks()
            .iter()
            .map(|t| {
                Ok(AxisTick {
                    position: map_value(t.value, &domain, area.y_range())?,
                    label: t.label.clone(),
                })
            })
            .collect::<Result<Vec<_>, ScaleError>>()?;

        Ok(Self {
            orientation: AxisOrientation::Right,
            domain,
            range: area.y_range(),
            offset: area.secondary_axis_x(),
            title: setting.title.clone(),
            ticks,
        })
    }
}

/// Loads every configured series, waits for the complete set, then renders them in one pass.
/// No drawing happens unless all sources load.
#[tracing::instrument(level = "info", skip(settings, renderer))]
pub async fn plot(settings: &PlotSettings, renderer: &mut dyn Renderer) -> PlotResult<()> {
    let series = load_all(&settings.series).await?;
    render_pass(&settings.chart, &series, renderer)
}

/// Draws the shared axes, the expected curve of the primary (first) series, and the measured
/// dots of every series. Any failure aborts the pass.
#[tracing::instrument(level = "info", skip(chart, series, renderer), fields(nr_series=%series.len()))]
pub fn render_pass(
    chart: &ChartSettings, series: &[BenchmarkSeries], renderer: &mut dyn Renderer,
) -> PlotResult<()> {
    let result = do_render_pass(chart, series, renderer);
    if let Err(ref err) = result {
        tracing::error!(error=?err, label=%err.label(), "render pass failed");
    }
    result
}

fn do_render_pass(
    chart: &ChartSettings, series: &[BenchmarkSeries], renderer: &mut dyn Renderer,
) -> PlotResult<()> {
    let primary = series.first().ok_or(ScaleError::EmptySeries)?;
    let reference = match chart.domain_reference {
        DomainReference::Primary => std::slice::from_ref(primary),
        DomainReference::All => series,
    };

    let area = &chart.area;
    let x_domain = compute_x_domain(reference, chart.scale)?;
    let y_domain = compute_y_domain(reference, chart.scale)?;
    let overlays = overlay(series, &x_domain, &y_domain, area)?;

    // map everything before the first draw call; a failing point must leave no partial chart
    let mut axes = vec![AxisSpec::nodes(x_domain, area), AxisSpec::seconds(y_domain, area)];
    if let Some(ref cost) = chart.cost_axis {
        axes.push(AxisSpec::cost(cost, y_domain, area)?);
    }
    let expected = overlays[0].expected().collect::<Result<Vec<_>, _>>()?;
    let measured = overlays
        .iter()
        .map(|o| Ok((o, o.measured().collect::<Result<Vec<_>, _>>()?)))
        .collect::<Result<Vec<_>, ScaleError>>()?;

    for axis in axes.iter() {
        renderer.draw_axis(axis).map_err(PlotError::Render)?;
    }

    renderer.draw_path(&expected, EXPECTED_COLOR).map_err(PlotError::Render)?;
    for (x, y) in expected.iter() {
        renderer.draw_point(*x, *y, chart.dot_radius, EXPECTED_COLOR).map_err(PlotError::Render)?;
    }

    for (o, points) in measured.iter() {
        for (x, y) in points.iter() {
            renderer.draw_point(*x, *y, chart.dot_radius, o.color()).map_err(PlotError::Render)?;
        }
        tracing::debug!(series=%o.name(), nr_points=%points.len(), "drew measured points");
    }

    Ok(())
}
