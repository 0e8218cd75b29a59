use crate::elements::{
    AxisDomain, BenchmarkRecord, BenchmarkSeries, Measure, PixelRange, PlotArea, Point, ScaleKind, SeriesColor,
};
use crate::error::ScaleError;

fn all_records(series: &[BenchmarkSeries]) -> impl Iterator<Item = &BenchmarkRecord> {
    series.iter().flat_map(|s| s.iter())
}

fn bounds(values: impl Iterator<Item = (f64, f64)>) -> Option<(f64, f64)> {
    values.fold(None, |acc, (lo, hi)| match acc {
        None => Some((lo, hi)),
        Some((min, max)) => Some((f64::min(min, lo), f64::max(max, hi))),
    })
}

/// Node-count domain spanning every record of every series.
#[tracing::instrument(level = "trace", skip(series))]
pub fn compute_x_domain(series: &[BenchmarkSeries], kind: ScaleKind) -> Result<AxisDomain, ScaleError> {
    let (min, max) = bounds(all_records(series).map(|r| {
        let nodes = r.node_count() as f64;
        (nodes, nodes)
    }))
    .ok_or(ScaleError::EmptySeries)?;

    let domain = AxisDomain::new(min, max, kind);
    tracing::debug!(?domain, nr_series=%series.len(), "computed node count domain");
    Ok(domain)
}

/// Timing domain bounding both the measured and the expected curves of every series.
#[tracing::instrument(level = "trace", skip(series))]
pub fn compute_y_domain(series: &[BenchmarkSeries], kind: ScaleKind) -> Result<AxisDomain, ScaleError> {
    let (min, max) =
        bounds(all_records(series).map(|r| (r.low().into(), r.high().into()))).ok_or(ScaleError::EmptySeries)?;

    let domain = AxisDomain::new(min, max, kind);
    tracing::debug!(?domain, nr_series=%series.len(), "computed seconds domain");
    Ok(domain)
}

/// Validated mapping from a domain onto a pixel range. Domain bounds are moved into scale space
/// once, so projecting a value costs a single transform.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projection {
    kind: ScaleKind,
    lo: f64,
    hi: f64,
    range: PixelRange,
}

impl Projection {
    pub fn new(domain: &AxisDomain, range: PixelRange) -> Result<Self, ScaleError> {
        if domain.is_degenerate() {
            return Err(ScaleError::DegenerateDomain { value: domain.min() });
        }

        let kind = domain.kind();
        Ok(Self {
            kind,
            lo: kind.transform(domain.min())?,
            hi: kind.transform(domain.max())?,
            range,
        })
    }

    pub fn project(&self, value: f64) -> Result<f64, ScaleError> {
        let v = self.kind.transform(value)?;
        Ok(self.range.lo + (v - self.lo) / (self.hi - self.lo) * self.range.span())
    }
}

/// Maps a single data value from `domain` onto `range`.
pub fn map_value(value: f64, domain: &AxisDomain, range: PixelRange) -> Result<f64, ScaleError> {
    Projection::new(domain, range)?.project(value)
}

/// Pixel position of a record's selected timing within the plot area.
pub fn map_point(
    record: &BenchmarkRecord, measure: Measure, x_domain: &AxisDomain, y_domain: &AxisDomain, area: &PlotArea,
) -> Result<Point, ScaleError> {
    let px = map_value(record.node_count() as f64, x_domain, area.x_range())?;
    let py = map_value(record.value(measure).into(), y_domain, area.y_range())?;
    Ok((px, py))
}

/// Pixel coordinates of one record: a shared x and a y for each of its timings.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub measured_y: f64,
    pub expected_y: f64,
}

impl PlotPoint {
    pub fn of(&self, measure: Measure) -> Point {
        match measure {
            Measure::Measured => (self.x, self.measured_y),
            Measure::Expected => (self.x, self.expected_y),
        }
    }
}

/// One series projected onto shared axes. Points are mapped lazily and may be walked any number
/// of times.
#[derive(Debug, Clone)]
pub struct SeriesOverlay<'s> {
    series: &'s BenchmarkSeries,
    x: Projection,
    y: Projection,
}

impl<'s> SeriesOverlay<'s> {
    pub fn name(&self) -> &'s str {
        self.series.name()
    }

    pub fn color(&self) -> SeriesColor {
        self.series.color()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = Result<PlotPoint, ScaleError>> + '_ {
        self.series.iter().map(move |r| {
            Ok(PlotPoint {
                x: self.x.project(r.node_count() as f64)?,
                measured_y: self.y.project(r.measured().into())?,
                expected_y: self.y.project(r.expected().into())?,
            })
        })
    }

    pub fn measured(&self) -> impl Iterator<Item = Result<Point, ScaleError>> + '_ {
        self.project_measure(Measure::Measured)
    }

    pub fn expected(&self) -> impl Iterator<Item = Result<Point, ScaleError>> + '_ {
        self.project_measure(Measure::Expected)
    }

    fn project_measure(&self, measure: Measure) -> impl Iterator<Item = Result<Point, ScaleError>> + '_ {
        self.series.iter().map(move |r| {
            Ok((
                self.x.project(r.node_count() as f64)?,
                self.y.project(r.value(measure).into())?,
            ))
        })
    }
}

/// Projects every series onto the same pair of axes, keeping series and record order. Domains
/// are validated here, so a degenerate or non-positive logarithmic domain fails before any point
/// is mapped.
#[tracing::instrument(level = "trace", skip(series_list))]
pub fn overlay<'s>(
    series_list: &'s [BenchmarkSeries], x_domain: &AxisDomain, y_domain: &AxisDomain, area: &PlotArea,
) -> Result<Vec<SeriesOverlay<'s>>, ScaleError> {
    let x = Projection::new(x_domain, area.x_range())?;
    let y = Projection::new(y_domain, area.y_range())?;
    Ok(series_list.iter().map(|series| SeriesOverlay { series, x, y }).collect())
}
