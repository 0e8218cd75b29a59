use std::fs::File;
use std::io;

use serde::Deserialize;

use crate::elements::{BenchmarkRecord, BenchmarkSeries, SeriesColor};
use crate::error::SourceLoadError;
use crate::settings::SeriesSetting;

pub const NODES_COLUMN: &str = "nodes";
pub const MEASURED_COLUMN: &str = "measured";
pub const EXPECTED_COLUMN: &str = "expected";

const REQUIRED_COLUMNS: [&str; 3] = [NODES_COLUMN, MEASURED_COLUMN, EXPECTED_COLUMN];

/// Benchmark row as written to CSV: timings are in nanoseconds.
#[derive(Debug, Deserialize)]
struct CsvRow {
    nodes: u64,
    measured: f64,
    expected: f64,
}

fn check_nanos(series: &str, row: usize, column: &str, value: f64) -> Result<f64, SourceLoadError> {
    if value.is_finite() && 0.0 <= value {
        Ok(value)
    } else {
        Err(SourceLoadError::InvalidValue {
            series: series.to_string(),
            row,
            column: column.to_string(),
            value,
        })
    }
}

/// Reads a benchmark series from CSV with a header row naming at least `nodes`, `measured` and
/// `expected`. Other columns are ignored and rows are kept in file order.
#[tracing::instrument(level = "trace", skip(name, rdr))]
pub fn read_series<R: io::Read>(
    name: impl Into<String>, color: SeriesColor, rdr: R,
) -> Result<BenchmarkSeries, SourceLoadError> {
    let name = name.into();
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr);

    let headers = reader.headers()?.clone();
    if let Some(missing) = REQUIRED_COLUMNS.iter().find(|c| !headers.iter().any(|h| h == **c)) {
        return Err(SourceLoadError::MissingColumn { series: name, column: missing.to_string() });
    }

    tracing::trace!(series=%name, "loading records from CSV...");
    let mut records = vec![];
    for (pos, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        let measured = check_nanos(name.as_str(), pos + 1, MEASURED_COLUMN, row.measured)?;
        let expected = check_nanos(name.as_str(), pos + 1, EXPECTED_COLUMN, row.expected)?;
        records.push(BenchmarkRecord::from_nanos(row.nodes, measured, expected));
    }
    tracing::debug!(series=%name, "deserialized {} records from CSV.", records.len());

    Ok(BenchmarkSeries::new(name, color, records))
}

/// Loads the series named by `setting` from its CSV file.
pub fn load_series(setting: &SeriesSetting) -> Result<BenchmarkSeries, SourceLoadError> {
    let csv_span = tracing::debug_span!("sourcing CSV", series=%setting.name, path=?setting.path);
    let _csv_span_guard = csv_span.enter();

    let file = File::open(&setting.path)
        .map_err(|source| SourceLoadError::Io { path: setting.path.clone(), source })?;
    read_series(setting.name.as_str(), setting.color, file)
}

/// Loads every configured series concurrently and waits for the full set before returning, so
/// domains are always computed over a complete render pass. Results follow the order of
/// `settings`; the first failed load fails the whole set.
#[tracing::instrument(level = "info", skip(settings), fields(nr_sources=%settings.len()))]
pub async fn load_all(settings: &[SeriesSetting]) -> Result<Vec<BenchmarkSeries>, SourceLoadError> {
    let loads = settings.iter().cloned().map(|setting| {
        let handle = tokio::task::spawn_blocking(move || load_series(&setting));
        async move { handle.await.map_err(SourceLoadError::from).and_then(std::convert::identity) }
    });

    match futures::future::try_join_all(loads).await {
        Ok(series) => {
            tracing::info!(
                nr_records=%series.iter().map(|s| s.len()).sum::<usize>(),
                "all benchmark series loaded"
            );
            Ok(series)
        },
        Err(err) => {
            tracing::error!(error=?err, "failed to load benchmark series");
            Err(err)
        },
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use claim::*;
    use once_cell::sync::Lazy;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::elements::Seconds;

    const PRIMARY_CSV: &str = "\
nodes,measured,expected
1,2000000000,1000000000
10,4000000000,8000000000
";

    #[test]
    fn test_read_series_scales_nanos() {
        Lazy::force(&crate::tracing::TEST_TRACING);
        let main_span = tracing::info_span!("test_read_series_scales_nanos");
        let _main_span_guard = main_span.enter();

        let series = assert_ok!(read_series("primary", SeriesColor::Blue, PRIMARY_CSV.as_bytes()));
        assert_eq!(series.name(), "primary");
        assert_eq!(series.color(), SeriesColor::Blue);
        assert_eq!(series.len(), 2);

        let first = series.records()[0];
        assert_eq!(first.node_count(), 1);
        assert_relative_eq!(first.measured(), Seconds::new(2.0));
        assert_relative_eq!(first.expected(), Seconds::new(1.0));

        let second = series.records()[1];
        assert_eq!(second.node_count(), 10);
        assert_relative_eq!(second.measured(), Seconds::new(4.0));
        assert_relative_eq!(second.expected(), Seconds::new(8.0));
    }

    #[test]
    fn test_read_series_ignores_extra_columns_and_order() {
        let csv = "\
expected, label ,nodes,measured
500, a ,32,1000
250, b ,4,750
";
        let series = assert_ok!(read_series("extra", SeriesColor::Green, csv.as_bytes()));
        let nodes: Vec<u64> = series.iter().map(|r| r.node_count()).collect();
        assert_eq!(nodes, vec![32, 4]);
        assert_relative_eq!(series.records()[0].expected(), Seconds::new(5e-7));
        assert_relative_eq!(series.records()[1].measured(), Seconds::new(7.5e-7));
    }

    #[test]
    fn test_read_series_missing_column() {
        let csv = "nodes,measured\n1,20\n";
        match assert_err!(read_series("partial", SeriesColor::Blue, csv.as_bytes())) {
            SourceLoadError::MissingColumn { series, column } => {
                assert_eq!(series, "partial");
                assert_eq!(column, EXPECTED_COLUMN);
            },
            err => panic!("unexpected error: {:?}", err),
        }

        assert_matches!(
            read_series("empty", SeriesColor::Blue, "".as_bytes()),
            Err(SourceLoadError::MissingColumn { .. })
        );
    }

    #[test]
    fn test_read_series_header_only_is_empty() {
        let series = assert_ok!(read_series("header", SeriesColor::Red, "nodes,measured,expected\n".as_bytes()));
        assert!(series.is_empty());
    }

    #[test]
    fn test_read_series_rejects_bad_values() {
        let negative = "nodes,measured,expected\n1,10,10\n2,-5,10\n";
        match assert_err!(read_series("negative", SeriesColor::Blue, negative.as_bytes())) {
            SourceLoadError::InvalidValue { row, column, value, .. } => {
                assert_eq!(row, 2);
                assert_eq!(column, MEASURED_COLUMN);
                assert_eq!(value, -5.0);
            },
            err => panic!("unexpected error: {:?}", err),
        }

        let garbage = "nodes,measured,expected\nmany,10,10\n";
        assert_matches!(
            read_series("garbage", SeriesColor::Blue, garbage.as_bytes()),
            Err(SourceLoadError::Csv(_))
        );
    }

    #[test]
    fn test_load_series_missing_file() {
        let setting = SeriesSetting {
            name: "ghost".to_string(),
            color: SeriesColor::Purple,
            path: "does/not/exist.csv".into(),
        };
        assert_matches!(load_series(&setting), Err(SourceLoadError::Io { .. }));
    }

    #[tokio::test]
    async fn test_load_all_without_sources() {
        let series = assert_ok!(load_all(&[]).await);
        assert!(series.is_empty());
    }
}
