//! CSV-to-CSV batch stages over route strings. every row is a pure
//! function of its own route text, so rows are mapped over a worker pool;
//! the transition stage folds per-worker partial tables and merges them
//! at the end.

use crate::route::simplify_ops;
use crate::route::split_ops;
use crate::route::{HalfType, RouteError, TransitionCounts};
use itertools::Itertools;
use kdam::tqdm;
use rayon::prelude::*;

/// column appended by the simplify stage.
pub const SIMPLIFIED_COLUMN: &str = "Total Trip";

/// first-half column written by the split stage.
pub const ASCENDING_COLUMN: &str = "Ascending";

/// second-half column written by the split stage.
pub const DESCENDING_COLUMN: &str = "Descending";

/// simplifies the route column of every row, writing all input columns
/// plus an appended simplified-route column.
pub fn simplify_file(
    input: &str,
    output: &str,
    route_column: &str,
    parallelism: usize,
) -> Result<(), RouteError> {
    let (headers, rows) = read_rows(input)?;
    let route_idx = find_column(&headers, route_column)?;
    log::info!("loaded {} trip records from '{}'", rows.len(), input);

    let pool = build_pool(parallelism)?;
    let simplified: Vec<String> = pool.install(|| {
        rows.par_iter()
            .map(|row| simplify_ops::simplify_route(row.get(route_idx).unwrap_or_default()))
            .collect()
    });

    let mut writer = csv::Writer::from_path(output)
        .map_err(|e| write_error(output, format!("{e}")))?;
    let mut out_headers = headers.clone();
    out_headers.push_field(SIMPLIFIED_COLUMN);
    writer
        .write_record(&out_headers)
        .map_err(|e| write_error(output, format!("{e}")))?;

    let write_iter = tqdm!(
        rows.iter().zip(simplified.iter()),
        desc = "write simplified trips",
        total = rows.len()
    );
    for (row, total_trip) in write_iter {
        let mut record = row.clone();
        record.push_field(total_trip);
        writer
            .write_record(&record)
            .map_err(|e| write_error(output, format!("{e}")))?;
    }
    writer
        .flush()
        .map_err(|e| write_error(output, format!("{e}")))?;
    eprintln!();

    log::info!("saved {} simplified trip records to '{}'", rows.len(), output);
    Ok(())
}

/// splits the route column of every row at its temporal midpoint, writing
/// only the ascending and descending columns.
pub fn split_file(
    input: &str,
    output: &str,
    route_column: &str,
    parallelism: usize,
) -> Result<(), RouteError> {
    let (headers, rows) = read_rows(input)?;
    let route_idx = find_column(&headers, route_column)?;
    log::info!("loaded {} trip records from '{}'", rows.len(), input);

    let pool = build_pool(parallelism)?;
    let halves: Vec<split_ops::SplitRoute> = pool.install(|| {
        rows.par_iter()
            .map(|row| split_ops::split_route(row.get(route_idx).unwrap_or_default()))
            .collect()
    });

    let mut writer = csv::Writer::from_path(output)
        .map_err(|e| write_error(output, format!("{e}")))?;
    writer
        .write_record([ASCENDING_COLUMN, DESCENDING_COLUMN])
        .map_err(|e| write_error(output, format!("{e}")))?;

    let write_iter = tqdm!(
        halves.iter(),
        desc = "write split trips",
        total = halves.len()
    );
    for half in write_iter {
        writer
            .write_record([half.ascending.as_str(), half.descending.as_str()])
            .map_err(|e| write_error(output, format!("{e}")))?;
    }
    writer
        .flush()
        .map_err(|e| write_error(output, format!("{e}")))?;
    eprintln!();

    log::info!("saved {} split trip records to '{}'", halves.len(), output);
    Ok(())
}

/// aggregates mode-to-mode transition counts for the ascending and
/// descending columns, writing one frequency table with the ascending
/// block first, each block sorted by count descending.
pub fn transitions_file(
    input: &str,
    output: &str,
    ascending_column: &str,
    descending_column: &str,
    parallelism: usize,
) -> Result<(), RouteError> {
    let (headers, rows) = read_rows(input)?;
    let asc_idx = find_column(&headers, ascending_column)?;
    let desc_idx = find_column(&headers, descending_column)?;
    log::info!("loaded {} trip records from '{}'", rows.len(), input);

    let pool = build_pool(parallelism)?;
    let (ascending, descending) = pool.install(|| {
        (
            count_column(&rows, asc_idx),
            count_column(&rows, desc_idx),
        )
    });
    log::info!("found {} unique ascending transitions", ascending.len());
    log::info!("found {} unique descending transitions", descending.len());

    let out_rows = ascending
        .into_rows(HalfType::Ascending)
        .into_iter()
        .chain(descending.into_rows(HalfType::Descending))
        .collect_vec();

    let mut writer = csv::Writer::from_path(output)
        .map_err(|e| write_error(output, format!("{e}")))?;
    for row in out_rows.iter() {
        writer
            .serialize(row)
            .map_err(|e| write_error(output, format!("{e}")))?;
    }
    writer
        .flush()
        .map_err(|e| write_error(output, format!("{e}")))?;

    log::info!("saved {} transition records to '{}'", out_rows.len(), output);
    Ok(())
}

/// builds one partial transition table per worker and merges them.
fn count_column(rows: &[csv::StringRecord], index: usize) -> TransitionCounts {
    rows.par_iter()
        .fold(TransitionCounts::new, |mut acc, row| {
            acc.observe_route(row.get(index).unwrap_or_default());
            acc
        })
        .reduce(TransitionCounts::new, TransitionCounts::merge)
}

fn read_rows(filename: &str) -> Result<(csv::StringRecord, Vec<csv::StringRecord>), RouteError> {
    let mut reader = csv::ReaderBuilder::new()
        .from_path(filename)
        .map_err(|e| read_error(filename, format!("{e}")))?;
    let headers = reader
        .headers()
        .map_err(|e| read_error(filename, format!("{e}")))?
        .clone();
    let rows = reader
        .records()
        .map(|r| r.map_err(|e| read_error(filename, format!("{e}"))))
        .collect::<Result<Vec<_>, RouteError>>()?;
    Ok((headers, rows))
}

fn find_column(headers: &csv::StringRecord, column: &str) -> Result<usize, RouteError> {
    headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| RouteError::MissingColumnError {
            column: String::from(column),
            available: headers.iter().join(", "),
        })
}

fn build_pool(parallelism: usize) -> Result<rayon::ThreadPool, RouteError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(parallelism)
        .build()
        .map_err(|e| RouteError::OtherError(format!("failure building worker pool: {e}")))
}

fn read_error(filename: &str, message: String) -> RouteError {
    RouteError::CsvReadError {
        filename: String::from(filename),
        message,
    }
}

fn write_error(filename: &str, message: String) -> RouteError {
    RouteError::CsvWriteError {
        filename: String::from(filename),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::{simplify_file, split_file, transitions_file};
    use std::io::Write;
    use std::path::Path;

    fn write_csv(path: &Path, contents: &str) {
        let mut file = std::fs::File::create(path).expect("failed creating test input");
        file.write_all(contents.as_bytes())
            .expect("failed writing test input");
    }

    fn read_csv(path: &Path) -> Vec<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .expect("failed reading test output");
        reader
            .records()
            .map(|r| {
                r.expect("failed reading test output row")
                    .iter()
                    .map(String::from)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_simplify_file_appends_column() {
        let dir = tempfile::tempdir().expect("failed creating temp dir");
        let input = dir.path().join("trip2.csv");
        let output = dir.path().join("trip3.csv");
        write_csv(
            &input,
            "Origin,Optimized Route\n\
             a,walking(5분) -> bus(15분) -> walking(3분) -> subway(20분) -> walking(2분)\n\
             b,\n",
        );

        simplify_file(
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            "Optimized Route",
            1,
        )
        .expect("simplify_file failed");

        let rows = read_csv(&output);
        assert_eq!(rows[0], vec!["Origin", "Optimized Route", "Total Trip"]);
        assert_eq!(
            rows[1][2],
            "walking(5분) -> bus(18분) -> subway(20분) -> walking(2분)"
        );
        assert_eq!(rows[2][2], "");
    }

    #[test]
    fn test_simplify_file_missing_column() {
        let dir = tempfile::tempdir().expect("failed creating temp dir");
        let input = dir.path().join("trip2.csv");
        let output = dir.path().join("trip3.csv");
        write_csv(&input, "Origin,Destination\na,b\n");

        let result = simplify_file(
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            "Optimized Route",
            1,
        );
        let message = result.expect_err("expected missing column error").to_string();
        assert!(message.contains("Optimized Route"));
        assert!(message.contains("Origin, Destination"));
    }

    #[test]
    fn test_split_file_writes_halves() {
        let dir = tempfile::tempdir().expect("failed creating temp dir");
        let input = dir.path().join("trip3.csv");
        let output = dir.path().join("trip4.csv");
        write_csv(
            &input,
            "Origin,Total Trip\n\
             a,walking(7분) -> subway(6분) -> walking(6분)\n\
             b,\n",
        );

        split_file(
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            "Total Trip",
            1,
        )
        .expect("split_file failed");

        let rows = read_csv(&output);
        assert_eq!(rows[0], vec!["Ascending", "Descending"]);
        assert_eq!(rows[1][0], "walking(7분) -> subway(2.5분)");
        assert_eq!(rows[1][1], "subway(3.5분) -> walking(6분)");
        assert_eq!(rows[2][0], "");
        assert_eq!(rows[2][1], "N/A");
    }

    #[test]
    fn test_transitions_file_aggregates_counts() {
        let dir = tempfile::tempdir().expect("failed creating temp dir");
        let input = dir.path().join("trip4.csv");
        let output = dir.path().join("final.csv");
        write_csv(
            &input,
            "Ascending,Descending\n\
             walking(5분) -> subway(10분),subway(5분) -> walking(2분)\n\
             walking(3분) -> subway(20분),N/A\n",
        );

        transitions_file(
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            "Ascending",
            "Descending",
            1,
        )
        .expect("transitions_file failed");

        let rows = read_csv(&output);
        assert_eq!(rows[0], vec!["Transition", "Count", "Type"]);
        assert_eq!(rows[1], vec!["walking -> subway", "2", "Ascending"]);
        assert_eq!(rows[2], vec!["subway -> walking", "1", "Descending"]);
    }
}
