use std::io;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, Int32Array, Int64Array, UInt32Array, UInt64Array};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::model::PublicationDataset;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a publications dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with `Year` and `Count` columns (recommended)
/// * `.json`    – `[{ "Year": 1997, "Count": 13 }, ...]`
/// * `.parquet` – `Year` and `Count` integer columns
///
/// Any further columns are ignored; the core only consumes the two named ones.
pub fn load_file(path: &Path) -> Result<PublicationDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

/// One raw input row. Shared by the CSV and JSON readers; extra fields in the
/// source are skipped. `Count` is non-negative by construction of the type.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Count")]
    count: u64,
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<PublicationDataset> {
    let file = std::fs::File::open(path).context("opening CSV")?;
    parse_csv(file)
}

fn parse_csv<R: io::Read>(input: R) -> Result<PublicationDataset> {
    let mut reader = csv::Reader::from_reader(input);

    let mut rows = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRow>().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push((row.year, row.count));
    }

    PublicationDataset::from_rows(rows).context("building dataset from CSV")
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "Year": 1996, "Count": 8 },
///   { "Year": 1997, "Count": 13 }
/// ]
/// ```
fn load_json(path: &Path) -> Result<PublicationDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

fn parse_json(text: &str) -> Result<PublicationDataset> {
    let records: Vec<RawRow> = serde_json::from_str(text).context("parsing JSON records")?;

    let rows = records.into_iter().map(|r| (r.year, r.count)).collect();
    PublicationDataset::from_rows(rows).context("building dataset from JSON")
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file containing the publications table.
///
/// Expected schema: `Year` and `Count` as any Arrow integer type.  Works with
/// files written by both **Pandas** (`df.to_parquet()`) and **Polars**
/// (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<PublicationDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let year_idx = schema
            .index_of("Year")
            .map_err(|_| anyhow::anyhow!("Parquet file missing 'Year' column"))?;
        let count_idx = schema
            .index_of("Count")
            .map_err(|_| anyhow::anyhow!("Parquet file missing 'Count' column"))?;

        let year_col = batch.column(year_idx);
        let count_col = batch.column(count_idx);

        for row in 0..batch.num_rows() {
            let year = extract_integer(year_col, row)
                .with_context(|| format!("Row {row}: failed to read 'Year'"))?;
            let count = extract_integer(count_col, row)
                .with_context(|| format!("Row {row}: failed to read 'Count'"))?;

            let year = i32::try_from(year)
                .with_context(|| format!("Row {row}: year {year} out of range"))?;
            let count = u64::try_from(count)
                .with_context(|| format!("Row {row}: negative publication count {count}"))?;

            rows.push((year, count));
        }
    }

    PublicationDataset::from_rows(rows).context("building dataset from parquet")
}

/// Extract a single integer from an Arrow column at a given row.
fn extract_integer(col: &Arc<dyn Array>, row: usize) -> Result<i64> {
    if col.is_null(row) {
        bail!("null value in integer column");
    }
    match col.data_type() {
        DataType::Int32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int32Array>()
                .context("expected Int32Array")?;
            Ok(i64::from(arr.value(row)))
        }
        DataType::Int64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int64Array>()
                .context("expected Int64Array")?;
            Ok(arr.value(row))
        }
        DataType::UInt32 => {
            let arr = col
                .as_any()
                .downcast_ref::<UInt32Array>()
                .context("expected UInt32Array")?;
            Ok(i64::from(arr.value(row)))
        }
        DataType::UInt64 => {
            let arr = col
                .as_any()
                .downcast_ref::<UInt64Array>()
                .context("expected UInt64Array")?;
            i64::try_from(arr.value(row)).context("integer value exceeds i64")
        }
        other => bail!("Expected an integer column, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_csv_with_header() {
        let csv = "Year,Count\n2019,5\n2020,3\n2021,7\n";
        let ds = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.total, 15);
        assert_eq!(ds.observations[0].year, 2019);
    }

    #[test]
    fn extra_csv_columns_are_ignored() {
        let csv = "Year,Count,Source\n2019,5,PubMed\n2020,3,PubMed\n";
        let ds = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.total, 8);
    }

    #[test]
    fn csv_missing_count_column_fails() {
        let csv = "Year,Articles\n2019,5\n";
        assert!(parse_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn negative_count_is_rejected() {
        let csv = "Year,Count\n2019,-5\n";
        assert!(parse_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn csv_without_rows_fails() {
        let csv = "Year,Count\n";
        assert!(parse_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn parses_record_oriented_json() {
        let json = r#"[
            { "Year": 2019, "Count": 5 },
            { "Year": 2021, "Count": 7, "Source": "PubMed" },
            { "Year": 2020, "Count": 3 }
        ]"#;
        let ds = parse_json(json).unwrap();
        let years: Vec<i32> = ds.observations.iter().map(|o| o.year).collect();
        assert_eq!(years, vec![2019, 2020, 2021]);
        assert_eq!(ds.observations[2].cumulative, 15);
    }

    #[test]
    fn unsupported_extension_fails() {
        assert!(load_file(Path::new("publications.xlsx")).is_err());
    }
}
