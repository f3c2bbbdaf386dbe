//! CSV loading and export.
//!
//! Reading follows standard CSV conventions: a header row, `,` delimiter and
//! `"` quoting. Empty fields and the configured null markers become missing
//! cells. Writing emits missing cells as empty fields, so a written dataset
//! reads back equal to itself.

use crate::config::ProfilerConfig;
use crate::error::{ProfilerError, Result};
use polars::prelude::*;
use std::fs::File;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info};

fn ensure_within_limit(size: u64, config: &ProfilerConfig) -> Result<()> {
    if size > config.max_input_bytes {
        return Err(ProfilerError::InputTooLarge {
            size,
            limit: config.max_input_bytes,
        });
    }
    Ok(())
}

/// Reader options shared by byte and file input.
fn read_options(config: &ProfilerConfig) -> CsvReadOptions {
    let null_values: Vec<PlSmallStr> = config
        .null_values
        .iter()
        .map(|s| s.as_str().into())
        .collect();

    let parse_options = CsvParseOptions::default()
        .with_separator(b',')
        .with_quote_char(Some(b'"'))
        .with_null_values(Some(NullValues::AllColumns(null_values)));

    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(config.infer_schema_length)
        .with_parse_options(parse_options)
}

/// Parse CSV bytes into a dataset.
pub fn read_csv_bytes(bytes: &[u8], config: &ProfilerConfig) -> Result<DataFrame> {
    ensure_within_limit(bytes.len() as u64, config)?;

    let df = read_options(config)
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .map_err(|e| ProfilerError::Parse(e.to_string()))?;

    debug!("Parsed CSV into {:?}", df.shape());
    Ok(df)
}

/// Read a CSV file into a dataset.
pub fn read_csv_path(path: impl AsRef<Path>, config: &ProfilerConfig) -> Result<DataFrame> {
    let path = path.as_ref();
    ensure_within_limit(std::fs::metadata(path)?.len(), config)?;

    info!("Loading dataset from: {}", path.display());
    let df = read_options(config)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()
        .map_err(|e| ProfilerError::Parse(e.to_string()))?;

    debug!("Parsed CSV into {:?}", df.shape());
    Ok(df)
}

/// Serialize a dataset to CSV bytes.
pub fn write_csv_bytes(df: &DataFrame) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut df = df.clone();
    CsvWriter::new(&mut buffer)
        .include_header(true)
        .with_separator(b',')
        .with_quote_char(b'"')
        .finish(&mut df)?;
    Ok(buffer)
}

/// Write a dataset to a CSV file, creating parent directories as needed.
pub fn write_csv_path(df: &DataFrame, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = File::create(path)?;
    let mut df = df.clone();
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(b',')
        .with_quote_char(b'"')
        .finish(&mut df)?;

    info!("Dataset saved: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(csv: &str) -> Result<DataFrame> {
        read_csv_bytes(csv.as_bytes(), &ProfilerConfig::default())
    }

    #[test]
    fn test_read_infers_types_and_missing() {
        let df = read("age,name\n25,a\n,b\n30,a\n").unwrap();

        assert_eq!(df.shape(), (3, 2));
        assert_eq!(df.column("age").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("name").unwrap().dtype(), &DataType::String);
        assert_eq!(df.column("age").unwrap().null_count(), 1);
    }

    #[test]
    fn test_read_null_markers() {
        let df = read("score,label\n1.5,NA\nN/A,x\n").unwrap();

        assert_eq!(df.column("score").unwrap().dtype(), &DataType::Float64);
        assert_eq!(df.column("score").unwrap().null_count(), 1);
        assert_eq!(df.column("label").unwrap().null_count(), 1);
    }

    #[test]
    fn test_read_quoted_fields() {
        let df = read("city,note\n\"New York, NY\",\"said \"\"hi\"\"\"\n").unwrap();
        let city = df.column("city").unwrap().get(0).unwrap();
        assert_eq!(city, AnyValue::String("New York, NY"));
    }

    #[test]
    fn test_read_rejects_oversized_input() {
        let config = ProfilerConfig::builder().max_input_bytes(8).build().unwrap();
        let result = read_csv_bytes(b"a,b\n1,2\n3,4\n", &config);
        assert!(matches!(
            result,
            Err(ProfilerError::InputTooLarge { limit: 8, .. })
        ));
    }

    #[test]
    fn test_read_malformed_is_parse_error() {
        let result = read("a,b\n1,2,3,4\n");
        assert!(matches!(result, Err(ProfilerError::Parse(_))));
    }

    #[test]
    fn test_read_empty_input_is_parse_error() {
        let result = read("");
        assert!(matches!(result, Err(ProfilerError::Parse(_))));
    }

    #[test]
    fn test_read_path_matches_read_bytes() {
        let csv = "id,score,label\n1,2.5,NA\n2,,x\n2,,x\n";
        let dir = std::env::temp_dir().join(format!("csv-profiler-io-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("input.csv");
        std::fs::write(&path, csv).unwrap();

        let config = ProfilerConfig::default();
        let from_path = read_csv_path(&path, &config).unwrap();
        let from_bytes = read_csv_bytes(csv.as_bytes(), &config).unwrap();

        assert_eq!(from_path.shape(), (3, 3));
        assert!(from_path.equals_missing(&from_bytes));
        assert_eq!(from_path.column("label").unwrap().null_count(), 1);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_read_path_checks_size_before_reading() {
        let dir = std::env::temp_dir().join(format!("csv-profiler-limit-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("big.csv");
        std::fs::write(&path, "a,b\n1,2\n3,4\n").unwrap();

        let config = ProfilerConfig::builder().max_input_bytes(4).build().unwrap();
        let result = read_csv_path(&path, &config);
        assert!(matches!(
            result,
            Err(ProfilerError::InputTooLarge { size: 12, limit: 4 })
        ));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_read_infinite_values_as_float() {
        let df = read("a,b\n1,2\ninf,3\n-inf,4\n").unwrap();
        assert_eq!(df.column("a").unwrap().dtype(), &DataType::Float64);
        assert_eq!(df.column("a").unwrap().null_count(), 0);
    }

    #[test]
    fn test_write_emits_header_and_empty_missing() {
        let df = df![
            "age" => [Some(25i64), None],
            "name" => [Some("a"), Some("b")],
        ]
        .unwrap();

        let bytes = write_csv_bytes(&df).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "age,name\n25,a\n,b\n");
    }

    #[test]
    fn test_round_trip() {
        let df = df![
            "age" => [Some(25.0), None, Some(30.5)],
            "name" => [Some("a"), None, Some("c, d")],
            "flag" => [Some(true), Some(false), None],
        ]
        .unwrap();

        let bytes = write_csv_bytes(&df).unwrap();
        let parsed = read_csv_bytes(&bytes, &ProfilerConfig::default()).unwrap();
        assert!(parsed.equals_missing(&df));
    }
}
