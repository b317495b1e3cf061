//! Loader for tab-separated capture exports.
//!
//! Column headers like `frame.len` or `ip.dst` are normalized to
//! identifier-safe names (`frame_len`, `ip_dst`) before lookup, so exports
//! from different capture tool versions resolve to the same columns.

use super::schema::{PacketRow, TraceRecord};
use crate::utils::config::{
    FRAME_LEN_COLUMN, FRAME_NUMBER_COLUMN, IP_DST_COLUMN, IP_SRC_COLUMN, TIME_COLUMN_NAMES,
    TRACE_DELIMITER,
};
use crate::utils::error::TraceError;
use csv::StringRecord;
use log::{debug, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Positions of the required columns in a header row
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    frame_len: usize,
    frame_number: usize,
    ip_src: usize,
    ip_dst: usize,
    time: usize,
}

/// Load a capture trace from disk
///
/// **Public** - main entry point for parsing
///
/// # Errors
/// * `TraceError::NotFound` - The path does not exist
/// * `TraceError::Format` - Required columns are missing or a cell is unparseable
/// * `TraceError::Io` - The file exists but cannot be opened
pub fn load_trace(path: impl AsRef<Path>) -> Result<TraceRecord, TraceError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(TraceError::NotFound(path.to_path_buf()));
    }

    debug!("Loading trace: {}", path.display());

    let file = File::open(path)?;
    parse_trace(path, file)
}

/// Parse a capture export from any reader
///
/// `source` is only used to label errors.
pub fn parse_trace<R: Read>(source: &Path, reader: R) -> Result<TraceRecord, TraceError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(TRACE_DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| TraceError::format(source, e.to_string()))?
        .clone();

    // A capture with no packets may be exported without even a header line
    if headers.is_empty() {
        debug!("Trace {} has no header, treating as empty", source.display());
        return Ok(TraceRecord::default());
    }

    let normalized: Vec<String> = headers.iter().map(normalize_column_name).collect();
    let columns = resolve_columns(source, &normalized)?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| TraceError::format(source, e.to_string()))?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let frame_len = parse_cell::<u64>(
            source,
            line,
            FRAME_LEN_COLUMN,
            get_field(source, &record, line, columns.frame_len, FRAME_LEN_COLUMN)?,
        )?;
        let frame_number = parse_cell::<u64>(
            source,
            line,
            FRAME_NUMBER_COLUMN,
            get_field(source, &record, line, columns.frame_number, FRAME_NUMBER_COLUMN)?,
        )?;
        let time = parse_cell::<f64>(
            source,
            line,
            "time",
            get_field(source, &record, line, columns.time, "time")?,
        )?;
        if !time.is_finite() {
            return Err(TraceError::format(
                source,
                format!("line {}: time value '{}' is not finite", line, time),
            ));
        }

        rows.push(PacketRow {
            frame_len,
            frame_number,
            ip_src: get_field(source, &record, line, columns.ip_src, IP_SRC_COLUMN)?.to_string(),
            ip_dst: get_field(source, &record, line, columns.ip_dst, IP_DST_COLUMN)?.to_string(),
            time,
        });
    }

    let trace = TraceRecord::new(rows);

    if !trace.is_time_ordered() {
        warn!(
            "Trace {} has decreasing timestamps; durations use file order",
            source.display()
        );
    }

    debug!("Parsed {} packets from {}", trace.len(), source.display());

    Ok(trace)
}

/// Replace literal dots in a column header with underscores
///
/// **Public** - exposed so callers can match normalized names
pub fn normalize_column_name(name: &str) -> String {
    name.trim().replace('.', "_")
}

/// Locate the required columns among normalized headers
///
/// **Private** - internal helper for parse_trace
fn resolve_columns(source: &Path, headers: &[String]) -> Result<ColumnIndex, TraceError> {
    let find = |name: &str| headers.iter().position(|h| h == name);
    let require = |name: &str| {
        find(name).ok_or_else(|| {
            TraceError::format(source, format!("missing required column '{}'", name))
        })
    };

    let time = TIME_COLUMN_NAMES
        .iter()
        .find_map(|name| find(*name))
        .ok_or_else(|| {
            TraceError::format(
                source,
                format!("missing time column (one of {:?})", TIME_COLUMN_NAMES),
            )
        })?;

    Ok(ColumnIndex {
        frame_len: require(FRAME_LEN_COLUMN)?,
        frame_number: require(FRAME_NUMBER_COLUMN)?,
        ip_src: require(IP_SRC_COLUMN)?,
        ip_dst: require(IP_DST_COLUMN)?,
        time,
    })
}

/// Fetch a trimmed field, failing on short rows
///
/// **Private** - internal utility
fn get_field<'r>(
    source: &Path,
    record: &'r StringRecord,
    line: u64,
    index: usize,
    name: &str,
) -> Result<&'r str, TraceError> {
    record.get(index).map(str::trim).ok_or_else(|| {
        TraceError::format(source, format!("line {}: missing '{}' field", line, name))
    })
}

/// Parse one cell, reporting the line and column on failure
///
/// **Private** - internal utility
fn parse_cell<T>(source: &Path, line: u64, column: &str, value: &str) -> Result<T, TraceError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|e| {
        TraceError::format(
            source,
            format!("line {}: invalid {} value '{}': {}", line, column, value, e),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<TraceRecord, TraceError> {
        parse_trace(Path::new("inline.csv"), text.as_bytes())
    }

    #[test]
    fn test_normalize_column_name() {
        assert_eq!(normalize_column_name("ip.dst"), "ip_dst");
        assert_eq!(normalize_column_name("_ws.col.Time"), "_ws_col_Time");
        assert_eq!(normalize_column_name(" frame.len "), "frame_len");
    }

    #[test]
    fn test_parse_rows_in_order() {
        let text = "frame.number\t_ws.col.Time\tip.src\tip.dst\tframe.len\n\
                    1\t0.000\t10.0.0.2\t10.0.0.9\t60\n\
                    2\t0.250\t10.0.0.9\t10.0.0.2\t1514\n";

        let trace = parse(text).unwrap();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.rows[0], PacketRow::new(1, 60, "10.0.0.2", "10.0.0.9", 0.0));
        assert_eq!(trace.rows[1].frame_len, 1514);
        assert_eq!(trace.rows[1].time, 0.25);
    }

    #[test]
    fn test_header_only_is_empty_trace() {
        let trace = parse("frame.number\t_ws.col.Time\tip.src\tip.dst\tframe.len\n").unwrap();
        assert!(trace.is_empty());
    }

    #[test]
    fn test_no_header_is_empty_trace() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_missing_column_is_format_error() {
        let err = parse("frame.number\t_ws.col.Time\tip.src\tframe.len\n1\t0.0\t10.0.0.2\t60\n")
            .unwrap_err();
        match err {
            TraceError::Format { reason, .. } => assert!(reason.contains("ip_dst")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_time_column_alias() {
        let text = "frame.number\tframe.time_relative\tip.src\tip.dst\tframe.len\n\
                    1\t1.5\ta\tb\t100\n";
        assert_eq!(parse(text).unwrap().rows[0].time, 1.5);
    }

    #[test]
    fn test_bad_length_is_format_error() {
        let text = "frame.number\t_ws.col.Time\tip.src\tip.dst\tframe.len\n\
                    1\t0.0\ta\tb\tlots\n";
        assert!(matches!(parse(text), Err(TraceError::Format { .. })));
    }

    #[test]
    fn test_non_finite_time_is_format_error() {
        for cell in ["nan", "NaN", "inf", "-inf"] {
            let text = format!(
                "frame.number\t_ws.col.Time\tip.src\tip.dst\tframe.len\n1\t0.0\ta\tb\t60\n2\t{}\ta\tb\t60\n",
                cell
            );
            match parse(&text) {
                Err(TraceError::Format { reason, .. }) => assert!(reason.contains("line 3")),
                other => panic!("{cell}: expected format error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_decreasing_time_is_kept() {
        let text = "frame.number\t_ws.col.Time\tip.src\tip.dst\tframe.len\n\
                    1\t1.0\ta\tb\t60\n\
                    2\t0.5\tb\ta\t60\n";
        let trace = parse(text).unwrap();
        assert_eq!(trace.len(), 2);
        assert!(!trace.is_time_ordered());
        assert_eq!(trace.rows[1].time, 0.5);
    }

    #[test]
    fn test_empty_addresses_kept() {
        let text = "frame.number\t_ws.col.Time\tip.src\tip.dst\tframe.len\n\
                    1\t0.0\t\t\t42\n";
        let trace = parse(text).unwrap();
        assert_eq!(trace.rows[0].ip_src, "");
        assert_eq!(trace.rows[0].ip_dst, "");
    }
}
