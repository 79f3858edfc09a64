//! Delimited process records.
//!
//! One process per line: `id, burst, arrival[, priority]`. Fields are
//! comma separated and trimmed; blank lines are skipped. Every record must
//! have as many fields as the first one, and the priority column defaults
//! to 0 when the batch has only three columns.
//!
//! Any malformed record fails the whole load; there are no partial batches.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{SimError, SimResult};
use crate::models::Process;

const MIN_FIELDS: usize = 3;
const MAX_FIELDS: usize = 4;

/// Opens and loads a batch file.
pub fn open_batch(path: impl AsRef<Path>) -> SimResult<Vec<Process>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let processes = load_processes(BufReader::new(file))?;
    debug!(path = %path.display(), processes = processes.len(), "batch loaded");
    Ok(processes)
}

/// Loads processes from delimited records.
///
/// # Example
/// ```
/// use cpu_schedule::input::load_processes;
///
/// let batch = load_processes("1,5,0\n2,3,1\n".as_bytes()).unwrap();
/// assert_eq!(batch.len(), 2);
/// assert_eq!(batch[1].arrival_time, 1);
/// assert_eq!(batch[1].priority, 0);
/// ```
pub fn load_processes<R: BufRead>(reader: R) -> SimResult<Vec<Process>> {
    let mut processes = Vec::new();
    let mut field_count: Option<usize> = None;

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(SimError::Read)?;
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let expected = *field_count.get_or_insert(fields.len());
        if fields.len() != expected {
            return Err(SimError::FieldCount {
                line: line_no,
                expected,
                found: fields.len(),
            });
        }
        if !(MIN_FIELDS..=MAX_FIELDS).contains(&fields.len()) {
            return Err(SimError::Parse {
                line: line_no,
                message: format!(
                    "expected {MIN_FIELDS} or {MAX_FIELDS} fields (id, burst, arrival[, priority]), found {}",
                    fields.len()
                ),
            });
        }

        let mut process = Process::new(
            parse_field(fields[0], "id", line_no)?,
            parse_field(fields[1], "burst", line_no)?,
        )
        .with_arrival(parse_field(fields[2], "arrival", line_no)?);
        if let Some(priority) = fields.get(3) {
            process = process.with_priority(parse_field(priority, "priority", line_no)?);
        }

        processes.push(process);
    }

    Ok(processes)
}

fn parse_field(value: &str, name: &str, line: usize) -> SimResult<i64> {
    value.parse::<i64>().map_err(|e| SimError::Parse {
        line,
        message: format!("{name} {value:?}: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_columns_default_priority() {
        let batch = load_processes("1,5,0\n2,3,1\n3,8,2\n".as_bytes()).unwrap();
        assert_eq!(
            batch,
            vec![
                Process::new(1, 5),
                Process::new(2, 3).with_arrival(1),
                Process::new(3, 8).with_arrival(2),
            ]
        );
    }

    #[test]
    fn test_four_columns_with_whitespace() {
        let batch = load_processes(" 7 , 4 , 2 , 3 \n".as_bytes()).unwrap();
        assert_eq!(batch[0], Process::new(7, 4).with_arrival(2).with_priority(3));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let batch = load_processes("\n1,5,0\n\n2,3,1\n   \n".as_bytes()).unwrap();
        assert_eq!(batch.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(load_processes("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_non_integer_field() {
        let err = load_processes("1,5,0\n2,x,1\n".as_bytes()).unwrap_err();
        match err {
            SimError::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("burst"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_inconsistent_field_count() {
        let err = load_processes("1,5,0,1\n2,3,1\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            SimError::FieldCount {
                line: 2,
                expected: 4,
                found: 3
            }
        ));
    }

    #[test]
    fn test_too_few_fields() {
        let err = load_processes("1,5\n".as_bytes()).unwrap_err();
        assert!(matches!(err, SimError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_invalid_utf8_is_read_error() {
        let err = load_processes(&b"1,5,0\n\xff\xfe,3,1\n"[..]).unwrap_err();
        assert!(matches!(err, SimError::Read(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_missing_file() {
        let err = open_batch("/nonexistent/batch.csv").unwrap_err();
        assert!(matches!(err, SimError::Io { .. }));
        assert_eq!(err.exit_code(), 1);
    }
}
