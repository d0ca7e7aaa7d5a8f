//! Record store loader: flat CSV source -> ordered raw rows.
//!
//! The loader only establishes tabular structure; every value stays a raw
//! string keyed by column name, and typing is the normalizer's job.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::error::StoreError;

/// One raw row, column name -> unparsed field value.
pub type RawRow = BTreeMap<String, String>;

/// Read the flat record source at `path` into raw rows, in file order.
///
/// Fails with [`StoreError::SourceNotFound`] when the file is absent and
/// [`StoreError::SourceUnreadable`] on structural problems: no header row,
/// or a data row whose field count disagrees with the header.
pub fn load_rows(path: &Path) -> Result<Vec<RawRow>, StoreError> {
    let file = File::open(path).map_err(|error| {
        if error.kind() == ErrorKind::NotFound {
            StoreError::SourceNotFound {
                path: path.to_path_buf(),
            }
        } else {
            StoreError::Io(error)
        }
    })?;

    let mut lines = BufReader::new(file).lines();
    let mut line_number = 0usize;

    let headers = loop {
        match lines.next() {
            Some(line) => {
                line_number += 1;
                let line = line?;
                if !line.trim().is_empty() {
                    break split_fields(&line);
                }
            }
            None => {
                return Err(StoreError::SourceUnreadable {
                    reason: String::from("missing header row"),
                })
            }
        }
    };

    let mut rows = Vec::new();
    for line in lines {
        line_number += 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let fields = split_fields(&line);
        if fields.len() != headers.len() {
            return Err(StoreError::SourceUnreadable {
                reason: format!(
                    "line {line_number}: expected {} fields, found {}",
                    headers.len(),
                    fields.len()
                ),
            });
        }

        rows.push(headers.iter().cloned().zip(fields).collect());
    }

    Ok(rows)
}

/// Split one CSV line into fields, honoring double-quoted values with `""`
/// escapes and a trailing carriage return.
fn split_fields(line: &str) -> Vec<String> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }

    fields.push(current);
    fields
}
