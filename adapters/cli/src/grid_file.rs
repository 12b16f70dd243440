//! Grid files: a JSON array of rows, each row an array of `0`/`1` cells.

use std::{fs, path::Path};

use anyhow::{bail, Context, Result};

/// Reads and validates a grid file.
pub(crate) fn load(path: &Path) -> Result<Vec<Vec<u8>>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read grid file at {}", path.display()))?;
    parse(&contents).with_context(|| format!("invalid grid file at {}", path.display()))
}

/// Parses grid JSON, rejecting cells other than `0` and `1`.
pub(crate) fn parse(contents: &str) -> Result<Vec<Vec<u8>>> {
    let rows: Vec<Vec<u8>> =
        serde_json::from_str(contents).context("failed to parse grid json contents")?;
    for (row_index, row) in rows.iter().enumerate() {
        if let Some((column, value)) = row
            .iter()
            .enumerate()
            .find(|&(_, &value)| value > 1)
        {
            bail!("cell ({row_index}, {column}) holds {value}; cells must be 0 or 1");
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_rows() {
        let rows = parse("[[0, 1, 0], [1, 1, 1]]").expect("valid grid json");

        assert_eq!(rows, vec![vec![0, 1, 0], vec![1, 1, 1]]);
    }

    #[test]
    fn rejects_cells_outside_zero_and_one() {
        let error = parse("[[0, 1], [2, 0]]").expect_err("2 is not a cell value");

        assert!(format!("{error:#}").contains("cell (1, 0) holds 2"), "{error:#}");
    }

    #[test]
    fn rejects_malformed_json() {
        let error = parse("[[0, 1], [1").expect_err("truncated json");

        assert!(format!("{error:#}").contains("failed to parse grid json"));
    }

    #[test]
    fn load_reports_missing_file() {
        let error = load(Path::new("definitely/not/here.json")).expect_err("file is missing");

        assert!(format!("{error:#}").contains("failed to read grid file"));
    }
}
