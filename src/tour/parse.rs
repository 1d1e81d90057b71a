//! Path and board file loading
//!
//! Path lines look like `Step 12: (3, 4)`. Only lines starting with the
//! `Step` marker are read; everything else is ignored.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::{BoardConfig, Coordinate, TourPath};

/// Marker token that starts every path line
pub const STEP_MARKER: &str = "Step";

/// Error type for board/path loading
#[derive(Debug, Error)]
pub enum TourError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl TourError {
    fn parse(line: usize, message: impl Into<String>) -> Self {
        TourError::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Parse one `(x, y)` pair from a marker line (1-based `line` for errors)
pub fn parse_step_line(text: &str, line: usize) -> Result<Coordinate, TourError> {
    let open = text
        .find('(')
        .ok_or_else(|| TourError::parse(line, "missing '('"))?;
    let close = text[open + 1..]
        .find(')')
        .map(|i| open + 1 + i)
        .ok_or_else(|| TourError::parse(line, "missing ')'"))?;

    let inner = &text[open + 1..close];
    let mut parts = inner.split(',');
    let (Some(xs), Some(ys), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(TourError::parse(line, format!("expected 'x, y', got '{}'", inner)));
    };

    let parse_int = |s: &str| {
        s.trim()
            .parse::<i32>()
            .map_err(|e| TourError::parse(line, format!("invalid integer '{}': {}", s.trim(), e)))
    };

    Ok(Coordinate::new(parse_int(xs)?, parse_int(ys)?))
}

/// Parse the full contents of a path file
pub fn parse_path_str(contents: &str) -> Result<TourPath, TourError> {
    let mut steps = Vec::new();
    for (i, text) in contents.lines().enumerate() {
        if text.starts_with(STEP_MARKER) {
            steps.push(parse_step_line(text, i + 1)?);
        }
    }
    Ok(TourPath::new(steps))
}

/// Parse the full contents of a board file: one row of integers per line.
/// Blank lines still count as (empty) rows.
pub fn parse_board_str(contents: &str) -> Result<BoardConfig, TourError> {
    let mut rows = Vec::new();
    for (i, text) in contents.lines().enumerate() {
        let row = text
            .split_whitespace()
            .map(|tok| {
                tok.parse::<i32>()
                    .map_err(|e| TourError::parse(i + 1, format!("invalid integer '{}': {}", tok, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }
    Ok(BoardConfig::new(rows))
}

fn read_file(path: &Path) -> Result<String, TourError> {
    fs::read_to_string(path).map_err(|source| TourError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a tour path from a text file
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<TourPath, TourError> {
    parse_path_str(&read_file(path.as_ref())?)
}

/// Load a board configuration from a text file
pub fn load_board<P: AsRef<Path>>(path: P) -> Result<BoardConfig, TourError> {
    parse_board_str(&read_file(path.as_ref())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path_ignores_other_lines() {
        let text = "Coordinates of the tour:\nStep 1: (0,0)\n  Step 2: (9,9)\nStep 2: (1, 2)\n\n";
        let path = parse_path_str(text).unwrap();
        assert_eq!(path.steps(), &[Coordinate::new(0, 0), Coordinate::new(1, 2)]);
    }

    #[test]
    fn test_parse_path_empty() {
        let path = parse_path_str("no steps here\n").unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn test_parse_uses_first_parens() {
        let c = parse_step_line("Step 3: (4, 5) -> (6, 7)", 1).unwrap();
        assert_eq!(c, Coordinate::new(4, 5));
    }

    #[test]
    fn test_parse_errors_name_line() {
        match parse_path_str("Step 1: (0,0)\nStep 2: (a,1)\n") {
            Err(TourError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected {:?}", other),
        }
        assert!(parse_step_line("Step 1: 0,0", 1).is_err());
        assert!(parse_step_line("Step 1: (0,0", 1).is_err());
        assert!(parse_step_line("Step 1: (0)", 1).is_err());
        assert!(parse_step_line("Step 1: (0,1,2)", 1).is_err());
    }

    #[test]
    fn test_parse_board() {
        let board = parse_board_str("0 0\n0 0").unwrap();
        assert_eq!(board.size(), 2);
        assert_eq!(board.rows[1], vec![0, 0]);

        let board = parse_board_str("1 2 3\n\n4").unwrap();
        assert_eq!(board.size(), 3);
        assert!(board.rows[1].is_empty());

        assert!(matches!(parse_board_str("0 x"), Err(TourError::Parse { line: 1, .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_path("/definitely/not/here/path.txt").unwrap_err();
        assert!(matches!(err, TourError::Io { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("path.txt");
        fs::write(&file, "Step 1: (0,0)\nStep 2: (1,1)\n").unwrap();
        assert_eq!(load_path(&file).unwrap().len(), 2);
    }
}
