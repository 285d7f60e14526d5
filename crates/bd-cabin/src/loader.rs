//! CSV layout loader.
//!
//! # CSV format
//!
//! One row per row group, front of the cabin first:
//!
//! ```csv
//! repeat,pattern
//! 4,SS.A.SS
//! 1,S+.A.SS
//! 20,SSS.A.SSS
//! ```
//!
//! `pattern` uses the alphabet documented in [`crate::layout`].  Surrounding
//! whitespace in either field is trimmed.

use std::io::Read;
use std::path::Path;

use crate::{CabinError, LayoutSpec, RowGroup};

/// Load a [`LayoutSpec`] from a CSV file.
pub fn load_layout_csv(path: &Path) -> Result<LayoutSpec, CabinError> {
    let file = std::fs::File::open(path).map_err(CabinError::Io)?;
    load_layout_reader(file)
}

/// Like [`load_layout_csv`] but accepts any `Read` source.
pub fn load_layout_reader<R: Read>(reader: R) -> Result<LayoutSpec, CabinError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let groups = csv_reader
        .deserialize::<RowGroup>()
        .map(|row| row.map_err(|e| CabinError::Parse(e.to_string())))
        .collect::<Result<Vec<_>, _>>()?;

    if groups.is_empty() {
        return Err(CabinError::Parse("layout file contains no row groups".into()));
    }
    Ok(LayoutSpec { groups })
}
