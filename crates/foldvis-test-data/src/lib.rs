//! foldvis-test-data
//!
//! A module to provide test files embedded in the crate for use in testing.
//! Small structure and modification tables are included in the crate distribution.
//!
//! The test files are represented as `TestFile` objects which package the raw bytes
//! and create temporary files for programs to operate on.
use std::fs;
use tempfile::{Builder, NamedTempFile};

#[derive(Debug)]
/// Test File
///
/// Example usage:
///
/// ```ignore
/// // returns (filepath, _tempfile_handle).
/// // _handle ensures the tempfile remains in scope
/// use foldvis_test_data::TestFile;
/// let (csv_file, _temp) = TestFile::residues_01().create_temp().unwrap();
///
/// ```
pub struct TestFile {
    filebinary: &'static [u8],
    suffix: &'static str,
}

impl TestFile {
    /// Six residues over two accessions (P01137, P09651), one of each secondary-structure
    /// label, `True`/`False` flags, an extra `pLDDT` column and one empty `y_coord_n` cell.
    pub fn residues_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/residues_01.csv"),
            suffix: "csv",
        }
    }
    /// Flags written as 0/1.
    pub fn residues_numeric_flags() -> Self {
        Self {
            filebinary: include_bytes!("../data/residues_numeric_flags.csv"),
            suffix: "csv",
        }
    }
    /// Rows 2 and 3 carry more than one secondary-structure flag.
    pub fn residues_conflict() -> Self {
        Self {
            filebinary: include_bytes!("../data/residues_conflict.csv"),
            suffix: "csv",
        }
    }
    /// Lacks the `x_coord_n` column.
    pub fn residues_missing_column() -> Self {
        Self {
            filebinary: include_bytes!("../data/residues_missing_column.csv"),
            suffix: "csv",
        }
    }
    /// `Y`/`N` flags, with an unreadable `on` in the `STRN` column of row 2.
    pub fn residues_unreadable_flag() -> Self {
        Self {
            filebinary: include_bytes!("../data/residues_unreadable_flag.csv"),
            suffix: "csv",
        }
    }
    pub fn modifications_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/modifications_01.csv"),
            suffix: "csv",
        }
    }

    pub fn create_temp(&self) -> std::io::Result<(String, NamedTempFile)> {
        let temp = Builder::new()
            .suffix(&format!(".{}", self.suffix))
            .tempfile()?;

        fs::write(&temp, self.filebinary)?;
        let path = temp.path().to_string_lossy().into_owned();

        Ok((path, temp))
    }
}
