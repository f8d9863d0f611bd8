use std::ffi::OsStr;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::errors::{CoverageError, Result};

/// Path that stands for standard input on the command line.
pub const STDIN_PATH: &str = "-";

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).map_err(|source| CoverageError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// Get a reader for either a gzipped, non-gzipped file, or stdin
///
/// # Arguments
///
/// - file_path: path to the file to read, or '-' for stdin
pub fn get_dynamic_reader_w_stdin(file_path_str: &str) -> Result<BufReader<Box<dyn Read>>> {
    if file_path_str == STDIN_PATH {
        Ok(BufReader::new(Box::new(std::io::stdin()) as Box<dyn Read>))
    } else {
        get_dynamic_reader(Path::new(file_path_str))
    }
}

/// Strip every extension from a file name, `sample.bedgraph.gz` -> `sample`.
pub fn remove_all_extensions(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    match name.split_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => name,
    }
}

/// Read scaffold names from a file, one per line. Blank lines and `#` comments are ignored.
pub fn read_scaffold_list(path: &Path) -> Result<Vec<String>> {
    let reader = get_dynamic_reader(path)?;

    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let name = line.trim();
        if name.is_empty() || name.starts_with('#') {
            continue;
        }
        names.push(name.to_string());
    }

    Ok(names)
}

/// Whether the file name ends with `.gz`.
pub fn is_gzipped(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("gz"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;
    use std::path::PathBuf;

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("sample.bedgraph", "sample")]
    #[case("/data/sample.ont_coverage.bedgraph.gz", "sample")]
    #[case("noext", "noext")]
    fn test_remove_all_extensions(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(remove_all_extensions(&PathBuf::from(path)), expected);
    }

    #[rstest]
    fn test_read_gzipped_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cov.bedgraph.gz");

        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        writeln!(encoder, "chr1\t0\t10\t3").unwrap();
        encoder.finish().unwrap();

        let reader = get_dynamic_reader(&path).unwrap();
        let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["chr1\t0\t10\t3".to_string()]);
    }

    #[rstest]
    fn test_missing_file_reports_path() {
        let Err(err) = get_dynamic_reader(Path::new("does/not/exist.bedgraph")) else {
            panic!("opening a missing file should fail");
        };
        assert!(err.to_string().contains("exist.bedgraph"));
    }

    #[rstest]
    fn test_read_scaffold_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaffolds.txt");
        std::fs::write(&path, "Chrom_1\n\n# skipped\n  Chrom_2  \n").unwrap();

        let names = read_scaffold_list(&path).unwrap();
        assert_eq!(names, vec!["Chrom_1".to_string(), "Chrom_2".to_string()]);
    }
}
