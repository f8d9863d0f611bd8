use std::collections::HashMap;
use std::fmt::{self, Display};
use std::io::BufRead;
use std::path::{Path, PathBuf};

use log::debug;

use crate::errors::{CoverageError, Result};
use crate::models::{BedGraphRecord, CoverageTrack};
use crate::utils::{STDIN_PATH, get_dynamic_reader_w_stdin};

///
/// BedGraph struct, the in-memory representation of a bedgraph file.
/// Scaffolds are kept in the order they first appear in the file.
///
#[derive(Clone, Debug)]
pub struct BedGraph {
    pub tracks: Vec<CoverageTrack>,
    pub header: Option<String>,
    pub path: Option<PathBuf>,
}

impl BedGraph {
    ///
    /// Parse bedgraph rows from any buffered reader.
    ///
    /// # Arguments:
    /// - reader: the source of the lines
    /// - source_name: label used in error messages (usually the file path)
    pub fn from_reader<R: BufRead>(reader: R, source_name: &str) -> Result<Self> {
        let mut tracks: Vec<CoverageTrack> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut header = String::new();

        for (line_idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = line_idx + 1;

            if line.trim().is_empty() {
                continue;
            }

            if is_header_line(&line) {
                if !header.is_empty() {
                    header.push('\n');
                }
                header.push_str(&line);
                continue;
            }

            let record = parse_bedgraph_line(&line, source_name, line_no)?;

            let slot = match index.get(&record.chr) {
                Some(slot) => *slot,
                None => {
                    index.insert(record.chr.clone(), tracks.len());
                    tracks.push(CoverageTrack::new(&record.chr));
                    tracks.len() - 1
                }
            };
            tracks[slot].records.push(record);
        }

        if tracks.is_empty() {
            return Err(CoverageError::EmptyBedGraph(source_name.to_string()));
        }

        debug!(
            "Parsed {} records on {} scaffolds from {}",
            tracks.iter().map(|t| t.len()).sum::<usize>(),
            tracks.len(),
            source_name
        );

        Ok(BedGraph {
            tracks,
            header: match header.is_empty() {
                true => None,
                false => Some(header),
            },
            path: None,
        })
    }

    pub fn track(&self, chr: &str) -> Option<&CoverageTrack> {
        self.tracks.iter().find(|t| t.chr == chr)
    }

    pub fn scaffolds(&self) -> impl Iterator<Item = &String> {
        self.tracks.iter().map(|t| &t.chr)
    }

    ///
    /// Pick tracks by name, in the requested order.
    /// Names absent from the file are returned separately so callers can report them.
    ///
    pub fn select<'a, S: AsRef<str>>(
        &'a self,
        names: &[S],
    ) -> (Vec<&'a CoverageTrack>, Vec<String>) {
        let mut found = Vec::new();
        let mut missing = Vec::new();

        for name in names {
            let name = name.as_ref();
            if found.iter().any(|t: &&CoverageTrack| t.chr == name) || missing.iter().any(|m| m == name) {
                continue;
            }
            match self.track(name) {
                Some(track) => found.push(track),
                None => missing.push(name.to_string()),
            }
        }

        (found, missing)
    }

    /// Total number of records across scaffolds.
    pub fn len(&self) -> usize {
        self.tracks.iter().map(|t| t.len()).sum()
    }

    pub fn num_scaffolds(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `track` and `browser` lines (matched on the whole first word) and `#` comments.
pub fn is_header_line(line: &str) -> bool {
    if line.starts_with('#') {
        return true;
    }
    matches!(line.split_whitespace().next(), Some("track") | Some("browser"))
}

///
/// Parse one data line: `chrom\tstart\tend\tcoverage`. Extra columns are ignored.
///
pub fn parse_bedgraph_line(line: &str, source_name: &str, line_no: usize) -> Result<BedGraphRecord> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 4 {
        return Err(CoverageError::MissingFields {
            source_name: source_name.to_string(),
            line: line_no,
            found: fields.len(),
        });
    }

    let invalid = |field: &'static str, value: &str| CoverageError::InvalidField {
        source_name: source_name.to_string(),
        line: line_no,
        field,
        value: value.to_string(),
    };

    let start: u32 = fields[1].trim().parse().map_err(|_| invalid("start", fields[1]))?;
    let end: u32 = fields[2].trim().parse().map_err(|_| invalid("end", fields[2]))?;
    let coverage: f64 = fields[3]
        .trim()
        .parse()
        .ok()
        .filter(|c: &f64| c.is_finite())
        .ok_or_else(|| invalid("coverage", fields[3]))?;

    if start > end {
        return Err(CoverageError::InvertedInterval {
            source_name: source_name.to_string(),
            line: line_no,
            start,
            end,
        });
    }

    Ok(BedGraphRecord {
        chr: fields[0].to_string(),
        start,
        end,
        coverage,
    })
}

impl TryFrom<&Path> for BedGraph {
    type Error = CoverageError;

    ///
    /// Create a new [BedGraph] from a bedgraph file (plain or gzipped) or `-` for stdin.
    ///
    /// # Arguments:
    /// - value: path to bedgraph file on disk.
    fn try_from(value: &Path) -> Result<Self> {
        let source_name = value.to_string_lossy().to_string();
        let reader = get_dynamic_reader_w_stdin(&source_name)?;

        let mut bedgraph = BedGraph::from_reader(reader, &source_name)?;
        if source_name != STDIN_PATH {
            bedgraph.path = Some(value.to_owned());
        }

        Ok(bedgraph)
    }
}

impl TryFrom<&str> for BedGraph {
    type Error = CoverageError;

    fn try_from(value: &str) -> Result<Self> {
        BedGraph::try_from(Path::new(value))
    }
}

impl TryFrom<String> for BedGraph {
    type Error = CoverageError;

    fn try_from(value: String) -> Result<Self> {
        BedGraph::try_from(Path::new(&value))
    }
}

impl TryFrom<PathBuf> for BedGraph {
    type Error = CoverageError;

    fn try_from(value: PathBuf) -> Result<Self> {
        BedGraph::try_from(value.as_path())
    }
}

impl From<Vec<BedGraphRecord>> for BedGraph {
    fn from(records: Vec<BedGraphRecord>) -> Self {
        let mut tracks: Vec<CoverageTrack> = Vec::new();
        for record in records {
            match tracks.iter_mut().find(|t| t.chr == record.chr) {
                Some(track) => track.records.push(record),
                None => {
                    let mut track = CoverageTrack::new(&record.chr);
                    track.records.push(record);
                    tracks.push(track);
                }
            }
        }

        BedGraph {
            tracks,
            header: None,
            path: None,
        }
    }
}

impl Display for BedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BedGraph with {} records on {} scaffolds.",
            self.len(),
            self.num_scaffolds()
        )
    }
}
