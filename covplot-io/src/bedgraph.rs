use std::fs::File;
use std::path::Path;

use std::io::{BufWriter, Write};
use flate2::write::GzEncoder;
use flate2::Compression;

use covplot_rolling::CoverageProfile;

pub trait BedGraphWrite {
    ///
    /// Write data to disk as bedGraph file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_bedgraph<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()>;

    ///
    /// Write data to disk as bedGraph.gz file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_bedgraph_gz<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()>;

    /// Write the bedGraph lines to any writer.
    fn write_bedgraph_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()>;
}

///
/// Write several profiles into one file, gzipped when the path ends with `.gz`.
///
pub fn write_profiles<T: AsRef<Path>>(profiles: &[CoverageProfile], path: T) -> std::io::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    if covplot_core::utils::is_gzipped(path) {
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        for profile in profiles {
            profile.write_bedgraph_to(&mut encoder)?;
        }
        encoder.finish()?.flush()?;
    } else {
        let mut writer = BufWriter::new(file);
        for profile in profiles {
            profile.write_bedgraph_to(&mut writer)?;
        }
        writer.flush()?;
    }

    Ok(())
}

impl BedGraphWrite for CoverageProfile {
    fn write_bedgraph<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(path)?);
        self.write_bedgraph_to(&mut writer)?;
        writer.flush()
    }

    fn write_bedgraph_gz<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::best());

        self.write_bedgraph_to(&mut encoder)?;

        encoder.finish()?.flush()?;
        Ok(())
    }

    fn write_bedgraph_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for (i, point) in self.defined_points() {
            if let Some((start, end)) = self.interval(i) {
                writeln!(writer, "{}\t{}\t{}\t{}", self.chr, start, end, point.smoothed)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use std::io::Read;

    use covplot_core::models::BedGraph;
    use covplot_core::utils::get_dynamic_reader;
    use covplot_rolling::RollingWindow;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn profile() -> CoverageProfile {
        let bedgraph = BedGraph::from_reader(
            "chr1\t0\t10\t1\nchr1\t10\t20\t2\nchr1\t20\t30\t3\nchr1\t30\t40\t4\n".as_bytes(),
            "inline",
        )
        .unwrap();
        CoverageProfile::from_track(&bedgraph.tracks[0], &RollingWindow::new(3).unwrap())
    }

    #[rstest]
    fn test_save_bedgraph(profile: CoverageProfile) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("nested").join("smoothed.bedgraph");

        assert!(profile.write_bedgraph(&path).is_ok());

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "chr1\t10\t20\t2\nchr1\t20\t30\t3\n");
    }

    #[rstest]
    fn test_save_bedgraph_gz_round_trips_through_parser(profile: CoverageProfile) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("smoothed.bedgraph.gz");

        assert!(profile.write_bedgraph_gz(&path).is_ok());

        let mut content = String::new();
        get_dynamic_reader(&path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "chr1\t10\t20\t2\nchr1\t20\t30\t3\n");
    }

    #[rstest]
    fn test_write_profiles_picks_compression(profile: CoverageProfile) {
        let tempdir = tempfile::tempdir().unwrap();
        let plain = tempdir.path().join("all.bedgraph");
        let gz = tempdir.path().join("all.bedgraph.gz");

        let profiles = vec![profile.clone(), profile];
        write_profiles(&profiles, &plain).unwrap();
        write_profiles(&profiles, &gz).unwrap();

        let from_plain = BedGraph::try_from(plain.as_path()).unwrap();
        let from_gz = BedGraph::try_from(gz.as_path()).unwrap();
        assert_eq!(from_plain.len(), 4);
        assert_eq!(from_plain.tracks, from_gz.tracks);
    }
}
