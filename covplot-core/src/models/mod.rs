pub mod bedgraph;
pub mod record;
pub mod track;

// re-export for cleaner imports
pub use self::bedgraph::BedGraph;
pub use self::record::BedGraphRecord;
pub use self::track::CoverageTrack;
