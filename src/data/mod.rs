// mod.rs - Data structures module

pub mod gff;
pub mod hits;
pub mod sequence;

// Re-export main types for convenience
pub use gff::{read_gff_lines, GffRecord};
pub use hits::{filter_hits, load_validated_hits, BlastHit, ValidatedHit, DEFAULT_EVALUE_THRESHOLD};
pub use sequence::{load_fasta, read_fasta, SequenceFilter, SequenceRecord};
