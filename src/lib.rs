// lib.rs - orfhunt library root

//! # orfhunt - ORF extraction and homology-based validation
//!
//! Scans nucleotide sequences for open reading frames on both strands and all
//! three frames, writes them as GFF/FASTA, and later turns similarity-search
//! hits against those ORFs into CDS/UTR annotations plus a false-positive
//! summary.
//!
//! ## Features
//!
//! - **Six-frame scanning**: parallel per-sequence extraction with deterministic ids
//! - **Pluggable genetic codes**: standard, bacterial and vertebrate mitochondrial
//! - **Alternative starts**: in-frame starts inside each ORF are recorded
//! - **Nested ORFs**: optional containment pass over the catalog
//! - **Validation**: BLAST tabular filtering, CDS/UTR derivation, FP rate
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use orfhunt::prelude::*;
//!
//! let records = load_fasta(std::path::Path::new("genome.fasta"), SequenceFilter::default())?;
//! let code = StandardCode;
//! let catalog = OrfExtractor::new(&code).extract(&records);
//!
//! let hits = load_validated_hits(std::path::Path::new("orfs_vs_db.tsv"), 1e-5)?;
//! let lines: Vec<String> = catalog.iter().map(|orf| orf.to_gff()).collect();
//! let annotation = annotate(lines, &hits)?;
//! let ids: std::collections::HashSet<String> = hits.keys().cloned().collect();
//! assess_false_positives(&ids, &annotation.observed_ids).print_summary();
//! # Ok::<(), String>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod codes;
pub mod core;
pub mod data;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, ValidationResult};
    pub use crate::codes::{CodeRegistry, GeneticCode, StandardCode};
    pub use crate::core::{annotate, assess_false_positives, Annotation, ValidationReport};
    pub use crate::core::{FrameKey, Orf, OrfCatalog, OrfExtractor, Strand};
    pub use crate::data::{load_fasta, load_validated_hits, read_gff_lines};
    pub use crate::data::{SequenceFilter, SequenceRecord, ValidatedHit};
    pub use crate::output::{write_annotated_gff, write_orf_fasta, write_orf_gff};
}

// Re-export main types at the root level for convenience
pub use cli::{Args, ValidationResult};
pub use codes::{CodeRegistry, GeneticCode};
pub use core::{Orf, OrfCatalog, OrfExtractor};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!("orfhunt v{} - ORF extraction and homology-based validation", VERSION)
}
