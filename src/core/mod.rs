// mod.rs - Core logic module

pub mod annotation;
pub mod codon;
pub mod extraction;
pub mod pairing;
pub mod report;

// Re-export main types for convenience
pub use annotation::{annotate, derive_features, Annotation, DerivedFeature, FeatureKind};
pub use codon::{scan_codons, FrameKey, FramePositions, Strand};
pub use extraction::{Orf, OrfCatalog, OrfExtractor};
pub use pairing::{mirror, pair_frame, OrfCandidate};
pub use report::{
    assess_false_positives, GeometricExpectation, LengthBin, LengthDistribution, ValidationReport,
};
