// mod.rs - Genetic codes module root

pub mod bacterial;
pub mod mitochondrial;
pub mod registry;
pub mod standard;
pub mod traits;

// Re-export main types for convenience
pub use bacterial::BacterialCode;
pub use mitochondrial::VertebrateMitoCode;
pub use registry::CodeRegistry;
pub use standard::StandardCode;
pub use traits::{Codon, GeneticCode};
