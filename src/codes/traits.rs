// traits.rs - Core trait for the genetic code plugin system

use std::fmt::Debug;

/// A codon is always three nucleotide symbols
pub type Codon = [u8; 3];

/// Start/stop codon table used to delimit ORFs
pub trait GeneticCode: Debug + Send + Sync {
    /// Codons that may open a reading frame
    fn start_codons(&self) -> &'static [Codon];

    /// Codons that terminate a reading frame
    fn stop_codons(&self) -> &'static [Codon];

    /// NCBI translation table number
    fn table_id(&self) -> u8;

    /// Short display name
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    fn is_start(&self, codon: &[u8]) -> bool {
        self.start_codons().iter().any(|c| c.as_slice() == codon)
    }

    fn is_stop(&self, codon: &[u8]) -> bool {
        self.stop_codons().iter().any(|c| c.as_slice() == codon)
    }
}
