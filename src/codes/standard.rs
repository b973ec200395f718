// standard.rs - NCBI translation table 1

use super::traits::{Codon, GeneticCode};

/// The standard code - matches Biopython's `standard_dna_table`
#[derive(Debug, Clone)]
pub struct StandardCode;

const STARTS: [Codon; 1] = [*b"ATG"];
const STOPS: [Codon; 3] = [*b"TAA", *b"TAG", *b"TGA"];

impl GeneticCode for StandardCode {
    fn start_codons(&self) -> &'static [Codon] {
        &STARTS
    }

    fn stop_codons(&self) -> &'static [Codon] {
        &STOPS
    }

    fn table_id(&self) -> u8 {
        1
    }

    fn name(&self) -> &'static str {
        "Standard"
    }

    fn description(&self) -> &'static str {
        "NCBI table 1, ATG start only, TAA/TAG/TGA stops"
    }
}
