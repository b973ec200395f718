// bacterial.rs - NCBI translation table 11

use super::traits::{Codon, GeneticCode};

/// Bacterial, archaeal and plant plastid code with alternative initiators
#[derive(Debug, Clone)]
pub struct BacterialCode;

const STARTS: [Codon; 3] = [*b"ATG", *b"GTG", *b"TTG"];
const STOPS: [Codon; 3] = [*b"TAA", *b"TAG", *b"TGA"];

impl GeneticCode for BacterialCode {
    fn start_codons(&self) -> &'static [Codon] {
        &STARTS
    }

    fn stop_codons(&self) -> &'static [Codon] {
        &STOPS
    }

    fn table_id(&self) -> u8 {
        11
    }

    fn name(&self) -> &'static str {
        "Bacterial"
    }

    fn description(&self) -> &'static str {
        "NCBI table 11, ATG/GTG/TTG starts, TAA/TAG/TGA stops"
    }
}
