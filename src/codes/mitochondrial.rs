// mitochondrial.rs - NCBI translation table 2

use super::traits::{Codon, GeneticCode};

/// Vertebrate mitochondrial code (TGA reads through, AGA/AGG terminate)
#[derive(Debug, Clone)]
pub struct VertebrateMitoCode;

const STARTS: [Codon; 3] = [*b"ATG", *b"ATA", *b"ATT"];
const STOPS: [Codon; 4] = [*b"TAA", *b"TAG", *b"AGA", *b"AGG"];

impl GeneticCode for VertebrateMitoCode {
    fn start_codons(&self) -> &'static [Codon] {
        &STARTS
    }

    fn stop_codons(&self) -> &'static [Codon] {
        &STOPS
    }

    fn table_id(&self) -> u8 {
        2
    }

    fn name(&self) -> &'static str {
        "VertebrateMito"
    }

    fn description(&self) -> &'static str {
        "NCBI table 2, ATG/ATA/ATT starts, TAA/TAG/AGA/AGG stops"
    }
}
