// sequence.rs - Nucleotide sequence records loaded from FASTA

use crate::core::codon::Strand;
use bio::alphabets::dna;
use bio::io::fasta;
use regex::Regex;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// One input sequence with both strands materialized
#[derive(Debug, Clone)]
pub struct SequenceRecord {
    pub id: String,
    forward: Vec<u8>,
    reverse: Vec<u8>,
}

impl SequenceRecord {
    /// Build a record, upper-casing the sequence and deriving its reverse complement.
    ///
    /// Fails if any symbol falls outside the IUPAC nucleotide alphabet.
    pub fn new(id: impl Into<String>, sequence: &[u8]) -> Result<Self, String> {
        let id = id.into();
        let forward = sequence.to_ascii_uppercase();

        let alphabet = dna::iupac_alphabet();
        if let Some(pos) = forward.iter().position(|&b| !alphabet.is_word([b])) {
            return Err(format!(
                "Sequence '{}' contains invalid nucleotide '{}' at position {}",
                id,
                forward[pos].escape_ascii(),
                pos + 1
            ));
        }

        let reverse = dna::revcomp(&forward);
        Ok(Self { id, forward, reverse })
    }

    pub fn forward(&self) -> &[u8] {
        &self.forward
    }

    pub fn reverse(&self) -> &[u8] {
        &self.reverse
    }

    /// Sequence as read 5'->3' on the given strand
    pub fn strand(&self, strand: Strand) -> &[u8] {
        match strand {
            Strand::Forward => &self.forward,
            Strand::Reverse => &self.reverse,
        }
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

/// Id-based selection of input sequences
#[derive(Debug, Default, Clone, Copy)]
pub struct SequenceFilter<'a> {
    pub include: Option<&'a Regex>,
    pub exclude: Option<&'a Regex>,
}

impl SequenceFilter<'_> {
    pub fn accepts(&self, id: &str) -> bool {
        if let Some(include) = self.include {
            if !include.is_match(id) {
                return false;
            }
        }
        if let Some(exclude) = self.exclude {
            if exclude.is_match(id) {
                return false;
            }
        }
        true
    }
}

/// Read all records from a FASTA stream, in input order
pub fn read_fasta<R: Read>(reader: R, filter: SequenceFilter<'_>) -> Result<Vec<SequenceRecord>, String> {
    let reader = fasta::Reader::new(reader);
    let mut records = Vec::new();

    for (index, record_result) in reader.records().enumerate() {
        let record = record_result.map_err(|e| format!("Invalid FASTA record #{}: {}", index + 1, e))?;
        if !filter.accepts(record.id()) {
            continue;
        }
        records.push(SequenceRecord::new(record.id(), record.seq())?);
    }

    Ok(records)
}

/// Load sequences from a FASTA file
pub fn load_fasta(fasta_path: &Path, filter: SequenceFilter<'_>) -> Result<Vec<SequenceRecord>, String> {
    println!("🧬 Loading sequences from: {}", fasta_path.display());

    let file = File::open(fasta_path)
        .map_err(|e| format!("Failed to open FASTA file {}: {}", fasta_path.display(), e))?;
    let records = read_fasta(BufReader::new(file), filter)
        .map_err(|e| format!("{} ({})", e, fasta_path.display()))?;

    let total_bases: usize = records.iter().map(|r| r.len()).sum();
    println!("✅ Loaded {} sequences ({} bases)", records.len(), total_bases);
    Ok(records)
}
