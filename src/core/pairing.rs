// pairing.rs - Greedy start/stop pairing within a single reading frame

use super::codon::{FrameKey, Strand};
use crate::data::SequenceRecord;

/// An ORF before catalog finalization (no identifier yet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrfCandidate {
    pub seq_id: String,
    /// 1-based inclusive span on the forward sequence
    pub start: usize,
    pub end: usize,
    pub frame: FrameKey,
    /// Nucleotides read 5'->3' on the ORF's own strand, stop codon included
    pub sequence: Vec<u8>,
    /// Forward coordinate of the first base of the primary start codon
    pub start_codon: usize,
    /// Forward coordinates of the further start codons sharing this stop
    pub alt_starts: Vec<usize>,
}

impl OrfCandidate {
    pub fn length(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Reflect a 1-based coordinate onto the opposite strand.
///
/// `mirror(mirror(p, n), n) == p` for every `p` in `0..=n`.
pub fn mirror(position: usize, seq_len: usize) -> usize {
    seq_len - position
}

/// Convert a 0-based strand offset to a 1-based forward coordinate
pub fn to_genomic(offset: usize, strand: Strand, seq_len: usize) -> usize {
    match strand {
        Strand::Forward => offset + 1,
        Strand::Reverse => mirror(offset, seq_len),
    }
}

/// Pair one frame's start and stop offsets into ORFs.
///
/// Both slices must be ascending offsets on the strand `frame` refers to.
/// Each stop closes the earliest pending start; every other pending start
/// upstream of that stop becomes an alternative start of the same ORF.
/// Starts left without a downstream stop are dropped.
pub fn pair_frame(
    starts: &[usize],
    stops: &[usize],
    frame: FrameKey,
    record: &SequenceRecord,
) -> Vec<OrfCandidate> {
    let strand_seq = record.strand(frame.strand);
    let seq_len = record.len();
    let mut orfs = Vec::new();

    let mut si = 0;
    let mut ei = 0;

    while si < starts.len() && ei < stops.len() {
        let start = starts[si];
        si += 1;

        while ei < stops.len() && stops[ei] < start {
            ei += 1;
        }
        let Some(&stop) = stops.get(ei) else {
            break;
        };

        let first_alt = si;
        while si < starts.len() && starts[si] < stop {
            si += 1;
        }

        let last = stop + 2;
        let (begin, end) = match frame.strand {
            Strand::Forward => (to_genomic(start, frame.strand, seq_len), to_genomic(last, frame.strand, seq_len)),
            Strand::Reverse => (to_genomic(last, frame.strand, seq_len), to_genomic(start, frame.strand, seq_len)),
        };

        orfs.push(OrfCandidate {
            seq_id: record.id.clone(),
            start: begin,
            end,
            frame,
            sequence: strand_seq[start..=last].to_vec(),
            start_codon: to_genomic(start, frame.strand, seq_len),
            alt_starts: starts[first_alt..si]
                .iter()
                .map(|&s| to_genomic(s, frame.strand, seq_len))
                .collect(),
        });
    }

    orfs
}
