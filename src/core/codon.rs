// codon.rs - Reading frames and per-frame codon scanning

use crate::codes::Codon;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Strand a reading frame lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    pub fn symbol(&self) -> char {
        match self {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        }
    }
}

impl FromStr for Strand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Strand::Forward),
            "-" => Ok(Strand::Reverse),
            _ => Err(format!("Invalid strand '{}': expected + or -", s)),
        }
    }
}

/// A reading frame: strand plus 0-based offset into that strand.
///
/// Ordering is `+1 < +2 < +3 < -1 < -2 < -3`, which is the order frames are
/// paired and therefore the order ORFs of one sequence enter the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FrameKey {
    pub strand: Strand,
    pub offset: u8,
}

impl FrameKey {
    pub fn new(strand: Strand, offset: u8) -> Self {
        debug_assert!(offset < 3, "frame offset must be 0, 1 or 2");
        Self { strand, offset }
    }

    /// 1-based frame number as used in labels (`+1`..`-3`)
    pub fn number(&self) -> u8 {
        self.offset + 1
    }

    /// All six frames in pairing order
    pub fn all() -> [FrameKey; 6] {
        [
            FrameKey::new(Strand::Forward, 0),
            FrameKey::new(Strand::Forward, 1),
            FrameKey::new(Strand::Forward, 2),
            FrameKey::new(Strand::Reverse, 0),
            FrameKey::new(Strand::Reverse, 1),
            FrameKey::new(Strand::Reverse, 2),
        ]
    }
}

impl fmt::Display for FrameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.strand.symbol(), self.number())
    }
}

impl FromStr for FrameKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (strand, number) = s
            .split_at_checked(1)
            .ok_or_else(|| format!("Invalid frame label '{}'", s))?;
        let strand = Strand::from_str(strand)?;
        match number {
            "1" | "2" | "3" => {
                let offset = number.as_bytes()[0] - b'1';
                Ok(FrameKey::new(strand, offset))
            }
            _ => Err(format!("Invalid frame label '{}': expected +1..+3 or -1..-3", s)),
        }
    }
}

/// Codon-start offsets grouped by frame, strictly increasing within a frame
pub type FramePositions = BTreeMap<FrameKey, Vec<usize>>;

/// Find every in-frame occurrence of `codons` in a strand-oriented sequence.
///
/// Offsets are relative to `sequence` itself; for the reverse strand that
/// means offsets into the reverse complement. Frames without a single
/// match are left out of the map.
pub fn scan_codons(sequence: &[u8], codons: &[Codon], strand: Strand) -> FramePositions {
    let mut positions = FramePositions::new();

    for offset in 0..3usize {
        let frame_seq = sequence.get(offset..).unwrap_or_default();
        let hits: Vec<usize> = frame_seq
            .chunks_exact(3)
            .enumerate()
            .filter(|(_, window)| codons.iter().any(|c| c.as_slice() == *window))
            .map(|(k, _)| offset + 3 * k)
            .collect();

        if !hits.is_empty() {
            positions.insert(FrameKey::new(strand, offset as u8), hits);
        }
    }

    positions
}
