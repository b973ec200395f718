// extraction.rs - ORF extraction engine and the finalized ORF catalog

use super::codon::{scan_codons, FrameKey, FramePositions, Strand};
use super::pairing::{pair_frame, OrfCandidate};
use crate::codes::{Codon, GeneticCode};
use crate::data::SequenceRecord;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

/// Tag written in the source column of ORF feature lines
pub const GFF_SOURCE_TAG: &str = "orfhunt";

/// A finalized ORF with its catalog identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orf {
    pub id: String,
    pub seq_id: String,
    pub start: usize,
    pub end: usize,
    pub frame: FrameKey,
    pub sequence: Vec<u8>,
    pub start_codon: usize,
    pub alt_starts: Vec<usize>,
    /// Catalog indices of ORFs lying strictly inside this one's span
    pub nested: Vec<usize>,
}

impl Orf {
    fn from_candidate(id: String, candidate: OrfCandidate) -> Self {
        Self {
            id,
            seq_id: candidate.seq_id,
            start: candidate.start,
            end: candidate.end,
            frame: candidate.frame,
            sequence: candidate.sequence,
            start_codon: candidate.start_codon,
            alt_starts: candidate.alt_starts,
            nested: Vec::new(),
        }
    }

    pub fn length(&self) -> usize {
        self.end - self.start + 1
    }

    /// Feature line: source, tag, type, start, end, score, strand, frame index, attributes
    pub fn to_gff(&self) -> String {
        format!(
            "{}\t{}\tORF\t{}\t{}\t.\t{}\t{}\tID={}",
            self.seq_id,
            GFF_SOURCE_TAG,
            self.start,
            self.end,
            self.frame.strand.symbol(),
            self.frame.offset,
            self.id
        )
    }

    /// Free-text description for the FASTA header
    pub fn fasta_description(&self) -> String {
        format!(
            "length={} source={} start={} end={} frame={}",
            self.length(),
            self.seq_id,
            self.start,
            self.end,
            self.frame
        )
    }
}

/// All ORFs of a run in catalog order
#[derive(Debug, Clone, Default)]
pub struct OrfCatalog {
    orfs: Vec<Orf>,
}

impl OrfCatalog {
    /// Attach identifiers `ORF_1..ORF_n` in the order the candidates are given
    pub fn finalize(candidates: Vec<OrfCandidate>) -> Self {
        let orfs = candidates
            .into_iter()
            .enumerate()
            .map(|(i, candidate)| Orf::from_candidate(format!("ORF_{}", i + 1), candidate))
            .collect();
        Self { orfs }
    }

    pub fn orfs(&self) -> &[Orf] {
        &self.orfs
    }

    pub fn len(&self) -> usize {
        self.orfs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orfs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Orf> {
        self.orfs.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Orf> {
        self.orfs.iter().find(|orf| orf.id == id)
    }

    /// ORFs recorded as nested inside `orf`
    pub fn nested_in<'a>(&'a self, orf: &'a Orf) -> impl Iterator<Item = &'a Orf> + 'a {
        orf.nested.iter().filter_map(move |&i| self.orfs.get(i))
    }

    /// Record, for every ORF, the ORFs of the same sequence whose span it contains.
    ///
    /// Frames and strands are ignored; identical spans are not counted as nesting.
    pub fn with_nested(mut self) -> Self {
        let mut order: Vec<usize> = (0..self.orfs.len()).collect();
        order.sort_by(|&a, &b| {
            let (x, y) = (&self.orfs[a], &self.orfs[b]);
            x.seq_id
                .cmp(&y.seq_id)
                .then(x.start.cmp(&y.start))
                .then(y.end.cmp(&x.end))
        });

        let mut nested = vec![Vec::new(); self.orfs.len()];
        for (pos, &outer_idx) in order.iter().enumerate() {
            let outer = &self.orfs[outer_idx];
            for &inner_idx in &order[pos + 1..] {
                let inner = &self.orfs[inner_idx];
                if inner.seq_id != outer.seq_id || inner.start > outer.end {
                    break;
                }
                if inner.end <= outer.end && (inner.start, inner.end) != (outer.start, outer.end) {
                    nested[outer_idx].push(inner_idx);
                }
            }
            nested[outer_idx].sort_unstable();
        }

        for (orf, inner) in self.orfs.iter_mut().zip(nested) {
            orf.nested = inner;
        }
        self
    }

    /// ORF counts on the forward and reverse strand
    pub fn strand_counts(&self) -> (usize, usize) {
        let forward = self
            .orfs
            .iter()
            .filter(|orf| orf.frame.strand == Strand::Forward)
            .count();
        (forward, self.orfs.len() - forward)
    }
}

/// Scans sequences for ORFs under one genetic code
pub struct OrfExtractor<'a> {
    code: &'a dyn GeneticCode,
}

impl<'a> OrfExtractor<'a> {
    pub fn new(code: &'a dyn GeneticCode) -> Self {
        Self { code }
    }

    fn scan_both_strands(&self, record: &SequenceRecord, codons: &[Codon]) -> FramePositions {
        let mut positions = scan_codons(record.forward(), codons, Strand::Forward);
        positions.extend(scan_codons(record.reverse(), codons, Strand::Reverse));
        positions
    }

    /// Candidate ORFs of one sequence, in frame order then position order
    pub fn extract_sequence(&self, record: &SequenceRecord) -> Vec<OrfCandidate> {
        let starts = self.scan_both_strands(record, self.code.start_codons());
        let stops = self.scan_both_strands(record, self.code.stop_codons());

        starts
            .iter()
            .filter_map(|(frame, frame_starts)| {
                stops
                    .get(frame)
                    .map(|frame_stops| pair_frame(frame_starts, frame_stops, *frame, record))
            })
            .flatten()
            .collect()
    }

    /// Extract ORFs from all sequences and finalize them into a catalog.
    ///
    /// Sequences are scanned in parallel; the catalog keeps input order, so
    /// identifiers do not depend on the thread count.
    pub fn extract(&self, records: &[SequenceRecord]) -> OrfCatalog {
        println!(
            "🔍 Scanning {} sequences with the {} code (table {})",
            records.len(),
            self.code.name(),
            self.code.table_id()
        );

        let pb = ProgressBar::new(records.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} sequences scanned",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let per_sequence: Vec<Vec<OrfCandidate>> = records
            .par_iter()
            .map(|record| {
                let candidates = self.extract_sequence(record);
                pb.inc(1);
                candidates
            })
            .collect();
        pb.finish_and_clear();

        let catalog = OrfCatalog::finalize(per_sequence.into_iter().flatten().collect());
        let (forward, reverse) = catalog.strand_counts();
        println!(
            "✅ ORFs found: {} ({} forward, {} reverse)",
            catalog.len(),
            forward,
            reverse
        );
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{StandardCode, VertebrateMitoCode};

    fn record(id: &str, seq: &[u8]) -> SequenceRecord {
        SequenceRecord::new(id, seq).unwrap()
    }

    #[test]
    fn test_extract_simple_forward_orf() {
        let code = StandardCode;
        let extractor = OrfExtractor::new(&code);
        let catalog = extractor.extract(&[record("s1", b"ATGAAATAG")]);

        let forward: Vec<&Orf> = catalog
            .iter()
            .filter(|o| o.frame == FrameKey::new(Strand::Forward, 0))
            .collect();
        assert_eq!(forward.len(), 1);
        assert_eq!((forward[0].start, forward[0].end), (1, 9));
        assert_eq!(forward[0].length(), 9);
    }

    #[test]
    fn test_orfs_end_with_stop_and_have_codon_lengths() {
        let code = StandardCode;
        let extractor = OrfExtractor::new(&code);
        let seq = b"CCATGGCTTAAATGATGCATTAGCCATGTTTGACTTACATCATTGAAACATGGGG";
        let catalog = extractor.extract(&[record("s1", seq)]);

        assert!(!catalog.is_empty());
        for orf in catalog.iter() {
            assert_eq!(orf.length() % 3, 0);
            assert!(orf.length() >= 6);
            assert_eq!(orf.sequence.len(), orf.length());
            assert_eq!(&orf.sequence[..3], b"ATG");
            let tail = &orf.sequence[orf.length() - 3..];
            assert!(code.is_stop(tail));
            // no internal in-frame stop
            for codon in orf.sequence[..orf.length() - 3].chunks_exact(3) {
                assert!(!code.is_stop(codon));
            }
        }
    }

    #[test]
    fn test_reverse_strand_sequence_matches_coordinates() {
        let code = StandardCode;
        let extractor = OrfExtractor::new(&code);
        let rec = record("s1", b"GGCTATTTCATGG");
        let catalog = extractor.extract(std::slice::from_ref(&rec));

        let reverse: Vec<&Orf> = catalog
            .iter()
            .filter(|o| o.frame.strand == Strand::Reverse)
            .collect();
        assert_eq!(reverse.len(), 1);
        let orf = reverse[0];
        assert_eq!((orf.start, orf.end), (3, 11));
        let forward_span = &rec.forward()[orf.start - 1..orf.end];
        assert_eq!(bio::alphabets::dna::revcomp(forward_span), orf.sequence);
    }

    #[test]
    fn test_same_frame_orfs_never_overlap() {
        let code = StandardCode;
        let extractor = OrfExtractor::new(&code);
        let seq = b"ATGATGTAAATGCCCTGAATGTAGATGATGATGTAACCCATGTTTTAA";
        let catalog = extractor.extract(&[record("s1", seq)]);

        for frame in FrameKey::all() {
            let mut spans: Vec<(usize, usize)> = catalog
                .iter()
                .filter(|o| o.frame == frame)
                .map(|o| (o.start, o.end))
                .collect();
            spans.sort();
            assert!(spans.windows(2).all(|w| w[0].1 < w[1].0));
        }
    }

    #[test]
    fn test_identifiers_are_gapless_in_catalog_order() {
        let code = StandardCode;
        let extractor = OrfExtractor::new(&code);
        let records = vec![
            record("a", b"ATGAAATAGATGCCCTGA"),
            record("b", b"CTATTTCATATGTAA"),
            record("c", b"CCCCCC"),
        ];
        let catalog = extractor.extract(&records);

        assert!(catalog.len() >= 3);
        for (i, orf) in catalog.iter().enumerate() {
            assert_eq!(orf.id, format!("ORF_{}", i + 1));
        }
        // sequence input order is kept
        let first_b = catalog.iter().position(|o| o.seq_id == "b").unwrap();
        assert!(catalog.iter().take(first_b).all(|o| o.seq_id == "a"));
        assert!(catalog.get("ORF_1").is_some());
        assert!(catalog.get(&format!("ORF_{}", catalog.len() + 1)).is_none());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let code = StandardCode;
        let extractor = OrfExtractor::new(&code);
        let records: Vec<SequenceRecord> = (0..16)
            .map(|i| record(&format!("seq{}", i), b"ATGAAATAGCTATTTCATATGCCCTGATTA"))
            .collect();

        let first = extractor.extract(&records);
        let second = extractor.extract(&records);
        assert_eq!(first.orfs(), second.orfs());
    }

    #[test]
    fn test_frames_without_stops_yield_nothing() {
        let code = StandardCode;
        let extractor = OrfExtractor::new(&code);
        assert!(extractor.extract_sequence(&record("s1", b"ATGAAAAAA")).is_empty());
    }

    #[test]
    fn test_genetic_code_changes_stops() {
        let rec = record("s1", b"ATGAAATGAAAATAG");
        let standard = StandardCode;
        let mito = VertebrateMitoCode;

        let std_orfs = OrfExtractor::new(&standard).extract_sequence(&rec);
        let mito_orfs = OrfExtractor::new(&mito).extract_sequence(&rec);

        let fwd = |orfs: &[OrfCandidate]| -> Vec<(usize, usize)> {
            orfs.iter()
                .filter(|o| o.frame == FrameKey::new(Strand::Forward, 0))
                .map(|o| (o.start, o.end))
                .collect()
        };
        assert_eq!(fwd(&std_orfs), vec![(1, 9)]);
        assert_eq!(fwd(&mito_orfs), vec![(1, 15)]);
    }

    #[test]
    fn test_nested_detection() {
        let mk = |seq_id: &str, start: usize, end: usize, strand: Strand| OrfCandidate {
            seq_id: seq_id.to_string(),
            start,
            end,
            frame: FrameKey::new(strand, 0),
            sequence: Vec::new(),
            start_codon: start,
            alt_starts: Vec::new(),
        };
        let catalog = OrfCatalog::finalize(vec![
            mk("s1", 1, 300, Strand::Forward),
            mk("s1", 10, 60, Strand::Reverse),
            mk("s1", 250, 400, Strand::Forward),
            mk("s2", 20, 50, Strand::Forward),
            mk("s1", 1, 300, Strand::Reverse),
        ])
        .with_nested();

        let orfs = catalog.orfs();
        assert_eq!(orfs[0].nested, vec![1]);
        assert_eq!(orfs[4].nested, vec![1]);
        assert!(orfs[1].nested.is_empty());
        assert!(orfs[2].nested.is_empty());
        assert!(orfs[3].nested.is_empty());

        let inner: Vec<&str> = catalog.nested_in(&orfs[0]).map(|o| o.id.as_str()).collect();
        assert_eq!(inner, vec!["ORF_2"]);
    }

    #[test]
    fn test_gff_and_fasta_rendering() {
        let catalog = OrfCatalog::finalize(vec![OrfCandidate {
            seq_id: "chr1".to_string(),
            start: 3,
            end: 11,
            frame: FrameKey::new(Strand::Reverse, 2),
            sequence: b"ATGAAATAG".to_vec(),
            start_codon: 11,
            alt_starts: Vec::new(),
        }]);
        let orf = &catalog.orfs()[0];

        assert_eq!(orf.to_gff(), "chr1\torfhunt\tORF\t3\t11\t.\t-\t2\tID=ORF_1");
        assert_eq!(
            orf.fasta_description(),
            "length=9 source=chr1 start=3 end=11 frame=-3"
        );
    }
}
