// annotation.rs - Derive CDS/UTR features from validated ORFs

use crate::data::{GffRecord, ValidatedHit};
use std::collections::{HashMap, HashSet};

/// Source column used for every derived feature
pub const ANNOTATION_SOURCE: &str = "BLAST";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    Cds,
    FivePrimeUtr,
    ThreePrimeUtr,
}

impl FeatureKind {
    pub fn gff_type(&self) -> &'static str {
        match self {
            FeatureKind::Cds => "CDS",
            FeatureKind::FivePrimeUtr => "five_prime_UTR",
            FeatureKind::ThreePrimeUtr => "three_prime_UTR",
        }
    }
}

/// A CDS or UTR sub-span of a validated ORF
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedFeature {
    pub seqid: String,
    pub kind: FeatureKind,
    pub start: u64,
    pub end: u64,
    pub strand: String,
    pub parent: String,
    /// Target of the supporting hit, carried on the CDS only
    pub hit: Option<String>,
}

impl DerivedFeature {
    pub fn to_gff(&self) -> String {
        let (phase, attributes) = match self.kind {
            FeatureKind::Cds => {
                let mut attrs = format!("ID=CDS_{};Parent={}", self.parent, self.parent);
                if let Some(hit) = &self.hit {
                    attrs.push_str(";hit=");
                    attrs.push_str(hit);
                }
                ("0", attrs)
            }
            _ => (".", format!("Parent={}", self.parent)),
        };

        format!(
            "{}\t{}\t{}\t{}\t{}\t.\t{}\t{}\t{}",
            self.seqid,
            ANNOTATION_SOURCE,
            self.kind.gff_type(),
            self.start,
            self.end,
            self.strand,
            phase,
            attributes
        )
    }
}

/// Split an ORF record into CDS and flanking UTRs using its hit's query span.
///
/// The hit span is in codons, 1-based, counted from the ORF start.
pub fn derive_features(record: &GffRecord, orf_id: &str, hit: &ValidatedHit) -> Vec<DerivedFeature> {
    let cds_start = record.start + 3 * hit.qstart.saturating_sub(1);
    let cds_end = record.start + 3 * hit.qend.saturating_sub(1);

    let feature = |kind: FeatureKind, start: u64, end: u64, hit: Option<String>| DerivedFeature {
        seqid: record.seqid.clone(),
        kind,
        start,
        end,
        strand: record.strand.clone(),
        parent: orf_id.to_string(),
        hit,
    };

    let mut features = vec![feature(FeatureKind::Cds, cds_start, cds_end, Some(hit.target.clone()))];
    if cds_start > record.start {
        features.push(feature(FeatureKind::FivePrimeUtr, record.start, cds_start - 1, None));
    }
    if cds_end < record.end {
        features.push(feature(FeatureKind::ThreePrimeUtr, cds_end + 1, record.end, None));
    }
    features
}

/// Original feature lines plus the features derived from them
#[derive(Debug, Clone, Default)]
pub struct Annotation {
    pub original_lines: Vec<String>,
    pub derived: Vec<DerivedFeature>,
    /// Every `ID=` value seen on a feature line
    pub observed_ids: HashSet<String>,
}

impl Annotation {
    /// Output lines: originals first, derived features appended
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.original_lines
            .iter()
            .cloned()
            .chain(self.derived.iter().map(DerivedFeature::to_gff))
    }

    pub fn annotated_orfs(&self) -> usize {
        self.derived
            .iter()
            .filter(|f| f.kind == FeatureKind::Cds)
            .count()
    }
}

/// Annotate every feature line whose id has a validated hit
pub fn annotate(lines: Vec<String>, validated: &HashMap<String, ValidatedHit>) -> Result<Annotation, String> {
    let mut derived = Vec::new();
    let mut observed_ids = HashSet::new();

    for (line_num, line) in lines.iter().enumerate() {
        let record = match GffRecord::parse(line)
            .map_err(|e| format!("Malformed GFF line {}: {}", line_num + 1, e))?
        {
            Some(record) => record,
            None => continue,
        };

        let Some(orf_id) = record.id() else {
            continue;
        };
        observed_ids.insert(orf_id.to_string());

        if let Some(hit) = validated.get(orf_id) {
            derived.extend(derive_features(&record, orf_id, hit));
        }
    }

    Ok(Annotation {
        original_lines: lines,
        derived,
        observed_ids,
    })
}
