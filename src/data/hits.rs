// hits.rs - BLAST tabular (outfmt 6) hit loading and significance filtering

use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Number of columns in a BLAST outfmt 6 line
pub const BLAST_FIELDS: usize = 12;

/// Default e-value cutoff for a hit to validate an ORF
pub const DEFAULT_EVALUE_THRESHOLD: f64 = 1e-5;

/// The fields of a BLAST tabular line that validation needs
#[derive(Debug, Clone, PartialEq)]
pub struct BlastHit {
    pub query: String,
    pub target: String,
    pub evalue: f64,
    pub qstart: u64,
    pub qend: u64,
}

impl BlastHit {
    /// Parse one tab-separated line
    /// (qseqid sseqid pident length mismatch gapopen qstart qend sstart send evalue bitscore)
    pub fn from_line(line: &str) -> Result<Self, String> {
        let cols: Vec<&str> = line.trim().split('\t').collect();
        if cols.len() < BLAST_FIELDS {
            return Err(format!(
                "expected {} tab-separated fields, found {}",
                BLAST_FIELDS,
                cols.len()
            ));
        }

        let parse_coord = |name: &str, value: &str| -> Result<u64, String> {
            let coord = value
                .trim()
                .parse::<u64>()
                .map_err(|_| format!("invalid {} '{}'", name, value))?;
            if coord == 0 {
                return Err(format!("{} must be 1-based, found 0", name));
            }
            Ok(coord)
        };

        let evalue = cols[10]
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("invalid evalue '{}'", cols[10]))?;

        Ok(Self {
            query: cols[0].to_string(),
            target: cols[1].to_string(),
            evalue,
            qstart: parse_coord("qstart", cols[6])?,
            qend: parse_coord("qend", cols[7])?,
        })
    }
}

/// The hit retained for one ORF
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedHit {
    pub target: String,
    pub evalue: f64,
    /// Query span in codon units, normalized so `qstart <= qend`
    pub qstart: u64,
    pub qend: u64,
}

impl From<BlastHit> for ValidatedHit {
    fn from(hit: BlastHit) -> Self {
        Self {
            target: hit.target,
            evalue: hit.evalue,
            qstart: hit.qstart.min(hit.qend),
            qend: hit.qstart.max(hit.qend),
        }
    }
}

fn is_skipped(line: &str) -> bool {
    line.starts_with('#') || line.trim().is_empty()
}

/// Keep, for every query, the last hit in input order with `evalue <= threshold`.
///
/// A malformed line aborts the whole read.
pub fn filter_hits<R: BufRead>(reader: R, threshold: f64) -> Result<HashMap<String, ValidatedHit>, String> {
    let mut validated = HashMap::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;
        if is_skipped(&line) {
            continue;
        }

        let hit = BlastHit::from_line(&line)
            .map_err(|e| format!("Malformed BLAST line {}: {}", line_num + 1, e))?;

        if hit.evalue <= threshold {
            validated.insert(hit.query.clone(), ValidatedHit::from(hit));
        }
    }

    Ok(validated)
}

/// Load BLAST results and keep significant hits
pub fn load_validated_hits(blast_path: &Path, threshold: f64) -> Result<HashMap<String, ValidatedHit>, String> {
    println!("🧪 Parsing BLAST results: {} (evalue <= {:e})", blast_path.display(), threshold);

    let file = File::open(blast_path)
        .map_err(|e| format!("Failed to open BLAST file {}: {}", blast_path.display(), e))?;
    let validated = filter_hits(BufReader::new(file), threshold)
        .map_err(|e| format!("{} ({})", e, blast_path.display()))?;

    println!("✅ {} ORFs with a significant hit", validated.len());
    Ok(validated)
}

/// Every query id appearing in a BLAST file, whatever its score
pub fn read_query_ids<R: BufRead>(reader: R) -> Result<HashSet<String>, String> {
    let mut ids = HashSet::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;
        if is_skipped(&line) {
            continue;
        }
        if let Some(query) = line.trim().split('\t').next() {
            ids.insert(query.to_string());
        }
    }

    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(query: &str, target: &str, qstart: &str, qend: &str, evalue: &str) -> String {
        format!(
            "{}\t{}\t98.5\t120\t2\t0\t{}\t{}\t1\t120\t{}\t250\n",
            query, target, qstart, qend, evalue
        )
    }

    #[test]
    fn test_parse_line() {
        let hit = BlastHit::from_line(&line("ORF_1", "sp|P12345", "2", "40", "1e-30")).unwrap();
        assert_eq!(hit.query, "ORF_1");
        assert_eq!(hit.target, "sp|P12345");
        assert_eq!(hit.evalue, 1e-30);
        assert_eq!((hit.qstart, hit.qend), (2, 40));
    }

    #[test]
    fn test_last_qualifying_hit_wins() {
        let input = [
            line("ORF_1", "first", "1", "10", "1e-20"),
            line("ORF_1", "second", "3", "12", "1e-8"),
            line("ORF_1", "weak", "5", "9", "0.5"),
        ]
        .concat();

        let hits = filter_hits(input.as_bytes(), DEFAULT_EVALUE_THRESHOLD).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits["ORF_1"].target, "second");
        assert_eq!(hits["ORF_1"].evalue, 1e-8);
    }

    #[test]
    fn test_threshold_is_inclusive_and_rejects_weak_queries() {
        let input = [
            line("ORF_1", "edge", "1", "10", "1e-5"),
            line("ORF_2", "weak", "1", "10", "0.001"),
        ]
        .concat();

        let hits = filter_hits(input.as_bytes(), 1e-5).unwrap();
        assert!(hits.contains_key("ORF_1"));
        assert!(!hits.contains_key("ORF_2"));
    }

    #[test]
    fn test_coordinates_are_normalized() {
        let input = line("ORF_7", "t", "50", "12", "0");
        let hits = filter_hits(input.as_bytes(), 1e-5).unwrap();
        assert_eq!((hits["ORF_7"].qstart, hits["ORF_7"].qend), (12, 50));
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let input = format!(
            "# BLASTP 2.14\n\n   \n{}# end\n",
            line("ORF_3", "t", "1", "4", "1e-9")
        );
        let hits = filter_hits(input.as_bytes(), 1e-5).unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_malformed_lines_abort() {
        let short = "ORF_1\tt\t99\n";
        let err = filter_hits(short.as_bytes(), 1e-5).unwrap_err();
        assert!(err.contains("line 1"));

        let bad_evalue = format!("# header\n{}", line("ORF_1", "t", "1", "4", "tiny"));
        let err = filter_hits(bad_evalue.as_bytes(), 1e-5).unwrap_err();
        assert!(err.contains("line 2"));
        assert!(err.contains("evalue"));

        let bad_coord = line("ORF_1", "t", "x", "4", "1e-9");
        assert!(filter_hits(bad_coord.as_bytes(), 1e-5).is_err());

        let zero_coord = line("ORF_1", "t", "0", "4", "1e-9");
        assert!(filter_hits(zero_coord.as_bytes(), 1e-5).is_err());
    }

    #[test]
    fn test_read_query_ids_ignores_scores() {
        let input = [
            "# comment\n".to_string(),
            line("ORF_1", "t", "1", "4", "1e-9"),
            line("ORF_2", "t", "1", "4", "10"),
        ]
        .concat();
        let ids = read_query_ids(input.as_bytes()).unwrap();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("ORF_2"));
    }
}
