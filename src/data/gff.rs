// gff.rs - Minimal GFF feature line model

use std::fmt;
use std::fs;
use std::path::Path;

/// Columns in a GFF feature line
pub const GFF_COLUMNS: usize = 9;

/// One tab-separated feature line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GffRecord {
    pub seqid: String,
    pub source: String,
    pub feature_type: String,
    pub start: u64,
    pub end: u64,
    pub score: String,
    pub strand: String,
    pub phase: String,
    pub attributes: String,
}

impl GffRecord {
    /// Parse a feature line.
    ///
    /// Returns `Ok(None)` for comments, blank lines and lines with fewer than
    /// nine columns; non-numeric coordinates are an error.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        if line.starts_with('#') || line.trim().is_empty() {
            return Ok(None);
        }

        let cols: Vec<&str> = line.trim().split('\t').collect();
        if cols.len() < GFF_COLUMNS {
            return Ok(None);
        }

        let coord = |value: &str| {
            value
                .parse::<u64>()
                .map_err(|_| format!("invalid coordinate '{}'", value))
        };

        Ok(Some(Self {
            seqid: cols[0].to_string(),
            source: cols[1].to_string(),
            feature_type: cols[2].to_string(),
            start: coord(cols[3])?,
            end: coord(cols[4])?,
            score: cols[5].to_string(),
            strand: cols[6].to_string(),
            phase: cols[7].to_string(),
            attributes: cols[8].to_string(),
        }))
    }

    /// Value of the last `ID=` attribute, if any
    pub fn id(&self) -> Option<&str> {
        self.attributes
            .rsplit_once("ID=")
            .and_then(|(_, rest)| rest.split(';').next())
    }
}

impl fmt::Display for GffRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.seqid,
            self.source,
            self.feature_type,
            self.start,
            self.end,
            self.score,
            self.strand,
            self.phase,
            self.attributes
        )
    }
}

/// Read a GFF file as raw lines, kept verbatim for pass-through
pub fn read_gff_lines(gff_path: &Path) -> Result<Vec<String>, String> {
    let content = fs::read_to_string(gff_path)
        .map_err(|e| format!("Failed to read GFF file '{}': {}", gff_path.display(), e))?;
    Ok(content.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_orf_line() {
        let record = GffRecord::parse("chr1\torfhunt\tORF\t101\t130\t.\t+\t1\tID=ORF_4")
            .unwrap()
            .unwrap();
        assert_eq!(record.seqid, "chr1");
        assert_eq!(record.feature_type, "ORF");
        assert_eq!((record.start, record.end), (101, 130));
        assert_eq!(record.id(), Some("ORF_4"));
        assert_eq!(record.to_string(), "chr1\torfhunt\tORF\t101\t130\t.\t+\t1\tID=ORF_4");
    }

    #[test]
    fn test_skipped_lines() {
        assert_eq!(GffRecord::parse("##gff-version 3").unwrap(), None);
        assert_eq!(GffRecord::parse("").unwrap(), None);
        assert_eq!(GffRecord::parse("chr1\tsrc\tORF\t1\t9").unwrap(), None);
    }

    #[test]
    fn test_bad_coordinate_is_error() {
        assert!(GffRecord::parse("chr1\tsrc\tORF\tone\t9\t.\t+\t0\tID=x").is_err());
    }

    #[test]
    fn test_id_extraction() {
        let mut record = GffRecord::parse("c\ts\tCDS\t1\t9\t.\t+\t0\tID=CDS_ORF_1;Parent=ORF_1;hit=P1")
            .unwrap()
            .unwrap();
        assert_eq!(record.id(), Some("CDS_ORF_1"));

        record.attributes = "Parent=ORF_1".to_string();
        assert_eq!(record.id(), None);

        record.attributes = "Name=x;ID=ORF_9;note=y".to_string();
        assert_eq!(record.id(), Some("ORF_9"));
    }
}
