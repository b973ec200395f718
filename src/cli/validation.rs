// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::codes::CodeRegistry;
use crate::data::SequenceFilter;
use regex::Regex;
use std::path::Path;

pub struct ValidationResult {
    /// Registry name of the resolved genetic code
    pub genetic_code: String,
    pub seq_include_regex: Option<Regex>,
    pub seq_exclude_regex: Option<Regex>,
}

impl ValidationResult {
    pub fn sequence_filter(&self) -> SequenceFilter<'_> {
        SequenceFilter {
            include: self.seq_include_regex.as_ref(),
            exclude: self.seq_exclude_regex.as_ref(),
        }
    }
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    // At least one stage must run
    if args.fasta.is_none() && args.blast.is_none() {
        return Err("Nothing to do: provide --fasta (extraction) and/or --blast (validation)".to_string());
    }

    // Validation needs a GFF: explicit, or the one written by extraction
    if args.blast.is_some() && args.gff_input().is_none() {
        return Err("--blast requires --gff, or --fasta to produce the ORF GFF in the same run".to_string());
    }

    // Input files must exist (the default GFF is produced by this run)
    if let Some(path) = &args.fasta {
        check_input_file(path, "FASTA")?;
    }
    if let Some(path) = &args.blast {
        check_input_file(path, "BLAST")?;
    }
    if let Some(path) = &args.gff {
        check_input_file(path, "GFF")?;
    }

    // Validate genetic code
    let registry = CodeRegistry::new();
    let genetic_code = registry
        .resolve_name(&args.genetic_code)
        .map(str::to_string)
        .ok_or_else(|| {
            format!(
                "Invalid genetic code '{}'. Available: {}",
                args.genetic_code,
                registry.get_code_names().join(", ")
            )
        })?;

    // Validate threshold
    if !args.evalue.is_finite() || args.evalue < 0.0 {
        return Err(format!("E-value threshold must be a non-negative number, got {}", args.evalue));
    }

    if args.threads == Some(0) {
        return Err("--threads must be greater than 0".to_string());
    }

    // Compile regex patterns
    let seq_include_regex = if let Some(pattern) = &args.include_seqs {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid include_seqs regex: {}", e))?)
    } else {
        None
    };

    let seq_exclude_regex = if let Some(pattern) = &args.exclude_seqs {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid exclude_seqs regex: {}", e))?)
    } else {
        None
    };

    Ok(ValidationResult {
        genetic_code,
        seq_include_regex,
        seq_exclude_regex,
    })
}

fn check_input_file(path: &str, kind: &str) -> Result<(), String> {
    if Path::new(path).is_file() {
        Ok(())
    } else {
        Err(format!("{} file not found: {}", kind, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argh::FromArgs;

    fn parse(args: &[&str]) -> Args {
        Args::from_args(&["orfhunt"], args).unwrap()
    }

    fn fasta_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b">s1\nATGAAATAG\n").unwrap();
        file
    }

    #[test]
    fn test_requires_a_stage() {
        let err = validate_args(&parse(&[])).err().unwrap();
        assert!(err.contains("Nothing to do"));
    }

    #[test]
    fn test_blast_without_gff_source() {
        let file = fasta_file();
        let path = file.path().to_str().unwrap();
        let err = validate_args(&parse(&["--blast", path])).err().unwrap();
        assert!(err.contains("--blast requires --gff"));
    }

    #[test]
    fn test_resolves_code_by_table_number() {
        let file = fasta_file();
        let path = file.path().to_str().unwrap();
        let result = validate_args(&parse(&["--fasta", path, "--genetic-code", "11"])).unwrap();
        assert_eq!(result.genetic_code, "bacterial");
    }

    #[test]
    fn test_rejects_unknown_code_and_bad_evalue() {
        let file = fasta_file();
        let path = file.path().to_str().unwrap();

        let err = validate_args(&parse(&["--fasta", path, "--genetic-code", "yeast"])).err().unwrap();
        assert!(err.contains("Invalid genetic code 'yeast'"));

        let err = validate_args(&parse(&["--fasta", path, "--evalue", "-1"])).err().unwrap();
        assert!(err.contains("non-negative"));
    }

    #[test]
    fn test_sequence_filter_regexes() {
        let file = fasta_file();
        let path = file.path().to_str().unwrap();
        let result = validate_args(&parse(&[
            "--fasta", path, "--include-seqs", "^chr", "--exclude-seqs", "_alt$",
        ]))
        .unwrap();

        let filter = result.sequence_filter();
        assert!(filter.accepts("chr1"));
        assert!(!filter.accepts("chr1_alt"));
        assert!(!filter.accepts("scaffold7"));

        let err = validate_args(&parse(&["--fasta", path, "--include-seqs", "("]))
            .err()
            .unwrap();
        assert!(err.contains("Invalid include_seqs regex"));
    }
}
