// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub fasta: Option<String>,
    pub output_prefix: Option<String>,
    pub blast: Option<String>,
    pub gff: Option<String>,
    pub annotated_output: Option<String>,
    pub catalog_json: Option<String>,
    pub summary_json: Option<String>,

    // Core settings
    pub evalue: Option<f64>,
    pub genetic_code: Option<String>,
    pub nested: Option<bool>,

    // Performance
    pub threads: Option<usize>,

    // Sequence filtering
    pub include_seqs: Option<String>,
    pub exclude_seqs: Option<String>,

    // Flags
    pub dry_run: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# orfhunt.toml - Configuration file for orfhunt
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Nucleotide FASTA to scan for ORFs
fasta = "/path/to/genome.fasta"

# Prefix for <prefix>.gff and <prefix>.fasta
output_prefix = "orfs"

# BLAST tabular results (outfmt 6) for the ORF sequences
# blast = "/path/to/orfs_vs_db.tsv"

# ORF GFF to annotate (defaults to <prefix>.gff)
# gff = "/path/to/orfs.gff"

# Annotated GFF output (defaults to <prefix>_validated.gff)
# annotated_output = "orfs_validated.gff"

# Optional JSON outputs
# catalog_json = "orfs.json"
# summary_json = "validation_summary.json"

# =============================================================================
# CORE SETTINGS
# =============================================================================

# A hit validates its ORF when evalue <= threshold
evalue = 1e-5

# Genetic code: standard, bacterial, vertebrate-mito (or NCBI table 1, 11, 2)
genetic_code = "standard"

# Record ORFs nested inside longer ORFs
nested = false

# =============================================================================
# PERFORMANCE
# =============================================================================

# Number of threads (omit for auto-detect)
# threads = 8

# =============================================================================
# SEQUENCE FILTERING
# =============================================================================

# Regex on FASTA record ids
# include_seqs = "^chr"
# exclude_seqs = "plasmid"

# =============================================================================
# FLAGS
# =============================================================================

# Validate inputs and report counts without writing outputs
dry_run = false
"#
        .to_string()
    }
}
