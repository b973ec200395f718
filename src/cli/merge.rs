// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};
use crate::data::DEFAULT_EVALUE_THRESHOLD;

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.fasta.is_none() {
            self.fasta = config.fasta;
        }
        if self.output_prefix == "orfs" {
            if let Some(prefix) = config.output_prefix {
                self.output_prefix = prefix;
            }
        }
        if self.blast.is_none() {
            self.blast = config.blast;
        }
        if self.gff.is_none() {
            self.gff = config.gff;
        }
        if self.annotated_output.is_none() {
            self.annotated_output = config.annotated_output;
        }
        if self.catalog_json.is_none() {
            self.catalog_json = config.catalog_json;
        }
        if self.summary_json.is_none() {
            self.summary_json = config.summary_json;
        }

        // Core settings (only override defaults, not explicit CLI values)
        if self.evalue == DEFAULT_EVALUE_THRESHOLD {
            if let Some(evalue) = config.evalue {
                self.evalue = evalue;
            }
        }
        if self.genetic_code == "standard" {
            if let Some(code) = config.genetic_code {
                self.genetic_code = code;
            }
        }

        // Performance
        if self.threads.is_none() {
            self.threads = config.threads;
        }

        // Sequence filtering
        if self.include_seqs.is_none() {
            self.include_seqs = config.include_seqs;
        }
        if self.exclude_seqs.is_none() {
            self.exclude_seqs = config.exclude_seqs;
        }

        // Flags (config can only switch on)
        if !self.nested && config.nested.unwrap_or(false) {
            self.nested = true;
        }
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}
