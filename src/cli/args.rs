// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// orfhunt - ORF extraction and homology-based validation
pub struct Args {
    /// nucleotide FASTA to scan for ORFs
    #[argh(option)]
    pub fasta: Option<String>,

    /// prefix for ORF outputs: <prefix>.gff and <prefix>.fasta (default: orfs)
    #[argh(option, default = "String::from(\"orfs\")")]
    pub output_prefix: String,

    /// BLAST tabular results (outfmt 6) for the ORF sequences
    #[argh(option)]
    pub blast: Option<String>,

    /// ORF GFF to annotate (default: <prefix>.gff written by this run)
    #[argh(option)]
    pub gff: Option<String>,

    /// annotated GFF output (default: <prefix>_validated.gff)
    #[argh(option)]
    pub annotated_output: Option<String>,

    /// e-value threshold for a hit to validate an ORF (default: 1e-5)
    #[argh(option, default = "crate::data::DEFAULT_EVALUE_THRESHOLD")]
    pub evalue: f64,

    /// genetic code: standard, bacterial, vertebrate-mito or an NCBI table number (default: standard)
    #[argh(option, default = "String::from(\"standard\")")]
    pub genetic_code: String,

    /// number of threads (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// scan only sequences whose id matches this regex
    #[argh(option)]
    pub include_seqs: Option<String>,

    /// skip sequences whose id matches this regex
    #[argh(option)]
    pub exclude_seqs: Option<String>,

    /// record ORFs nested inside other ORFs (reported in the JSON catalog)
    #[argh(switch)]
    pub nested: bool,

    /// write the ORF catalog as JSON to this path
    #[argh(option)]
    pub catalog_json: Option<String>,

    /// write the validation summary as JSON to this path
    #[argh(option)]
    pub summary_json: Option<String>,

    /// validate inputs without writing outputs (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// list available genetic codes and exit
    #[argh(switch)]
    pub list_codes: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}

impl Args {
    pub fn gff_output(&self) -> String {
        format!("{}.gff", self.output_prefix)
    }

    pub fn fasta_output(&self) -> String {
        format!("{}.fasta", self.output_prefix)
    }

    /// GFF to annotate: explicit path, else the one this run writes
    pub fn gff_input(&self) -> Option<String> {
        match (&self.gff, &self.fasta) {
            (Some(gff), _) => Some(gff.clone()),
            (None, Some(_)) => Some(self.gff_output()),
            (None, None) => None,
        }
    }

    pub fn annotated_output_path(&self) -> String {
        self.annotated_output
            .clone()
            .unwrap_or_else(|| format!("{}_validated.gff", self.output_prefix))
    }
}
