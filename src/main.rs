// main.rs - CLI entry point

use orfhunt::cli::Config;
use orfhunt::core::report::LENGTH_BIN_WIDTH;
use orfhunt::core::LengthDistribution;
use orfhunt::output::{write_catalog_json, write_summary_json};
use orfhunt::prelude::*;
use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    if args.list_codes {
        println!("Available genetic codes:");
        for (name, desc) in CodeRegistry::new().list_codes() {
            println!("  - {}: {}", name, desc);
        }
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    // Validate all arguments
    let validation_result = validate_args(&args)?;

    println!("🚀 orfhunt v{}", orfhunt::VERSION);

    // Configure thread pool
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("🧵 Threads: {}", n);
    } else {
        println!("🧵 Threads: {} (auto-detected)", rayon::current_num_threads());
    }

    let total_start = Instant::now();

    // Stage 1: ORF extraction
    let mut catalog: Option<OrfCatalog> = None;
    if let Some(fasta) = &args.fasta {
        let registry = CodeRegistry::new();
        let code = registry
            .get_code(&validation_result.genetic_code)
            .ok_or_else(|| format!("Unknown genetic code '{}'", validation_result.genetic_code))?;

        let records = load_fasta(Path::new(fasta), validation_result.sequence_filter())?;
        let extract_start = Instant::now();
        let mut extracted = OrfExtractor::new(code).extract(&records);
        if args.nested {
            extracted = extracted.with_nested();
            let containing = extracted.iter().filter(|orf| !orf.nested.is_empty()).count();
            println!("🪆 ORFs containing nested ORFs: {}", containing);
        }
        println!("⏱️  Extraction time: {:.2}s", extract_start.elapsed().as_secs_f64());

        if !args.dry_run {
            write_orf_gff(Path::new(&args.gff_output()), &extracted, &command_line)?;
            write_orf_fasta(Path::new(&args.fasta_output()), &extracted)?;
            if let Some(json_path) = &args.catalog_json {
                write_catalog_json(Path::new(json_path), &extracted)?;
            }
        }
        catalog = Some(extracted);
    }

    // Stage 2: homology validation
    if let Some(blast) = &args.blast {
        let validated = load_validated_hits(Path::new(blast), args.evalue)?;

        let report = if args.dry_run && args.gff.is_none() {
            // Nothing was written; validate against the in-memory catalog
            let lines: Vec<String> = catalog
                .as_ref()
                .map(|c| c.iter().map(|orf| orf.to_gff()).collect())
                .unwrap_or_default();
            let annotation = annotate(lines, &validated)?;
            println!("🧩 ORFs that would be annotated: {}", annotation.annotated_orfs());
            summarize(&validated, &annotation, catalog.as_ref())
        } else {
            let gff_path = args
                .gff_input()
                .ok_or("--blast requires --gff or --fasta")?;
            println!("📄 Reading ORF features from: {}", gff_path);
            let annotation = annotate(read_gff_lines(Path::new(&gff_path))?, &validated)?;
            if !args.dry_run {
                write_annotated_gff(Path::new(&args.annotated_output_path()), &annotation)?;
            }
            summarize(&validated, &annotation, catalog.as_ref())
        };

        report.print_summary();
        if let (Some(summary_path), false) = (&args.summary_json, args.dry_run) {
            write_summary_json(Path::new(summary_path), &report, args.evalue, &command_line)?;
        }
    }

    if args.dry_run {
        println!("✅ Dry run completed successfully (no files written)");
    }
    println!("\n🎉 Done in {:.2}s", total_start.elapsed().as_secs_f64());
    Ok(())
}

fn summarize(
    validated: &std::collections::HashMap<String, ValidatedHit>,
    annotation: &Annotation,
    catalog: Option<&OrfCatalog>,
) -> ValidationReport {
    let validated_ids: HashSet<String> = validated.keys().cloned().collect();
    let report = assess_false_positives(&validated_ids, &annotation.observed_ids);

    // Length profile is only available when the catalog was built in this run
    if let Some(catalog) = catalog {
        let dist = LengthDistribution::partition(
            catalog.iter().map(|orf| (orf.id.clone(), orf.length())),
            &validated_ids,
        );
        let bins = dist.bins(LENGTH_BIN_WIDTH);
        if let Some(peak) = bins.iter().max_by_key(|b| b.false_positives) {
            println!(
                "📊 Most unvalidated ORFs fall in {}-{} nt ({} ORFs)",
                peak.lower, peak.upper, peak.false_positives
            );
        }
    }
    report
}
