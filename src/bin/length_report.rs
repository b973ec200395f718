// length_report.rs - ORF length profile of validated vs. unvalidated ORFs

use bio::io::fasta;
use orfhunt::core::report::LENGTH_BIN_WIDTH;
use orfhunt::core::{GeometricExpectation, LengthDistribution};
use orfhunt::data::hits::read_query_ids;
use orfhunt::output::write_length_bins;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn load_orf_lengths(file_path: &str) -> Result<Vec<(String, usize)>, Box<dyn std::error::Error>> {
    println!("📋 Loading ORF sequences from {}...", file_path);

    let reader = fasta::Reader::from_file(file_path)?;
    let mut lengths = Vec::new();
    for record in reader.records() {
        let record = record?;
        lengths.push((record.id().to_string(), record.seq().len()));
    }

    println!("✅ Found {} ORFs", lengths.len());
    Ok(lengths)
}

fn load_hit_ids(file_path: &str) -> Result<HashSet<String>, Box<dyn std::error::Error>> {
    println!("📋 Loading hit query ids from {}...", file_path);

    let file = File::open(file_path)?;
    let ids = read_query_ids(BufReader::new(file))?;

    println!("✅ Found {} ORFs with at least one hit", ids.len());
    Ok(ids)
}

fn median(values: &[usize]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    Some(if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    } else {
        sorted[mid] as f64
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 3 && args.len() != 4 {
        eprintln!("Usage: {} <orfs.fasta> <blast.tsv> [bins.tsv]", args[0]);
        eprintln!("Splits ORF lengths by whether the ORF has any similarity hit");
        std::process::exit(1);
    }

    let lengths = load_orf_lengths(&args[1])?;
    let hit_ids = load_hit_ids(&args[2])?;

    let dist = LengthDistribution::partition(lengths, &hit_ids);
    let bins = dist.bins(LENGTH_BIN_WIDTH);

    println!("\n📊 === ORF LENGTH PROFILE ===");
    println!("  • ORFs total         : {}", dist.total());
    println!("  • With hits          : {}", dist.validated.len());
    println!("  • Without hits       : {}", dist.false_positives.len());
    if let Some(m) = median(&dist.validated) {
        println!("  • Median (with hits) : {:.1} nt", m);
    }
    if let Some(m) = median(&dist.false_positives) {
        println!("  • Median (no hits)   : {:.1} nt", m);
    }

    // Standard code: 3 stops out of 64 codons
    let expectation = GeometricExpectation::for_stop_count(3);
    println!(
        "  • Random expectation : {:.1} codons ({:.1} nt, p(stop) = {:.4})",
        expectation.expected_codons, expectation.expected_nucleotides, expectation.stop_probability
    );

    println!("\n{:>12}  {:>10}  {:>10}", "bin (nt)", "hits", "no hits");
    for bin in &bins {
        println!(
            "{:>12}  {:>10}  {:>10}",
            format!("{}-{}", bin.lower, bin.upper),
            bin.validated,
            bin.false_positives
        );
    }

    if let Some(out) = args.get(3) {
        write_length_bins(Path::new(out), &bins)?;
    }

    Ok(())
}
