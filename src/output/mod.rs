// mod.rs - Output writers module

use crate::core::{Annotation, LengthBin, OrfCatalog, ValidationReport};
use bio::io::fasta;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &Path) -> Result<(), String> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)
                .map_err(|e| format!("Failed to create parent directory '{}': {}", parent.display(), e))?;
        }
    }
    Ok(())
}

fn create_writer(file_path: &Path) -> Result<BufWriter<File>, String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path.display(), e))?;
    Ok(BufWriter::new(file))
}

fn timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Write the ORF catalog as GFF feature lines, preceded by provenance comments
pub fn write_orf_gff(file_path: &Path, catalog: &OrfCatalog, command_line: &str) -> Result<(), String> {
    let mut writer = create_writer(file_path)?;

    writeln!(writer, "##gff-version 3").map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# Command: {}", command_line).map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# Generated: {}", timestamp()).map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# orfhunt v{}", env!("CARGO_PKG_VERSION")).map_err(|e| format!("Write error: {}", e))?;

    for orf in catalog.iter() {
        writeln!(writer, "{}", orf.to_gff()).map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ ORF features written to: {}", file_path.display());
    Ok(())
}

/// Write every ORF's nucleotide span as a FASTA record
pub fn write_orf_fasta(file_path: &Path, catalog: &OrfCatalog) -> Result<(), String> {
    let mut writer = fasta::Writer::new(create_writer(file_path)?);

    for orf in catalog.iter() {
        writer
            .write(&orf.id, Some(&orf.fasta_description()), &orf.sequence)
            .map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ ORF sequences written to: {}", file_path.display());
    Ok(())
}

/// Dump the catalog as JSON, including alternative starts and nested ORF ids
pub fn write_catalog_json(file_path: &Path, catalog: &OrfCatalog) -> Result<(), String> {
    let orfs: Vec<serde_json::Value> = catalog
        .iter()
        .map(|orf| {
            let nested: Vec<&str> = catalog.nested_in(orf).map(|n| n.id.as_str()).collect();
            serde_json::json!({
                "id": orf.id,
                "source": orf.seq_id,
                "start": orf.start,
                "end": orf.end,
                "length": orf.length(),
                "strand": orf.frame.strand.symbol().to_string(),
                "frame": orf.frame.to_string(),
                "start_codon": orf.start_codon,
                "alt_starts": orf.alt_starts,
                "nested": nested,
            })
        })
        .collect();

    let document = serde_json::json!({
        "generated": timestamp(),
        "version": env!("CARGO_PKG_VERSION"),
        "total": catalog.len(),
        "orfs": orfs,
    });

    let mut writer = create_writer(file_path)?;
    serde_json::to_writer_pretty(&mut writer, &document)
        .map_err(|e| format!("Failed to serialize ORF catalog: {}", e))?;
    writeln!(writer).map_err(|e| format!("Write error: {}", e))?;
    writer.flush().map_err(|e| format!("Flush error: {}", e))?;

    println!("✅ ORF catalog written to: {}", file_path.display());
    Ok(())
}

/// Write the original GFF lines followed by the derived CDS/UTR features
pub fn write_annotated_gff(file_path: &Path, annotation: &Annotation) -> Result<(), String> {
    let mut writer = create_writer(file_path)?;

    for line in annotation.lines() {
        writeln!(writer, "{}", line).map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!(
        "✅ Annotated GFF written to: {} ({} derived features)",
        file_path.display(),
        annotation.derived.len()
    );
    Ok(())
}

/// Write the validation summary as JSON
pub fn write_summary_json(
    file_path: &Path,
    report: &ValidationReport,
    evalue_threshold: f64,
    command_line: &str,
) -> Result<(), String> {
    let document = serde_json::json!({
        "generated": timestamp(),
        "command_line": command_line,
        "evalue_threshold": evalue_threshold,
        "summary": report,
    });

    let content = serde_json::to_string_pretty(&document)
        .map_err(|e| format!("Failed to serialize summary: {}", e))?;
    ensure_parent_dir(file_path)?;
    std::fs::write(file_path, content + "\n")
        .map_err(|e| format!("Failed to write summary '{}': {}", file_path.display(), e))?;

    println!("📁 Summary saved to: {}", file_path.display());
    Ok(())
}

/// Write histogram bins as a TSV table
pub fn write_length_bins(file_path: &Path, bins: &[LengthBin]) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path.display(), e))?;

    for bin in bins {
        writer
            .serialize(bin)
            .map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Length distribution written to: {}", file_path.display());
    Ok(())
}
