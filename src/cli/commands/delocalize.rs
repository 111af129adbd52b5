//! CLI command for the delocalize direction

use std::path::Path;

pub fn execute(
    workdir: &Path,
    output: &Path,
    language: &str,
    empty_string: &str,
    ignore_continue: bool,
) -> anyhow::Result<()> {
    let report =
        crate::converter::delocalize(workdir, output, language, empty_string, ignore_continue)?;

    println!("Parsed {} data files", report.files_parsed);
    println!("Saved {} text strings", report.entries_saved);
    if report.collisions > 0 {
        println!("Found {} doubly defined strings", report.collisions);
    }
    println!("Replaced {} ids", report.replacements);
    if report.missing > 0 {
        println!(
            "No translation for {} ids (filled with \"{empty_string}\")",
            report.missing
        );
    }
    println!("Wrote {} data files", report.files_written);
    if report.files_failed > 0 {
        println!("Failed to write {} files", report.files_failed);
    }
    println!("SUCCESS");

    Ok(())
}
