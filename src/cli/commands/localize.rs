//! CLI command for the localize direction

use std::path::Path;

pub fn execute(
    workdir: &Path,
    output: &Path,
    language: &str,
    check_same_strings: bool,
    split_result: bool,
) -> anyhow::Result<()> {
    let report = crate::converter::localize(workdir, output, language, check_same_strings, split_result)?;

    println!("Parsed {} data files", report.files_parsed);
    println!("Copied {} already localized strings", report.entries_copied);
    println!("Assigned {} new ids", report.ids_assigned);
    if report.repeats > 0 {
        println!("Reused ids for {} repeated strings", report.repeats);
    }
    if report.collisions > 0 {
        println!("Found {} doubly defined strings", report.collisions);
    }
    println!(
        "Wrote {} data files and {} result files",
        report.files_written, report.result_files
    );
    if report.files_failed > 0 {
        println!("Failed to write {} files", report.files_failed);
    }
    println!("SUCCESS");

    Ok(())
}
