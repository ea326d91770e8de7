//! Environment check command.

use console::style;

use crate::config::Settings;
use crate::extract::check_tools;

/// Report external tool availability and extraction service configuration.
pub fn cmd_check(settings: &Settings) -> anyhow::Result<()> {
    println!("\n{}", style("Extraction Tool Status").bold());
    println!("{}", "-".repeat(50));

    let mut all_found = true;
    for (tool, available) in check_tools() {
        let status = if available {
            style("✓ found").green()
        } else {
            all_found = false;
            style("✗ not found").red()
        };
        println!("  {:<12} {}", tool, status);
    }

    if !all_found {
        println!(
            "\n  {} install poppler-utils and tesseract-ocr for PDF and image support",
            style("hint:").yellow()
        );
    }

    println!("\n{}", style("Extraction Service").bold());
    println!("{}", "-".repeat(50));
    if settings.extractor.is_configured() {
        println!(
            "  {} API key configured (model: {})",
            style("✓").green(),
            settings.extractor.model
        );
    } else {
        println!(
            "  {} no API key configured (set OPENAI_API_KEY)",
            style("✗").red()
        );
    }
    println!("  endpoint: {}", settings.extractor.endpoint);
    println!("  OCR language: {}", settings.ocr_language);

    Ok(())
}
