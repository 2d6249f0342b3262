//! Command-line interface for lexsplit.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::assemble::assemble_documents;
use crate::error::Result;
use crate::json;
use crate::pipeline::chunk_chapters;
use crate::refine::{refine_chapters, RawChapter};
use crate::splitting::SectionRolePolicy;
use crate::types::{Chapter, CleanChapter};

/// lexsplit - Split statutory acts into retrieval-ready atomic units.
#[derive(Parser)]
#[command(name = "lexsplit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract section ids from scraped titles and drop scrape URLs.
    Refine {
        /// Scraped statute JSON (array of chapters, or one chapter)
        input: PathBuf,

        /// Output file (default: clean_data.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Split sections into atomic units with enriched context.
    Chunk {
        /// Refined statute JSON produced by `refine`
        input: PathBuf,

        /// Output file (default: atomic_units.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Section id(s) to split with the definition strategy
        /// (default: 2)
        #[arg(long = "definitions-section", value_name = "ID")]
        definitions_sections: Vec<String>,
    },

    /// Build parent/child document collections from chunked output.
    Assemble {
        /// Chunked statute JSON produced by `chunk`
        input: PathBuf,

        /// Output file (default: documents.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Refine { input, output } => refine_command(&input, output.as_deref()),
        Commands::Chunk {
            input,
            output,
            definitions_sections,
        } => chunk_command(&input, output.as_deref(), &definitions_sections),
        Commands::Assemble { input, output } => assemble_command(&input, output.as_deref()),
    }
}

/// Create a progress spinner with the standard style.
fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(message);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Execute the refine command.
fn refine_command(input: &Path, output: Option<&Path>) -> Result<()> {
    let output = output.unwrap_or(Path::new("clean_data.json"));

    println!(
        "{} {}",
        style("Refining").bold(),
        style(input.display()).cyan()
    );

    let chapters: Vec<RawChapter> = json::read_chapters(input)?;

    let pb = spinner("Extracting section ids...");
    let clean = refine_chapters(&chapters);
    pb.finish_and_clear();

    let section_count: usize = clean.iter().map(|c| c.sections.len()).sum();
    let unmatched = clean
        .iter()
        .flat_map(|c| &c.sections)
        .filter(|s| s.section.is_none())
        .count();

    println!("  Chapters: {}", clean.len());
    println!("  Sections: {section_count}");
    if unmatched > 0 {
        println!(
            "  Unmatched titles: {}",
            style(unmatched).yellow().bold()
        );
    }

    json::save_json(&clean, output)?;

    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        output.display()
    );

    Ok(())
}

/// Execute the chunk command.
fn chunk_command(input: &Path, output: Option<&Path>, definitions_sections: &[String]) -> Result<()> {
    let output = output.unwrap_or(Path::new("atomic_units.json"));

    let policy = if definitions_sections.is_empty() {
        SectionRolePolicy::default()
    } else {
        SectionRolePolicy::new(definitions_sections.iter().cloned())
    };

    println!(
        "{} {}",
        style("Chunking").bold(),
        style(input.display()).cyan()
    );

    let chapters: Vec<CleanChapter> = json::read_chapters(input)?;

    let pb = spinner("Splitting sections into atomic units...");
    let chunked = chunk_chapters(&chapters, &policy);
    pb.finish_and_clear();

    let section_count: usize = chunked.iter().map(|c| c.sections.len()).sum();
    let unit_count: usize = chunked
        .iter()
        .flat_map(|c| &c.sections)
        .map(|s| s.atomic_units.len())
        .sum();
    let empty_sections = chunked
        .iter()
        .flat_map(|c| &c.sections)
        .filter(|s| s.atomic_units.is_empty())
        .count();

    println!("  Chapters: {}", chunked.len());
    println!("  Sections: {section_count}");
    println!("  Atomic units: {}", style(unit_count).green());
    if empty_sections > 0 {
        println!(
            "  Sections without units: {}",
            style(empty_sections).yellow().bold()
        );
    }

    json::save_json(&chunked, output)?;

    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        output.display()
    );

    Ok(())
}

/// Execute the assemble command.
fn assemble_command(input: &Path, output: Option<&Path>) -> Result<()> {
    let output = output.unwrap_or(Path::new("documents.json"));

    println!(
        "{} {}",
        style("Assembling").bold(),
        style(input.display()).cyan()
    );

    let chapters: Vec<Chapter> = json::read_chapters(input)?;

    let pb = spinner("Building parent/child documents...");
    let documents = assemble_documents(&chapters);
    pb.finish_and_clear();

    println!(
        "  Parent documents (full sections): {}",
        style(documents.parent_count()).green()
    );
    println!(
        "  Child documents (searchable units): {}",
        style(documents.child_count()).green()
    );

    json::save_json(&documents, output)?;

    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        output.display()
    );

    Ok(())
}
