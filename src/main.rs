//! docable — extract documentation blocks from annotated source files as JSON.
//!
//! Each input file declares a namespace with a marker line
//! (`// docable-member-namespace: Acme.Http.Response`); every `/**` doc block
//! in the file, together with the start of the declaration that follows it,
//! becomes one member of that namespace in the output:
//!
//! ```text
//! docable src/http/*.ts > api.json
//! docable -o api.json --keep-going src/**/*.ts
//! ```

mod error;
mod extract;
mod model;
mod render;
mod run;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "docable",
    about = "Extract documentation blocks from annotated source files as JSON"
)]
struct Cli {
    /// Input files (glob patterns supported), processed in the order given
    files: Vec<String>,

    /// Write the JSON document here instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Keep processing remaining files after one fails extraction
    #[arg(long)]
    keep_going: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        anyhow::bail!("no input files given");
    }

    let files = expand_globs(&cli.files)?;
    let policy = if cli.keep_going {
        run::ErrorPolicy::Continue
    } else {
        run::ErrorPolicy::Halt
    };

    let outcome = run::run(&run::FsProvider, &files, policy)?;

    for diagnostic in &outcome.diagnostics {
        eprintln!("{diagnostic}");
    }

    let json = render::render(&outcome.document);
    match cli.output {
        Some(path) => {
            let mut contents = json;
            contents.push('\n');
            fs::write(&path, contents)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// Expand glob patterns into a list of file paths.
///
/// Argument order is preserved — entries are processed in the order given on
/// the command line. Matches of a single pattern are sorted for determinism.
fn expand_globs(patterns: &[String]) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for pattern in patterns {
        if Path::new(pattern).is_file() {
            files.push(pattern.clone());
            continue;
        }
        let mut matches: Vec<String> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .map(|p| p.to_string_lossy().to_string())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        matches.sort();
        files.extend(matches);
    }
    Ok(files)
}
