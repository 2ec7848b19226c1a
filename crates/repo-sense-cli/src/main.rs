use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use repo_sense_core::{load_documents, Classification, RepoSenseError, Result};

mod args;
use args::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match handle_detect(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn handle_detect(cli: &Cli) -> Result<()> {
    if !cli.notes_dir.is_dir() {
        return Err(RepoSenseError::InputNotFound {
            path: cli.notes_dir.clone(),
        });
    }

    let (documents, warnings) = load_documents(&cli.notes_dir);

    if !cli.quiet {
        for warning in &warnings {
            eprintln!("{} {}", "[WARN]".yellow().bold(), warning);
        }
    }

    if documents.is_empty() {
        return Err(RepoSenseError::EmptyInput {
            path: cli.notes_dir.clone(),
        });
    }

    if cli.verbose {
        println!("Read {} notes from {}", documents.len(), cli.notes_dir.display());
        for document in &documents {
            println!("  - {}", document.id);
        }
    }

    let result = Classification::from_documents(&documents);
    result.save(&cli.output)?;

    if !cli.quiet {
        print_summary(&result, &cli.output);
    }

    Ok(())
}

fn print_summary(result: &Classification, output: &Path) {
    println!();
    println!("{}", "Repository type detection complete".green().bold());
    println!("Detected Type: {}", result.detected_type.name().cyan());
    println!("Confidence: {:.1}%", result.confidence * 100.0);
    println!("Structure: {}", result.recommended_structure.name());
    println!("Output: {}", output.display());

    if !result.characteristics.is_empty() {
        println!();
        println!("{}", "Characteristics:".cyan().bold());
        for characteristic in &result.characteristics {
            println!("  - {}", characteristic);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn cli_for(notes_dir: PathBuf, output: PathBuf) -> Cli {
        Cli {
            notes_dir,
            output,
            verbose: false,
            quiet: true,
        }
    }

    #[test]
    fn test_missing_notes_dir_is_fatal_without_record() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("_meta").join("repo-type.json");
        let cli = cli_for(tmp.path().join("does-not-exist"), out.clone());

        let err = handle_detect(&cli).unwrap_err();
        assert!(matches!(err, RepoSenseError::InputNotFound { .. }));
        assert_eq!(err.exit_code(), 2);
        assert!(!out.exists());
    }

    #[test]
    fn test_empty_notes_dir_is_fatal_without_record() {
        let tmp = TempDir::new().unwrap();
        let notes = tmp.path().join("notes");
        fs::create_dir(&notes).unwrap();
        fs::write(notes.join("readme.txt"), "not a note").unwrap();
        let out = tmp.path().join("_meta").join("repo-type.json");
        let cli = cli_for(notes, out.clone());

        let err = handle_detect(&cli).unwrap_err();
        assert!(matches!(err, RepoSenseError::EmptyInput { .. }));
        assert_eq!(err.exit_code(), 3);
        assert!(!out.exists());
    }

    #[test]
    fn test_detect_writes_record_on_success() {
        let tmp = TempDir::new().unwrap();
        let notes = tmp.path().join("notes");
        fs::create_dir(&notes).unwrap();
        fs::write(notes.join("api.md"), "express route api endpoint").unwrap();
        let out = tmp.path().join("_meta").join("repo-type.json");
        let cli = cli_for(notes, out.clone());

        handle_detect(&cli).unwrap();
        let content = fs::read_to_string(&out).unwrap();
        assert!(content.contains("detected_type"));
        assert!(content.contains("Backend Framework"));
    }
}
