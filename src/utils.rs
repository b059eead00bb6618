use crate::descriptor::{descriptor, Age, AspectRatio, Gender};
use crate::error::{ArchiveError, FieldErrors, StudioError};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

pub fn create_spinner(color: &str, message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template(&format!("{{spinner:.{}}} {{msg}}", color)),
    );
    spinner.enable_steady_tick(100);
    spinner.set_message(message);

    spinner
}

pub fn print_options() {
    println!("{:━^60}", " Virtual model ".yellow());
    for gender in Gender::ALL {
        println!("  {}", gender.label().bold().green());
        for age in Age::ALL {
            println!("    {:<24} {}", age.label(), descriptor(gender, age).cyan());
        }
    }
    println!("{:━^60}", " Aspect ratio ".yellow());
    for ratio in AspectRatio::ALL {
        println!("  {:<26} {}", ratio.label(), ratio.phrase().magenta());
    }
    println!("{:━^60}", "".yellow());
}

pub fn print_field_errors(errors: &FieldErrors) {
    for error in errors.iter() {
        eprintln!("{} {}", "✗".red().bold(), error);
    }
}

pub fn print_failure(error: &StudioError) {
    match error {
        StudioError::Validation(errors) => print_field_errors(errors),
        StudioError::Batch(batch) => {
            eprintln!("{} {}", "✗".red().bold(), batch.to_string().red());
            let calls: Vec<String> = batch
                .failed_indices()
                .iter()
                .map(|i| (i + 1).to_string())
                .collect();
            eprintln!(
                "  failed calls: {} of {}",
                calls.join(", "),
                batch.batch_size
            );
        }
        other => eprintln!("{} {}", "✗".red().bold(), other.to_string().red()),
    }
}

pub fn print_archive_fallback(error: &ArchiveError) {
    eprintln!(
        "{} {}",
        "!".yellow().bold(),
        format!("{}; saving the images individually instead", error).yellow()
    );
}

pub fn print_saved(paths: &[PathBuf]) {
    for path in paths {
        println!("{} {}", "✓".green().bold(), path.display());
    }
}
