use crate::archive::{recovery_dir, save_images, write_archive};
use crate::config::Config;
use crate::descriptor::{Age, AspectRatio, Gender, Selection};
use crate::error::{ArchiveError, StudioError};
use crate::gemini::GeminiClient;
use crate::orchestrator::{BatchOutcome, ImageGenerator, ImagePayload, Orchestrator, Studio};
use crate::prompt::build_prompt;
use crate::utils::{create_spinner, print_archive_fallback, print_options, print_saved};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use reqwest::Client;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(
    name = "studio",
    version,
    about = "Generate editorial fashion photos from a product photo and a brand logo"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a batch of editorial images
    Generate(GenerateArgs),
    /// Print the prompt that would be sent, without calling the API
    Prompt(SelectionArgs),
    /// List the selectable model and aspect-ratio values
    Options,
}

#[derive(Debug, Clone, Args)]
pub struct SelectionArgs {
    #[arg(long, value_enum, default_value_t = Gender::Female)]
    pub gender: Gender,
    #[arg(long, value_enum, default_value_t = Age::YoungAdults)]
    pub age: Age,
    #[arg(long, value_enum, default_value_t = AspectRatio::Portrait)]
    pub aspect_ratio: AspectRatio,
}

impl From<&SelectionArgs> for Selection {
    fn from(args: &SelectionArgs) -> Self {
        Selection {
            gender: args.gender,
            age: args.age,
            aspect_ratio: args.aspect_ratio,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Product photo, JPG or PNG, at most 10MB
    #[arg(long)]
    pub product: Option<PathBuf>,
    /// Brand logo, ideally a transparent PNG, at most 5MB
    #[arg(long)]
    pub logo: Option<PathBuf>,
    #[command(flatten)]
    pub selection: SelectionArgs,
    /// Directory the images are written to
    #[arg(long, default_value = ".")]
    pub out: PathBuf,
    /// Write one zip archive instead of separate files
    #[arg(long)]
    pub zip: bool,
    #[arg(long)]
    pub batch_size: Option<usize>,
    #[arg(long)]
    pub model: Option<String>,
}

pub async fn process_command(client: Client, cli: Cli, config: Config) -> Result<(), StudioError> {
    match cli.command {
        Command::Generate(args) => {
            let config = apply_overrides(config, &args);
            let generator = GeminiClient::new(client, &config)?;
            log::info!("Using {}", generator.endpoint());
            let orchestrator = Orchestrator::new(generator, config.batch_size)?;
            run_generate(&Studio::new(orchestrator), &args).await
        }
        Command::Prompt(args) => {
            let selection = Selection::from(&args);
            println!(
                "{}",
                build_prompt(selection.descriptor(), selection.aspect_ratio.phrase())
            );
            Ok(())
        }
        Command::Options => {
            print_options();
            Ok(())
        }
    }
}

pub fn apply_overrides(mut config: Config, args: &GenerateArgs) -> Config {
    if let Some(batch_size) = args.batch_size {
        config = config.with_batch_size(batch_size);
    }
    if let Some(model) = &args.model {
        config = config.with_model(model.clone());
    }
    config
}

pub async fn run_generate<G: ImageGenerator>(
    studio: &Studio<G>,
    args: &GenerateArgs,
) -> Result<(), StudioError> {
    let selection = Selection::from(&args.selection);
    let spinner = create_spinner(
        "magenta",
        format!(
            "Generating {} images ({}, {})...",
            studio.orchestrator().batch_size(),
            selection.descriptor(),
            selection.aspect_ratio.ratio()
        ),
    );

    let outcome = studio
        .submit(args.product.as_deref(), args.logo.as_deref(), selection)
        .await;
    spinner.finish_and_clear();

    let images = match outcome? {
        BatchOutcome::Completed(images) => images,
        BatchOutcome::Superseded => return Ok(()),
    };

    let saved = if args.zip {
        save_archive(&args.out, &images).await?
    } else {
        save_images(&args.out, &images).await?
    };

    let message = format!(
        "Generated {} editorial images ({})",
        images.len(),
        images.first().map_or("", |i| i.mime_type())
    );
    println!("{}", message.bold().green());
    print_saved(&saved);
    Ok(())
}

/// Writes the zip. If that fails the images go out one by one, to `out` or
/// else to [`recovery_dir`].
async fn save_archive(out: &Path, images: &[ImagePayload]) -> Result<Vec<PathBuf>, ArchiveError> {
    let error = match write_archive(out, images).await {
        Ok(path) => return Ok(vec![path]),
        Err(e) => e,
    };
    log::warn!("Archive failed, saving images individually: {}", error);
    print_archive_fallback(&error);

    match save_images(out, images).await {
        Ok(paths) => Ok(paths),
        Err(e) => {
            let dir = recovery_dir(out);
            log::warn!("Cannot write to {}: {}; using {}", out.display(), e, dir.display());
            save_images(&dir, images).await
        }
    }
}
