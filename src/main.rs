// ABOUTME: Main entry point for the nbslides program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log progress information
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a notebook into a PPTX deck
    Convert(ConvertArgs),

    /// Print the slides a notebook would produce
    Outline(OutlineArgs),

    /// List the available highlight themes
    Themes,
}

#[derive(Args)]
struct ConvertArgs {
    /// Path to the notebook file
    #[arg(short, long)]
    input: PathBuf,

    /// Path to the output PPTX file
    #[arg(short, long)]
    output: PathBuf,

    /// Presentation title (defaults to the notebook file name)
    #[arg(long)]
    title: Option<String>,

    /// Highlight theme the code colors are based on
    #[arg(long)]
    theme: Option<String>,

    /// Font used for code slides
    #[arg(long)]
    code_font: Option<String>,

    /// Code font size in points
    #[arg(long)]
    code_font_size: Option<u32>,

    /// Slide aspect ratio: '4:3' or '16:9'
    #[arg(long)]
    aspect_ratio: Option<String>,
}

#[derive(Args)]
struct OutlineArgs {
    /// Path to the notebook file
    #[arg(short, long)]
    input: PathBuf,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));
    if verbose {
        builder.filter_level(LevelFilter::Info);
    }
    builder.init();
}

fn run(command: &Commands) -> anyhow::Result<()> {
    match command {
        Commands::Convert(args) => {
            let mut config = nbslides::Config::from_env();
            if let Some(title) = &args.title {
                config.title = Some(title.clone());
            }
            if let Some(theme) = &args.theme {
                config.highlight_theme = theme.clone();
            }
            if let Some(font) = &args.code_font {
                config.code_font = font.clone();
            }
            if let Some(size) = args.code_font_size {
                anyhow::ensure!(size > 0, "Code font size must be positive");
                config.code_font_size = size;
            }
            if let Some(aspect_ratio) = &args.aspect_ratio {
                config.aspect_ratio = aspect_ratio.clone();
            }

            let summary = nbslides::convert_notebook(&args.input, &args.output, &config)
                .with_context(|| format!("Failed to convert {:?}", args.input))?;

            println!(
                "Deck generated successfully: {:?} ({} slides)",
                args.output,
                summary.total()
            );
            Ok(())
        }
        Commands::Outline(args) => {
            let deck = nbslides::outline(&args.input)
                .with_context(|| format!("Failed to read {:?}", args.input))?;
            for line in deck.outline() {
                println!("{}", line);
            }
            Ok(())
        }
        Commands::Themes => {
            for name in nbslides::classifier::available_themes() {
                println!("{}", name);
            }
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Some(command) => run(command),
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
