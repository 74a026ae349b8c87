// ABOUTME: Main entry point for the smartpitch program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use clap::{Args, Parser, Subcommand};
use smartpitch::{Config, Deck, Session};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a pitch deck from a startup idea
    Generate(GenerateArgs),

    /// Edit the deck title or tagline
    Edit(EditArgs),

    /// Export the deck as a PPTX presentation
    ExportPptx(ExportArgs),

    /// Export the deck as a landscape PDF
    ExportPdf(ExportArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// The startup idea to pitch
    #[arg(short, long)]
    prompt: String,

    /// Generation endpoint URL (overrides SMARTPITCH_ENDPOINT)
    #[arg(long)]
    endpoint: Option<String>,

    /// Path to the deck session file
    #[arg(short, long, default_value = "deck.json")]
    deck: PathBuf,

    /// Formats to export after generation: 'pptx' and/or 'pdf'
    #[arg(long, value_delimiter = ',')]
    export: Option<Vec<String>>,

    /// Directory for exported files
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

#[derive(Args)]
struct EditArgs {
    /// Path to the deck session file
    #[arg(short, long, default_value = "deck.json")]
    deck: PathBuf,

    /// New deck title
    #[arg(long)]
    title: Option<String>,

    /// New deck tagline
    #[arg(long)]
    tagline: Option<String>,
}

#[derive(Args)]
struct ExportArgs {
    /// Path to the deck session file
    #[arg(short, long, default_value = "deck.json")]
    deck: PathBuf,

    /// Directory for the exported file
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn run_generate(args: &GenerateArgs, config: &Config) -> smartpitch::Result<()> {
    // Reuse an existing session file so title/tagline edits survive a
    // regeneration; otherwise start from the placeholder deck
    let deck = if args.deck.exists() {
        Deck::load(&args.deck)?
    } else {
        Deck::new()
    };

    let mut session = Session::with_deck(deck);
    let client_config = config.get_client_config(args.endpoint.clone());
    session.generate(&args.prompt, &client_config)?;

    let deck = session.deck();
    println!("Title:   {}", deck.title);
    println!("Tagline: {}", deck.tagline);
    println!("Slides:  {}", deck.slides.len());
    for (i, slide) in deck.slides.iter().enumerate() {
        println!("  {}. {}", i + 1, slide.title);
    }

    deck.save(&args.deck)?;
    println!("Deck saved to {:?}", args.deck);

    if let Some(formats) = &args.export {
        let output_dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| config.output_dir.clone());
        for format in formats {
            match format.as_str() {
                "pptx" => {
                    let path = session.export_pptx(&output_dir)?;
                    println!("PPTX exported to {:?}", path);
                }
                "pdf" => {
                    let path = session.export_pdf(&output_dir)?;
                    println!("PDF exported to {:?}", path);
                }
                other => {
                    return Err(smartpitch::PitchError::ValidationError(format!(
                        "Unknown export format: {}",
                        other
                    )));
                }
            }
        }
    }

    Ok(())
}

fn run_edit(args: &EditArgs) -> smartpitch::Result<()> {
    smartpitch::utils::validate_file_exists(&args.deck)?;
    let mut session = Session::with_deck(Deck::load(&args.deck)?);

    if let Some(title) = &args.title {
        session.set_title(title.clone());
    }
    if let Some(tagline) = &args.tagline {
        session.set_tagline(tagline.clone());
    }

    session.deck().save(&args.deck)?;
    println!("Deck updated: {:?}", args.deck);
    Ok(())
}

fn run_export(args: &ExportArgs, config: &Config, pdf: bool) -> smartpitch::Result<()> {
    smartpitch::utils::validate_file_exists(&args.deck)?;
    let session = Session::with_deck(Deck::load(&args.deck)?);
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.output_dir.clone());

    let path = if pdf {
        session.export_pdf(&output_dir)?
    } else {
        session.export_pptx(&output_dir)?
    };
    println!("Exported to {:?}", path);
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let config = Config::from_env();

    let result = match &cli.command {
        Some(Commands::Generate(args)) => {
            println!("Executing generate command...");
            run_generate(args, &config)
        }
        Some(Commands::Edit(args)) => {
            println!("Executing edit command...");
            run_edit(args)
        }
        Some(Commands::ExportPptx(args)) => {
            println!("Executing export-pptx command...");
            run_export(args, &config, false)
        }
        Some(Commands::ExportPdf(args)) => {
            println!("Executing export-pdf command...");
            run_export(args, &config, true)
        }
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
