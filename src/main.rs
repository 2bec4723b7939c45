use clap::{Parser, Subcommand};
use ingredient_gal::config::{self, GalleryConfig};
use ingredient_gal::{extract, logging, output, render};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ingredient-gal")]
#[command(about = "Render an ingredient catalogue into a static image gallery page")]
#[command(long_about = "\
Render an ingredient catalogue into a static image gallery page

The catalogue is a JSON object mapping category names to item lists:

  {
    \"fruit\": [{ \"name\": \"Apple\", \"filename\": \"apple.jpg\" }],
    \"veg\":   [{ \"name\": \"Carrot\", \"filename\": \"carrot.jpg\" }]
  }

Every item becomes one card. Images are referenced on the remote host as
<base_url><filename>?x-oss-process=image/resize,w_240 and never downloaded.

Settings are read from ./gallery.toml when present (see 'gen-config').
Running without a subcommand is the same as 'build'.")]
#[command(version)]
struct Cli {
    /// Config file (default: ./gallery.toml if it exists)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalogue JSON (overrides `input` from config)
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Gallery HTML to write (overrides `output` from config)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// Extract the catalogue and write the gallery page
    Build,
    /// Print the flattened catalogue without writing anything
    Extract,
    /// Validate the catalogue, failing on the first bad item
    Check,
    /// Print a stock gallery.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging()?;

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let run = resolve_run(&cli)?;
            output::print_extract_started();
            let items = extract::extract_items(&run.input);
            // An empty catalogue counts as a failed extraction: no page is written.
            if items.is_empty() {
                output::print_build_failed();
                return Ok(());
            }
            output::print_extract_succeeded(items.len());
            output::print_render_started();
            render::render_gallery(&items, &run.output, &run.config)?;
            output::print_build_done(&run.output);
        }
        Command::Extract => {
            let run = resolve_run(&cli)?;
            let items = extract::load_items(&run.input)?;
            output::print_item_listing(&items);
        }
        Command::Check => {
            let run = resolve_run(&cli)?;
            println!("==> Checking {}", run.input.display());
            let items = extract::load_items(&run.input)?;
            output::print_category_summary(&items);
            println!("==> Catalogue is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Resolved settings for one run: config plus the effective file paths.
struct Run {
    config: GalleryConfig,
    input: PathBuf,
    output: PathBuf,
}

/// Load the explicit config file, or `./gallery.toml` when present, or defaults,
/// then apply `--input`/`--output` on top.
fn resolve_run(cli: &Cli) -> Result<Run, config::ConfigError> {
    let config = match &cli.config {
        Some(path) => config::load_config_file(path)?,
        None => config::load_config(Path::new("."))?,
    };
    let input = cli
        .input
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.input));
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output));
    Ok(Run {
        config,
        input,
        output,
    })
}
