use clap::Parser;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use anyhow::Context;
use anyhow::Result;
use colorz::preview::{DEFAULT_BG_COLOR, DEFAULT_FONT_SIZE};
use colorz::quantize::QuantizeOptions;
use colorz::scheme::{DEFAULT_BOLD_ADD, DEFAULT_MAXV, DEFAULT_MINV, DEFAULT_NUM_COLORS};
use colorz::{PreviewOptions, SchemeOptions, colorz, hexify, html_preview, pairs_to_text};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// A color scheme generator.
///
/// Grabs the most dominant colors of an image with k-means and derives a bold
/// color for each by adding value. Prints one normal and one bold color per
/// line, and writes an HTML preview of the scheme.
#[derive(Parser, Debug)]
#[command(author, version, about, allow_negative_numbers = true)]
struct Args {
    /// The image file to generate from
    image: PathBuf,

    /// Number of colors to generate (excluding bold)
    #[arg(short = 'n', default_value_t = DEFAULT_NUM_COLORS)]
    num_colors: usize,

    /// Minimum value for the colors
    #[arg(long, default_value_t = DEFAULT_MINV)]
    minv: i32,

    /// Maximum value for the colors
    #[arg(long, default_value_t = DEFAULT_MAXV)]
    maxv: i32,

    /// How much value to add for bold colors
    #[arg(long, default_value_t = DEFAULT_BOLD_ADD)]
    bold: i32,

    /// Keep the colors in cluster order instead of sorting them by hue
    #[arg(long)]
    no_order: bool,

    /// Seed k-means for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// What font size to use in the preview, in rem
    #[arg(long, default_value_t = DEFAULT_FONT_SIZE)]
    font_size: u32,

    /// What background color to use in the preview, in hex format
    #[arg(long, default_value = DEFAULT_BG_COLOR)]
    bg_color: String,

    /// Don't use the image as the preview background
    #[arg(long)]
    no_bg_img: bool,

    /// Don't generate the preview
    #[arg(long)]
    no_preview: bool,

    /// Print the scheme as JSON instead of plain lines
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Local files become absolute `file://` URLs for the preview page.
fn image_url(path: &Path) -> Result<String> {
    let abs = fs::canonicalize(path)
        .with_context(|| format!("resolving {}", path.display()))?;
    Ok(format!("file://{}", abs.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let bytes = fs::read(&args.image)
        .with_context(|| format!("reading {}", args.image.display()))?;

    let options = SchemeOptions {
        n: args.num_colors,
        min_v: args.minv,
        max_v: args.maxv,
        bold_add: args.bold,
        order_colors: !args.no_order,
        quantize: QuantizeOptions { seed: args.seed, ..QuantizeOptions::default() },
    };
    let pairs = colorz(&bytes, &options).context("color scheme generation failed")?;

    if args.json {
        let value: Vec<serde_json::Value> = pairs
            .iter()
            .map(|p| serde_json::json!({ "base": hexify(p.base), "bold": hexify(p.bold) }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", pairs_to_text(&pairs));
    }

    if !args.no_preview {
        let preview = PreviewOptions {
            font_size: args.font_size,
            bg_color: args.bg_color.clone(),
            bg_img: if args.no_bg_img { None } else { Some(image_url(&args.image)?) },
        };
        let html = html_preview(&pairs, &preview).context("rendering preview")?;

        let mut file = tempfile::Builder::new()
            .prefix("colorz-")
            .suffix(".html")
            .tempfile()?;
        file.write_all(html.as_bytes())?;
        let (_, path) = file.keep()?;
        info!(path = %path.display(), "wrote preview");
        eprintln!("Preview → {}", path.display());
        if let Err(e) = open::that(&path) {
            warn!(error = %e, "could not open preview in a browser");
        }
    }

    Ok(())
}
