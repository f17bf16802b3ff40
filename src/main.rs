use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use placeholders::config::{
    DEFAULT_BOLD_FONT, DEFAULT_OUT_DIR, DEFAULT_QUALITY, DEFAULT_REGULAR_FONT,
};
use placeholders::{Generator, GeneratorConfig, PLACEHOLDERS, PlaceholderSpec, find_placeholder};

#[derive(Parser)]
#[command(name = "placeholders")]
#[command(about = "Generate gradient placeholder images for the portfolio gallery")]
struct Cli {
    /// Directory to write the JPEG files into (created if missing)
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// JPEG quality (1-100)
    #[arg(
        long,
        default_value_t = DEFAULT_QUALITY,
        value_parser = clap::value_parser!(u8).range(1..=100)
    )]
    quality: u8,

    /// Bold TrueType font for the main label
    #[arg(long, value_name = "PATH", default_value = DEFAULT_BOLD_FONT)]
    bold_font: PathBuf,

    /// Regular TrueType font for the category tag
    #[arg(long, value_name = "PATH", default_value = DEFAULT_REGULAR_FONT)]
    regular_font: PathBuf,

    /// Only generate these files (may be repeated)
    #[arg(long, value_name = "FILENAME")]
    only: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Placeholders to generate, always in gallery order
fn select_placeholders(only: &[String]) -> anyhow::Result<Vec<PlaceholderSpec>> {
    if only.is_empty() {
        return Ok(PLACEHOLDERS.to_vec());
    }

    if let Some(unknown) = only.iter().find(|name| find_placeholder(name).is_none()) {
        let known: Vec<&str> = PLACEHOLDERS.iter().map(|p| p.filename).collect();
        anyhow::bail!("Unknown placeholder {:?}. Known files: {}", unknown, known.join(", "));
    }

    Ok(PLACEHOLDERS
        .iter()
        .filter(|p| only.iter().any(|name| name == p.filename))
        .copied()
        .collect())
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    placeholders::check_jpeg_support()?;

    let specs = select_placeholders(&args.only)?;

    let config = GeneratorConfig {
        quality: args.quality,
        ..GeneratorConfig::default()
    }
    .with_out_dir(args.out_dir)
    .with_fonts(args.bold_font, args.regular_font);
    let generator = Generator::new(config);

    println!("Generating placeholder images for portfolio gallery...");
    println!("Output directory: {}/", generator.out_dir().display());
    println!("{}", "-".repeat(50));

    let report = generator.run_batch(&specs)?;

    println!("{}", "-".repeat(50));
    println!("✓ Done! Generated {} placeholder images.", report.processed());
    if args.verbose && report.succeeded() < report.processed() {
        println!("  ({} failed)", report.processed() - report.succeeded());
    }

    println!("\nNext steps:");
    println!("1. Replace these placeholders with your actual images");
    println!("2. Or use stock photos from Unsplash, Pexels, or Pixabay");
    println!("3. Optimize images for web (compress to < 500KB)");
    println!("\nSee MEDIA_GUIDE.md for detailed instructions.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filter_selects_all_in_order() {
        let specs = select_placeholders(&[]).unwrap();
        assert_eq!(specs, PLACEHOLDERS.to_vec());
    }

    #[test]
    fn filter_keeps_gallery_order() {
        let only = vec!["video-thumb1.jpg".to_string(), "photo2.jpg".to_string()];
        let names: Vec<_> = select_placeholders(&only)
            .unwrap()
            .iter()
            .map(|p| p.filename)
            .collect();
        assert_eq!(names, vec!["photo2.jpg", "video-thumb1.jpg"]);
    }

    #[test]
    fn unknown_filter_is_rejected() {
        let err = select_placeholders(&["nope.jpg".to_string()]).unwrap_err();
        assert!(err.to_string().contains("nope.jpg"));
    }

    #[test]
    fn cli_defaults_match_fixed_configuration() {
        let cli = Cli::try_parse_from(["placeholders"]).unwrap();
        let defaults = GeneratorConfig::default();
        assert_eq!(cli.out_dir, defaults.out_dir);
        assert_eq!(cli.quality, defaults.quality);
        assert_eq!(cli.bold_font, defaults.bold_font);
        assert_eq!(cli.regular_font, defaults.regular_font);
        assert!(cli.only.is_empty());
    }

    #[test]
    fn cli_rejects_out_of_range_quality() {
        assert!(Cli::try_parse_from(["placeholders", "--quality", "0"]).is_err());
        assert!(Cli::try_parse_from(["placeholders", "--quality", "101"]).is_err());
    }
}
