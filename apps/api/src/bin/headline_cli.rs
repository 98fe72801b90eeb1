use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use headline_api::collector::client::{AdsApiClient, DEFAULT_API_URL};
use headline_api::collector::export::{ExportError, DEFAULT_EXPORT_FILE};
use headline_api::collector::session::{AdSession, GENERATION_FAILED_MESSAGE};
use headline_api::collector::CollectorError;
use headline_api::models::brief::BriefField;

#[derive(Debug, Parser)]
#[command(name = "headline-cli")]
#[command(about = "Write ad headlines from a brief and export the ones you like")]
#[command(long_about = "Write ad headlines from a brief and export the ones you like.\n\n\
Typical use is two runs: generate with --save-previews previews.json and read the \
numbered ads, then rerun with --from-previews previews.json --like <n> ... to export \
the chosen ones without generating again.")]
struct Cli {
    /// Base URL of the headline API
    #[arg(long, env = "HEADLINE_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[arg(long, default_value = "")]
    brand_name: String,

    #[arg(long, default_value = "")]
    product: String,

    #[arg(long, default_value = "")]
    user_benefit: String,

    #[arg(long, default_value = "")]
    promotion: String,

    /// Target audience segment
    #[arg(long, default_value = "")]
    audience: String,

    #[arg(long, default_value = "")]
    goal: String,

    /// Core keywords
    #[arg(long, default_value = "")]
    keywords: String,

    /// Reference copy (e.g. a one-column CSV of high performing headlines)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Ad number to like (1-based). Repeat to like several; repeating a number unlikes it.
    #[arg(long = "like")]
    likes: Vec<usize>,

    /// Where liked ads are written
    #[arg(long, default_value = DEFAULT_EXPORT_FILE)]
    out: PathBuf,

    /// Save the generated ads here so a later run can like them with --from-previews
    #[arg(long, conflicts_with = "from_previews")]
    save_previews: Option<PathBuf>,

    /// Load ads saved with --save-previews instead of generating new ones
    #[arg(long)]
    from_previews: Option<PathBuf>,
}

impl Cli {
    fn fields(&self) -> [(BriefField, &str); 7] {
        [
            (BriefField::BrandName, self.brand_name.as_str()),
            (BriefField::Product, self.product.as_str()),
            (BriefField::UserBenefit, self.user_benefit.as_str()),
            (BriefField::Promotion, self.promotion.as_str()),
            (BriefField::Audience, self.audience.as_str()),
            (BriefField::Goal, self.goal.as_str()),
            (BriefField::Keywords, self.keywords.as_str()),
        ]
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut session = AdSession::new();

    if let Some(path) = &cli.from_previews {
        session.load_previews(path)?;
    } else {
        for (field, value) in cli.fields() {
            session.set_field(field, value);
        }
        if let Some(path) = &cli.csv {
            session.load_csv(path)?;
        }

        let client = AdsApiClient::new(&cli.api_url).context("Failed to build HTTP client")?;

        match session.generate(&client).await {
            Ok(_) => {}
            Err(CollectorError::Generation(_)) => {
                bail!(session
                    .error()
                    .unwrap_or(GENERATION_FAILED_MESSAGE)
                    .to_string());
            }
            Err(e) => return Err(e.into()),
        }

        if let Some(path) = &cli.save_previews {
            session.save_previews(path)?;
        }
    }

    println!("Number of previews: {}", session.previews().len());
    for (i, preview) in session.previews().iter().enumerate() {
        println!();
        println!("Ad {}", i + 1);
        println!("Headline: {}", preview.ad.headline);
        println!("Primary Text: {}", preview.ad.primary_text);
    }

    if cli.likes.is_empty() {
        return Ok(());
    }

    for &number in &cli.likes {
        let toggled = number
            .checked_sub(1)
            .and_then(|index| session.toggle_like(index));
        if toggled.is_none() {
            warn!("No ad number {number}; ignoring");
        }
    }

    match session.export_liked(&cli.out) {
        Ok(()) => println!(
            "\nSaved {} ads to {}",
            session.liked().len(),
            cli.out.display()
        ),
        Err(ExportError::NothingSelected) => {
            eprintln!("{}", ExportError::NothingSelected);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
