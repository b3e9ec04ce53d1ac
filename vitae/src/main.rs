use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitae::config::Config;
use vitae::pipeline::{default_output_path, ParsePipeline};

#[derive(Parser)]
#[command(name = "vitae")]
#[command(about = "Parse a resume document into schema-validated JSON")]
struct Args {
    /// Path to the resume document (.pdf, .docx, .doc, or .txt)
    input: PathBuf,

    /// Where to write the parsed JSON (defaults to <input stem>_parsed.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the parsed JSON to stdout after writing it
    #[arg(long)]
    print: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitae=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    let output = args
        .output
        .unwrap_or_else(|| default_output_path(&args.input));

    let pipeline = ParsePipeline::new(&config)?;
    let written = pipeline
        .parse_document_to_json(&args.input, &output)
        .await?;

    if args.print {
        let json = tokio::fs::read_to_string(&written).await?;
        println!("{json}");
    } else {
        println!("{}", written.display());
    }

    Ok(())
}
