use anyhow::{Context, Result, anyhow};
use clap::Parser;
use greentic_messaging_blockkit::{Document, DocumentPolicy};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Decode a Block Kit document, apply a document policy and print the
/// canonical JSON the Slack provider would send.
#[derive(Debug, Parser)]
#[command(name = "blockkit-cli", version)]
struct Cli {
    /// Document JSON (an array of blocks). Reads stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,
    /// DocumentPolicy JSON. Falls back to GREENTIC_BLOCKKIT_* environment variables.
    #[arg(long)]
    policy: Option<PathBuf>,
    /// Check against the platform limits instead of a configured policy.
    #[arg(long, conflicts_with = "policy")]
    platform: bool,
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let raw = read_document(cli.input.as_ref())?;
    let policy = load_policy(&cli)?;

    let document = Document::from_json_str(&raw).context("decode document")?;
    document.validate(&policy).context("validate document")?;
    tracing::info!(blocks = document.len(), "document accepted");

    let value = document.to_value()?;
    let out = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{out}");
    Ok(())
}

fn read_document(path: Option<&PathBuf>) -> Result<String> {
    if let Some(path) = path {
        return fs::read_to_string(path)
            .with_context(|| format!("read document {}", path.display()));
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    if buf.trim().is_empty() {
        return Err(anyhow!("document JSON required via --input or stdin"));
    }
    Ok(buf)
}

fn load_policy(cli: &Cli) -> Result<DocumentPolicy> {
    if cli.platform {
        return Ok(DocumentPolicy::platform());
    }
    let policy = match cli.policy.as_ref() {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("read policy {}", path.display()))?;
            serde_json::from_str::<DocumentPolicy>(&raw).context("parse policy")?
        }
        None => DocumentPolicy::from_env(),
    };
    policy.validate()?;
    Ok(policy)
}
