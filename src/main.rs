use clap::{Args, Parser, Subcommand};
use nftmaker_upload::checkpoint::Checkpoint;
use nftmaker_upload::{BatchUploader, CollectionConfig, NftMakerClient};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Upload every asset that has not been accepted yet
    Upload {
        #[command(flatten)]
        target: Target,

        /// NFT-MAKER API key
        #[arg(long, env = "NFTMAKER_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },
    /// Show the recorded status of every asset
    Status {
        #[command(flatten)]
        target: Target,
    },
}

#[derive(Args, Debug)]
struct Target {
    /// Collection config file (TOML)
    #[arg(short, long)]
    collection: PathBuf,

    /// Checkpoint file, overriding the one named in the collection config
    #[arg(long)]
    checkpoint: Option<PathBuf>,
}

impl Target {
    fn load(&self) -> anyhow::Result<(CollectionConfig, PathBuf)> {
        let collection = CollectionConfig::from_file(&self.collection)?;
        let checkpoint = self
            .checkpoint
            .clone()
            .unwrap_or_else(|| collection.checkpoint.clone());
        Ok((collection, checkpoint))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from a .env file if it exists.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nftmaker_upload=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Command::Upload { target, api_key } => {
            let (collection, checkpoint) = target.load()?;
            let client = NftMakerClient::new(api_key, collection.project_id.clone())?;

            info!("Uploading {} to project {}", target.collection.display(), client.project_id());
            let summary = BatchUploader::new(client, collection).run(&checkpoint).await?;

            println!(
                "Attempted {} assets: {} succeeded, {} failed, {} skipped",
                summary.attempted(),
                summary.succeeded,
                summary.failed,
                summary.skipped
            );
        }
        Command::Status { target } => {
            let (_, checkpoint_path) = target.load()?;
            let checkpoint = Checkpoint::load(&checkpoint_path)?;

            let mut uploaded = 0;
            for (name, status) in checkpoint.iter() {
                if checkpoint.is_uploaded(name) {
                    uploaded += 1;
                }
                println!("{:<24} {}", name, status);
            }
            println!(
                "{} of {} recorded assets uploaded",
                uploaded,
                checkpoint.len()
            );
        }
    }

    Ok(())
}
