//! Resumable batch uploads of generative art collections to NFT-MAKER.
//!
//! A collection is a directory of full-resolution files (PNG or SVG), a
//! parallel directory of preview images and, optionally, a directory of JSON
//! parameter files that become the token's metadata placeholders. Every file
//! is base64-encoded and posted to the `UploadNft` endpoint, one asset at a
//! time.
//!
//! The status code of each attempt is stored in a checkpoint file. A later
//! run skips the assets that were accepted and retries the rest, so a batch
//! interrupted by a bad file or a failing API can simply be started again.
//!
//! ## Features
//! - Collection layouts described in TOML, see [`CollectionConfig`].
//! - Metadata placeholders derived from scalar and vector parameters.
//! - A checkpoint that is saved even when the batch aborts.
//! - Typed error handling with [`UploadError`].
//!
//! ## Example
//!
//! ```no_run
//! # use nftmaker_upload::{BatchUploader, CollectionConfig, NftMakerClient};
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let collection = CollectionConfig::from_file("collections/algo-marble.toml")?;
//! let client = NftMakerClient::new(None, collection.project_id.clone())?;
//! let checkpoint = collection.checkpoint.clone();
//!
//! let summary = BatchUploader::new(client, collection).run(&checkpoint).await?;
//! println!("{} uploaded, {} rejected", summary.succeeded, summary.failed);
//! # Ok(())
//! # }
//! ```

pub mod body;
pub mod checkpoint;
pub mod client;
pub mod config;
pub mod error;
pub mod scanner;
pub mod types;
pub mod uploader;

pub use body::{make_placeholders, BodyBuilder};
pub use checkpoint::Checkpoint;
pub use client::NftMakerClient;
pub use config::CollectionConfig;
pub use error::UploadError;
pub use scanner::{scan_assets, AssetEntry};
pub use types::{AssetRecord, MetadataPlaceholder, NftFile, UploadRequest};
pub use uploader::{BatchUploader, RunSummary};
