use crate::body::BodyBuilder;
use crate::checkpoint::{is_success, Checkpoint};
use crate::client::NftMakerClient;
use crate::config::CollectionConfig;
use crate::error::UploadError;
use crate::scanner::scan_assets;
use crate::types::AssetRecord;
use base64::{engine::general_purpose, Engine as _};
use serde_json::{Map, Value};
use std::path::Path;
use tokio::fs;
use tracing::{debug, error, info};

/// Counts of what happened to each asset during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Assets already uploaded successfully by an earlier run.
    pub skipped: usize,
    /// Assets the API accepted during this run.
    pub succeeded: usize,
    /// Assets the API answered with a non-success status.
    pub failed: usize,
}

impl RunSummary {
    pub fn attempted(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// Uploads every pending asset of a collection, one at a time.
#[derive(Debug)]
pub struct BatchUploader {
    client: NftMakerClient,
    collection: CollectionConfig,
    builder: BodyBuilder,
}

impl BatchUploader {
    pub fn new(client: NftMakerClient, collection: CollectionConfig) -> Self {
        let builder = collection.body_builder();
        Self {
            client,
            collection,
            builder,
        }
    }

    /// Runs the batch, resuming from the checkpoint at `checkpoint_path`.
    ///
    /// Assets whose last recorded status is a success are skipped. Every
    /// other asset is uploaded and its status recorded, whatever it is. The
    /// checkpoint is written back when the loop ends, including when it
    /// ends early because of an error.
    ///
    /// # Errors
    ///
    /// Returns the first error that stopped the loop: an unreadable asset,
    /// preview or parameter file, an unsupported parameter, or a transport
    /// failure. If the loop completed but the checkpoint could not be saved,
    /// that error is returned instead.
    pub async fn run<P: AsRef<Path>>(&self, checkpoint_path: P) -> Result<RunSummary, UploadError> {
        let checkpoint_path = checkpoint_path.as_ref();
        let mut checkpoint = Checkpoint::load(checkpoint_path)?;
        let mut summary = RunSummary::default();

        let outcome = self.upload_pending(&mut checkpoint, &mut summary).await;
        let saved = checkpoint.save(checkpoint_path);

        match (outcome, saved) {
            (Ok(()), Ok(())) => {
                info!(
                    succeeded = summary.succeeded,
                    failed = summary.failed,
                    skipped = summary.skipped,
                    "Batch finished"
                );
                Ok(summary)
            }
            (Ok(()), Err(save_err)) => Err(save_err),
            (Err(loop_err), Ok(())) => {
                info!(
                    recorded = checkpoint.len(),
                    "Batch aborted, checkpoint saved to {}",
                    checkpoint_path.display()
                );
                Err(loop_err)
            }
            (Err(loop_err), Err(save_err)) => {
                error!("Failed to save checkpoint after aborted batch: {}", save_err);
                Err(loop_err)
            }
        }
    }

    async fn upload_pending(
        &self,
        checkpoint: &mut Checkpoint,
        summary: &mut RunSummary,
    ) -> Result<(), UploadError> {
        let source = &self.collection.assets;
        let assets = scan_assets(&source.dir, &source.extension).await?;
        info!(
            project = %self.client.project_id(),
            found = assets.len(),
            "Scanned {}",
            source.dir.display()
        );

        for asset in assets {
            if checkpoint.is_uploaded(&asset.name) {
                debug!(asset = %asset.name, "Already uploaded, skipping");
                summary.skipped += 1;
                continue;
            }

            info!(asset = %asset.name, previous = ?checkpoint.status(&asset.name), "Processing");
            let record = self.read_asset(&asset.name, &asset.path).await?;
            let request = self.builder.build(&record)?;

            let status = self.client.upload_nft(&request).await?.as_u16();
            checkpoint.record(asset.name.as_str(), status);

            if is_success(status) {
                info!(asset = %asset.name, status, "Uploaded");
                summary.succeeded += 1;
            } else {
                info!(asset = %asset.name, status, "Upload rejected");
                summary.failed += 1;
            }
        }

        Ok(())
    }

    async fn read_asset(&self, name: &str, full_path: &Path) -> Result<AssetRecord, UploadError> {
        let preview_base64 = read_base64(&self.collection.preview_path(name)).await?;
        let full_base64 = read_base64(full_path).await?;

        let parameters = match self.collection.parameters_path(name) {
            Some(path) => Some(read_parameters(&path).await?),
            None => None,
        };

        Ok(AssetRecord {
            name: name.to_string(),
            preview_base64,
            full_base64,
            parameters,
        })
    }
}

async fn read_base64(path: &Path) -> Result<String, UploadError> {
    let content = fs::read(path).await.map_err(|e| UploadError::file(path, e))?;
    Ok(general_purpose::STANDARD.encode(content))
}

async fn read_parameters(path: &Path) -> Result<Map<String, Value>, UploadError> {
    let content = fs::read(path).await.map_err(|e| UploadError::file(path, e))?;
    serde_json::from_slice(&content).map_err(|source| UploadError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}
