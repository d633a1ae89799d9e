#![allow(dead_code)]

use nftmaker_upload::config::{AssetSource, ParameterSource, PreviewSource};
use nftmaker_upload::CollectionConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const API_KEY: &str = "test_api_key";
pub const PROJECT_ID: &str = "17923";

pub fn upload_path() -> String {
    format!("/UploadNft/{}/{}", API_KEY, PROJECT_ID)
}

/// A collection laid out on disk the way the marbling series is: high-res
/// PNGs, `_low_res` previews and one parameter file per asset.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        for sub in ["high-res", "low-res", "parameters"] {
            fs::create_dir_all(dir.path().join(sub)).unwrap();
        }
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn checkpoint_path(&self) -> PathBuf {
        self.root().join("processed.json")
    }

    /// Writes the full file, the preview and the parameter file for `name`.
    pub fn add_asset(&self, name: &str, parameters: serde_json::Value) {
        self.add_image(name);
        fs::write(
            self.root().join("parameters").join(format!("{}.json", name)),
            parameters.to_string(),
        )
        .unwrap();
    }

    /// Writes only the full file and the preview for `name`.
    pub fn add_image(&self, name: &str) {
        fs::write(
            self.root().join("high-res").join(format!("{}.png", name)),
            format!("full-{}", name),
        )
        .unwrap();
        fs::write(
            self.root().join("low-res").join(format!("{}_low_res.png", name)),
            format!("preview-{}", name),
        )
        .unwrap();
    }

    pub fn collection(&self) -> CollectionConfig {
        CollectionConfig {
            project_id: PROJECT_ID.to_string(),
            description: "Algorithmic Marbling - beauty out of noise.".to_string(),
            name_width: 4,
            checkpoint: self.checkpoint_path(),
            assets: AssetSource {
                dir: self.root().join("high-res"),
                extension: "png".to_string(),
                mimetype: None,
            },
            preview: PreviewSource {
                dir: self.root().join("low-res"),
                suffix: "_low_res".to_string(),
                extension: "png".to_string(),
                mimetype: None,
            },
            parameters: Some(ParameterSource {
                dir: self.root().join("parameters"),
                seed_key: None,
            }),
        }
    }

    pub fn write_checkpoint(&self, entries: serde_json::Value) {
        fs::write(self.checkpoint_path(), entries.to_string()).unwrap();
    }

    pub fn read_checkpoint(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.checkpoint_path()).unwrap();
        serde_json::from_str(&content).unwrap()
    }
}
