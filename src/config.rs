//! Per-collection upload settings, loaded from a TOML file.
//!
//! ```toml
//! project_id = "17923"
//! description = "Algorithmic Marbling - beauty out of noise."
//! name_width = 4
//!
//! [assets]
//! dir = "public/assets/art/algo-marble/high-res"
//! extension = "png"
//!
//! [preview]
//! dir = "public/assets/art/algo-marble/low-res"
//! suffix = "_low_res"
//!
//! [parameters]
//! dir = "public/assets/art/algo-marble/parameters"
//! seed_key = "seed"
//! ```
//!
//! Relative paths are resolved against the working directory.

use crate::body::BodyBuilder;
use crate::checkpoint::DEFAULT_CHECKPOINT_FILE;
use crate::error::UploadError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectionConfig {
    /// The NFT-MAKER project the assets are uploaded to.
    pub project_id: String,
    /// The description attached to every uploaded file.
    pub description: String,
    /// Minimum width of display names; shorter names are zero-padded.
    #[serde(default)]
    pub name_width: usize,
    #[serde(default = "default_checkpoint")]
    pub checkpoint: PathBuf,
    pub assets: AssetSource,
    pub preview: PreviewSource,
    #[serde(default)]
    pub parameters: Option<ParameterSource>,
}

/// The directory of full-resolution files. Each file is one asset.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetSource {
    pub dir: PathBuf,
    pub extension: String,
    /// Guessed from `extension` when omitted.
    #[serde(default)]
    pub mimetype: Option<String>,
}

/// The directory of preview images, named `<asset><suffix>.<extension>`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreviewSource {
    pub dir: PathBuf,
    #[serde(default)]
    pub suffix: String,
    #[serde(default = "default_preview_extension")]
    pub extension: String,
    #[serde(default)]
    pub mimetype: Option<String>,
}

/// The directory of JSON parameter files, named `<asset>.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterSource {
    pub dir: PathBuf,
    /// Parameter under which the asset name is stored before upload.
    ///
    /// The name is sent as a single placeholder named after this key, not as
    /// one `<key>_x`, `<key>_y`, ... placeholder per character. Metadata
    /// templates that expect per-character seed placeholders must be updated
    /// to reference the single one.
    #[serde(default)]
    pub seed_key: Option<String>,
}

fn default_checkpoint() -> PathBuf {
    PathBuf::from(DEFAULT_CHECKPOINT_FILE)
}

fn default_preview_extension() -> String {
    "png".to_string()
}

impl CollectionConfig {
    /// Reads a collection config from a TOML file.
    ///
    /// # Errors
    ///
    /// - `UploadError::File` if the file cannot be read.
    /// - `UploadError::InvalidConfig` if it is not a valid collection config.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, UploadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| UploadError::file(path, e))?;
        toml::from_str(&content).map_err(|source| UploadError::InvalidConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn preview_path(&self, name: &str) -> PathBuf {
        let extension = self.preview.extension.trim_start_matches('.');
        self.preview
            .dir
            .join(format!("{}{}.{}", name, self.preview.suffix, extension))
    }

    /// Returns the parameter file for `name`, if the collection has parameters.
    pub fn parameters_path(&self, name: &str) -> Option<PathBuf> {
        self.parameters
            .as_ref()
            .map(|parameters| parameters.dir.join(format!("{}.json", name)))
    }

    pub fn body_builder(&self) -> BodyBuilder {
        let preview_mimetype = self
            .preview
            .mimetype
            .clone()
            .unwrap_or_else(|| guess_mimetype(&self.preview.extension));
        let full_mimetype = self
            .assets
            .mimetype
            .clone()
            .unwrap_or_else(|| guess_mimetype(&self.assets.extension));

        let builder = BodyBuilder::new(&self.description, preview_mimetype, full_mimetype)
            .name_width(self.name_width);

        match self
            .parameters
            .as_ref()
            .and_then(|parameters| parameters.seed_key.as_ref())
        {
            Some(key) => builder.seed_key(key),
            None => builder,
        }
    }
}

fn guess_mimetype(extension: &str) -> String {
    mime_guess::from_ext(extension.trim_start_matches('.'))
        .first_or_octet_stream()
        .to_string()
}
