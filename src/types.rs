use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The request body accepted by the `UploadNft` endpoint.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    /// The display name of the token, already padded to the collection's width.
    pub asset_name: String,
    /// The image shown by wallets and marketplaces.
    pub preview_image_nft: NftFile,
    /// Additional files bundled with the token, typically the full-resolution artwork.
    pub subfiles: Vec<NftFile>,
}

/// A single file in an upload request.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NftFile {
    pub name: String,
    /// The MIME type of the decoded file, e.g. "image/png" or "image/svg+xml".
    pub mimetype: String,
    /// The file content, base64-encoded with the standard alphabet.
    pub file_from_base64: String,
    pub description: String,
    /// Values substituted into the project's metadata template.
    pub metadata_placeholder: Vec<MetadataPlaceholder>,
}

/// A named value attached to a token's metadata.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MetadataPlaceholder {
    pub name: String,
    pub value: String,
}

impl MetadataPlaceholder {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An asset read from disk and ready to be turned into an [`UploadRequest`].
///
/// Records are built one at a time by the uploader and dropped after the
/// request is sent.
#[derive(Debug, Clone, Default)]
pub struct AssetRecord {
    /// The file name without its extension.
    pub name: String,
    pub preview_base64: String,
    pub full_base64: String,
    /// Generation parameters, in the key order of the source file.
    pub parameters: Option<Map<String, Value>>,
}
