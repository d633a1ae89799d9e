//! Builds `UploadNft` request bodies from asset records.

use crate::error::UploadError;
use crate::types::{AssetRecord, MetadataPlaceholder, NftFile, UploadRequest};
use serde_json::{Map, Value};

/// Suffixes given to the components of a vector-valued parameter.
const AXIS_SUFFIXES: [&str; 3] = ["x", "y", "z"];

/// Turns [`AssetRecord`]s into request bodies for one collection.
#[derive(Debug, Clone)]
pub struct BodyBuilder {
    description: String,
    name_width: usize,
    preview_mimetype: String,
    full_mimetype: String,
    seed_key: Option<String>,
}

impl BodyBuilder {
    /// Creates a builder with no name padding and no seed injection.
    pub fn new(
        description: impl Into<String>,
        preview_mimetype: impl Into<String>,
        full_mimetype: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            name_width: 0,
            preview_mimetype: preview_mimetype.into(),
            full_mimetype: full_mimetype.into(),
            seed_key: None,
        }
    }

    /// Sets the minimum display name width. Shorter names are left-padded with zeros.
    pub fn name_width(mut self, width: usize) -> Self {
        self.name_width = width;
        self
    }

    /// Stores the unpadded asset name under `key` in the parameters before
    /// placeholders are derived.
    pub fn seed_key(mut self, key: impl Into<String>) -> Self {
        self.seed_key = Some(key.into());
        self
    }

    /// Returns `name` left-padded with zeros to the configured width.
    pub fn display_name(&self, name: &str) -> String {
        format!("{:0>width$}", name, width = self.name_width)
    }

    /// Builds the request body for a single asset.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::UnsupportedParameter`] if a parameter value has a
    /// shape that cannot be expressed as placeholders.
    pub fn build(&self, record: &AssetRecord) -> Result<UploadRequest, UploadError> {
        let name = self.display_name(&record.name);

        let placeholders = match &record.parameters {
            Some(parameters) => {
                let mut parameters = parameters.clone();
                if let Some(key) = &self.seed_key {
                    parameters.insert(key.clone(), Value::String(record.name.clone()));
                }
                make_placeholders(&parameters)?
            }
            None => Vec::new(),
        };

        Ok(UploadRequest {
            asset_name: name.clone(),
            preview_image_nft: NftFile {
                name: name.clone(),
                mimetype: self.preview_mimetype.clone(),
                file_from_base64: record.preview_base64.clone(),
                description: self.description.clone(),
                metadata_placeholder: placeholders,
            },
            subfiles: vec![NftFile {
                name,
                mimetype: self.full_mimetype.clone(),
                file_from_base64: record.full_base64.clone(),
                description: self.description.clone(),
                metadata_placeholder: Vec::new(),
            }],
        })
    }
}

/// Derives metadata placeholders from a parameter map, in the map's key order.
///
/// Numbers and strings yield one placeholder each. Arrays of up to three
/// numbers yield one placeholder per component, named `<key>_x`, `<key>_y`
/// and `<key>_z`.
///
/// # Errors
///
/// Returns [`UploadError::UnsupportedParameter`] for booleans, nulls, objects,
/// arrays with non-numeric elements and arrays longer than three.
pub fn make_placeholders(
    parameters: &Map<String, Value>,
) -> Result<Vec<MetadataPlaceholder>, UploadError> {
    let mut placeholders = Vec::with_capacity(parameters.len());

    for (key, value) in parameters {
        match value {
            Value::Number(number) => {
                placeholders.push(MetadataPlaceholder::new(key, number.to_string()));
            }
            Value::String(text) => {
                placeholders.push(MetadataPlaceholder::new(key, text));
            }
            Value::Array(components) => {
                if components.len() > AXIS_SUFFIXES.len() {
                    return Err(unsupported(
                        key,
                        format!(
                            "vectors may have at most {} components, found {}",
                            AXIS_SUFFIXES.len(),
                            components.len()
                        ),
                    ));
                }
                for (component, axis) in components.iter().zip(AXIS_SUFFIXES) {
                    let Value::Number(number) = component else {
                        return Err(unsupported(key, "vector components must be numbers"));
                    };
                    placeholders.push(MetadataPlaceholder::new(
                        format!("{}_{}", key, axis),
                        number.to_string(),
                    ));
                }
            }
            Value::Bool(_) => return Err(unsupported(key, "booleans are not supported")),
            Value::Null => return Err(unsupported(key, "null is not supported")),
            Value::Object(_) => return Err(unsupported(key, "nested objects are not supported")),
        }
    }

    Ok(placeholders)
}

fn unsupported(key: &str, reason: impl Into<String>) -> UploadError {
    UploadError::UnsupportedParameter {
        key: key.to_string(),
        reason: reason.into(),
    }
}
