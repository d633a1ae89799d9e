use nftmaker_upload::{
    make_placeholders, AssetRecord, BodyBuilder, MetadataPlaceholder, UploadError,
};
use serde_json::{json, Map, Value};

fn params(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("parameters must be a JSON object"),
    }
}

fn record(name: &str, parameters: Option<Value>) -> AssetRecord {
    AssetRecord {
        name: name.to_string(),
        preview_base64: "cHJldmlldw==".to_string(),
        full_base64: "ZnVsbA==".to_string(),
        parameters: parameters.map(params),
    }
}

#[test]
fn test_scalar_parameter_yields_one_placeholder() {
    let placeholders = make_placeholders(&params(json!({ "radius": 2.5 }))).unwrap();
    assert_eq!(placeholders, vec![MetadataPlaceholder::new("radius", "2.5")]);
}

#[test]
fn test_vector_parameter_yields_axis_placeholders() {
    let placeholders = make_placeholders(&params(json!({ "offset": [1, 2, 3] }))).unwrap();
    assert_eq!(
        placeholders,
        vec![
            MetadataPlaceholder::new("offset_x", "1"),
            MetadataPlaceholder::new("offset_y", "2"),
            MetadataPlaceholder::new("offset_z", "3"),
        ]
    );
}

#[test]
fn test_placeholders_follow_parameter_order() {
    let parameters: Map<String, Value> =
        serde_json::from_str(r#"{"zoom": 3, "center": [0.5, -1.25], "angle": 90}"#).unwrap();
    let names: Vec<String> = make_placeholders(&parameters)
        .unwrap()
        .into_iter()
        .map(|placeholder| placeholder.name)
        .collect();

    assert_eq!(names, ["zoom", "center_x", "center_y", "angle"]);
}

#[test]
fn test_unsupported_parameters_are_rejected() {
    for value in [
        json!({ "flag": true }),
        json!({ "missing": null }),
        json!({ "nested": { "a": 1 } }),
        json!({ "color": [1, 2, 3, 4] }),
        json!({ "labels": ["a", "b"] }),
    ] {
        let result = make_placeholders(&params(value.clone()));
        assert!(
            matches!(result, Err(UploadError::UnsupportedParameter { .. })),
            "{} should be rejected",
            value
        );
    }
}

#[test]
fn test_asset_name_is_zero_padded() {
    let builder = BodyBuilder::new("desc", "image/png", "image/png").name_width(4);

    let request = builder.build(&record("7", None)).unwrap();
    assert_eq!(request.asset_name, "0007");
    assert_eq!(request.preview_image_nft.name, "0007");
    assert_eq!(request.subfiles[0].name, "0007");

    let request = builder.build(&record("12345", None)).unwrap();
    assert_eq!(request.asset_name, "12345");
}

#[test]
fn test_no_padding_by_default() {
    let builder = BodyBuilder::new("desc", "image/png", "image/svg+xml");
    let request = builder.build(&record("7", None)).unwrap();
    assert_eq!(request.asset_name, "7");
}

#[test]
fn test_seed_key_uses_unpadded_name() {
    let builder = BodyBuilder::new("desc", "image/png", "image/png")
        .name_width(4)
        .seed_key("seed");

    let request = builder
        .build(&record("42", Some(json!({ "seed": 0, "radius": 1.5 }))))
        .unwrap();

    assert_eq!(
        request.preview_image_nft.metadata_placeholder,
        vec![
            MetadataPlaceholder::new("seed", "42"),
            MetadataPlaceholder::new("radius", "1.5"),
        ]
    );
}

#[test]
fn test_full_file_has_no_placeholders() {
    let builder = BodyBuilder::new("desc", "image/png", "image/png");
    let request = builder
        .build(&record("1", Some(json!({ "radius": 2.5 }))))
        .unwrap();

    assert_eq!(request.preview_image_nft.metadata_placeholder.len(), 1);
    assert_eq!(request.subfiles.len(), 1);
    assert!(request.subfiles[0].metadata_placeholder.is_empty());
    assert_eq!(request.subfiles[0].file_from_base64, "ZnVsbA==");
}

#[test]
fn test_serialized_field_names() {
    let builder = BodyBuilder::new("desc", "image/png", "image/png");
    let request = builder.build(&record("1", None)).unwrap();
    let value = serde_json::to_value(&request).unwrap();

    assert!(value.get("assetName").is_some());
    assert!(value["previewImageNft"].get("fileFromBase64").is_some());
    assert!(value["subfiles"][0].get("metadataPlaceholder").is_some());
}
