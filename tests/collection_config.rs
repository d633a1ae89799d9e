use nftmaker_upload::{CollectionConfig, UploadError};
use std::fs;
use std::path::{Path, PathBuf};

#[test]
fn test_parse_full_collection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("algo-marble.toml");
    fs::write(
        &path,
        r#"
project_id = "17923"
description = "Algorithmic Marbling - beauty out of noise."
name_width = 4
checkpoint = "marble.json"

[assets]
dir = "art/high-res"
extension = "png"

[preview]
dir = "art/low-res"
suffix = "_low_res"

[parameters]
dir = "art/parameters"
seed_key = "seed"
"#,
    )
    .unwrap();

    let collection = CollectionConfig::from_file(&path).unwrap();
    assert_eq!(collection.project_id, "17923");
    assert_eq!(collection.name_width, 4);
    assert_eq!(collection.checkpoint, PathBuf::from("marble.json"));
    assert_eq!(
        collection.preview_path("12"),
        Path::new("art/low-res/12_low_res.png")
    );
    assert_eq!(
        collection.parameters_path("12"),
        Some(PathBuf::from("art/parameters/12.json"))
    );
    assert_eq!(collection.body_builder().display_name("12"), "0012");
}

#[test]
fn test_parse_minimal_collection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stained-glass.toml");
    fs::write(
        &path,
        r#"
project_id = "1"
description = "Stained Glass is a series of 100 unique generative artworks."

[assets]
dir = "glass"
extension = "svg"

[preview]
dir = "glass/thumbnails"
"#,
    )
    .unwrap();

    let collection = CollectionConfig::from_file(&path).unwrap();
    assert_eq!(collection.name_width, 0);
    assert_eq!(collection.checkpoint, PathBuf::from("processed.json"));
    assert!(collection.parameters.is_none());
    assert_eq!(collection.parameters_path("rose"), None);
    assert_eq!(
        collection.preview_path("rose"),
        Path::new("glass/thumbnails/rose.png")
    );
}

#[test]
fn test_unknown_field_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(
        &path,
        r#"
project_id = "1"
description = "x"
apikey = "should not live here"

[assets]
dir = "a"
extension = "png"

[preview]
dir = "b"
"#,
    )
    .unwrap();

    assert!(matches!(
        CollectionConfig::from_file(&path),
        Err(UploadError::InvalidConfig { .. })
    ));
}

#[test]
fn test_bundled_collections_parse() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("collections");
    for name in ["algo-marble.toml", "stained-glass.toml"] {
        CollectionConfig::from_file(root.join(name)).unwrap();
    }
}
