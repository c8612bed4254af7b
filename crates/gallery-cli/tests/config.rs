use std::io::Write;

use gallery_cli::config::{GalleryConfig, load_config, read_config};

#[test]
fn reads_explicit_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        b"source = \"photos.json\"\npage_size = 9\nrequest_timeout_secs = 5\n",
    )
    .unwrap();

    let config = load_config(Some(file.path())).unwrap();

    assert_eq!(config.source, "photos.json");
    assert_eq!(config.page_size.get(), 9);
    assert_eq!(config.request_timeout_secs, 5);
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_config(&dir.path().join("nope.toml")).unwrap_err();
    assert!(format!("{err:#}").contains("read config"));
}

#[test]
fn config_round_trips_through_toml() {
    let config = GalleryConfig::default();
    let text = toml::to_string(&config).unwrap();
    let parsed: GalleryConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}
