//! Tests for default values and edge cases.

use kiln_config::asset::{DEV_IMAGE_INLINE_LIMIT, PROD_IMAGE_INLINE_LIMIT};
use kiln_config::output::{SCRIPT_CHUNK_FILENAME, SCRIPT_FILENAME};
use kiln_config::{
    AssetPolicy, BuildProfile, DevServer, Parallelism, ProjectSettings, SourceMapMode,
};
use std::path::PathBuf;

#[test]
fn project_settings_defaults() {
    let settings = ProjectSettings::default();
    assert_eq!(settings.entry, PathBuf::from("src/main.js"));
    assert_eq!(settings.template, PathBuf::from("public/index.html"));
    assert_eq!(settings.source_dir, PathBuf::from("src"));
    assert_eq!(settings.output_dir, PathBuf::from("dist"));
    assert!(settings.parallel_jobs.is_none());
    assert!(settings.check().is_ok());
}

#[test]
fn dev_server_defaults() {
    let dev = DevServer::default();
    assert_eq!(dev.host, "localhost");
    assert_eq!(dev.port, 3000);
    assert!(dev.open);
    assert!(dev.hot);
    assert_eq!(dev.address(), "localhost:3000");
}

#[test]
fn build_profile_defaults_to_development() {
    assert_eq!(BuildProfile::default(), BuildProfile::Development);
    assert_eq!(
        SourceMapMode::for_profile(BuildProfile::default()),
        SourceMapMode::CheapModule
    );
}

#[test]
fn build_profile_parses_aliases() {
    assert_eq!("prod".parse::<BuildProfile>().unwrap(), BuildProfile::Production);
    assert_eq!("Development".parse::<BuildProfile>().unwrap(), BuildProfile::Development);
    assert!("staging".parse::<BuildProfile>().is_err());
}

#[test]
fn image_thresholds_shrink_for_production() {
    assert!(DEV_IMAGE_INLINE_LIMIT > PROD_IMAGE_INLINE_LIMIT);
    assert_eq!(
        AssetPolicy::image(BuildProfile::Production).inline_threshold(),
        Some(10 * 1024)
    );
    assert_eq!(AssetPolicy::media().inline_threshold(), None);
}

#[test]
fn parallelism_never_drops_to_zero() {
    assert_eq!(Parallelism::from_detected(None).get(), 1);
    assert_eq!(Parallelism::from_detected(Some(0)).get(), 1);
    assert_eq!(Parallelism::from_detected(Some(12)).get(), 12);
    assert!(Parallelism::new(0).is_none());
}

#[test]
fn script_filenames_are_cache_busting() {
    assert!(SCRIPT_FILENAME.contains("[contenthash:8]"));
    assert!(SCRIPT_CHUNK_FILENAME.ends_with(".chunk.js"));
}
