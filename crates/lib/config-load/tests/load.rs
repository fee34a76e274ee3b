//! Tests for locating and loading config files.

use std::path::PathBuf;

use config_load::{LoadError, load, with};

#[tokio::test]
async fn test_load_first_existing_file() {
    let tmp = tempfile::tempdir().unwrap();
    let first = tmp.path().join("missing.yaml");
    let second = tmp.path().join("icongen.yaml");
    std::fs::write(&second, "sizes: [64]\n").unwrap();

    let meta = load(&[first, second.clone()]).await.unwrap().unwrap();

    assert_eq!(meta.path, second);
    assert_eq!(meta.payload.sizes, Some(vec![64]));
}

#[tokio::test]
async fn test_no_files_is_not_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let paths = vec![tmp.path().join("a.yaml"), tmp.path().join("b.yaml")];

    let result = load(&paths).await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_parse_error_names_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("icongen.yaml");
    std::fs::write(&path, "variants: [\"huge@0x\"]\n").unwrap();

    let err = load(&[path.clone()]).await.unwrap_err();

    match err {
        LoadError::Parse { path: err_path, .. } => assert_eq!(err_path, path),
        other => panic!("Expected Parse error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_project_root_default_location() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join(".icongen.yaml"), "output_dir: out\n").unwrap();

    let meta = with(None, tmp.path()).await.unwrap().unwrap();

    assert_eq!(meta.path, tmp.path().join(".icongen.yaml"));
    assert_eq!(meta.payload.output_dir, Some(PathBuf::from("out")));
}

#[tokio::test]
async fn test_explicit_path_must_exist() {
    let tmp = tempfile::tempdir().unwrap();

    let err = with(Some("nope.yaml".into()), tmp.path()).await.unwrap_err();

    match err {
        LoadError::Read { path, source } => {
            assert_eq!(path, tmp.path().join("nope.yaml"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("Expected Read error, got {other:?}"),
    }
}
