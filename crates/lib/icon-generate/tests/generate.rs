//! Tests for writing icon files to disk.

use std::path::Path;

use icon_generate::{GenerateError, Params, generate, generate_icons};

fn dimensions(path: &Path) -> (u32, u32) {
    image::image_dimensions(path).expect("icon should be a readable image")
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    names
}

#[test]
fn test_reference_set_end_to_end() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("icons");

    let generated = generate_icons(&[32, 128, 256], &dir).unwrap();
    assert_eq!(generated.len(), 3);

    assert_eq!(
        file_names(&dir),
        ["128x128.png", "128x128@2x.png", "32x32.png"]
    );
    assert_eq!(dimensions(&dir.join("32x32.png")), (32, 32));
    assert_eq!(dimensions(&dir.join("128x128.png")), (128, 128));
    assert_eq!(dimensions(&dir.join("128x128@2x.png")), (256, 256));
    assert!(!dir.join("256x256.png").exists());
}

#[test]
fn test_report_matches_files() {
    let tmp = tempfile::tempdir().unwrap();

    let generated = generate_icons(&[16, 256], tmp.path()).unwrap();

    for entry in &generated {
        let written = std::fs::metadata(&entry.path).unwrap().len();
        assert_eq!(written as usize, entry.bytes);
        let size = entry.variant.pixel_size();
        assert_eq!(dimensions(&entry.path), (size, size));
    }
    assert_eq!(generated[1].path, tmp.path().join("128x128@2x.png"));
}

#[test]
fn test_creates_nested_output_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("src-tauri").join("icons");
    assert!(!dir.exists());

    generate_icons(&[32], &dir).unwrap();

    assert!(dir.is_dir());
    assert_eq!(file_names(&dir), ["32x32.png"]);
}

#[test]
fn test_rerun_is_byte_identical() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("128x128.png");

    generate_icons(&[128], tmp.path()).unwrap();
    let first = std::fs::read(&path).unwrap();

    generate_icons(&[128], tmp.path()).unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_overwrites_existing_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("32x32.png");
    std::fs::write(&path, b"stale").unwrap();

    generate_icons(&[32], tmp.path()).unwrap();

    assert_eq!(dimensions(&path), (32, 32));
}

#[test]
fn test_single_pixel_icon() {
    let tmp = tempfile::tempdir().unwrap();

    generate_icons(&[1], tmp.path()).unwrap();

    let img = image::open(tmp.path().join("1x1.png")).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (1, 1));
    assert_eq!(img.get_pixel(0, 0).0[3], 255);
}

#[test]
fn test_custom_palette_and_variants() {
    let tmp = tempfile::tempdir().unwrap();
    let background = icon_render::Rgb::new(10, 20, 30);

    let generated = generate(Params {
        variants: icon_variant::parse_list("16@3x").unwrap(),
        palette: icon_render::Palette {
            background,
            accent: icon_render::Rgb::new(200, 0, 0),
        },
        output_dir: tmp.path().to_path_buf(),
    })
    .unwrap();

    assert_eq!(generated[0].path, tmp.path().join("16x16@3x.png"));
    let img = image::open(&generated[0].path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (48, 48));
    assert_eq!(img.get_pixel(0, 0).0, [10, 20, 30, 255]);
}

#[test]
fn test_invalid_input_touches_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("icons");

    let err = generate_icons(&[], &dir).unwrap_err();
    assert!(matches!(err, GenerateError::EmptySet));

    let err = generate_icons(&[32, 0], &dir).unwrap_err();
    assert!(matches!(err, GenerateError::Variant(_)));

    assert!(!dir.exists());
}

#[test]
fn test_repeated_sizes_overwrite() {
    let tmp = tempfile::tempdir().unwrap();

    let generated = generate_icons(&[32, 32, 256, 256], tmp.path()).unwrap();

    assert_eq!(generated.len(), 4);
    assert_eq!(generated[0].path, generated[1].path);
    assert_eq!(
        file_names(tmp.path()),
        ["128x128@2x.png", "32x32.png"]
    );
    assert_eq!(dimensions(&tmp.path().join("32x32.png")), (32, 32));
}

#[test]
fn test_output_dir_blocked_by_file() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("icons");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let err = generate_icons(&[32], &blocker).unwrap_err();

    match err {
        GenerateError::CreateDir { path, .. } => assert_eq!(path, blocker),
        other => panic!("unexpected error: {other:?}"),
    }
}
