//! Integration tests for the generate command.

use std::fs;
use std::process::ExitCode;

use blobsheet_cli::commands::generate;
use blobsheet_spec::SheetParams;

#[test]
fn test_generate_then_regenerate_is_stable() {
    let tmp = tempfile::tempdir().unwrap();
    let params = SheetParams::default()
        .with_scale(1)
        .with_output(tmp.path().join("assets").join("tiny_spritesheet.png"));

    assert_eq!(generate::run(&params).unwrap(), ExitCode::SUCCESS);
    let first = fs::read(&params.output).unwrap();

    assert_eq!(generate::run(&params).unwrap(), ExitCode::SUCCESS);
    let second = fs::read(&params.output).unwrap();

    assert_eq!(first, second);
    assert_eq!(&first[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn test_out_of_range_scale_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let params = SheetParams::default()
        .with_scale(blobsheet_spec::MAX_SCALE + 1)
        .with_output(tmp.path().join("sheet.png"));

    let err = generate::run(&params).unwrap_err();
    assert!(format!("{:#}", err).contains("scale"));
    assert!(!params.output.exists());
}

#[test]
fn test_unwritable_destination_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("blocker");
    fs::write(&blocker, b"").unwrap();

    let params = SheetParams::default()
        .with_scale(1)
        .with_output(blocker.join("sheet.png"));

    let err = generate::run(&params).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to write"));
}
