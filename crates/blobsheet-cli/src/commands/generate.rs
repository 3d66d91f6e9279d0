//! Generate command implementation
//!
//! Renders every row of the sprite sheet and writes the PNG.

use anyhow::{Context, Result};
use blobsheet_backend::{Atlas, PngConfig};
use blobsheet_spec::{SheetParams, Subject};
use colored::Colorize;
use std::process::ExitCode;
use std::time::Instant;

/// Run the generate command
///
/// # Arguments
/// * `params` - Scale and output path of the sheet
///
/// # Returns
/// Exit code 0 on success. Any failure is returned as an error so the
/// caller reports it and exits non-zero.
pub fn run(params: &SheetParams) -> Result<ExitCode> {
    let start = Instant::now();

    println!(
        "{} {}",
        "Generating sprite sheet:".cyan().bold(),
        params.output.display()
    );
    println!(
        "{} {}x (frame {}px)",
        "Scale:".dimmed(),
        params.scale,
        params.frame_size()
    );

    let mut atlas = Atlas::for_params(params).context("Invalid sheet parameters")?;

    for subject in Subject::ROWS {
        atlas
            .draw_row(subject)
            .with_context(|| format!("Failed to draw row for {}", subject))?;
        println!("  {} row {}: {}", "+".dimmed(), subject.row(), subject);
    }

    let sheet = atlas
        .save(&params.output, &PngConfig::default())
        .with_context(|| format!("Failed to write {}", params.output.display()))?;

    println!(
        "\n{} {} ({}x{}, {}px frames) in {}ms",
        "Generated".green().bold(),
        params.output.display(),
        sheet.width,
        sheet.height,
        params.frame_size(),
        start.elapsed().as_millis()
    );
    println!("{} {}", "Hash:".dimmed(), &sheet.hash[..16]);

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blobsheet_spec::SpecError;

    #[test]
    fn test_run_writes_sheet() {
        let tmp = tempfile::tempdir().unwrap();
        let params = SheetParams::default()
            .with_scale(1)
            .with_output(tmp.path().join("out").join("sheet.png"));

        let code = run(&params).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(params.output.is_file());
    }

    #[test]
    fn test_run_rejects_non_png_output() {
        let tmp = tempfile::tempdir().unwrap();
        let params = SheetParams::default()
            .with_scale(1)
            .with_output(tmp.path().join("sheet.bmp"));

        let err = run(&params).unwrap_err();
        assert!(err
            .chain()
            .any(|cause| matches!(
                cause.downcast_ref::<SpecError>(),
                Some(SpecError::OutputNotPng(_))
            )));
        assert!(!params.output.exists());
    }
}
