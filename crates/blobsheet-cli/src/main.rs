//! Blobsheet CLI - writes the blob character sprite sheet
//!
//! Takes no arguments: every parameter is compiled in. The sheet lands at
//! `assets/tiny_spritesheet.png` relative to the working directory.

use std::process::ExitCode;

use blobsheet_cli::commands;
use blobsheet_spec::SheetParams;

fn main() -> ExitCode {
    match commands::generate::run(&SheetParams::default()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
