use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::{Context, Result};
use gogen_core::WriteResult;

use crate::demos::{self, DemoOptions};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Demo {
    /// Two generators importing different `book` packages, merged
    Merge,
    /// Package calls inside inline groups, renamed by a merge
    Call,
    /// Slice and array literals on one line and one element per line
    Multiline,
    /// Composite literals of named types, slices and maps
    Values,
}

#[derive(Args)]
pub struct DemoCommand {
    /// Which demo program to render
    demo: Demo,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Name used in the `package` clause
    #[arg(short, long, default_value = "example")]
    package: String,

    /// Comment written above the `package` clause
    #[arg(long)]
    header: Option<String>,

    /// Overwrite the output file if it already exists
    #[arg(short, long)]
    force: bool,
}

impl DemoCommand {
    pub fn run(&self) -> Result<()> {
        let options = DemoOptions {
            package: self.package.clone(),
            header: self.header.clone(),
        };

        let generator = match self.demo {
            Demo::Merge => demos::merge(&options),
            Demo::Call => demos::call(&options),
            Demo::Multiline => demos::multiline(&options),
            Demo::Values => demos::values(&options),
        };

        let Some(path) = &self.output else {
            print!("{generator}");
            return Ok(());
        };

        let mut file = generator.to_file(path);
        if !self.force {
            file = file.if_missing();
        }

        let result = file
            .write()
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

        match result {
            WriteResult::Written => eprintln!("wrote {}", path.display()),
            WriteResult::Skipped => eprintln!(
                "skipped {} (already exists, pass --force to overwrite)",
                path.display()
            ),
        }

        Ok(())
    }
}
