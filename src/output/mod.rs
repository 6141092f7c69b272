//! Output generation module.
//!
//! This module formats the validated base model and writes the result to
//! stdout in the selected format (TypeScript or JSON).

pub mod formatter;
pub mod json;
pub mod typescript;

use std::io::{self, Write};

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::model::BaseModelDescriptor;
use formatter::create_formatter;

/// Writes the generated declarations.
pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Writes the formatted model to stdout.
    pub fn write(&self, model: &BaseModelDescriptor) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_to(&mut handle, model)
    }

    /// Formats the whole model before writing, so a formatting failure leaves
    /// `out` untouched.
    pub fn write_to<W: Write>(&self, out: &mut W, model: &BaseModelDescriptor) -> Result<()> {
        let formatted = create_formatter(self.format).format(model)?;
        writeln!(out, "{}", formatted.trim_end())?;
        out.flush()?;
        Ok(())
    }
}
