//! Output formatter trait and factory.

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::model::BaseModelDescriptor;

/// Trait for turning the validated base model into the text printed on stdout.
pub trait OutputFormatter {
    fn format(&self, model: &BaseModelDescriptor) -> Result<String>;
}

/// Creates the formatter for the given output format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    use super::json::JsonFormatter;
    use super::typescript::TypescriptFormatter;

    match format {
        OutputFormat::Typescript => Box::new(TypescriptFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
