use clap::Parser;

/// Mixin generator
///
/// Prints the Sequelize association accessor typings (getX, setX, addXs, ...)
/// for a model instance interface. Each association is described by taking
/// the same position from every list flag.
///
/// Use `_` in --plural or --joinTable where a value does not apply.
#[derive(Parser, Debug)]
#[command(name = "mixgen")]
#[command(version)]
#[command(about, long_about)]
pub struct Cli {
    /// Suppress colored diagnostics
    #[arg(short = 'n', long = "no-color")]
    pub no_color: bool,

    /// Enable verbose output for debugging
    #[arg(long = "verbose")]
    pub verbose: bool,

    /// Output format: typescript, json
    #[arg(short = 'f', long = "output-format", default_value = "typescript")]
    pub output_format: OutputFormat,

    /// Name of the base model
    #[arg(short = 'b', long = "baseModelName")]
    pub base_model_name: String,

    /// Names of the associated models
    #[arg(short = 'a', long = "associationModelName", num_args = 1.., required = true)]
    pub association_model_name: Vec<String>,

    /// Singular alias of each association (may equal the model name)
    #[arg(short = 's', long = "singular", num_args = 1.., required = true)]
    pub singular: Vec<String>,

    /// Plural alias of each association (`_` if n/a)
    #[arg(short = 'p', long = "plural", num_args = 1..)]
    pub plural: Vec<String>,

    /// Kind of each association: BelongsTo, HasOne, HasMany or BelongsToMany
    #[arg(short = 't', long = "type", num_args = 1.., required = true)]
    pub kind: Vec<String>,

    /// Join table name, or a quoted join attributes type, of each association (`_` if n/a)
    #[arg(short = 'j', long = "joinTable", num_args = 1..)]
    pub join_table: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Typescript,
    Json,
}
