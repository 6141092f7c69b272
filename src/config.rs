use crate::cli::{Cli, OutputFormat};
use crate::error::MixgenError;
use crate::model::{AssociationDescriptor, AssociationKind, BaseModelDescriptor};

/// Value meaning "does not apply" in the --plural and --joinTable lists.
pub const NOT_APPLICABLE: &str = "_";

#[derive(Debug)]
pub struct Config {
    pub no_color: bool,
    pub verbose: bool,
    pub output_format: OutputFormat,
    pub model: BaseModelDescriptor,
}

impl Config {
    /// Assembles and validates the association descriptors from the parallel
    /// list flags. Nothing is rendered if any position is invalid.
    pub fn from_cli(cli: Cli) -> Result<Self, MixgenError> {
        let expected = cli.association_model_name.len();

        check_length("singular", expected, cli.singular.len())?;
        check_length("type", expected, cli.kind.len())?;
        // --plural and --joinTable may be omitted entirely
        if !cli.plural.is_empty() {
            check_length("plural", expected, cli.plural.len())?;
        }
        if !cli.join_table.is_empty() {
            check_length("joinTable", expected, cli.join_table.len())?;
        }

        let mut plurals = cli.plural.into_iter();
        let mut join_tables = cli.join_table.into_iter();
        let mut associations = Vec::with_capacity(expected);

        for (index, ((model, singular), kind)) in cli
            .association_model_name
            .into_iter()
            .zip(cli.singular)
            .zip(cli.kind)
            .enumerate()
        {
            let plural = plurals.next().and_then(applicable);
            let join_table_name = join_tables.next().and_then(applicable);

            let kind = AssociationKind::parse(&kind)
                .ok_or(MixgenError::UnrecognizedAssociationKind { index, value: kind })?;

            if kind.is_collection() && plural.is_none() {
                return Err(MixgenError::MissingPlural { index, model });
            }
            if kind.needs_join_table() && join_table_name.is_none() {
                return Err(MixgenError::MissingJoinTable { index, model });
            }

            associations.push(AssociationDescriptor {
                association_model_name: model,
                singular,
                plural,
                kind,
                join_table_name,
            });
        }

        Ok(Self {
            no_color: cli.no_color,
            verbose: cli.verbose,
            output_format: cli.output_format,
            model: BaseModelDescriptor {
                base_model_name: cli.base_model_name,
                associations,
            },
        })
    }
}

fn check_length(flag: &'static str, expected: usize, actual: usize) -> Result<(), MixgenError> {
    if actual == expected {
        Ok(())
    } else {
        Err(MixgenError::ListLengthMismatch {
            flag,
            expected,
            actual,
        })
    }
}

fn applicable(value: String) -> Option<String> {
    if value == NOT_APPLICABLE {
        None
    } else {
        Some(value)
    }
}
