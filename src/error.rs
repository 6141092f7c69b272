use thiserror::Error;

#[derive(Error, Debug)]
pub enum MixgenError {
    #[error(
        "incorrect type at position {index}: '{value}' (expected BelongsTo, HasOne, HasMany or BelongsToMany)"
    )]
    UnrecognizedAssociationKind { index: usize, value: String },

    #[error("--{flag} has {actual} value(s) but --associationModelName has {expected}")]
    ListLengthMismatch {
        flag: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("association '{model}' at position {index} needs a plural alias (--plural)")]
    MissingPlural { index: usize, model: String },

    #[error("association '{model}' at position {index} needs a join table (--joinTable)")]
    MissingJoinTable { index: usize, model: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MixgenError>;
