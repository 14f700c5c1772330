use std::path::PathBuf;

use kpa_assign::AssignError;
use thiserror::Error;

/// Kind of content pool, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolKind {
    /// Pronunciation sets
    Pronunciation,
    /// Speaking sets
    Speaking,
}

impl std::fmt::Display for PoolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pronunciation => f.write_str("pronunciation"),
            Self::Speaking => f.write_str("speaking"),
        }
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no {0} sets are configured")]
    EmptyPool(PoolKind),
    #[error("duplicate {kind} set id '{id}'")]
    DuplicateSetId { kind: PoolKind, id: String },
    #[error("speaking set '{set_id}' has an empty item list for grade {grade}")]
    EmptyTier { set_id: String, grade: u8 },
    #[error("speaking item '{item_id}' is listed under grade {listed} but declares grade {declared}")]
    GradeMismatch {
        item_id: String,
        listed: u8,
        declared: u8,
    },
    #[error("no task metadata for speaking grade {0}")]
    MissingTaskMeta(u8),
    #[error("unknown {kind} set '{id}'")]
    UnknownSet { kind: PoolKind, id: String },
    #[error(transparent)]
    Assign(#[from] AssignError),
}

impl CatalogError {
    /// Whether the error points at a misconfigured catalog rather than at a
    /// caller asking for something that does not exist.
    pub const fn is_configuration_fault(&self) -> bool {
        !matches!(self, Self::UnknownSet { .. })
    }
}
