use thiserror::Error;

/// Configuration faults surfaced by the assigner.
///
/// These point at a misconfigured content catalog, not at bad user input, and
/// are never replaced by a default choice.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssignError {
    #[error("cannot assign from an empty pool")]
    EmptyPool,
    #[error("set '{set_id}' has no items for tier '{tier}'")]
    MissingTier { set_id: String, tier: String },
}
