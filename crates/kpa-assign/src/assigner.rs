use std::fmt;

use crate::{
    error::AssignError,
    hash::SubjectId,
    pool::{Identified, Pool, assign_item},
};

/// A content set whose items are grouped by tier (difficulty level).
pub trait Tiered {
    /// Tier key, e.g. a speaking grade.
    type Tier: fmt::Display;
    /// Item type within a tier.
    type Item;

    /// Items of `tier`, or `None` when the set has no such tier.
    fn tier_items(&self, tier: &Self::Tier) -> Option<&[Self::Item]>;
}

/// Deterministic assigner over an immutable pool of content sets.
///
/// A subject is mapped to a set with `stable_hash(subject) mod sets`; items
/// within a tier of that set are picked with [`assign_in_set`].
#[derive(Debug, Clone)]
pub struct Assigner<S> {
    sets: Pool<S>,
}

impl<S: Identified> Assigner<S> {
    /// Create an assigner over a pool of content sets.
    pub const fn new(sets: Pool<S>) -> Self {
        Self { sets }
    }

    /// The content sets.
    pub const fn sets(&self) -> &Pool<S> {
        &self.sets
    }

    /// Look a set up by identifier.
    pub fn find(&self, id: &str) -> Option<&S> {
        self.sets.get(id)
    }

    /// Pick the content set of a subject.
    pub fn assign_set(&self, subject: &SubjectId) -> &S {
        let set = self.sets.pick(subject);
        tracing::trace!(subject = %subject, set_id = set.id(), "assigned content set");
        set
    }
}

/// Pick the item a subject gets for `tier` within `set`, seeded with
/// `"{subject}-{tier}"`.
///
/// A tier the set does not define is [`AssignError::MissingTier`]; an empty
/// tier is [`AssignError::EmptyPool`].
pub fn assign_in_set<'a, S: Identified + Tiered>(
    subject: &SubjectId,
    set: &'a S,
    tier: &S::Tier,
) -> Result<&'a S::Item, AssignError> {
    let items = set
        .tier_items(tier)
        .ok_or_else(|| AssignError::MissingTier {
            set_id: set.id().to_string(),
            tier: tier.to_string(),
        })?;

    assign_item(subject, tier, items)
}
