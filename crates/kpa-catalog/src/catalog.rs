use std::{
    collections::{BTreeMap, HashSet},
    path::Path,
};

use kpa_assign::{Assigner, AssignError, Identified, Pool, SubjectId};
use serde::Deserialize;

use crate::{
    error::{CatalogError, PoolKind},
    models::{PronSet, SpeakSet, TaskMeta},
};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// On-disk shape of a catalog.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    pronunciation_sets: Vec<PronSet>,
    speaking_sets: Vec<SpeakSet>,
    grade_meta: BTreeMap<u8, TaskMeta>,
}

/// Immutable, validated content catalog.
///
/// Built once at startup and shared read-only; every assignment is a pure
/// function of the catalog and the subject id.
#[derive(Debug, Clone)]
pub struct Catalog {
    pronunciation: Assigner<PronSet>,
    speaking: Assigner<SpeakSet>,
    task_meta: BTreeMap<u8, TaskMeta>,
}

impl Catalog {
    /// The catalog shipped with the crate: pronunciation and speaking sets
    /// A to E, speaking grades 1 to 6.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.pronunciation_sets, file.speaking_sets, file.grade_meta)
    }

    /// Read, parse and validate a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "loading content catalog");
        Self::from_json(&json)
    }

    /// Validate content and build the catalog.
    ///
    /// Rejects empty pools, duplicate set ids, empty grade item lists,
    /// items filed under the wrong grade, and grades without task metadata.
    pub fn new(
        pronunciation_sets: Vec<PronSet>,
        speaking_sets: Vec<SpeakSet>,
        task_meta: BTreeMap<u8, TaskMeta>,
    ) -> Result<Self, CatalogError> {
        check_unique_ids(PoolKind::Pronunciation, &pronunciation_sets)?;
        check_unique_ids(PoolKind::Speaking, &speaking_sets)?;

        for set in &speaking_sets {
            for (&grade, items) in &set.items_by_grade {
                if items.is_empty() {
                    return Err(CatalogError::EmptyTier {
                        set_id: set.id.clone(),
                        grade,
                    });
                }
                if let Some(item) = items.iter().find(|item| item.grade != grade) {
                    return Err(CatalogError::GradeMismatch {
                        item_id: item.id.clone(),
                        listed: grade,
                        declared: item.grade,
                    });
                }
                if !task_meta.contains_key(&grade) {
                    return Err(CatalogError::MissingTaskMeta(grade));
                }
            }
        }

        let pronunciation = pool(PoolKind::Pronunciation, pronunciation_sets)?;
        let speaking = pool(PoolKind::Speaking, speaking_sets)?;

        tracing::info!(
            pronunciation_sets = pronunciation.len(),
            speaking_sets = speaking.len(),
            "content catalog loaded"
        );

        Ok(Self {
            pronunciation: Assigner::new(pronunciation),
            speaking: Assigner::new(speaking),
            task_meta,
        })
    }

    /// All pronunciation sets in order.
    pub fn pronunciation_sets(&self) -> &[PronSet] {
        self.pronunciation.sets().as_slice()
    }

    /// All speaking sets in order.
    pub fn speaking_sets(&self) -> &[SpeakSet] {
        self.speaking.sets().as_slice()
    }

    /// Pronunciation set by id.
    pub fn pronunciation_set(&self, id: &str) -> Option<&PronSet> {
        self.pronunciation.find(id)
    }

    /// Speaking set by id.
    pub fn speaking_set(&self, id: &str) -> Option<&SpeakSet> {
        self.speaking.find(id)
    }

    /// The first pronunciation set.
    pub fn default_pronunciation_set(&self) -> &PronSet {
        self.pronunciation.sets().first()
    }

    /// The first speaking set.
    pub fn default_speaking_set(&self) -> &SpeakSet {
        self.speaking.sets().first()
    }

    /// Pronunciation set assigned to a subject.
    pub fn assign_pronunciation_set(&self, subject: &SubjectId) -> &PronSet {
        self.pronunciation.assign_set(subject)
    }

    /// Speaking set assigned to a subject.
    pub fn assign_speaking_set(&self, subject: &SubjectId) -> &SpeakSet {
        self.speaking.assign_set(subject)
    }

    /// Task metadata of a speaking grade.
    pub fn task_meta(&self, grade: u8) -> Option<&TaskMeta> {
        self.task_meta.get(&grade)
    }
}

fn check_unique_ids<T: Identified>(kind: PoolKind, sets: &[T]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for set in sets {
        if !seen.insert(set.id()) {
            return Err(CatalogError::DuplicateSetId {
                kind,
                id: set.id().to_string(),
            });
        }
    }
    Ok(())
}

fn pool<T>(kind: PoolKind, sets: Vec<T>) -> Result<Pool<T>, CatalogError> {
    Pool::new(sets).map_err(|err| match err {
        AssignError::EmptyPool => CatalogError::EmptyPool(kind),
        other => CatalogError::Assign(other),
    })
}
