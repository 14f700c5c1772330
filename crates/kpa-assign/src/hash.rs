//! Stable string hash used for bucketing.

use std::fmt;

/// Compute the 32-bit polynomial hash of a string.
///
/// Starting at `0`, every UTF-16 code unit `c` is folded in as
/// `hash = (hash * 31 + c) mod 2^32`. The value is identical on every platform
/// and across releases, and it matches the assignments already handed out by
/// the browser front-end (which hashes UTF-16 code units too). For characters
/// in the Basic Multilingual Plane, including all Hangul, a code unit is the
/// code point.
///
/// This is a bucketing hash, not a cryptographic one.
///
/// # Examples
/// ```
/// use kpa_assign::stable_hash;
///
/// assert_eq!(stable_hash(""), 0);
/// assert_eq!(stable_hash("abc"), 96354);
/// ```
pub fn stable_hash(input: &str) -> u32 {
    input.encode_utf16().fold(0u32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(u32::from(unit))
    })
}

/// Map a hash onto a slot of a pool with `len` elements.
///
/// `len` must be non-zero; callers go through [`crate::Pool`] or the checked
/// [`crate::assign`] functions.
pub(crate) fn slot(hash: u32, len: usize) -> usize {
    debug_assert!(len > 0, "slot() called with an empty pool");
    (u64::from(hash) % len as u64) as usize
}

/// Identifier of the subject being assigned, usually a participant id or a
/// session id.
///
/// Only its string form matters: numbers stringify in base 10 and a missing
/// id becomes the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubjectId(String);

impl SubjectId {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// [`stable_hash`] of the identifier.
    pub fn stable_hash(&self) -> u32 {
        stable_hash(&self.0)
    }

    /// Seed used to pick an item within a tier: `"{id}-{tier}"`.
    pub fn tier_seed(&self, tier: impl fmt::Display) -> String {
        format!("{}-{}", self.0, tier)
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SubjectId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for SubjectId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<&String> for SubjectId {
    fn from(id: &String) -> Self {
        Self(id.clone())
    }
}

macro_rules! subject_id_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for SubjectId {
                fn from(id: $ty) -> Self {
                    Self(id.to_string())
                }
            }
        )*
    };
}

subject_id_from_int!(u32, u64, usize, i32, i64);

impl<T: Into<Self>> From<Option<T>> for SubjectId {
    fn from(id: Option<T>) -> Self {
        id.map(Into::into).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_values() {
        assert_eq!(stable_hash(""), 0);
        assert_eq!(stable_hash("a"), 97);
        assert_eq!(stable_hash("abc"), 96354);
        assert_eq!(stable_hash("12345"), 46_792_755);
        assert_eq!(stable_hash("hello world"), 1_794_106_052);
        assert_eq!(stable_hash("P_123456"), 1_849_952_562);
        assert_eq!(stable_hash("P_654321"), 1_995_897_612);
        assert_eq!(stable_hash("P_123456-3"), 3_982_920_280);
    }

    #[test]
    fn test_hangul() {
        assert_eq!(stable_hash("참가자01"), 2_397_892_041);
    }

    #[test]
    fn test_astral_chars_hash_code_units() {
        // U+1F600 is the surrogate pair D83D DE00
        assert_eq!(stable_hash("😀"), 0xD83D * 31 + 0xDE00);
        assert_eq!(stable_hash("😀"), 1_772_899);
    }

    #[test]
    fn test_wraps_around() {
        let long = "가".repeat(64);
        // Must not panic on overflow and must be repeatable
        assert_eq!(stable_hash(&long), stable_hash(&long));
    }

    #[test]
    fn test_slot() {
        assert_eq!(slot(0, 1), 0);
        assert_eq!(slot(96354, 5), 4);
        assert_eq!(slot(u32::MAX, 7), (u32::MAX % 7) as usize);
    }

    #[test]
    fn test_subject_id_conversions() {
        assert_eq!(SubjectId::from(12345u32).as_str(), "12345");
        assert_eq!(SubjectId::from(-7i64).as_str(), "-7");
        assert_eq!(SubjectId::from("P_1").as_str(), "P_1");
        assert_eq!(SubjectId::from(None::<&str>).as_str(), "");
        assert_eq!(SubjectId::from(Some(42u64)).as_str(), "42");
        assert_eq!(SubjectId::from(12345u32).stable_hash(), stable_hash("12345"));
    }

    #[test]
    fn test_tier_seed() {
        let subject = SubjectId::from("P_123456");
        assert_eq!(subject.tier_seed(3), "P_123456-3");
        assert_eq!(subject.tier_seed("sentence"), "P_123456-sentence");
    }
}
