//! Deterministic content assignment for KPA
//!
//! Participants are spread across content sets, and across the items of each
//! difficulty tier, by hashing their identifier. The same identifier against
//! the same pool always gets the same content, so no assignment table needs
//! to be stored anywhere.
//!
//! ```
//! use kpa_assign::{Pool, SubjectId};
//!
//! let pool = Pool::new(vec!["A", "B", "C", "D", "E"]).unwrap();
//! let subject = SubjectId::from("P_123456");
//!
//! assert_eq!(pool.pick(&subject), &"C");
//! assert_eq!(pool.pick(&subject), pool.pick(&subject));
//! ```

mod assigner;
mod error;
mod hash;
mod pool;

pub use assigner::{Assigner, Tiered, assign_in_set};
pub use error::AssignError;
pub use hash::{SubjectId, stable_hash};
pub use pool::{Identified, Pool, assign, assign_item};
