//! Pure helpers shared by the webhelpers crates.
//!
//! Nothing in here performs I/O or holds state; every function is safe to call
//! from any number of threads at once.

pub mod numeric;
pub mod semver;

pub use numeric::round;
pub use semver::{
    is_normalized_pre_release, normalize_pre_release_string, normalize_sem_string,
    SEMANTIC_ALPHABET,
};
