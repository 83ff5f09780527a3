pub mod random;

pub use random::RandomGenerator;

use burrow_core::Hash;

/// Trait for generating hashes.
///
/// Implementations are pure generators that don't interact with storage,
/// so two calls may return the same value. The shortening service is the
/// one that checks a fresh hash against the backend.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<Hash>;

    /// Generates a value that can be converted into a hash.
    ///
    /// Must always produce a value.
    fn generate(&self) -> Self::Output;
}
