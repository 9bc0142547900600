//! Short alias generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Number of characters in a generated alias.
pub const ALIAS_LENGTH: usize = 4;

/// Generates a random alias from the thread-local, OS-seeded generator.
///
/// Each of the [`ALIAS_LENGTH`] characters is drawn independently and
/// uniformly from `[A-Za-z0-9]`. Uniqueness is not checked here; the alias
/// store's conditional write handles collisions.
///
/// # Examples
///
/// ```ignore
/// let alias = generate_alias();
/// assert_eq!(alias.len(), 4);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_alias() -> String {
    generate_alias_with(&mut rand::rng())
}

/// Generates an alias from a caller-supplied generator.
pub fn generate_alias_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.sample_iter(Alphanumeric)
        .take(ALIAS_LENGTH)
        .map(char::from)
        .collect()
}
