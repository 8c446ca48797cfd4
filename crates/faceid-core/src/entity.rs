//! Entity abstraction.

/// A record whose identifier is assigned by a repository.
///
/// Repositories never look at anything but the identifier; every other field
/// is opaque to them.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Lower-case entity kind used in error messages, e.g. `employee`.
    const KIND: &'static str;

    /// Returns the identifier.
    fn id(&self) -> u64;

    /// Overwrites the identifier.
    fn set_id(&mut self, id: u64);
}
