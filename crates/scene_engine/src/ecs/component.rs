//! Component trait

/// Trait for anything that can be attached to an entity
///
/// Every component type has a stable name, which is the key the entity's
/// component mapping is reported under (`"rigidbody"`, `"mesh"`, ...).
pub trait Component: 'static {
    /// Name of this component type
    const NAME: &'static str;

    /// Name of this component instance
    ///
    /// Override when one type covers several named variants.
    fn name(&self) -> &'static str {
        Self::NAME
    }
}
