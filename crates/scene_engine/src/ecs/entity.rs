//! Entity implementation

slotmap::new_key_type! {
    /// Entity identifier
    ///
    /// A generational key: a handle to a despawned entity never aliases an
    /// entity created later in the same slot.
    pub struct Entity;
}

/// Bookkeeping the world keeps for every live entity
#[derive(Debug, Clone, Default)]
pub(crate) struct EntityRecord {
    /// Human readable label used in logs
    pub label: &'static str,
    /// Scene graph parent (None = world space root)
    pub parent: Option<Entity>,
    /// Scene graph children in insertion order
    pub children: Vec<Entity>,
}

impl EntityRecord {
    pub(crate) fn new(label: &'static str) -> Self {
        Self {
            label,
            ..Default::default()
        }
    }
}
