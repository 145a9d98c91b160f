use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::ExpanderError;
use crate::key::{ContainerKey, ContainerMap};

/// Prefix of generated container ids.
pub const ID_PREFIX: &str = "cs-ew-";

/// A unique id for one initialized container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WidgetId(u64);

impl WidgetId {
    pub fn get(self) -> u64 {
        self.0
    }

    /// The element id to assign to the container's wrapper (`cs-ew-<n>`).
    pub fn dom_id(self) -> String {
        format!("{ID_PREFIX}{}", self.0)
    }

    /// A selector matching the wrapper (`#cs-ew-<n>`).
    pub fn selector(self) -> String {
        format!("#{ID_PREFIX}{}", self.0)
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ID_PREFIX}{}", self.0)
    }
}

/// Issues ids to containers and refuses to initialize the same container twice.
///
/// Whoever owns widget lifecycle owns the registry; ids are unique per registry.
#[derive(Clone, Debug)]
pub struct Registry<C> {
    ids: ContainerMap<C, WidgetId>,
    issued: u64,
}

impl<C: ContainerKey> Default for Registry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ContainerKey> Registry<C> {
    pub fn new() -> Self {
        Self {
            ids: ContainerMap::new(),
            issued: 0,
        }
    }

    /// Registers `container` and returns its new id.
    pub fn register(&mut self, container: C) -> Result<WidgetId, ExpanderError> {
        if let Some(&id) = self.ids.get(&container) {
            ewarn!(%id, "container already initialized");
            return Err(ExpanderError::AlreadyInitialized(id));
        }
        self.issued += 1;
        let id = WidgetId(self.issued);
        self.ids.insert(container, id);
        edebug!(%id, "container registered");
        Ok(id)
    }

    pub fn get(&self, container: &C) -> Option<WidgetId> {
        self.ids.get(container).copied()
    }

    pub fn is_initialized(&self, container: &C) -> bool {
        self.ids.contains_key(container)
    }

    /// Forgets `container`, e.g. when it is destroyed. Ids are never reissued.
    pub fn unregister(&mut self, container: &C) -> Option<WidgetId> {
        self.ids.remove(container)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
