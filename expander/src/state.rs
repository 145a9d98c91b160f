use alloc::vec::Vec;

use crate::ItemState;

/// A serializable snapshot of an expander's visibility state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpanderState {
    pub last_index: usize,
    pub shown: usize,
    pub moving: bool,
    pub items: Vec<ItemState>,
}

impl ExpanderState {
    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|s| s.is_active()).count()
    }
}
