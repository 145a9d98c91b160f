#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type ContainerMap<K, V> = HashMap<K, V>;
#[cfg(not(feature = "std"))]
pub(crate) type ContainerMap<K, V> = BTreeMap<K, V>;

/// Identity of a host container (e.g. an element handle or a selector string).
#[cfg(feature = "std")]
pub trait ContainerKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq> ContainerKey for K {}

#[cfg(not(feature = "std"))]
pub trait ContainerKey: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord> ContainerKey for K {}
