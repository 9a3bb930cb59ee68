//! Visibility masks.
//!
//! A mask is a labeled set of ids with a polarity: a show mask makes its members visible, a
//! hide mask hides them. Masks are stacked per element class in a [`MaskModule`]. To decide
//! visibility the stack is read from the most recently pushed mask downwards; the first
//! applied mask containing the id decides. Ids no mask covers are visible.

use std::collections::HashSet;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct Mask<K> {
    label: String,
    is_show_mask: bool,
    is_applied: bool,
    members: HashSet<K>,
}

impl<K: Eq + Hash> Mask<K> {
    pub fn show(label: impl Into<String>, ids: impl IntoIterator<Item = K>) -> Self {
        Self::with_polarity(label, true, ids)
    }

    pub fn hide(label: impl Into<String>, ids: impl IntoIterator<Item = K>) -> Self {
        Self::with_polarity(label, false, ids)
    }

    fn with_polarity(label: impl Into<String>, is_show_mask: bool, ids: impl IntoIterator<Item = K>) -> Self {
        Self {
            label: label.into(),
            is_show_mask,
            is_applied: true,
            members: ids.into_iter().collect(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_show_mask(&self) -> bool {
        self.is_show_mask
    }

    pub fn is_applied(&self) -> bool {
        self.is_applied
    }

    pub fn members(&self) -> &HashSet<K> {
        &self.members
    }

    pub fn covers(&self, id: &K) -> bool {
        self.members.contains(id)
    }

    /// `Some(visible)` if this mask has a say about `id`.
    pub fn decide(&self, id: &K) -> Option<bool> {
        (self.is_applied && self.covers(id)).then_some(self.is_show_mask)
    }
}

#[derive(Debug, Clone)]
pub struct MaskModule<K> {
    masks: Vec<Mask<K>>,
}

impl<K> Default for MaskModule<K> {
    fn default() -> Self {
        Self { masks: Vec::new() }
    }
}

impl<K: Eq + Hash> MaskModule<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a mask on top of the stack and returns its position.
    pub fn push(&mut self, mask: Mask<K>) -> usize {
        self.masks.push(mask);
        self.masks.len() - 1
    }

    pub fn remove(&mut self, index: usize) -> Option<Mask<K>> {
        (index < self.masks.len()).then(|| self.masks.remove(index))
    }

    /// Enables or disables a mask without taking it off the stack.
    pub fn set_applied(&mut self, index: usize, applied: bool) -> bool {
        match self.masks.get_mut(index) {
            Some(mask) => {
                mask.is_applied = applied;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.masks.clear();
    }

    /// Masks in push order, oldest first.
    pub fn masks(&self) -> &[Mask<K>] {
        &self.masks
    }

    pub fn len(&self) -> usize {
        self.masks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }

    pub fn is_visible(&self, id: &K) -> bool {
        self.masks
            .iter()
            .rev()
            .find_map(|mask| mask.decide(id))
            .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::id::NodeId;

    fn ids(values: &[&str]) -> Vec<NodeId> {
        values.iter().map(|v| NodeId::from(*v)).collect()
    }

    #[test]
    fn test_visible_by_default() {
        let module: MaskModule<NodeId> = MaskModule::new();
        assert!(module.is_visible(&NodeId::from("X")));
    }

    #[test]
    fn test_hide_then_show_shows() {
        let mut module = MaskModule::new();
        module.push(Mask::hide("hide X", ids(&["X"])));
        assert!(!module.is_visible(&NodeId::from("X")));

        module.push(Mask::show("show X", ids(&["X"])));
        assert!(module.is_visible(&NodeId::from("X")));
    }

    #[test]
    fn test_show_then_hide_hides() {
        let mut module = MaskModule::new();
        module.push(Mask::show("show X", ids(&["X"])));
        module.push(Mask::hide("hide X", ids(&["X", "Y"])));
        assert!(!module.is_visible(&NodeId::from("X")));
        assert!(!module.is_visible(&NodeId::from("Y")));
        assert!(module.is_visible(&NodeId::from("Z")));
    }

    #[test]
    fn test_disabled_mask_is_ignored() {
        let mut module = MaskModule::new();
        let idx = module.push(Mask::hide("hide X", ids(&["X"])));
        assert!(module.set_applied(idx, false));
        assert!(module.is_visible(&NodeId::from("X")));

        assert!(module.set_applied(idx, true));
        assert!(!module.is_visible(&NodeId::from("X")));
        assert!(!module.set_applied(7, true));
    }

    #[test]
    fn test_remove_mask() {
        let mut module = MaskModule::new();
        let idx = module.push(Mask::hide("hide X", ids(&["X"])));
        let removed = module.remove(idx).unwrap();
        assert_eq!(removed.label(), "hide X");
        assert!(module.is_empty());
        assert!(module.remove(0).is_none());
    }
}
