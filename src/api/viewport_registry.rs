use indexmap::IndexMap;

use crate::viewport::Viewport;

use super::{ElementId, ViewportResolver};

/// Element-to-viewport table, kept in mount order.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportRegistry<V> {
    viewports: IndexMap<ElementId, V>,
}

impl<V> Default for ViewportRegistry<V> {
    fn default() -> Self {
        Self {
            viewports: IndexMap::new(),
        }
    }
}

impl<V> ViewportRegistry<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts `viewport` on `element`, returning the one it replaced.
    pub fn mount(&mut self, element: impl Into<ElementId>, viewport: V) -> Option<V> {
        self.viewports.insert(element.into(), viewport)
    }

    pub fn unmount(&mut self, element: &ElementId) -> Option<V> {
        self.viewports.shift_remove(element)
    }

    #[must_use]
    pub fn get(&self, element: &ElementId) -> Option<&V> {
        self.viewports.get(element)
    }

    pub fn get_mut(&mut self, element: &ElementId) -> Option<&mut V> {
        self.viewports.get_mut(element)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.viewports.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.viewports.is_empty()
    }

    pub fn elements(&self) -> impl Iterator<Item = &ElementId> {
        self.viewports.keys()
    }
}

impl<V: Viewport> ViewportResolver for ViewportRegistry<V> {
    fn resolve_viewport(&mut self, element: &ElementId) -> Option<&mut dyn Viewport> {
        let viewport: &mut dyn Viewport = self.viewports.get_mut(element)?;
        Some(viewport)
    }
}
