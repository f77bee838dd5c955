//! Headless host document: mounted elements, their layout boxes and animated styles.

pub(crate) mod layout;

use std::collections::HashMap;

use slotmap::{SlotMap, new_key_type};

use crate::animation::style::{Style, StyleProps};
use crate::foundation::core::{Rect, Vec2};

new_key_type! {
    /// Handle to a mounted element. Stale after the element is unmounted.
    pub struct ElementId;
}

/// One mounted element.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Element {
    /// Stable dotted key, e.g. `services.card.2`.
    pub key: String,
    #[serde(skip)]
    pub parent: Option<ElementId>,
    /// Layout box in document coordinates (before any animation).
    pub bounds: Rect,
    pub style: Style,
    /// Extra vertical shift applied while the element is pinned (follows the scroll).
    pub pin_shift: f64,
    #[serde(skip)]
    seq: u64,
}

/// The set of mounted elements, addressed by [`ElementId`] or key.
#[derive(Debug, Default)]
pub struct Stage {
    elements: SlotMap<ElementId, Element>,
    by_key: HashMap<String, ElementId>,
    next_seq: u64,
    revision: u64,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount an element with a resting style. Re-mounting an existing key replaces its box
    /// and keeps its handle.
    pub fn mount(&mut self, key: impl Into<String>, parent: Option<ElementId>, bounds: Rect) -> ElementId {
        let key = key.into();
        if let Some(&id) = self.by_key.get(&key) {
            if let Some(el) = self.elements.get_mut(id) {
                el.bounds = bounds;
                el.parent = parent;
                return id;
            }
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        let id = self.elements.insert(Element {
            key: key.clone(),
            parent,
            bounds,
            style: Style::resting(),
            pin_shift: 0.0,
            seq,
        });
        self.by_key.insert(key, id);
        self.revision += 1;
        id
    }

    /// Remove an element. Its handle becomes stale.
    pub fn unmount(&mut self, id: ElementId) -> Option<Element> {
        let el = self.elements.remove(id)?;
        self.by_key.remove(&el.key);
        self.revision += 1;
        Some(el)
    }

    /// Remove `key` and every element nested under it (`key.*`).
    pub fn unmount_tree(&mut self, key: &str) -> usize {
        let prefix = format!("{key}.");
        let doomed: Vec<ElementId> = self
            .elements
            .iter()
            .filter(|(_, el)| el.key == key || el.key.starts_with(&prefix))
            .map(|(id, _)| id)
            .collect();
        for id in &doomed {
            self.unmount(*id);
        }
        doomed.len()
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(id)
    }

    pub fn find(&self, key: &str) -> Option<ElementId> {
        self.by_key.get(key).copied()
    }

    pub fn style(&self, id: ElementId) -> Option<Style> {
        self.elements.get(id).map(|el| el.style)
    }

    /// Elements whose key is `prefix.<anything>`, in mount order.
    pub fn find_prefixed(&self, prefix: &str) -> Vec<ElementId> {
        let prefix = format!("{prefix}.");
        let mut hits: Vec<(u64, ElementId)> = self
            .elements
            .iter()
            .filter(|(_, el)| el.key.starts_with(&prefix))
            .map(|(id, el)| (el.seq, id))
            .collect();
        hits.sort_by_key(|(seq, _)| *seq);
        hits.into_iter().map(|(_, id)| id).collect()
    }

    /// Apply a partial style. Returns `false` when the element is gone.
    pub fn apply(&mut self, id: ElementId, props: &StyleProps) -> bool {
        let Some(el) = self.elements.get_mut(id) else {
            return false;
        };
        if props.is_empty() {
            return true;
        }
        let before = el.style;
        el.style.apply(props);
        if el.style != before {
            self.revision += 1;
        }
        true
    }

    pub(crate) fn set_pin_shift(&mut self, id: ElementId, shift: f64) {
        if let Some(el) = self.elements.get_mut(id) {
            if el.pin_shift != shift {
                el.pin_shift = shift;
                self.revision += 1;
            }
        }
    }

    /// Where the element is drawn in document coordinates, including its translation and
    /// every ancestor's pin shift.
    pub fn visual_rect(&self, id: ElementId) -> Option<Rect> {
        let el = self.elements.get(id)?;
        let mut shift = el.pin_shift;
        let mut cursor = el.parent;
        while let Some(pid) = cursor {
            let Some(p) = self.elements.get(pid) else {
                break;
            };
            shift += p.pin_shift;
            cursor = p.parent;
        }
        let h = el.bounds.height();
        Some(el.bounds + Vec2::new(el.style.x, el.style.total_y(h) + shift))
    }

    /// Bottom edge of the lowest element (0 for an empty stage).
    pub fn document_height(&self) -> f64 {
        self.elements
            .values()
            .map(|el| el.bounds.y1)
            .fold(0.0, f64::max)
    }

    /// Monotonic counter bumped on every visible mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements in mount order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        let mut all: Vec<(ElementId, &Element)> = self.elements.iter().collect();
        all.sort_by_key(|(_, el)| el.seq);
        all.into_iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/stage.rs"]
mod tests;
