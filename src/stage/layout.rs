use crate::foundation::core::{Rect, Viewport};
use crate::foundation::error::{ScrollreelError, ScrollreelResult};
use crate::stage::{ElementId, Stage};

/// Height hint for a laid-out node.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Extent {
    /// Fixed pixels.
    Px(f64),
    /// Percent of the viewport height.
    Vh(f64),
    /// Sized by its flowing children.
    Auto,
}

/// Index of a node inside its [`Markup`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeRef(usize);

#[derive(Clone, Debug)]
struct Node {
    key: String,
    parent: Option<usize>,
    height: Extent,
    overlay: bool,
    columns: usize,
    gap: f64,
}

/// The element tree a section renders: a root box plus nested nodes.
///
/// Keys are dotted paths rooted at the section key (`projects.card.1.image`).
#[derive(Clone, Debug)]
pub struct Markup {
    key: String,
    padding: f64,
    gap: f64,
    min_height: Extent,
    pin_spacing: Option<Extent>,
    nodes: Vec<Node>,
}

impl Markup {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            padding: 0.0,
            gap: 0.0,
            min_height: Extent::Px(0.0),
            pin_spacing: None,
            nodes: Vec::new(),
        }
    }

    /// Vertical padding above and below the section content.
    pub fn padding(mut self, px: f64) -> Self {
        self.padding = px;
        self
    }

    /// Gap between top-level blocks.
    pub fn gap(mut self, px: f64) -> Self {
        self.gap = px;
        self
    }

    pub fn min_height(mut self, extent: Extent) -> Self {
        self.min_height = extent;
        self
    }

    /// Scroll distance reserved after the section while it is pinned.
    pub fn pin_spacing(mut self, extent: Extent) -> Self {
        self.pin_spacing = Some(extent);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Keys of every node, in declaration order (root excluded).
    pub fn element_keys(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.key.as_str())
    }

    /// A flowing block at the top level of the section.
    pub fn block(&mut self, name: &str, height: Extent) -> NodeRef {
        self.push(None, name, height, false, 1, 0.0)
    }

    /// A flowing child of `parent`.
    pub fn child(&mut self, parent: NodeRef, name: &str, height: Extent) -> NodeRef {
        self.push(Some(parent.0), name, height, false, 1, 0.0)
    }

    /// A container laying its children out in `columns` equal columns.
    pub fn grid(&mut self, parent: Option<NodeRef>, name: &str, columns: usize, gap: f64) -> NodeRef {
        self.push(parent.map(|p| p.0), name, Extent::Auto, false, columns, gap)
    }

    /// A node covering its parent's box (or the section box) without taking flow space.
    pub fn overlay(&mut self, parent: Option<NodeRef>, name: &str) -> NodeRef {
        self.push(parent.map(|p| p.0), name, Extent::Auto, true, 1, 0.0)
    }

    fn push(
        &mut self,
        parent: Option<usize>,
        name: &str,
        height: Extent,
        overlay: bool,
        columns: usize,
        gap: f64,
    ) -> NodeRef {
        let base = match parent {
            Some(p) => self.nodes[p].key.as_str(),
            None => self.key.as_str(),
        };
        let key = format!("{base}.{name}");
        self.nodes.push(Node {
            key,
            parent,
            height,
            overlay,
            columns: columns.max(1),
            gap,
        });
        NodeRef(self.nodes.len() - 1)
    }

    fn children(&self, parent: Option<usize>) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, n)| n.parent == parent)
            .map(|(i, _)| i)
    }
}

/// A section placed in document space.
#[derive(Clone, Debug)]
pub struct PlacedSection {
    pub key: String,
    pub rect: Rect,
    /// Node boxes, parallel to the markup's nodes.
    pub nodes: Vec<(String, Option<usize>, Rect)>,
    /// Document offset where the next section starts (after pin spacing).
    pub next_top: f64,
}

/// Mounted handles for one section.
#[derive(Clone, Debug)]
pub struct MountedSection {
    pub key: String,
    pub root: ElementId,
    /// Handles parallel to the markup's nodes.
    pub elements: Vec<ElementId>,
    keys: Vec<String>,
    pub next_top: f64,
}

impl MountedSection {
    /// The node `<section>.<name>`.
    pub fn find(&self, name: &str) -> Option<ElementId> {
        let full = format!("{}.{name}", self.key);
        self.keys
            .iter()
            .position(|k| *k == full)
            .map(|i| self.elements[i])
    }

    /// Numbered nodes `<section>.<name>.<n>`, in declaration order.
    pub fn items(&self, name: &str) -> Vec<ElementId> {
        let prefix = format!("{}.{name}.", self.key);
        self.keys
            .iter()
            .zip(&self.elements)
            .filter(|(k, _)| {
                k.strip_prefix(&prefix)
                    .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
            })
            .map(|(_, id)| *id)
            .collect()
    }
}

/// Deterministic top-to-bottom block layout, full viewport width.
#[derive(Clone, Copy, Debug)]
pub struct FlowLayout {
    viewport: Viewport,
}

impl FlowLayout {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    fn resolve(&self, extent: Extent) -> f64 {
        match extent {
            Extent::Px(px) => px,
            Extent::Vh(pct) => self.viewport.vh(pct),
            Extent::Auto => 0.0,
        }
    }

    fn check(&self, markup: &Markup) -> ScrollreelResult<()> {
        let bad = |e: Extent| match e {
            Extent::Px(v) | Extent::Vh(v) => !v.is_finite() || v < 0.0,
            Extent::Auto => false,
        };
        if bad(markup.min_height) || markup.pin_spacing.is_some_and(bad) {
            return Err(ScrollreelError::layout(format!(
                "section '{}' has a negative or non-finite extent",
                markup.key
            )));
        }
        if let Some(n) = markup.nodes.iter().find(|n| bad(n.height)) {
            return Err(ScrollreelError::layout(format!(
                "node '{}' has a negative or non-finite height",
                n.key
            )));
        }
        Ok(())
    }

    /// Place `markup` with its top edge at document offset `top`.
    pub fn place(&self, markup: &Markup, top: f64) -> ScrollreelResult<PlacedSection> {
        self.check(markup)?;
        let mut rects = vec![Rect::ZERO; markup.nodes.len()];
        let width = self.viewport.width;
        let content = self.flow(
            markup,
            None,
            0.0,
            width,
            top + markup.padding,
            1,
            markup.gap,
            &mut rects,
        );
        let height = (content + 2.0 * markup.padding).max(self.resolve(markup.min_height));
        let rect = Rect::new(0.0, top, width, top + height);
        self.overlays(markup, None, rect, &mut rects);

        let spacing = markup.pin_spacing.map(|e| self.resolve(e)).unwrap_or(0.0);
        Ok(PlacedSection {
            key: markup.key.clone(),
            rect,
            nodes: markup
                .nodes
                .iter()
                .zip(rects)
                .map(|(n, r)| (n.key.clone(), n.parent, r))
                .collect(),
            next_top: rect.y1 + spacing,
        })
    }

    /// Place and mount `markup` into `stage`.
    pub fn mount(&self, stage: &mut Stage, markup: &Markup, top: f64) -> ScrollreelResult<MountedSection> {
        let placed = self.place(markup, top)?;
        let root = stage.mount(placed.key.clone(), None, placed.rect);
        let mut elements: Vec<ElementId> = Vec::with_capacity(placed.nodes.len());
        let mut keys = Vec::with_capacity(placed.nodes.len());
        for (key, parent, rect) in placed.nodes {
            let parent_id = match parent {
                Some(p) => elements[p],
                None => root,
            };
            elements.push(stage.mount(key.clone(), Some(parent_id), rect));
            keys.push(key);
        }
        Ok(MountedSection {
            key: placed.key,
            root,
            elements,
            keys,
            next_top: placed.next_top,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn flow(
        &self,
        m: &Markup,
        parent: Option<usize>,
        x0: f64,
        width: f64,
        top: f64,
        columns: usize,
        gap: f64,
        rects: &mut [Rect],
    ) -> f64 {
        let flowing: Vec<usize> = m.children(parent).filter(|&i| !m.nodes[i].overlay).collect();
        if flowing.is_empty() {
            return 0.0;
        }
        let cols = columns.max(1);
        let col_w = ((width - gap * (cols - 1) as f64) / cols as f64).max(0.0);
        let mut y = top;
        for row in flowing.chunks(cols) {
            let mut row_h = 0.0f64;
            for (c, &i) in row.iter().enumerate() {
                let node = &m.nodes[i];
                let x = x0 + c as f64 * (col_w + gap);
                let inner = self.flow(m, Some(i), x, col_w, y, node.columns, node.gap, rects);
                let h = match node.height {
                    Extent::Auto => inner,
                    e => self.resolve(e),
                };
                rects[i] = Rect::new(x, y, x + col_w, y + h);
                self.overlays(m, Some(i), rects[i], rects);
                row_h = row_h.max(h);
            }
            y += row_h + gap;
        }
        y - gap - top
    }

    fn overlays(&self, m: &Markup, parent: Option<usize>, rect: Rect, rects: &mut [Rect]) {
        let covering: Vec<usize> = m.children(parent).filter(|&i| m.nodes[i].overlay).collect();
        for i in covering {
            rects[i] = rect;
            let node = &m.nodes[i];
            self.flow(m, Some(i), rect.x0, rect.width(), rect.y0, node.columns, node.gap, rects);
            self.overlays(m, Some(i), rect, rects);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/layout.rs"]
mod tests;
