use crate::coords::Rect;

use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command + clip rect.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Scissor rect in pixels. `None` = no clipping (draw everywhere).
    pub clip_rect: Option<Rect>,
}

/// Recorded draw stream for one screen.
///
/// # Clipping
///
/// Use [`push_clip`](DrawList::push_clip) / [`pop_clip`](DrawList::pop_clip)
/// to scope draw commands to a scissor rect. Clips are intersected with
/// the current parent, so nested regions behave correctly.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    /// Stack of active scissor rects. The top is the current effective
    /// clip, already intersected with all parents.
    clip_stack: Vec<Rect>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Pushes a draw command with the given z-index.
    ///
    /// The item inherits the current clip rect from the clip stack.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            clip_rect: self.clip_stack.last().copied(),
        });
    }

    /// Begins a scissor region. All draw commands pushed until
    /// [`pop_clip`](DrawList::pop_clip) are clipped to `rect`
    /// (intersected with any parent clip rect).
    ///
    /// Calls must be balanced with `pop_clip`.
    pub fn push_clip(&mut self, rect: Rect) {
        let effective = match self.clip_stack.last() {
            None => rect,
            // If the child doesn't overlap its parent, record a zero-area
            // rect so the renderers skip those draw calls entirely.
            Some(&parent) => parent.intersect(rect).unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0)),
        };
        self.clip_stack.push(effective);
    }

    /// Ends the most recent scissor region started by
    /// [`push_clip`](DrawList::push_clip).
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_clip`.
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }

    /// Iterates items in paint order (z ascending, then insertion order).
    ///
    /// A screen is recorded once and rasterized once, so the sort runs
    /// per call rather than being cached.
    pub fn iter_in_paint_order(&self) -> impl Iterator<Item = &DrawItem> {
        let mut indices: Vec<usize> = (0..self.items.len()).collect();
        indices.sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        let items = &self.items;
        indices.into_iter().map(move |i| &items[i])
    }
}
