use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub fill: Option<Color>,
    pub border: Option<Border>,
}

impl DrawList {
    /// Records a rectangle with optional fill and border.
    #[inline]
    pub fn push_rect(&mut self, z: ZIndex, rect: Rect, fill: Option<Color>, border: Option<Border>) {
        self.push(z, DrawCmd::Rect(RectCmd { rect, fill, border }));
    }

    /// Records a solid rectangle.
    #[inline]
    pub fn push_solid_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push_rect(z, rect, Some(color), None);
    }
}
