use std::collections::HashMap;

use fontdue::Metrics;
use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};

use crate::canvas::Canvas;
use crate::coords::{Rect, Vec2};
use crate::scene::shapes::text::TextCmd;
use crate::text::FontSystem;

/// Renderer for `DrawCmd::Text`.
///
/// Glyphs are rasterized on first use via fontdue and cached for the
/// renderer's lifetime. The cache key is `GlyphRasterConfig`, which
/// encodes font identity, glyph index, and pixel size — so the same
/// glyph at the same size across multiple text commands is rasterized
/// only once.
pub(crate) struct TextRenderer {
    glyph_cache: HashMap<GlyphRasterConfig, (Metrics, Vec<u8>)>,
    // Reusable fontdue layout.
    layout: Layout<()>,
}

impl TextRenderer {
    pub(crate) fn new() -> Self {
        Self {
            glyph_cache: HashMap::new(),
            layout: Layout::new(CoordinateSystem::PositiveYDown),
        }
    }

    pub(crate) fn render(
        &mut self,
        canvas: &mut Canvas,
        cmd: &TextCmd,
        clip: Option<Rect>,
        fonts: &FontSystem,
    ) {
        let Some(font) = fonts.get(cmd.font) else {
            log::warn!("text renderer: unknown FontId {:?}, skipping", cmd.font);
            return;
        };

        self.layout.reset(&LayoutSettings {
            x: cmd.origin.x,
            y: cmd.origin.y,
            max_width: cmd.max_width,
            ..LayoutSettings::default()
        });
        self.layout.append(&[font], &TextStyle::new(&cmd.text, cmd.size, 0));

        // Snapshot glyph positions into a plain Vec so the borrow on
        // `self.layout` ends before the cache takes `&mut self`.
        let glyph_snap: Vec<(GlyphRasterConfig, f32, f32)> = self
            .layout
            .glyphs()
            .iter()
            .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
            .map(|g| (g.key, g.x, g.y))
            .collect();

        for (key, gx, gy) in glyph_snap {
            let (metrics, bitmap) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| font.rasterize_config(key));

            let left = gx.floor() as i32;
            let top = gy.floor() as i32;

            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let px = left + col as i32;
                    let py = top + row as i32;

                    if let Some(clip) = clip {
                        if !clip.contains(Vec2::new(px as f32 + 0.5, py as f32 + 0.5)) {
                            continue;
                        }
                    }

                    let coverage = bitmap[row * metrics.width + col] as f32 / 255.0;
                    canvas.blend(px, py, cmd.color, coverage);
                }
            }
        }
    }
}
