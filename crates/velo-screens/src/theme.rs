//! Palette, canvas geometry, and type scale shared by all screens.

use velo_engine::paint::Color;

/// Output canvas size: a 1080×1920 phone frame.
pub const WIDTH: u32 = 1080;
pub const HEIGHT: u32 = 1920;

pub const BG: Color = Color::new(20, 21, 38); // #141526
pub const CARD_BG: Color = Color::new(30, 31, 51); // #1E1F33
pub const FOOTER_BG: Color = Color::new(15, 16, 30); // #0F101E
pub const TRACK: Color = Color::new(22, 32, 50); // #162032

pub const CYAN: Color = Color::new(0, 209, 209); // #00D1D1
pub const CYAN_BRIGHT: Color = Color::new(0, 229, 255); // #00E5FF
pub const PURPLE: Color = Color::new(141, 52, 230); // #8D34E6
pub const PURPLE_BRIGHT: Color = Color::new(191, 90, 242); // #BF5AF2
pub const GREEN_PING: Color = Color::new(192, 235, 117); // #C0EB75
pub const ORANGE: Color = Color::new(255, 165, 0);

pub const TEXT_WHITE: Color = Color::new(255, 255, 255);
pub const TEXT_GREY: Color = Color::new(158, 158, 158);

pub const FONT_HUGE: f32 = 140.0;
pub const FONT_TITLE: f32 = 60.0;
pub const FONT_LARGE: f32 = 50.0;
pub const FONT_MED: f32 = 35.0;
pub const FONT_SMALL: f32 = 28.0;
