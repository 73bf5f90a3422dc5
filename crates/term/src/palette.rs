//! Color palettes, one row per difficulty.
//!
//! Column `c` is the color for cells with color index `c` (catalog order
//! I, J, L, O, S, T, Z). The palette changes every level so the player can
//! see the difficulty going up.

use crate::fb::Rgb;
use crate::types::MAX_DIFFICULTY;

pub const PALETTES: [[Rgb; 7]; MAX_DIFFICULTY as usize + 1] = [
    [
        Rgb::new(80, 220, 220),
        Rgb::new(80, 120, 220),
        Rgb::new(255, 165, 0),
        Rgb::new(240, 220, 80),
        Rgb::new(100, 220, 120),
        Rgb::new(200, 120, 220),
        Rgb::new(220, 80, 80),
    ],
    [
        Rgb::new(120, 200, 255),
        Rgb::new(60, 90, 200),
        Rgb::new(240, 140, 60),
        Rgb::new(250, 240, 120),
        Rgb::new(60, 200, 160),
        Rgb::new(170, 90, 230),
        Rgb::new(240, 90, 120),
    ],
    [
        Rgb::new(90, 240, 180),
        Rgb::new(110, 110, 240),
        Rgb::new(250, 180, 90),
        Rgb::new(230, 230, 160),
        Rgb::new(150, 240, 90),
        Rgb::new(230, 100, 200),
        Rgb::new(250, 110, 70),
    ],
    [
        Rgb::new(255, 120, 180),
        Rgb::new(140, 80, 230),
        Rgb::new(255, 200, 40),
        Rgb::new(200, 240, 240),
        Rgb::new(60, 230, 230),
        Rgb::new(250, 150, 100),
        Rgb::new(150, 220, 70),
    ],
    [
        Rgb::new(255, 90, 90),
        Rgb::new(255, 170, 60),
        Rgb::new(250, 240, 90),
        Rgb::new(120, 230, 120),
        Rgb::new(80, 170, 255),
        Rgb::new(140, 110, 255),
        Rgb::new(230, 110, 230),
    ],
    [
        Rgb::new(180, 180, 255),
        Rgb::new(120, 220, 255),
        Rgb::new(255, 220, 180),
        Rgb::new(255, 160, 200),
        Rgb::new(200, 255, 180),
        Rgb::new(255, 255, 140),
        Rgb::new(180, 140, 255),
    ],
    [
        Rgb::new(70, 200, 140),
        Rgb::new(40, 140, 110),
        Rgb::new(190, 230, 90),
        Rgb::new(240, 250, 170),
        Rgb::new(110, 180, 70),
        Rgb::new(160, 220, 200),
        Rgb::new(90, 120, 60),
    ],
    [
        Rgb::new(250, 130, 40),
        Rgb::new(200, 70, 40),
        Rgb::new(255, 200, 110),
        Rgb::new(255, 240, 200),
        Rgb::new(230, 160, 80),
        Rgb::new(180, 100, 60),
        Rgb::new(255, 90, 60),
    ],
    [
        Rgb::new(200, 200, 210),
        Rgb::new(130, 140, 160),
        Rgb::new(230, 210, 170),
        Rgb::new(250, 250, 250),
        Rgb::new(170, 190, 200),
        Rgb::new(150, 150, 180),
        Rgb::new(210, 170, 170),
    ],
    [
        Rgb::new(255, 60, 60),
        Rgb::new(255, 255, 255),
        Rgb::new(255, 60, 60),
        Rgb::new(255, 255, 255),
        Rgb::new(255, 60, 60),
        Rgb::new(255, 255, 255),
        Rgb::new(255, 60, 60),
    ],
];

/// Color for `color` index at `difficulty`. Out-of-range inputs clamp.
pub fn color_for(difficulty: u8, color: u8) -> Rgb {
    let row = &PALETTES[(difficulty as usize).min(PALETTES.len() - 1)];
    row[(color as usize).min(row.len() - 1)]
}
