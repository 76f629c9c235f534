//! Reader preferences: font scale and high contrast.

pub const MIN_FONT_SIZE: u32 = 75;
pub const MAX_FONT_SIZE: u32 = 150;
pub const DEFAULT_FONT_SIZE: u32 = 100;
pub const FONT_STEP: u32 = 10;

/// Base font size in pixels at 100%.
const BASE_FONT_PX: f64 = 16.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Accessibility {
    /// Font scale in percent.
    pub font_size: u32,
    pub high_contrast: bool,
}

impl Default for Accessibility {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            high_contrast: false,
        }
    }
}

impl Accessibility {
    pub fn increase_font(&mut self) {
        self.font_size = clamp_font_size(self.font_size, self.font_size + FONT_STEP);
    }

    pub fn decrease_font(&mut self) {
        self.font_size =
            clamp_font_size(self.font_size, self.font_size.saturating_sub(FONT_STEP));
    }

    /// Root font size in pixels for the current scale.
    pub fn font_px(&self) -> f64 {
        f64::from(self.font_size) / 100.0 * BASE_FONT_PX
    }
}

/// Clamps `target` to the allowed range, stopping at 100% when moving across it.
///
/// Starting from 95% and stepping up lands on 100% rather than 105%, so the default
/// scale is always reachable again.
pub fn clamp_font_size(current: u32, target: u32) -> u32 {
    let target = target.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);

    if (current < DEFAULT_FONT_SIZE && target > DEFAULT_FONT_SIZE)
        || (current > DEFAULT_FONT_SIZE && target < DEFAULT_FONT_SIZE)
    {
        DEFAULT_FONT_SIZE
    } else {
        target
    }
}

/// Parses a font size read back from storage.
pub fn parse_font_size(saved: &str) -> Option<u32> {
    saved
        .trim()
        .parse::<u32>()
        .ok()
        .map(|size| size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE))
}
