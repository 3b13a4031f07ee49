//! Font-size derivation from content density.
//!
//! `global_scale = clamp(sqrt(TARGET_CHARS / totalChars), 0.70, 1.0)`. The square root
//! damps shrinkage: 4x the content gives roughly half-size fonts, and the 0.70 floor
//! stops anything smaller than that.

use crate::layout::{COMPACT_CHAR_THRESHOLD, TARGET_CHARS};
use crate::models::resume::SectionFontSizes;

pub const MIN_SCALE: f64 = 0.70;
pub const MAX_SCALE: f64 = 1.0;

const BASE_NAME: f64 = 40.0;
const NAME_MIN: f64 = 16.0;
const NAME_MAX: f64 = 48.0;
/// Names longer than this lose `NAME_PENALTY_PER_CHAR` px per extra character.
const NAME_FREE_CHARS: f64 = 24.0;
const NAME_PENALTY_PER_CHAR: f64 = 0.25;

const SIDEBAR_PENALTY: f64 = 0.88;

const SIDEBAR_WIDTH_NORMAL_PX: u32 = 260;
const SIDEBAR_WIDTH_COMPACT_PX: u32 = 220;

/// Base size and clamp window for one section font.
#[derive(Debug, Clone, Copy)]
struct FontRule {
    base: f64,
    min: f64,
    max: f64,
}

const SECTION_TITLE: FontRule = FontRule { base: 14.0, min: 10.0, max: 18.0 };
const BODY: FontRule = FontRule { base: 12.0, min: 9.0, max: 14.0 };
const SIDEBAR_TITLE: FontRule = FontRule { base: 12.0, min: 9.0, max: 14.0 };
const SIDEBAR_BODY: FontRule = FontRule { base: 11.0, min: 8.0, max: 12.0 };
const DURATION: FontRule = FontRule { base: 10.0, min: 8.0, max: 12.0 };

impl FontRule {
    fn size(&self, scale: f64, penalty: f64) -> u32 {
        clamp_round(self.base * scale * penalty, self.min, self.max)
    }
}

fn clamp_round(value: f64, min: f64, max: f64) -> u32 {
    value.round().clamp(min, max) as u32
}

pub fn global_scale(total_chars: usize) -> f64 {
    let raw = TARGET_CHARS as f64 / total_chars.max(1) as f64;
    raw.sqrt().clamp(MIN_SCALE, MAX_SCALE)
}

/// Header name size in px, always within [16, 48].
pub fn name_font_size(name: &str, scale: f64) -> u32 {
    let excess = name.chars().count() as f64 - NAME_FREE_CHARS;
    let penalty = (excess * NAME_PENALTY_PER_CHAR).max(0.0);
    clamp_round(BASE_NAME * scale - penalty, NAME_MIN, NAME_MAX)
}

pub fn sidebar_penalty(total_chars: usize) -> f64 {
    if total_chars > COMPACT_CHAR_THRESHOLD {
        SIDEBAR_PENALTY
    } else {
        1.0
    }
}

pub fn section_font_sizes(total_chars: usize, scale: f64, name_size: u32) -> SectionFontSizes {
    let sidebar = sidebar_penalty(total_chars);
    SectionFontSizes {
        name: name_size,
        section_title: SECTION_TITLE.size(scale, 1.0),
        body: BODY.size(scale, 1.0),
        sidebar_title: SIDEBAR_TITLE.size(scale, sidebar),
        sidebar_body: SIDEBAR_BODY.size(scale, sidebar),
        duration: DURATION.size(scale, 1.0),
    }
}

pub fn sidebar_width_px(compact: bool) -> u32 {
    if compact {
        SIDEBAR_WIDTH_COMPACT_PX
    } else {
        SIDEBAR_WIDTH_NORMAL_PX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── global_scale ────────────────────────────────────────────────────────

    #[test]
    fn test_scale_clamped_to_one_for_small_content() {
        assert_eq!(global_scale(0), 1.0);
        assert_eq!(global_scale(10), 1.0);
        assert_eq!(global_scale(TARGET_CHARS), 1.0);
    }

    #[test]
    fn test_scale_is_square_root_damped() {
        let scale = global_scale(TARGET_CHARS * 2);
        assert!((scale - 0.5_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_scale_floor() {
        assert_eq!(global_scale(1_000_000), MIN_SCALE);
        assert_eq!(global_scale(usize::MAX), MIN_SCALE);
    }

    // ── name_font_size ──────────────────────────────────────────────────────

    #[test]
    fn test_short_name_full_size() {
        assert_eq!(name_font_size("Jane Smith", 1.0), 40);
    }

    #[test]
    fn test_long_name_penalty() {
        // 40 chars → 16 excess → 4px penalty
        let name = "A".repeat(40);
        assert_eq!(name_font_size(&name, 1.0), 36);
        // exactly 24 chars → no penalty
        assert_eq!(name_font_size(&"B".repeat(24), 1.0), 40);
    }

    #[test]
    fn test_name_floor() {
        let name = "C".repeat(500);
        assert_eq!(name_font_size(&name, MIN_SCALE), 16);
    }

    #[test]
    fn test_name_scaled() {
        assert_eq!(name_font_size("Jane Smith", MIN_SCALE), 28);
    }

    // ── section_font_sizes ──────────────────────────────────────────────────

    #[test]
    fn test_section_sizes_at_full_scale() {
        let sizes = section_font_sizes(100, 1.0, 40);
        assert_eq!(
            sizes,
            SectionFontSizes {
                name: 40,
                section_title: 14,
                body: 12,
                sidebar_title: 12,
                sidebar_body: 11,
                duration: 10,
            }
        );
    }

    #[test]
    fn test_sidebar_penalty_above_compact_threshold() {
        assert_eq!(sidebar_penalty(COMPACT_CHAR_THRESHOLD), 1.0);
        assert_eq!(sidebar_penalty(COMPACT_CHAR_THRESHOLD + 1), 0.88);

        let total = 4500;
        let sizes = section_font_sizes(total, global_scale(total), 36);
        assert_eq!(sizes.section_title, 13);
        assert_eq!(sizes.body, 11);
        assert_eq!(sizes.sidebar_title, 9);
        assert_eq!(sizes.sidebar_body, 9);
        assert_eq!(sizes.duration, 9);
    }

    #[test]
    fn test_section_sizes_clamped_at_floor() {
        let sizes = section_font_sizes(100_000, MIN_SCALE, 28);
        assert_eq!(sizes.section_title, 10);
        assert_eq!(sizes.body, 9);
        assert_eq!(sizes.sidebar_title, 9);
        assert_eq!(sizes.sidebar_body, 8);
        assert_eq!(sizes.duration, 8);
    }

    #[test]
    fn test_sidebar_width_by_mode() {
        assert_eq!(sidebar_width_px(false), 260);
        assert_eq!(sidebar_width_px(true), 220);
    }
}
