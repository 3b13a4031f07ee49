// Single-page fit engine.
// Turns variable-length generated resume content into capped content plus the
// font sizes and caps a template needs to paint it on one page. Pure and synchronous:
// no I/O, no shared state, safe to call per request without coordination.
//
// The numeric thresholds below are calibrated against the client-side templates.
// Changing any of them changes rendered output and needs template-side validation.

pub mod density;
pub mod fonts;
pub mod resolver;

pub use resolver::fit_resume;

/// Content volume assumed to fit one page at full-size fonts.
pub const TARGET_CHARS: usize = 3600;
/// Above this, compact mode is on.
pub const MEDIUM_CHARS: usize = 2200;
/// Above this, sidebar fonts take an extra 0.88x penalty.
pub const COMPACT_CHAR_THRESHOLD: usize = 4200;

/// Certifications are capped regardless of mode.
pub const MAX_CERTIFICATIONS: usize = 20;

/// Item caps for one layout regime. Chosen by compact mode alone, never by font scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemCaps {
    pub max_experience_items: usize,
    pub max_bullets_per_exp: usize,
    pub max_education_items: usize,
    pub truncate_char_per_line: usize,
    pub max_achievements: usize,
    pub max_skills: usize,
    pub max_soft_skills: usize,
    pub max_languages: usize,
}

pub const NORMAL_CAPS: ItemCaps = ItemCaps {
    max_experience_items: 6,
    max_bullets_per_exp: 4,
    max_education_items: 6,
    truncate_char_per_line: 220,
    max_achievements: 12,
    max_skills: 30,
    max_soft_skills: 12,
    max_languages: 8,
};

pub const COMPACT_CAPS: ItemCaps = ItemCaps {
    max_experience_items: 3,
    max_bullets_per_exp: 2,
    max_education_items: 2,
    truncate_char_per_line: 120,
    max_achievements: 6,
    max_skills: 12,
    max_soft_skills: 6,
    max_languages: 3,
};

impl ItemCaps {
    pub fn for_mode(compact: bool) -> ItemCaps {
        if compact {
            COMPACT_CAPS
        } else {
            NORMAL_CAPS
        }
    }
}

/// Compact mode is strictly above `MEDIUM_CHARS`; exactly 2200 stays normal.
pub fn is_compact(total_chars: usize) -> bool {
    total_chars > MEDIUM_CHARS
}
