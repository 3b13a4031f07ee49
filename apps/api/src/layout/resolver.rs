//! Layout resolution: caps, truncation and overflow redistribution.
//!
//! `fit_resume` never touches its input. It clones the record, trims the clone to
//! the caps of the current regime and attaches freshly computed `_layout` hints.
//!
//! # Overflow redistribution
//! Experience and education entries past their cap are not dropped. Each is condensed
//! into one line and appended after the existing achievements:
//! - experience: `"{role} — {company} • {bullet1} • {bullet2}"` (bullets capped)
//! - education:  `"{degree} — {school} {year}"`
//!
//! The union is trimmed, deduplicated by exact match, stripped of empty lines and
//! capped. Condensed lines are not truncated to `truncateCharPerLine`.

use std::collections::HashSet;

use tracing::debug;

use crate::layout::density::{char_len, estimate_density};
use crate::layout::fonts::{global_scale, name_font_size, section_font_sizes, sidebar_width_px};
use crate::layout::{is_compact, ItemCaps, MAX_CERTIFICATIONS};
use crate::models::resume::{EducationItem, ExperienceItem, LayoutHints, ResumeContent};

const ELLIPSIS: char = '…';

/// Returns a trimmed copy of `content` with `_layout` hints attached.
pub fn fit_resume(content: &ResumeContent) -> ResumeContent {
    let total_chars = estimate_density(content);
    let hints = resolve_hints(total_chars, &content.name);
    let caps = ItemCaps::for_mode(hints.compact_mode);

    let mut fitted = content.clone();
    let mut overflow = Vec::new();

    if fitted.experience.len() > caps.max_experience_items {
        overflow.extend(
            fitted
                .experience
                .drain(caps.max_experience_items..)
                .map(|item| condense_experience(&item, caps.max_bullets_per_exp)),
        );
    }
    if fitted.education.len() > caps.max_education_items {
        overflow.extend(
            fitted
                .education
                .drain(caps.max_education_items..)
                .map(|item| condense_education(&item)),
        );
    }
    let overflowed = overflow.len();

    for item in &mut fitted.experience {
        item.description = fit_bullets(
            &item.description,
            caps.max_bullets_per_exp,
            caps.truncate_char_per_line,
        );
    }

    fitted.achievements =
        merge_achievements(&fitted.achievements, &overflow, caps.max_achievements);
    fitted.skills = dedup_capped(&fitted.skills, caps.max_skills);
    fitted.soft_skills = dedup_capped(&fitted.soft_skills, caps.max_soft_skills);
    fitted.languages = dedup_capped(&fitted.languages, caps.max_languages);

    fitted.certifications.truncate(MAX_CERTIFICATIONS);
    for cert in &mut fitted.certifications {
        cert.name = cert.name.trim().to_string();
        cert.year = cert.year.trim().to_string();
    }

    debug!(
        total_chars,
        compact = hints.compact_mode,
        name_font_size = hints.name_font_size,
        overflowed,
        "Resolved resume layout"
    );

    fitted.layout = Some(hints);
    fitted
}

/// Derives the renderer hints from density and the display name alone.
pub fn resolve_hints(total_chars: usize, name: &str) -> LayoutHints {
    let compact_mode = is_compact(total_chars);
    let caps = ItemCaps::for_mode(compact_mode);
    let scale = global_scale(total_chars);
    let name_size = name_font_size(name, scale);

    LayoutHints {
        compact_mode,
        name_font_size: name_size,
        max_experience_items: caps.max_experience_items,
        max_bullets_per_exp: caps.max_bullets_per_exp,
        max_education_items: caps.max_education_items,
        truncate_char_per_line: caps.truncate_char_per_line,
        section_font_sizes: section_font_sizes(total_chars, scale, name_size),
        sidebar_width_px: sidebar_width_px(compact_mode),
    }
}

fn condense_experience(item: &ExperienceItem, max_bullets: usize) -> String {
    let mut line = format!("{} — {}", item.role, item.company);
    for bullet in item.description.iter().take(max_bullets) {
        line.push_str(" • ");
        line.push_str(bullet);
    }
    line
}

fn condense_education(item: &EducationItem) -> String {
    format!("{} — {} {}", item.degree, item.school, item.year)
}

fn fit_bullets(bullets: &[String], max_bullets: usize, limit: usize) -> Vec<String> {
    bullets
        .iter()
        .take(max_bullets)
        .map(|b| truncate_line(b, limit))
        .collect()
}

/// Cuts `text` to `limit - 1` chars, trims trailing whitespace and appends `…`.
/// Text at or under `limit` chars is returned unchanged.
pub(crate) fn truncate_line(text: &str, limit: usize) -> String {
    if char_len(text) <= limit {
        return text.to_string();
    }
    let head: String = text.chars().take(limit.saturating_sub(1)).collect();
    let mut out = head.trim_end().to_string();
    out.push(ELLIPSIS);
    out
}

fn merge_achievements(existing: &[String], overflow: &[String], cap: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    existing
        .iter()
        .chain(overflow.iter())
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(*s))
        .take(cap)
        .map(str::to_string)
        .collect()
}

/// Keeps the first occurrence of each exact string, then caps.
fn dedup_capped(items: &[String], cap: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .map(String::as_str)
        .filter(|s| seen.insert(*s))
        .take(cap)
        .map(str::to_string)
        .collect()
}
