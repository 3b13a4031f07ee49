use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::lenient;

// ────────────────────────────────────────────────────────────────────────────
// Resume content (the payload produced by generation and consumed by layout)
// ────────────────────────────────────────────────────────────────────────────

/// Structured resume content as produced by the generation pipeline.
///
/// Every field is optional on the wire and decodes to its empty value, so a
/// partially populated LLM response still yields a usable record. The `_layout`
/// hints are attached by `layout::fit_resume` and ignored on input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeContent {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::record")]
    pub contact: Contact,
    #[serde(default, deserialize_with = "lenient::string")]
    pub summary: String,
    #[serde(default, deserialize_with = "lenient::record_list")]
    pub experience: Vec<ExperienceItem>,
    #[serde(default, deserialize_with = "lenient::record_list")]
    pub education: Vec<EducationItem>,
    #[serde(default, deserialize_with = "lenient::record_list")]
    pub certifications: Vec<CertificationItem>,
    /// Also the destination for condensed experience/education overflow.
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub achievements: Vec<String>,
    #[serde(default, deserialize_with = "lenient::record_list")]
    pub volunteer: Vec<VolunteerItem>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub soft_skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub languages: Vec<String>,
    #[serde(
        rename = "_layout",
        default,
        deserialize_with = "lenient::optional_record",
        skip_serializing_if = "Option::is_none"
    )]
    pub layout: Option<LayoutHints>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, deserialize_with = "lenient::string")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub linkedin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceItem {
    #[serde(default, deserialize_with = "lenient::string")]
    pub role: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub duration: String,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationItem {
    #[serde(default, deserialize_with = "lenient::string")]
    pub degree: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub school: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificationItem {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub year: String,
}

/// Volunteer work counts toward density but is never capped or condensed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolunteerItem {
    #[serde(default, deserialize_with = "lenient::string")]
    pub role: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub org: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub duration: String,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub description: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Layout hints (renderer-facing, attached as `_layout`)
// ────────────────────────────────────────────────────────────────────────────

/// Font sizes and caps a template must apply verbatim. Sizes are in CSS px.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutHints {
    pub compact_mode: bool,
    pub name_font_size: u32,
    pub max_experience_items: usize,
    pub max_bullets_per_exp: usize,
    pub max_education_items: usize,
    pub truncate_char_per_line: usize,
    pub section_font_sizes: SectionFontSizes,
    pub sidebar_width_px: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionFontSizes {
    pub name: u32,
    pub section_title: u32,
    pub body: u32,
    pub sidebar_title: u32,
    pub sidebar_body: u32,
    pub duration: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Persistence
// ────────────────────────────────────────────────────────────────────────────

/// The visual skin a saved resume is rendered with. Rendering itself happens client-side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeTemplate {
    #[default]
    Classic,
    Modern,
    Minimal,
}

impl ResumeTemplate {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeTemplate::Classic => "classic",
            ResumeTemplate::Modern => "modern",
            ResumeTemplate::Minimal => "minimal",
        }
    }
}

impl fmt::Display for ResumeTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResumeTemplate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(ResumeTemplate::Classic),
            "modern" => Ok(ResumeTemplate::Modern),
            "minimal" => Ok(ResumeTemplate::Minimal),
            other => Err(format!(
                "unknown template '{other}' (expected classic, modern or minimal)"
            )),
        }
    }
}

/// A saved resume document. `data` is the annotated `ResumeContent` stored verbatim,
/// `_layout` included; it is never re-fitted on read.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SavedResumeRow {
    pub id: Uuid,
    pub user_id: String,
    pub title: String,
    pub template: String,
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
