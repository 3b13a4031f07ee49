//! Density estimation: a character-count proxy for how much text must fit on the page.
//!
//! This is a heuristic, not a token or pixel measure. Record fields (role, company,
//! duration, ...) are summed as-is; list-like fields are measured as if joined with a
//! single space, which approximates word-boundary loss between adjacent entries.
//! Contact details and volunteer durations are not counted.

use crate::models::resume::ResumeContent;

/// Returns `totalChars` for the resume. Lengths are Unicode scalar values.
pub fn estimate_density(content: &ResumeContent) -> usize {
    let header = char_len(&content.name) + char_len(&content.title) + char_len(&content.summary);

    let experience: usize = content
        .experience
        .iter()
        .map(|e| {
            char_len(&e.role)
                + char_len(&e.company)
                + char_len(&e.duration)
                + joined_len(&e.description)
        })
        .sum();

    let education: usize = content
        .education
        .iter()
        .map(|e| char_len(&e.degree) + char_len(&e.school) + char_len(&e.year))
        .sum();

    let lists = joined_len(&content.skills)
        + joined_len(&content.soft_skills)
        + joined_len(&content.achievements)
        + joined_len(&content.languages);

    let certifications: usize = content
        .certifications
        .iter()
        .map(|c| char_len(&c.name) + char_len(&c.year))
        .sum();

    let volunteer: usize = content
        .volunteer
        .iter()
        .map(|v| char_len(&v.role) + char_len(&v.org) + joined_len(&v.description))
        .sum();

    header + experience + education + lists + certifications + volunteer
}

pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Length of `items.join(" ")` without allocating it.
pub(crate) fn joined_len(items: &[String]) -> usize {
    if items.is_empty() {
        return 0;
    }
    items.iter().map(|s| char_len(s)).sum::<usize>() + items.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{
        CertificationItem, Contact, EducationItem, ExperienceItem, VolunteerItem,
    };

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_resume_is_zero() {
        assert_eq!(estimate_density(&ResumeContent::default()), 0);
    }

    #[test]
    fn test_name_only() {
        let content = ResumeContent {
            name: "Jane Smith".to_string(),
            ..Default::default()
        };
        assert_eq!(estimate_density(&content), 10);
    }

    #[test]
    fn test_joined_len_counts_separators() {
        assert_eq!(joined_len(&[]), 0);
        assert_eq!(joined_len(&strings(&["abc"])), 3);
        assert_eq!(joined_len(&strings(&["abc", "de", "f"])), 8);
        assert_eq!(joined_len(&strings(&["", ""])), 1);
    }

    #[test]
    fn test_experience_fields_summed_without_separators() {
        let content = ResumeContent {
            experience: vec![ExperienceItem {
                role: "Dev".to_string(),
                company: "Acme".to_string(),
                duration: "2020".to_string(),
                description: strings(&["Built things", "Shipped"]),
            }],
            ..Default::default()
        };
        // 3 + 4 + 4 + (12 + 1 + 7)
        assert_eq!(estimate_density(&content), 31);
    }

    #[test]
    fn test_every_section_contributes() {
        let content = ResumeContent {
            name: "A".to_string(),
            title: "BB".to_string(),
            summary: "CCC".to_string(),
            education: vec![EducationItem {
                degree: "BSc".to_string(),
                school: "MIT".to_string(),
                year: "2019".to_string(),
            }],
            certifications: vec![CertificationItem {
                name: "CKA".to_string(),
                year: "2021".to_string(),
            }],
            achievements: strings(&["won", "lost"]),
            skills: strings(&["Rust", "Go"]),
            soft_skills: strings(&["Lead"]),
            languages: strings(&["EN", "FR"]),
            ..Default::default()
        };
        let expected = 1 + 2 + 3 + (3 + 3 + 4) + (3 + 4) + 8 + 7 + 4 + 5;
        assert_eq!(estimate_density(&content), expected);
    }

    #[test]
    fn test_contact_and_volunteer_duration_not_counted() {
        let content = ResumeContent {
            contact: Contact {
                phone: "+1 555 0100".to_string(),
                email: "a@b.c".to_string(),
                address: "Somewhere".to_string(),
                linkedin: "in/someone".to_string(),
            },
            volunteer: vec![VolunteerItem {
                role: "Tutor".to_string(),
                org: "Club".to_string(),
                duration: "2015 - 2018".to_string(),
                description: strings(&["Taught"]),
            }],
            ..Default::default()
        };
        assert_eq!(estimate_density(&content), 5 + 4 + 6);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let content = ResumeContent {
            name: "Zoë Ångström".to_string(),
            ..Default::default()
        };
        assert_eq!(estimate_density(&content), 12);
    }
}
