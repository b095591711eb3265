//! Portfolio Builder — the pure transform from raw form text to a [`Portfolio`].
//!
//! Total over all inputs: every field has a deterministic fallback, so the
//! build never fails — empty strings, whitespace-only strings, and irregular
//! delimiters all produce a well-formed record.

use crate::generation::defaults;
use crate::models::{FormInput, Portfolio, Project};

/// Builds an immutable portfolio snapshot from the raw form fields.
///
/// Scalar fields fall back iff the raw string is empty; a whitespace-only
/// string counts as present and is carried through untouched. List fields
/// fall back wholesale; a non-empty field is parsed, never partially
/// recovered.
pub fn build(input: &FormInput) -> Portfolio {
    let skills = if input.skills.is_empty() {
        defaults::default_skills()
    } else {
        parse_skills(&input.skills)
    };

    let projects = if input.projects.is_empty() {
        defaults::default_projects()
    } else {
        parse_projects(&input.projects)
    };

    Portfolio {
        name: or_default(&input.name, defaults::DEFAULT_NAME),
        profession: or_default(&input.profession, defaults::DEFAULT_PROFESSION),
        bio: or_default(&input.bio, defaults::DEFAULT_BIO),
        skills,
        projects,
        experience: defaults::fixed_experience(),
        education: defaults::fixed_education(),
        contact: or_default(&input.contact, defaults::DEFAULT_CONTACT),
    }
}

fn or_default(raw: &str, fallback: &str) -> String {
    if raw.is_empty() {
        fallback.to_string()
    } else {
        raw.to_string()
    }
}

/// Splits a skills string on `,`, trimming each piece.
///
/// Order is preserved, and so are empty pieces (`"a,,b"` yields three
/// entries) — the split is not a validator.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_string()).collect()
}

/// Splits a projects string into blocks on blank lines.
///
/// Within a block, the first line is the title and the remaining lines are
/// joined with a single space to form the description; a block with no
/// description lines gets [`defaults::PROJECT_FILLER_DESCRIPTION`]. Blocks
/// that are empty after trimming (e.g. from a trailing blank line) are
/// dropped.
pub fn parse_projects(raw: &str) -> Vec<Project> {
    raw.split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .map(|block| {
            let mut lines = block.split('\n');
            let title = lines.next().unwrap_or_default().to_string();
            let description = lines.collect::<Vec<_>>().join(" ");
            let description = if description.is_empty() {
                defaults::PROJECT_FILLER_DESCRIPTION.to_string()
            } else {
                description
            };
            Project { title, description }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_full_default_portfolio() {
        let portfolio = build(&FormInput::default());

        assert_eq!(portfolio.name, defaults::DEFAULT_NAME);
        assert_eq!(portfolio.profession, defaults::DEFAULT_PROFESSION);
        assert_eq!(portfolio.bio, defaults::DEFAULT_BIO);
        assert_eq!(portfolio.contact, defaults::DEFAULT_CONTACT);
        assert_eq!(portfolio.skills.len(), 5, "fallback skill list");
        assert_eq!(portfolio.projects.len(), 3, "fallback project list");
        assert_eq!(portfolio.experience.len(), 2);
        assert_eq!(portfolio.education.len(), 2);
    }

    #[test]
    fn test_skills_split_trims_and_preserves_order() {
        let input = FormInput {
            skills: "React, Node.js ,  Go".to_string(),
            ..FormInput::default()
        };
        assert_eq!(build(&input).skills, vec!["React", "Node.js", "Go"]);
    }

    #[test]
    fn test_skills_split_keeps_empty_pieces() {
        assert_eq!(parse_skills("a,,b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_whitespace_only_scalar_counts_as_present() {
        let input = FormInput {
            name: "   ".to_string(),
            ..FormInput::default()
        };
        assert_eq!(build(&input).name, "   ", "only the empty string falls back");
    }

    #[test]
    fn test_project_block_without_description_gets_filler() {
        let input = FormInput {
            projects: "Title1\nDesc1\n\nTitle2".to_string(),
            ..FormInput::default()
        };
        let projects = build(&input).projects;

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].title, "Title1");
        assert_eq!(projects[0].description, "Desc1");
        assert_eq!(projects[1].title, "Title2");
        assert_eq!(projects[1].description, defaults::PROJECT_FILLER_DESCRIPTION);
    }

    #[test]
    fn test_project_description_lines_joined_with_spaces() {
        let projects = parse_projects("Engine\nrow one\nrow two");
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "Engine");
        assert_eq!(projects[0].description, "row one row two");
    }

    #[test]
    fn test_trailing_blank_line_block_is_dropped() {
        let projects = parse_projects("Title1\nDesc1\n\n");
        assert_eq!(projects.len(), 1, "no empty-titled trailing project");
        assert_eq!(projects[0].title, "Title1");
    }

    #[test]
    fn test_build_is_deterministic() {
        let input = FormInput {
            name: "Ada".to_string(),
            skills: "a, b".to_string(),
            projects: "P\nd".to_string(),
            ..FormInput::default()
        };
        assert_eq!(build(&input), build(&input));
    }
}
