use serde::{Deserialize, Serialize};

/// Raw form fields as typed by the user. Every field is optional; an empty
/// string means "use the canned fallback" at build time. One live instance
/// per session, mutated field-by-field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormInput {
    pub name: String,
    pub profession: String,
    pub bio: String,
    pub skills: String,
    pub projects: String,
    pub contact: String,
}

/// Addressable form fields, for the single field-edit entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Profession,
    Bio,
    Skills,
    Projects,
    Contact,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Profession,
        Field::Bio,
        Field::Skills,
        Field::Projects,
        Field::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Profession => "Profession",
            Field::Bio => "Bio",
            Field::Skills => "Skills (comma-separated)",
            Field::Projects => "Projects (blank-line separated, first line is the title)",
            Field::Contact => "Contact information",
        }
    }

    /// Placeholder hint shown next to an empty field.
    pub fn hint(&self) -> &'static str {
        match self {
            Field::Name => "e.g., Alex Rivera",
            Field::Profession => "e.g., Full-Stack Developer & AI Engineer",
            Field::Bio => "Tell us about yourself and your expertise...",
            Field::Skills => "e.g., React, Next.js, AI Integration, TypeScript",
            Field::Projects => "e.g., Project 1 - Description of your amazing project",
            Field::Contact => "e.g., email@example.com | @username | github.com/username",
        }
    }
}

impl FormInput {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Profession => &self.profession,
            Field::Bio => &self.bio,
            Field::Skills => &self.skills,
            Field::Projects => &self.projects,
            Field::Contact => &self.contact,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Profession => self.profession = value,
            Field::Bio => self.bio = value,
            Field::Skills => self.skills = value,
            Field::Projects => self.projects = value,
            Field::Contact => self.contact = value,
        }
    }
}

/// A single portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
}

/// A work-history entry. Always canned — there is no form field for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub period: String,
    pub description: String,
}

/// An education entry. Always canned, like [`ExperienceEntry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub year: String,
}

/// Normalized, immutable portfolio snapshot produced by the builder.
///
/// Fully determined by a `FormInput` plus the canned fallback tables:
/// building the same input twice yields an equal `Portfolio`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub name: String,
    pub profession: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub contact: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_input_field_roundtrip() {
        let mut input = FormInput::default();
        for field in Field::ALL {
            assert_eq!(input.get(field), "", "fields start empty");
            input.set(field, format!("value for {}", field.label()));
        }
        for field in Field::ALL {
            assert_eq!(input.get(field), format!("value for {}", field.label()));
        }
    }

    #[test]
    fn test_portfolio_serializes_and_deserializes() {
        let portfolio = Portfolio {
            name: "Ada Lovelace".to_string(),
            profession: "Analyst".to_string(),
            bio: "First programmer.".to_string(),
            skills: vec!["Mathematics".to_string(), "Notes".to_string()],
            projects: vec![Project {
                title: "Analytical Engine".to_string(),
                description: "Programs for Babbage's machine".to_string(),
            }],
            experience: vec![],
            education: vec![],
            contact: "ada@example.com".to_string(),
        };

        let json = serde_json::to_string(&portfolio).unwrap();
        let recovered: Portfolio = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, portfolio);
    }
}
