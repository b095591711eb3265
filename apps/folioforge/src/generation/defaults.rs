//! Canned content — fallback tables used when form fields are blank, the
//! fixed experience/education entries, and the auto-fill record.
//!
//! The builder substitutes these wholesale: a blank skills field gets the
//! whole default list, never a partial recovery of malformed input.

use crate::models::{EducationEntry, ExperienceEntry, FormInput, Project};

pub const DEFAULT_NAME: &str = "Alex Rivera";

pub const DEFAULT_PROFESSION: &str = "Full-Stack Developer & AI Engineer";

pub const DEFAULT_BIO: &str = "Passionate about building futuristic web experiences with \
    cutting-edge technologies. I specialize in AI-powered applications, full-stack development, \
    and creating stunning user interfaces that push the boundaries of what's possible.";

pub const DEFAULT_CONTACT: &str = "alex.rivera@email.com | @alex_rivera_dev | github.com/alexrivera";

/// Substituted for a project whose block carries no description lines.
pub const PROJECT_FILLER_DESCRIPTION: &str = "Innovative project leveraging advanced technologies";

/// Fallback skill list for a blank skills field.
pub fn default_skills() -> Vec<String> {
    ["React", "Next.js", "AI Integration", "TypeScript", "Node.js"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Fallback project list for a blank projects field.
pub fn default_projects() -> Vec<Project> {
    vec![
        Project {
            title: "AI Portfolio Generator".to_string(),
            description: "A revolutionary tool that creates stunning portfolios in seconds using artificial intelligence.".to_string(),
        },
        Project {
            title: "FutureWeb Studio".to_string(),
            description: "A design system for futuristic web applications with advanced animations and AI capabilities.".to_string(),
        },
        Project {
            title: "Neural Dashboard".to_string(),
            description: "Real-time analytics platform powered by machine learning algorithms.".to_string(),
        },
    ]
}

/// The fixed work history. No form field feeds this.
pub fn fixed_experience() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            company: "NeuralTech".to_string(),
            role: "Senior AI Developer".to_string(),
            period: "2022-Present".to_string(),
            description: "Leading AI integration projects and developing next-generation web applications.".to_string(),
        },
        ExperienceEntry {
            company: "FutureLabs".to_string(),
            role: "Full-Stack Engineer".to_string(),
            period: "2020-2022".to_string(),
            description: "Built scalable web applications with focus on performance and user experience.".to_string(),
        },
    ]
}

/// The fixed education history. No form field feeds this.
pub fn fixed_education() -> Vec<EducationEntry> {
    vec![
        EducationEntry {
            degree: "MSc Computer Science".to_string(),
            school: "Tech University".to_string(),
            year: "2020".to_string(),
        },
        EducationEntry {
            degree: "BSc Software Engineering".to_string(),
            school: "Innovation Institute".to_string(),
            year: "2018".to_string(),
        },
    ]
}

/// The auto-fill record: a complete sample form, distinct from the builder
/// fallbacks (longer skill list, single-line project blocks).
pub fn auto_fill_input() -> FormInput {
    FormInput {
        name: DEFAULT_NAME.to_string(),
        profession: DEFAULT_PROFESSION.to_string(),
        bio: DEFAULT_BIO.to_string(),
        skills: "React, Next.js, AI Integration, TypeScript, Node.js, Python, Machine Learning, UI/UX Design".to_string(),
        projects: "AI Portfolio Generator - A revolutionary tool that creates stunning portfolios in seconds using artificial intelligence.\n\nFutureWeb Studio - A design system for futuristic web applications with advanced animations and AI capabilities.\n\nNeural Dashboard - Real-time analytics platform powered by machine learning algorithms.".to_string(),
        contact: DEFAULT_CONTACT.to_string(),
    }
}
