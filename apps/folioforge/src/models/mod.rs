pub mod portfolio;

pub use portfolio::{
    EducationEntry, ExperienceEntry, Field, FormInput, Portfolio, Project,
};
