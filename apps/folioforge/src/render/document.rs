//! Document renderer — serializes a [`Portfolio`] plus a [`Theme`] into a
//! complete, standalone HTML document.
//!
//! Deterministic: the same portfolio and theme yield identical bytes, except
//! for the footer year, which is stamped at invocation time. Field values are
//! inserted verbatim; the document is generated from the user's own input
//! for the user's own use, so no escaping is applied here.

use chrono::{Datelike, Utc};

use crate::models::Portfolio;
use crate::render::theme::{Theme, ThemeTokens};

/// Renders the full standalone document, stamped with the current year.
pub fn render(portfolio: &Portfolio, theme: &Theme) -> String {
    render_with_year(portfolio, theme, Utc::now().year())
}

/// Year-pinned variant of [`render`]; the public entry point stamps the
/// invocation-time year.
pub(crate) fn render_with_year(portfolio: &Portfolio, theme: &Theme, year: i32) -> String {
    let tokens = theme.tokens();
    let mut w = Html::new();

    write_head(&mut w, portfolio);
    w.push(format!(
        "<body class=\"{} min-h-screen text-white\">\n",
        tokens.background
    ));
    w.push("    <div class=\"container mx-auto px-6 py-12 max-w-6xl\">\n");

    write_header(&mut w, portfolio, &tokens);
    write_about(&mut w, portfolio);
    write_skills(&mut w, portfolio);
    write_projects(&mut w, portfolio);
    write_experience(&mut w, portfolio, &tokens);
    write_education(&mut w, portfolio, &tokens);
    write_contact(&mut w, portfolio, year);

    w.push("    </div>\n</body>\n</html>\n");
    w.finish()
}

// Minimal writer with deterministic push order.
struct Html {
    buf: String,
}

impl Html {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(8 * 1024),
        }
    }

    fn push(&mut self, s: impl AsRef<str>) {
        self.buf.push_str(s.as_ref());
    }

    fn finish(self) -> String {
        self.buf
    }
}

const STYLE_BLOCK: &str = "    <style>\n        body { font-family: 'Space Grotesk', sans-serif; }\n        .animate-pulse-fast { animation: pulse 1.5s cubic-bezier(0.4, 0, 0.6, 1) infinite; }\n        @keyframes pulse { 0%, 100% { opacity: 1; } 50% { opacity: .5; } }\n        .glow { text-shadow: 0 0 10px rgba(0, 255, 255, 0.7); }\n    </style>\n";

fn write_head(w: &mut Html, portfolio: &Portfolio) {
    w.push("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    w.push("    <meta charset=\"UTF-8\">\n");
    w.push("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    w.push(format!("    <title>{} - Portfolio</title>\n", portfolio.name));
    w.push("    <script src=\"https://cdn.tailwindcss.com\"></script>\n");
    w.push("    <link href=\"https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@300;400;500;600;700&display=swap\" rel=\"stylesheet\">\n");
    w.push(STYLE_BLOCK);
    w.push("</head>\n");
}

fn write_header(w: &mut Html, portfolio: &Portfolio, tokens: &ThemeTokens) {
    w.push("        <header class=\"text-center mb-16\">\n");
    w.push(format!(
        "            <h1 class=\"text-5xl md:text-7xl font-bold mb-4\">{}</h1>\n",
        portfolio.name
    ));
    w.push(format!(
        "            <p class=\"text-xl md:text-2xl {} font-medium\">{}</p>\n",
        tokens.accent, portfolio.profession
    ));
    w.push("        </header>\n");
}

fn write_about(w: &mut Html, portfolio: &Portfolio) {
    w.push("        <section class=\"mb-16\">\n");
    w.push("            <h2 class=\"text-3xl font-bold mb-6 border-b border-cyan-500 inline-block\">About Me</h2>\n");
    w.push(format!(
        "            <p class=\"text-lg leading-relaxed\">{}</p>\n",
        portfolio.bio
    ));
    w.push("        </section>\n");
}

fn write_skills(w: &mut Html, portfolio: &Portfolio) {
    w.push("        <section class=\"mb-16\">\n");
    w.push("            <h2 class=\"text-3xl font-bold mb-6 border-b border-cyan-500 inline-block\">Skills</h2>\n");
    w.push("            <div class=\"flex flex-wrap gap-3\">\n");
    for skill in &portfolio.skills {
        w.push(format!(
            "                <span class=\"bg-white/10 backdrop-blur-sm px-4 py-2 rounded-full border border-cyan-500/30\">{skill}</span>\n"
        ));
    }
    w.push("            </div>\n");
    w.push("        </section>\n");
}

fn write_projects(w: &mut Html, portfolio: &Portfolio) {
    w.push("        <section class=\"mb-16\">\n");
    w.push("            <h2 class=\"text-3xl font-bold mb-6 border-b border-cyan-500 inline-block\">Projects</h2>\n");
    w.push("            <div class=\"grid md:grid-cols-2 gap-8\">\n");
    for project in &portfolio.projects {
        w.push("                <div class=\"bg-white/5 backdrop-blur-sm p-6 rounded-xl border border-cyan-500/20 hover:border-cyan-500/50 transition-all duration-300\">\n");
        w.push(format!(
            "                    <h3 class=\"text-xl font-bold mb-3\">{}</h3>\n",
            project.title
        ));
        w.push(format!("                    <p>{}</p>\n", project.description));
        w.push("                </div>\n");
    }
    w.push("            </div>\n");
    w.push("        </section>\n");
}

fn write_experience(w: &mut Html, portfolio: &Portfolio, tokens: &ThemeTokens) {
    w.push("        <section class=\"mb-16\">\n");
    w.push("            <h2 class=\"text-3xl font-bold mb-6 border-b border-cyan-500 inline-block\">Experience</h2>\n");
    w.push("            <div class=\"space-y-6\">\n");
    for exp in &portfolio.experience {
        w.push("                <div class=\"bg-white/5 backdrop-blur-sm p-6 rounded-xl border border-cyan-500/20\">\n");
        w.push("                    <div class=\"flex flex-col md:flex-row md:justify-between md:items-center mb-2\">\n");
        w.push(format!(
            "                        <h3 class=\"text-xl font-bold\">{}</h3>\n",
            exp.role
        ));
        w.push(format!(
            "                        <span class=\"{} font-medium\">{}</span>\n",
            tokens.accent, exp.period
        ));
        w.push("                    </div>\n");
        w.push(format!(
            "                    <p class=\"font-medium\">{}</p>\n",
            exp.company
        ));
        w.push(format!("                    <p class=\"mt-2\">{}</p>\n", exp.description));
        w.push("                </div>\n");
    }
    w.push("            </div>\n");
    w.push("        </section>\n");
}

fn write_education(w: &mut Html, portfolio: &Portfolio, tokens: &ThemeTokens) {
    w.push("        <section class=\"mb-16\">\n");
    w.push("            <h2 class=\"text-3xl font-bold mb-6 border-b border-cyan-500 inline-block\">Education</h2>\n");
    w.push("            <div class=\"space-y-4\">\n");
    for edu in &portfolio.education {
        w.push("                <div class=\"bg-white/5 backdrop-blur-sm p-4 rounded-xl border border-cyan-500/20\">\n");
        w.push("                    <div class=\"flex flex-col md:flex-row md:justify-between\">\n");
        w.push(format!(
            "                        <span class=\"font-bold\">{}</span>\n",
            edu.degree
        ));
        w.push(format!(
            "                        <span class=\"{}\">{}</span>\n",
            tokens.accent, edu.year
        ));
        w.push("                    </div>\n");
        w.push(format!("                    <p>{}</p>\n", edu.school));
        w.push("                </div>\n");
    }
    w.push("            </div>\n");
    w.push("        </section>\n");
}

fn write_contact(w: &mut Html, portfolio: &Portfolio, year: i32) {
    w.push("        <section>\n");
    w.push("            <h2 class=\"text-3xl font-bold mb-6 border-b border-cyan-500 inline-block\">Contact Me</h2>\n");
    w.push(format!(
        "            <p class=\"text-lg\">{}</p>\n",
        portfolio.contact
    ));
    w.push("            <div class=\"mt-8 text-center\">\n");
    w.push(format!(
        "                <p class=\"text-sm opacity-70\">Generated with FolioForge • {year}</p>\n"
    ));
    w.push("            </div>\n");
    w.push("        </section>\n");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::generation::builder;
    use crate::models::FormInput;

    // The body structure contract: these headings, once each, in this order.
    const SECTION_HEADINGS: [&str; 6] = [
        "About Me",
        "Skills",
        "Projects",
        "Experience",
        "Education",
        "Contact Me",
    ];

    fn default_portfolio() -> Portfolio {
        builder::build(&FormInput::default())
    }

    #[test]
    fn test_each_section_heading_appears_exactly_once_in_order() {
        let html = render(&default_portfolio(), &Theme::Neon);

        let mut last_pos = 0;
        for heading in SECTION_HEADINGS {
            let needle = format!(">{heading}</h2>");
            assert_eq!(
                html.matches(&needle).count(),
                1,
                "heading {heading:?} must appear exactly once"
            );
            let pos = html.find(&needle).unwrap();
            assert!(pos > last_pos, "heading {heading:?} out of order");
            last_pos = pos;
        }
    }

    #[test]
    fn test_title_is_name_dash_portfolio() {
        let mut portfolio = default_portfolio();
        portfolio.name = "Ada Lovelace".to_string();
        let html = render(&portfolio, &Theme::Neon);
        assert!(html.contains("<title>Ada Lovelace - Portfolio</title>"));
    }

    #[test]
    fn test_render_is_idempotent_for_a_fixed_year() {
        let portfolio = default_portfolio();
        let first = render_with_year(&portfolio, &Theme::Quantum, 2026);
        let second = render_with_year(&portfolio, &Theme::Quantum, 2026);
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_stamps_invocation_year() {
        let html = render(&default_portfolio(), &Theme::Neon);
        let year = Utc::now().year();
        assert!(html.contains(&format!("Generated with FolioForge • {year}")));
    }

    #[test]
    fn test_theme_tokens_are_applied() {
        let portfolio = default_portfolio();
        let tokens = Theme::Cyber.tokens();
        let html = render(&portfolio, &Theme::Cyber);

        assert!(html.contains(&format!("<body class=\"{} min-h-screen text-white\">", tokens.background)));
        assert!(html.contains(tokens.accent));
    }

    #[test]
    fn test_themes_differ_only_in_style_tokens() {
        let portfolio = default_portfolio();
        let neon = render_with_year(&portfolio, &Theme::Neon, 2026);
        let stellar = render_with_year(&portfolio, &Theme::Stellar, 2026);

        assert_ne!(neon, stellar);
        // Same structure: swapping tokens back makes the documents identical.
        let neon_tokens = Theme::Neon.tokens();
        let stellar_tokens = Theme::Stellar.tokens();
        let restyled = stellar
            .replace(stellar_tokens.background, neon_tokens.background)
            .replace(stellar_tokens.accent, neon_tokens.accent);
        assert_eq!(neon, restyled);
    }

    #[test]
    fn test_user_text_is_inserted_verbatim() {
        let mut portfolio = default_portfolio();
        portfolio.bio = "I enjoy <b>bold</b> claims & edge cases".to_string();
        let html = render(&portfolio, &Theme::Neon);
        assert!(html.contains("I enjoy <b>bold</b> claims & edge cases"));
    }

    #[test]
    fn test_every_skill_and_project_is_rendered() {
        let input = FormInput {
            skills: "Rust, Tokio, Serde".to_string(),
            projects: "Forge\nA generator\n\nEngine\nA renderer".to_string(),
            ..FormInput::default()
        };
        let html = render(&builder::build(&input), &Theme::Glass);

        for needle in ["Rust", "Tokio", "Serde", "Forge", "A generator", "Engine", "A renderer"] {
            assert!(html.contains(needle), "missing {needle:?}");
        }
    }
}
