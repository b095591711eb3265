mod config;
mod errors;
mod generation;
mod models;
mod render;
mod session;

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::models::Field;
use crate::render::{FileSink, Theme};
use crate::session::{Action, Session, View};

#[derive(Parser)]
#[command(name = "folioforge")]
#[command(about = "Forge a themed portfolio page from a short form")]
struct Cli {
    /// Directory the document is saved to (overrides FOLIO_OUTPUT_DIR)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Preselect a theme: neon, glass, cyber, hologram, quantum, stellar
    #[arg(long, value_name = "ID")]
    theme: Option<String>,

    /// Fill the form with the canned sample record before showing it
    #[arg(long)]
    auto_fill: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting FolioForge v{}", env!("CARGO_PKG_VERSION"));

    let output_dir = cli.output_dir.unwrap_or_else(|| config.output_dir.clone());
    let sink = Arc::new(FileSink::new(output_dir));
    let mut session = Session::new(config.generation_delay, sink);

    if let Some(id) = cli.theme.as_deref() {
        let theme = Theme::from_id(id).ok_or_else(|| anyhow::anyhow!("unknown theme id {id:?}"))?;
        session.apply(Action::SelectTheme(theme));
    }
    if cli.auto_fill {
        session.apply(Action::AutoFill);
    }

    run(&mut session).await
}

/// Dispatches on the current view until the user quits.
async fn run(session: &mut Session) -> Result<()> {
    loop {
        let keep_going = match session.view {
            View::Landing => landing_screen(session)?,
            View::Form => form_screen(session).await?,
            View::Preview => preview_screen(session).await?,
        };
        if !keep_going {
            info!("Session closed");
            return Ok(());
        }
    }
}

fn landing_screen(session: &mut Session) -> Result<bool> {
    println!();
    println!("FolioForge — forge your portfolio in seconds.");
    println!("Fill a short form, pick a theme, and save a standalone HTML page.");
    let Some(choice) = read_line("Press Enter to start (q to quit): ")? else {
        return Ok(false);
    };
    if choice == "q" {
        return Ok(false);
    }
    session.apply(Action::Start);
    Ok(true)
}

async fn form_screen(session: &mut Session) -> Result<bool> {
    println!();
    println!("— Your details (all fields optional; blanks fall back to sample content) —");
    loop {
        let Some(choice) =
            read_line("[f] fill fields  [a] auto-fill  [t] theme  [g] generate  [q] quit > ")?
        else {
            return Ok(false);
        };
        match choice.as_str() {
            "f" => fill_fields(session)?,
            "a" => {
                session.apply(Action::AutoFill);
                println!("Form filled with the sample record.");
            }
            "t" => theme_picker(session)?,
            "g" => {
                println!("Forging your portfolio...");
                session.generate().await;
                return Ok(true);
            }
            "q" => return Ok(false),
            other => println!("Unknown choice {other:?}"),
        }
    }
}

async fn preview_screen(session: &mut Session) -> Result<bool> {
    let Some(portfolio) = session.portfolio.as_ref() else {
        // Unreachable through the state machine; recover by returning to the form.
        session.apply(Action::Edit);
        return Ok(true);
    };

    println!();
    println!("— Preview: {} · {} —", portfolio.name, portfolio.profession);
    println!(
        "  {} skills, {} projects · theme {} {}",
        portfolio.skills.len(),
        portfolio.projects.len(),
        session.selected_theme.tokens().icon,
        session.selected_theme.tokens().name,
    );
    if let Some(message) = &session.download_error {
        println!("  ! {message}");
    }

    loop {
        let Some(choice) =
            read_line("[d] download  [v] view document  [t] theme  [e] edit  [q] quit > ")?
        else {
            return Ok(false);
        };
        match choice.as_str() {
            "d" => {
                match session.download().await {
                    Some(path) => println!("Saved {}", path.display()),
                    None => {
                        if let Some(message) = &session.download_error {
                            println!("! {message}");
                        }
                    }
                }
            }
            "v" => {
                if let Some(html) = session.preview_html() {
                    println!("{html}");
                }
            }
            "t" => {
                theme_picker(session)?;
                return Ok(true); // re-render the preview header with the new theme
            }
            "e" => {
                session.apply(Action::Edit);
                return Ok(true);
            }
            "q" => return Ok(false),
            other => println!("Unknown choice {other:?}"),
        }
    }
}

fn fill_fields(session: &mut Session) -> Result<()> {
    for field in Field::ALL {
        let current = session.form.get(field).to_string();
        let value = if field == Field::Projects {
            read_block(field.label(), &current)?
        } else {
            let shown = if current.is_empty() { field.hint() } else { current.as_str() };
            match read_line(&format!("{} [{shown}]: ", field.label()))? {
                Some(line) if !line.is_empty() => Some(line),
                _ => None,
            }
        };
        if let Some(value) = value {
            session.apply(Action::SetField(field, value));
        }
    }
    Ok(())
}

/// Reads a multi-line field. Blank lines separate project blocks; a single
/// `.` line finishes the field; finishing with no lines keeps the old value.
fn read_block(label: &str, current: &str) -> Result<Option<String>> {
    if current.is_empty() {
        println!("{label} — end with a '.' on its own line:");
    } else {
        println!("{label} — end with a '.' on its own line (nothing keeps the current value):");
    }
    let mut lines: Vec<String> = Vec::new();
    loop {
        let Some(line) = read_line("")? else { break };
        if line == "." {
            break;
        }
        lines.push(line);
    }
    if lines.is_empty() {
        return Ok(None);
    }
    Ok(Some(lines.join("\n")))
}

fn theme_picker(session: &mut Session) -> Result<()> {
    println!("Themes:");
    for (i, theme) in Theme::ALL.iter().enumerate() {
        let tokens = theme.tokens();
        let marker = if *theme == session.selected_theme { "*" } else { " " };
        println!("  {marker} {}) {} {}", i + 1, tokens.icon, tokens.name);
    }
    let Some(raw) = read_line("Theme number (blank keeps the current one): ")? else {
        return Ok(());
    };
    if raw.is_empty() {
        return Ok(());
    }
    let picked = raw
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| Theme::ALL.get(i).copied());
    match picked {
        Some(theme) => session.apply(Action::SelectTheme(theme)),
        None => println!("Not a theme number: {raw}"),
    }
    Ok(())
}

/// Reads one line from stdin. `None` means stdin is closed.
fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(|c| c == '\r' || c == '\n').to_string()))
}
