//! View Controller — owns all mutable session state and the
//! Landing → Form → Preview state machine.
//!
//! Every synchronous transition flows through [`Session::apply`], the single
//! mutation entry point. The async operations (the simulated generation pass
//! and the document download) are methods that gate on and update the same
//! state. A fresh [`Session`] is fully initial state; nothing persists.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation;
use crate::models::{Field, FormInput, Portfolio};
use crate::render::{self, DocumentSink, Theme};

/// Which screen the session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Form,
    Preview,
}

/// Synchronous state transitions.
///
/// `SetField`, `AutoFill`, and `SelectTheme` are legal in any state — only
/// `Start` and `Edit` are view transitions. Generation and download are
/// async and live on [`Session`] directly.
#[derive(Debug, Clone)]
pub enum Action {
    /// Landing → Form.
    Start,
    /// Overwrite one form field in place.
    SetField(Field, String),
    /// Overwrite the whole form with the canned sample record.
    AutoFill,
    /// Select a theme; observable immediately in preview and the next save.
    SelectTheme(Theme),
    /// Preview → Form. The form is retained as it stood before generation;
    /// the portfolio stays in memory but is no longer displayed.
    Edit,
}

/// A pending generation pass, snapshotting the form at the moment it began.
///
/// Await [`GenerationPass::run`] and feed the result back through
/// [`Session::finish_generate`]. Dropping the pass and calling
/// [`Session::abandon_generate`] instead cancels it before the latency
/// elapses.
#[derive(Debug)]
pub struct GenerationPass {
    input: FormInput,
    delay: Duration,
}

impl GenerationPass {
    pub async fn run(self) -> Portfolio {
        generation::generate(&self.input, self.delay).await
    }
}

/// The one owner of mutable session state.
pub struct Session {
    id: Uuid,
    pub view: View,
    pub form: FormInput,
    pub portfolio: Option<Portfolio>,
    pub selected_theme: Theme,
    /// Re-entrancy guard: set while a generation pass is pending.
    pub is_generating: bool,
    /// The single inline error slot. Cleared by the next successful
    /// generation or download attempt.
    pub download_error: Option<String>,
    generation_delay: Duration,
    sink: Arc<dyn DocumentSink>,
}

impl Session {
    pub fn new(generation_delay: Duration, sink: Arc<dyn DocumentSink>) -> Self {
        let id = Uuid::new_v4();
        info!("Session {id} started");
        Self {
            id,
            view: View::Landing,
            form: FormInput::default(),
            portfolio: None,
            selected_theme: Theme::default(),
            is_generating: false,
            download_error: None,
            generation_delay,
            sink,
        }
    }

    /// Applies one synchronous transition.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Start => {
                if self.view == View::Landing {
                    self.view = View::Form;
                }
            }
            Action::SetField(field, value) => self.form.set(field, value),
            Action::AutoFill => self.form = generation::defaults::auto_fill_input(),
            Action::SelectTheme(theme) => self.selected_theme = theme,
            Action::Edit => {
                if self.view == View::Preview {
                    self.view = View::Form;
                }
            }
        }
    }

    /// Starts a generation pass, or returns `None` while one is pending.
    ///
    /// The pass snapshots the form as it stands now; later edits do not leak
    /// into a pass already underway.
    pub fn begin_generate(&mut self) -> Option<GenerationPass> {
        if self.is_generating {
            return None;
        }
        self.is_generating = true;
        Some(GenerationPass {
            input: self.form.clone(),
            delay: self.generation_delay,
        })
    }

    /// Stores a finished pass: portfolio set, error slot cleared, pending
    /// flag dropped, view moved to preview.
    pub fn finish_generate(&mut self, portfolio: Portfolio) {
        info!("Session {}: portfolio ready for {:?}", self.id, portfolio.name);
        self.portfolio = Some(portfolio);
        self.download_error = None;
        self.is_generating = false;
        self.view = View::Preview;
    }

    /// Clears the pending flag after a dropped [`GenerationPass`]. The
    /// bundled driver never cancels; embedders that do must call this.
    #[allow(dead_code)]
    pub fn abandon_generate(&mut self) {
        self.is_generating = false;
    }

    /// Runs a full generation pass in place. Ignored while one is pending.
    pub async fn generate(&mut self) {
        let Some(pass) = self.begin_generate() else {
            info!("Session {}: generate ignored, a pass is already pending", self.id);
            return;
        };
        let portfolio = pass.run().await;
        self.finish_generate(portfolio);
    }

    /// Renders the live preview, which is by construction the same document
    /// the download persists.
    pub fn preview_html(&self) -> Option<String> {
        self.portfolio
            .as_ref()
            .map(|p| render::render(p, &self.selected_theme))
    }

    /// Serializes the current document and saves it through the sink.
    ///
    /// Failures never propagate: they are logged and recorded in the inline
    /// error slot, leaving the rest of the session untouched.
    pub async fn download(&mut self) -> Option<PathBuf> {
        self.download_error = None;
        match self.try_download().await {
            Ok(path) => {
                info!("Session {}: document saved to {}", self.id, path.display());
                Some(path)
            }
            Err(err) => {
                error!("Session {}: download failed: {err}", self.id);
                self.download_error = Some(err.user_message().to_string());
                None
            }
        }
    }

    async fn try_download(&self) -> Result<PathBuf, AppError> {
        let portfolio = self.portfolio.as_ref().ok_or(AppError::NoData)?;
        let html = render::render(portfolio, &self.selected_theme);
        let filename = render::document_filename(&portfolio.name);
        self.sink.save(&filename, Bytes::from(html)).await
    }
}
