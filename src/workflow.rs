//! Request lifecycle shared by the analysis and comparison pages.
//!
//! Every transition goes through [`Workflow`]. Each submission gets a
//! [`Ticket`]; resetting or resubmitting bumps the generation, so a response
//! that arrives for an older ticket is dropped instead of overwriting fresh
//! state.

use crate::upload::SelectedFile;

/// Where the request currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase<T> {
    /// Nothing submitted yet (a file may or may not be selected)
    Idle,
    /// One request in flight
    Submitting,
    /// Request finished with a result
    Success(T),
    /// Request failed; holds the message shown to the user
    Failure(String),
}

/// Identifies one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Workflow<T> {
    file: Option<SelectedFile>,
    preview: Option<String>,
    phase: Phase<T>,
    generation: u64,
    selection: u64,
}

impl<T> Default for Workflow<T> {
    fn default() -> Self {
        Self {
            file: None,
            preview: None,
            phase: Phase::Idle,
            generation: 0,
            selection: 0,
        }
    }
}

impl<T> Workflow<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &Phase<T> {
        &self.phase
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    /// `data:` URL for image files; `None` for PDFs and when nothing is selected.
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    /// Changes whenever a file is picked or cleared, so views can key on it
    /// without comparing file contents.
    pub fn selection(&self) -> u64 {
        self.selection
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting)
    }

    pub fn result(&self) -> Option<&T> {
        match &self.phase {
            Phase::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failure(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Store a newly picked file. Ignored while a request is in flight or
    /// after a success (the user must reset first).
    pub fn select_file(&mut self, file: SelectedFile) -> bool {
        if matches!(self.phase, Phase::Submitting | Phase::Success(_)) {
            return false;
        }
        self.preview = file.is_image().then(|| file.data_url());
        self.file = Some(file);
        self.selection += 1;
        self.phase = Phase::Idle;
        true
    }

    /// A file is present and nothing is pending or already shown.
    pub fn can_submit(&self) -> bool {
        self.file.is_some() && matches!(self.phase, Phase::Idle | Phase::Failure(_))
    }

    /// Start a request. Returns `None` when submitting is not allowed, which
    /// keeps at most one request outstanding.
    pub fn submit(&mut self) -> Option<Ticket> {
        if !self.can_submit() {
            return None;
        }
        self.generation += 1;
        self.phase = Phase::Submitting;
        Some(Ticket(self.generation))
    }

    /// Apply a finished request. Returns `false` if the ticket is stale.
    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<T, String>) -> bool {
        if ticket.0 != self.generation || !self.is_submitting() {
            return false;
        }
        self.phase = match outcome {
            Ok(result) => Phase::Success(result),
            Err(message) => Phase::Failure(message),
        };
        true
    }

    /// Back to Idle with nothing selected. Any in-flight response becomes stale.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.selection += 1;
        self.file = None;
        self.preview = None;
        self.phase = Phase::Idle;
    }
}
