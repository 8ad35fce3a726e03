//! # Interaction Collaborators
//!
//! The page leans on two things it does not own: a yes/no prompt
//! before a delete, and a router that knows the current path and can move the
//! user elsewhere. Both are traits so the controller can be driven from a
//! terminal, a browser shell, or a test.

use crate::model::ProjectId;
use async_trait::async_trait;
use std::io::{self, BufRead, Write};
use std::sync::Mutex;
use tracing::debug;

/// Route of the projects list.
pub const PROJECTS_ROOT: &str = "/projects";

/// Prompt shown before deleting a project.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this project?";

/// Route of a single project's detail page.
pub fn project_detail_path(id: &ProjectId) -> String {
    format!("{PROJECTS_ROOT}/{id}")
}

/// A yes/no prompt. The caller waits for the answer; the controller does not.
#[async_trait]
pub trait Confirm: Send + Sync {
    async fn confirm(&self, message: &str) -> bool;
}

/// Answers every prompt the same way.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

#[async_trait]
impl Confirm for FixedAnswer {
    async fn confirm(&self, message: &str) -> bool {
        debug!(message, answer = self.0, "Prompt answered");
        self.0
    }
}

/// Asks on the terminal; anything but `y`/`yes` is a no.
#[derive(Debug, Default)]
pub struct TerminalConfirm;

#[async_trait]
impl Confirm for TerminalConfirm {
    async fn confirm(&self, message: &str) -> bool {
        let message = message.to_string();
        // Stdin reads block; keep them off the runtime's worker threads.
        tokio::task::spawn_blocking(move || ask(&message))
            .await
            .unwrap_or(false)
    }
}

fn ask(message: &str) -> bool {
    let mut stdout = io::stdout();
    if write!(stdout, "{message} [y/N] ").and_then(|_| stdout.flush()).is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Current location plus programmatic navigation.
pub trait Navigator: Send + Sync {
    fn current_path(&self) -> String;
    fn push(&self, path: &str);
}

/// In-memory history, newest entry last.
#[derive(Debug)]
pub struct MemoryNavigator {
    history: Mutex<Vec<String>>,
}

impl MemoryNavigator {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            history: Mutex::new(vec![initial.into()]),
        }
    }

    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        Self::new(PROJECTS_ROOT)
    }
}

impl Navigator for MemoryNavigator {
    fn current_path(&self) -> String {
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .last()
            .cloned()
            .unwrap_or_else(|| PROJECTS_ROOT.to_string())
    }

    fn push(&self, path: &str) {
        debug!(path, "Navigate");
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(path.to_string());
    }
}
