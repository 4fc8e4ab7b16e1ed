// Contact form bar: collapsed/expanded state plus draft validation.
// Submission only produces a user-visible acknowledgment; there is no
// real delivery behind it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactPanel {
    Collapsed,
    Expanded,
}

/// The in-progress form contents. Phone is optional; the rest are
/// required at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Pure widget state. `submit` validates the held draft: on success the
/// draft is cleared and the bar collapses; on failure the draft is kept,
/// the bar stays expanded, and the missing field names are reported.
#[derive(Debug)]
pub struct ContactState {
    panel: ContactPanel,
    draft: ContactDraft,
}

impl ContactState {
    pub fn new() -> Self {
        ContactState {
            panel: ContactPanel::Collapsed,
            draft: ContactDraft::default(),
        }
    }

    pub fn panel(&self) -> ContactPanel {
        self.panel
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn expand(&mut self) {
        self.panel = ContactPanel::Expanded;
    }

    pub fn collapse(&mut self) {
        self.panel = ContactPanel::Collapsed;
    }

    pub fn set_draft(&mut self, draft: ContactDraft) {
        self.draft = draft;
    }

    pub fn submit(&mut self) -> Result<(), Vec<&'static str>> {
        let missing = missing_fields(&self.draft);
        if !missing.is_empty() {
            // Keep the draft so the user can fix it in place.
            self.panel = ContactPanel::Expanded;
            return Err(missing);
        }
        self.draft = ContactDraft::default();
        self.panel = ContactPanel::Collapsed;
        Ok(())
    }
}

impl Default for ContactState {
    fn default() -> Self {
        ContactState::new()
    }
}

/// Whitespace-only values count as empty.
fn missing_fields(draft: &ContactDraft) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if draft.name.trim().is_empty() {
        missing.push("name");
    }
    if draft.email.trim().is_empty() {
        missing.push("email");
    }
    if draft.message.trim().is_empty() {
        missing.push("message");
    }
    missing
}

/// Shared handle over the contact bar state.
#[derive(Clone)]
pub struct Contact {
    state: Arc<Mutex<ContactState>>,
}

impl Contact {
    pub fn new() -> Self {
        Contact {
            state: Arc::new(Mutex::new(ContactState::new())),
        }
    }

    pub async fn panel(&self) -> ContactPanel {
        self.state.lock().await.panel()
    }

    pub async fn expand(&self) {
        self.state.lock().await.expand();
    }

    pub async fn collapse(&self) {
        self.state.lock().await.collapse();
    }

    /// Applies the draft and submits it as one atomic transition.
    pub async fn submit(&self, draft: ContactDraft) -> Result<(), Vec<&'static str>> {
        let mut state = self.state.lock().await;
        state.set_draft(draft);
        state.submit()
    }
}

impl Default for Contact {
    fn default() -> Self {
        Contact::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, phone: &str, message: &str) -> ContactDraft {
        ContactDraft {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn valid_submission_clears_and_collapses() {
        let mut state = ContactState::new();
        state.expand();
        state.set_draft(draft("Ada", "ada@example.com", "", "Is the RS7 available?"));
        assert!(state.submit().is_ok());
        assert_eq!(state.panel(), ContactPanel::Collapsed);
        assert_eq!(state.draft(), &ContactDraft::default());
    }

    #[test]
    fn phone_is_optional() {
        let mut state = ContactState::new();
        state.set_draft(draft("Ada", "ada@example.com", "", "hi"));
        assert!(state.submit().is_ok());
    }

    #[test]
    fn missing_name_keeps_the_draft_and_stays_expanded() {
        let mut state = ContactState::new();
        state.expand();
        let d = draft("", "ada@example.com", "555-0100", "hi");
        state.set_draft(d.clone());
        let err = state.submit().unwrap_err();
        assert_eq!(err, ["name"]);
        assert_eq!(state.panel(), ContactPanel::Expanded);
        assert_eq!(state.draft(), &d);
    }

    #[test]
    fn whitespace_only_fields_fail_validation() {
        let mut state = ContactState::new();
        state.set_draft(draft("  ", "", "", "\t"));
        let err = state.submit().unwrap_err();
        assert_eq!(err, ["name", "email", "message"]);
    }
}
