use serde::{Deserialize, Serialize};

/// How the user picked the project for a new entry: from the known catalog or
/// by typing a brand new name. Both resolve to a plain string before the entry
/// reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectInput {
    Existing(String),
    New(String),
}

impl ProjectInput {
    /// Trimmed project name; may be empty, the store rejects that.
    pub fn resolve(&self) -> String {
        match self {
            ProjectInput::Existing(name) | ProjectInput::New(name) => name.trim().to_string(),
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, ProjectInput::New(_))
    }
}
