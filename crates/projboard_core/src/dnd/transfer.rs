//! Platform drag data channel.

use crate::model::project::ProjectId;

/// MIME type of the project id payload.
pub const TEXT_PLAIN: &str = "text/plain";

/// Operations a drag source allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    #[default]
    None,
    Copy,
    Move,
    Link,
}

impl DropEffect {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Copy => "copy",
            Self::Move => "move",
            Self::Link => "link",
        }
    }
}

/// In-memory mirror of a drag event's data transfer object.
///
/// Entries keep insertion order so `types()[0]` matches what a browser
/// reports first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataTransfer {
    entries: Vec<(String, String)>,
    effect_allowed: DropEffect,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a transfer from host-reported `(type, data)` pairs.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut transfer = Self::new();
        for (format, data) in entries {
            transfer.set_data(format, data);
        }
        transfer
    }

    /// Stores `data` under `format`, replacing any previous value in place.
    pub fn set_data(&mut self, format: impl Into<String>, data: impl Into<String>) {
        let format = format.into();
        let data = data.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == format) {
            Some(entry) => entry.1 = data,
            None => self.entries.push((format, data)),
        }
    }

    pub fn get_data(&self, format: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == format)
            .map(|(_, data)| data.as_str())
    }

    pub fn types(&self) -> Vec<&str> {
        self.entries.iter().map(|(format, _)| format.as_str()).collect()
    }

    pub fn effect_allowed(&self) -> DropEffect {
        self.effect_allowed
    }

    pub fn set_effect_allowed(&mut self, effect: DropEffect) {
        self.effect_allowed = effect;
    }
}

/// Writes the project id payload and allows a move.
pub fn write_project_id(transfer: &mut DataTransfer, id: &ProjectId) {
    transfer.set_data(TEXT_PLAIN, id.as_str());
    transfer.set_effect_allowed(DropEffect::Move);
}

/// Returns whether a hovering payload may be dropped on a list.
pub fn accepts_project_payload(transfer: &DataTransfer) -> bool {
    transfer.types().first() == Some(&TEXT_PLAIN)
}

/// Reads the project id payload; absent or blank payloads yield `None`.
pub fn read_project_id(transfer: &DataTransfer) -> Option<ProjectId> {
    let raw = transfer.get_data(TEXT_PLAIN)?.trim();
    if raw.is_empty() {
        return None;
    }
    Some(ProjectId::from(raw))
}
