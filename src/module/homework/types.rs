///! Homework review status data types

use serde::Deserialize;

/// Review verdict for a submission. The API reports it as one of three
/// fixed strings; anything else is a domain error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub fn from_api(status: &str) -> Option<Self> {
        match status {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Fixed human-readable verdict text delivered to the chat.
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// One homework entry from the API. Keys are optional here; the status
/// parser enforces their presence so missing-key errors surface per record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomeworkRecord {
    #[serde(default)]
    pub homework_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A validated poll response
#[derive(Debug, Clone)]
pub struct PollResponse {
    /// Server timestamp; becomes the `from_date` of the next request
    pub current_date: i64,
    /// Homeworks updated since the requested watermark (newest first)
    pub homeworks: Vec<HomeworkRecord>,
}
