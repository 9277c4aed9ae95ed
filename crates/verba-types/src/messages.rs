//! Request/response shapes shared by every transport.
//!
//! Message names match the ones the browser extension sends, so a popup,
//! page overlay or stdio client can talk to the same boundary.

use serde::{Deserialize, Serialize};

use crate::types::{HistoryEntry, TranslationResult, VocabularyEntry};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Request {
    Translate { text: String },
    GetGrammar { text: String },
    LoadHistory,
    LoadVocabulary,
    SaveVocabularyItem { item: VocabularyEntry },
}

impl Request {
    pub fn kind(&self) -> &'static str {
        match self {
            Request::Translate { .. } => "translate",
            Request::GetGrammar { .. } => "getGrammar",
            Request::LoadHistory => "loadHistory",
            Request::LoadVocabulary => "loadVocabulary",
            Request::SaveVocabularyItem { .. } => "saveVocabularyItem",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Translate(TranslateResponse),
    Grammar(GrammarResponse),
    History(DataResponse<HistoryEntry>),
    Vocabulary(DataResponse<VocabularyEntry>),
    SaveVocabulary(SaveVocabularyResponse),
    Error(ErrorResponse),
}

impl Response {
    pub fn error(message: impl Into<String>) -> Self {
        Response::Error(ErrorResponse {
            error: message.into(),
        })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub primary_translation: String,
    pub alternatives: Vec<String>,
}

impl From<TranslationResult> for TranslateResponse {
    fn from(result: TranslationResult) -> Self {
        Self {
            primary_translation: result.primary_translation,
            alternatives: result.alternatives,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarResponse {
    pub grammar: String,
}

/// A stored list; `error` is set when the list could not be read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> DataResponse<T> {
    pub fn ok(data: Vec<T>) -> Self {
        Self { data, error: None }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveVocabularyResponse {
    pub success: bool,
    /// Why the item was not added, e.g. it already exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Set when storage failed; `vocabulary` is then not the stored list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Vocabulary after the save, most recent first
    #[serde(default)]
    pub vocabulary: Vec<VocabularyEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
