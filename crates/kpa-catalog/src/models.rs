use std::collections::BTreeMap;

use kpa_assign::{Identified, Tiered};
use serde::{Deserialize, Serialize};

/// Pronunciation set - words, sentences and a paragraph read aloud
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PronSet {
    /// Set identifier (e.g. "A")
    pub id: String,
    /// Display name (e.g. "세트 A")
    pub name: String,
    /// Single words
    pub words: Vec<String>,
    /// Sentences ordered beginner, intermediate, advanced
    pub sentences: Vec<String>,
    /// Paragraph read as one recording
    pub paragraph: String,
}

impl PronSet {
    /// Reading tasks of the set in presentation order: every word, then every
    /// sentence, then the paragraph.
    pub fn reading_tasks(&self) -> Vec<ReadingTask> {
        let words = self
            .words
            .iter()
            .map(|text| ReadingTask::new(RecordingType::Word, text.as_str()));
        let sentences = self
            .sentences
            .iter()
            .map(|text| ReadingTask::new(RecordingType::Sentence, text.as_str()));
        let paragraph = ReadingTask::new(RecordingType::Paragraph, self.paragraph.as_str());

        words
            .chain(sentences)
            .chain(std::iter::once(paragraph))
            .collect()
    }
}

impl Identified for PronSet {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Kind of recording, sent along with the audio upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordingType {
    /// Single word
    Word,
    /// Sentence
    Sentence,
    /// Paragraph
    Paragraph,
}

impl RecordingType {
    /// Wire name of the recording type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Sentence => "sentence",
            Self::Paragraph => "paragraph",
        }
    }
}

/// One text a participant reads aloud
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingTask {
    /// Recording type tag of the task
    pub recording_type: RecordingType,
    /// Text the transcript is evaluated against
    pub expected_text: String,
}

impl ReadingTask {
    fn new(recording_type: RecordingType, expected_text: impl Into<String>) -> Self {
        Self {
            recording_type,
            expected_text: expected_text.into(),
        }
    }
}

/// Speaking question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakItem {
    /// Speaking grade (1-6) the question belongs to
    pub grade: u8,
    /// Question identifier (set, grade, number, e.g. "A-3-01")
    pub id: String,
    /// Question text, may span several lines
    pub prompt: String,
    /// Answer guide hints
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
    /// Picture shown with the question
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Audio of the question being read
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

/// Speaking set - questions grouped by speaking grade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakSet {
    /// Set identifier (e.g. "A")
    pub id: String,
    /// Display name
    pub name: String,
    /// Questions per speaking grade
    pub items_by_grade: BTreeMap<u8, Vec<SpeakItem>>,
}

impl Identified for SpeakSet {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Tiered for SpeakSet {
    type Tier = u8;
    type Item = SpeakItem;

    fn tier_items(&self, tier: &u8) -> Option<&[SpeakItem]> {
        self.items_by_grade.get(tier).map(Vec::as_slice)
    }
}

/// Task type and timing of a speaking grade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskMeta {
    /// Kind of task (e.g. "경험 서술하기")
    pub task_type: String,
    /// Preparation time in seconds
    pub prep_sec: u32,
    /// Answer time in seconds
    pub answer_sec: u32,
}

/// Speaking question chosen for a participant, with its grade's task meta
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeakingQuestion {
    /// Set the question comes from
    pub set_id: String,
    /// Display name of the set
    pub set_name: String,
    /// Speaking grade
    pub grade: u8,
    /// Kind of task
    pub task_type: String,
    /// Preparation time in seconds
    pub prep_sec: u32,
    /// Answer time in seconds
    pub answer_sec: u32,
    /// The question
    pub item: SpeakItem,
}
