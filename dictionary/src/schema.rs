//! Typed view of the Merriam-Webster response shape. The vendor mixes strings,
//! arrays and objects freely inside the same lists, so every polymorphic level
//! gets an untagged enum with a catch-all variant instead of ad hoc probing.
//! Every field is defaulted: a missing or unexpected value degrades to empty,
//! it never fails the entry.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Entry {
    pub meta: Option<Meta>,
    pub hwi: Option<HeadwordInfo>,
    pub fl: Option<String>,
    pub et: Option<Vec<EtItem>>,
    #[serde(rename = "def")]
    pub def_sections: Option<Vec<DefSection>>,
    pub shortdef: Option<Vec<String>>,
}

/// `meta` carries the entry id for both APIs and the synonym/antonym groups
/// for the thesaurus one.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub id: String,
    pub syns: Vec<Vec<String>>,
    pub ants: Vec<Vec<String>>,
    pub rel: Vec<Vec<String>>,
    pub near: Vec<Vec<String>>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct HeadwordInfo {
    pub prs: Vec<Pronunciation>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Pronunciation {
    pub mw: String,
    pub sound: Option<Sound>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Sound {
    pub audio: String,
}

/// Etymology items are `[tag, payload]` pairs; only `["text", "..."]` carries
/// displayable text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EtItem {
    Tagged(String, String),
    Other(Value),
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct DefSection {
    pub sseq: Vec<Vec<SenseItem>>,
}

/// A sense sequence element is a `[tag, body]` pair whose body is an object
/// for plain senses; parenthesized sequences and binding substitutes carry
/// arrays and fall through to `Other`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SenseItem {
    Tagged(String, Sense),
    Other(Value),
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Sense {
    pub dt: Vec<DtItem>,
}

/// Defining-text items: `["text", string]` for definition text, `["vis", [...]]`
/// for verbal illustrations, anything else is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DtItem {
    Text(String, String),
    Vis(String, Vec<VisItem>),
    Other(Value),
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct VisItem {
    pub t: String,
}
