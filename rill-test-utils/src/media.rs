// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Catalog-flavored fixture data.

/// A catalog entry as the browsing layer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaEntry {
    pub id: u32,
    pub title: String,
    pub score: u32,
}

impl MediaEntry {
    pub fn new(id: u32, title: impl Into<String>, score: u32) -> Self {
        Self {
            id,
            title: title.into(),
            score,
        }
    }

    /// Same entry with an updated score.
    pub fn with_score(&self, score: u32) -> Self {
        Self {
            id: self.id,
            title: self.title.clone(),
            score,
        }
    }
}

pub fn entry_blade() -> MediaEntry {
    MediaEntry::new(1, "Moonlit Blade", 84)
}

pub fn entry_cranes() -> MediaEntry {
    MediaEntry::new(2, "Paper Cranes", 77)
}

pub fn entry_drift() -> MediaEntry {
    MediaEntry::new(3, "Neon Drift", 91)
}

pub fn entry_harbor() -> MediaEntry {
    MediaEntry::new(4, "Quiet Harbor", 68)
}

pub fn entry_garden() -> MediaEntry {
    MediaEntry::new(5, "Iron Garden", 73)
}
