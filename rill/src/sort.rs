// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Catalog sort options and their API-level sort keys.

use serde::{Deserialize, Serialize};

/// Sort options offered by the catalog browsing UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOption {
    Title,
    StartDate,
    Popularity,
    AverageScore,
    Trending,
    Favourites,
    Episodes,
}

/// Sort keys understood by the catalog API.
///
/// Serializes to the wire-level names (`TITLE_ENGLISH`, `START_DATE`, ...)
/// used in query variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaSortKey {
    TitleEnglish,
    StartDate,
    Popularity,
    Score,
    Trending,
    Favourites,
    Episodes,
}

impl SortOption {
    /// Maps the UI-level option onto the API-level sort key.
    pub const fn to_media_sort(self) -> MediaSortKey {
        match self {
            SortOption::Title => MediaSortKey::TitleEnglish,
            SortOption::StartDate => MediaSortKey::StartDate,
            SortOption::Popularity => MediaSortKey::Popularity,
            SortOption::AverageScore => MediaSortKey::Score,
            SortOption::Trending => MediaSortKey::Trending,
            SortOption::Favourites => MediaSortKey::Favourites,
            SortOption::Episodes => MediaSortKey::Episodes,
        }
    }
}
