//! Adapters that turn movie-database payloads into [`LabelSequence`]s.
//!
//! Fetching is left to a caller-supplied search handle (see [`tmdb::TmdbSearch`]
//! and [`imdb::ImdbSearch`]); nothing in this module talks to the network.

pub mod imdb;
pub mod tmdb;

use serde::Deserialize;

use crate::model::LabelSequence;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("no results for query {query:?}")]
    NoResults { query: String },
    #[error("missing field in provider response: {field}")]
    MissingField { field: &'static str },
    #[error("provider backend error: {0}")]
    Backend(String),
}

/// A genre entry as TMDB returns it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenreRef {
    pub id: u64,
    pub name: String,
}

/// Genres in either provider shape: TMDB objects or IMDb-style strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum GenreField {
    Objects(Vec<GenreRef>),
    Names(Vec<String>),
}

impl GenreField {
    pub fn into_labels(self) -> LabelSequence {
        match self {
            GenreField::Objects(genres) => genres.into_iter().map(|g| g.name).collect(),
            GenreField::Names(names) => LabelSequence::new(names),
        }
    }
}

impl From<GenreField> for LabelSequence {
    fn from(value: GenreField) -> Self {
        value.into_labels()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/providers/mod.rs"]
mod tests;
