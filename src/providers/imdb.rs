use serde::Deserialize;
use tracing::debug;

use crate::model::LabelSequence;
use crate::providers::ProviderError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImdbMovie {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Search handle supplied by the caller. Search hits are usually sparse;
/// `update` fills in the remaining fields.
pub trait ImdbSearch {
    fn search_movie(&self, movie_name: &str) -> Result<Vec<ImdbMovie>, ProviderError>;
    fn update(&self, movie: &mut ImdbMovie) -> Result<(), ProviderError>;
}

pub fn get_movie_info(
    movie_name: &str,
    search: &dyn ImdbSearch,
) -> Result<ImdbMovie, ProviderError> {
    debug!("searching movie {} in IMDb", movie_name);
    let mut movie = search
        .search_movie(movie_name)?
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::NoResults {
            query: movie_name.to_string(),
        })?;
    search.update(&mut movie)?;
    Ok(movie)
}

pub fn get_movie_genres(
    movie_name: &str,
    search: &dyn ImdbSearch,
) -> Result<LabelSequence, ProviderError> {
    let movie = get_movie_info(movie_name, search)?;
    let genres = LabelSequence::new(movie.genres);
    debug!("movie genres retrieved for {}: {}", movie_name, genres);
    Ok(genres)
}

#[cfg(test)]
#[path = "../../tests/src_inline/providers/imdb.rs"]
mod tests;
