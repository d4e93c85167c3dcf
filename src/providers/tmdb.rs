use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::model::LabelSequence;
use crate::providers::{GenreRef, ProviderError};

pub const POSTER_BASE_URL: &str = "image.tmdb.org/t/p/original";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbSearchResponse {
    #[serde(default)]
    pub results: Vec<TmdbSearchHit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbSearchHit {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieInfo {
    pub id: u64,
    pub original_title: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub genres: Vec<GenreRef>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

impl TmdbMovieInfo {
    pub fn genre_labels(&self) -> LabelSequence {
        self.genres.iter().map(|g| g.name.clone()).collect()
    }
}

/// Search handle supplied by the caller, typically wrapping a TMDB client.
pub trait TmdbSearch {
    fn search_movie(&self, query: &str) -> Result<TmdbSearchResponse, ProviderError>;
    fn movie_info(&self, id: u64) -> Result<TmdbMovieInfo, ProviderError>;
}

/// Where a poster lives and where it should be saved. Downloading is up to
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterRequest {
    pub url: String,
    pub file_path: PathBuf,
}

pub fn get_movie_id(movie_name: &str, search: &dyn TmdbSearch) -> Result<u64, ProviderError> {
    debug!("searching movie {} in TMDB", movie_name);
    let response = search.search_movie(movie_name)?;
    let hit = response
        .results
        .first()
        .ok_or_else(|| ProviderError::NoResults {
            query: movie_name.to_string(),
        })?;
    debug!("movie id ({}) for movie {}", hit.id, movie_name);
    Ok(hit.id)
}

pub fn get_movie_info(
    movie_name: &str,
    search: &dyn TmdbSearch,
) -> Result<TmdbMovieInfo, ProviderError> {
    let id = get_movie_id(movie_name, search)?;
    search.movie_info(id)
}

pub fn get_movie_genres(
    movie_name: &str,
    search: &dyn TmdbSearch,
) -> Result<LabelSequence, ProviderError> {
    let info = get_movie_info(movie_name, search)?;
    let genres = info.genre_labels();
    debug!("movie genres retrieved for {}: {}", movie_name, genres);
    Ok(genres)
}

pub fn poster_request(
    movie_name: &str,
    search: &dyn TmdbSearch,
    out_dir: &Path,
) -> Result<PosterRequest, ProviderError> {
    let info = get_movie_info(movie_name, search)?;
    let poster_path = info
        .poster_path
        .as_deref()
        .ok_or(ProviderError::MissingField {
            field: "poster_path",
        })?;
    let url = format!("{POSTER_BASE_URL}{poster_path}");
    let file_path = out_dir.join(poster_file_name(&info.original_title));
    debug!("poster for {} at {}", movie_name, url);
    Ok(PosterRequest { url, file_path })
}

pub fn poster_file_name(original_title: &str) -> String {
    format!("{}.jpg", original_title.replace(' ', "_"))
}

#[cfg(test)]
#[path = "../../tests/src_inline/providers/tmdb.rs"]
mod tests;
