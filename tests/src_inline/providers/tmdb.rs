use std::collections::HashMap;

use super::*;

struct FakeTmdb {
    hits: HashMap<String, Vec<u64>>,
    movies: HashMap<u64, TmdbMovieInfo>,
}

impl FakeTmdb {
    fn matrix() -> Self {
        let info: TmdbMovieInfo = serde_json::from_str(
            r#"{
                "id": 603,
                "original_title": "The Matrix",
                "title": "The Matrix",
                "poster_path": "/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg",
                "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}],
                "release_date": "1999-03-30",
                "vote_average": 8.2
            }"#,
        )
        .unwrap();
        let mut hits = HashMap::new();
        hits.insert("The Matrix".to_string(), vec![603, 604]);
        let mut movies = HashMap::new();
        movies.insert(603, info);
        Self { hits, movies }
    }
}

impl TmdbSearch for FakeTmdb {
    fn search_movie(&self, query: &str) -> Result<TmdbSearchResponse, ProviderError> {
        let results = self
            .hits
            .get(query)
            .map(|ids| {
                ids.iter()
                    .map(|&id| TmdbSearchHit {
                        id,
                        title: None,
                        original_title: None,
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(TmdbSearchResponse { results })
    }

    fn movie_info(&self, id: u64) -> Result<TmdbMovieInfo, ProviderError> {
        self.movies
            .get(&id)
            .cloned()
            .ok_or_else(|| ProviderError::Backend(format!("unknown id {id}")))
    }
}

#[test]
fn test_get_movie_id_takes_first_hit() {
    let fake = FakeTmdb::matrix();
    assert_eq!(get_movie_id("The Matrix", &fake).unwrap(), 603);
}

#[test]
fn test_get_movie_id_no_results() {
    let fake = FakeTmdb::matrix();
    let err = get_movie_id("Nope", &fake).unwrap_err();
    assert!(matches!(err, ProviderError::NoResults { ref query } if query == "Nope"));
}

#[test]
fn test_get_movie_info_and_genres() {
    let fake = FakeTmdb::matrix();
    let info = get_movie_info("The Matrix", &fake).unwrap();
    assert_eq!(info.original_title, "The Matrix");
    assert_eq!(info.release_date.as_deref(), Some("1999-03-30"));
    let genres = get_movie_genres("The Matrix", &fake).unwrap();
    assert_eq!(genres.as_slice(), &["Action", "Science Fiction"]);
}

#[test]
fn test_search_response_parses_results() {
    let resp: TmdbSearchResponse = serde_json::from_str(
        r#"{"page":1,"results":[{"id":603,"title":"The Matrix","original_title":"The Matrix"}],"total_results":1}"#,
    )
    .unwrap();
    assert_eq!(resp.results.len(), 1);
    assert_eq!(resp.results[0].title.as_deref(), Some("The Matrix"));

    let empty: TmdbSearchResponse = serde_json::from_str("{}").unwrap();
    assert!(empty.results.is_empty());
}

#[test]
fn test_poster_request() {
    let fake = FakeTmdb::matrix();
    let req = poster_request("The Matrix", &fake, Path::new("posters")).unwrap();
    assert_eq!(
        req.url,
        "image.tmdb.org/t/p/original/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg"
    );
    assert_eq!(req.file_path, Path::new("posters").join("The_Matrix.jpg"));
}

#[test]
fn test_poster_request_without_poster() {
    let mut fake = FakeTmdb::matrix();
    if let Some(info) = fake.movies.get_mut(&603) {
        info.poster_path = None;
    }
    let err = poster_request("The Matrix", &fake, Path::new(".")).unwrap_err();
    assert!(matches!(
        err,
        ProviderError::MissingField {
            field: "poster_path"
        }
    ));
}

#[test]
fn test_poster_file_name_keeps_other_characters() {
    assert_eq!(poster_file_name("Amélie"), "Amélie.jpg");
    assert_eq!(poster_file_name("2001: A Space Odyssey"), "2001:_A_Space_Odyssey.jpg");
}
