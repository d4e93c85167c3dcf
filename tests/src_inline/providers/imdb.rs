use std::cell::Cell;

use super::*;

struct FakeImdb {
    updates: Cell<usize>,
}

impl ImdbSearch for FakeImdb {
    fn search_movie(&self, movie_name: &str) -> Result<Vec<ImdbMovie>, ProviderError> {
        if movie_name != "The Matrix" {
            return Ok(Vec::new());
        }
        Ok(vec![
            ImdbMovie {
                id: "0133093".to_string(),
                title: "The Matrix".to_string(),
                ..Default::default()
            },
            ImdbMovie {
                id: "0234215".to_string(),
                title: "The Matrix Reloaded".to_string(),
                ..Default::default()
            },
        ])
    }

    fn update(&self, movie: &mut ImdbMovie) -> Result<(), ProviderError> {
        self.updates.set(self.updates.get() + 1);
        if movie.id == "0133093" {
            movie.genres = vec!["Action".to_string(), "Sci-Fi".to_string()];
            movie.year = Some(1999);
            movie.rating = Some(8.7);
        }
        Ok(())
    }
}

#[test]
fn test_get_movie_info_enriches_first_hit() {
    let fake = FakeImdb {
        updates: Cell::new(0),
    };
    let movie = get_movie_info("The Matrix", &fake).unwrap();
    assert_eq!(movie.id, "0133093");
    assert_eq!(movie.year, Some(1999));
    assert_eq!(fake.updates.get(), 1);
}

#[test]
fn test_get_movie_genres() {
    let fake = FakeImdb {
        updates: Cell::new(0),
    };
    let genres = get_movie_genres("The Matrix", &fake).unwrap();
    assert_eq!(genres.as_slice(), &["Action", "Sci-Fi"]);
}

#[test]
fn test_no_results() {
    let fake = FakeImdb {
        updates: Cell::new(0),
    };
    let err = get_movie_genres("Unknown", &fake).unwrap_err();
    assert!(matches!(err, ProviderError::NoResults { .. }));
    assert_eq!(fake.updates.get(), 0);
}
