//! Wire types for the `/analyze` endpoint.
//!
//! These are plain display records deserialized from the analysis service's
//! JSON response. None of them outlive the current search: the whole
//! [`AnalysisResult`] is replaced wholesale on every submission.

use serde::Deserialize;

/// The movie the user searched for, echoed back and enriched by the service.
///
/// `id`, `overview`, and `genres` are returned by the service but not
/// guaranteed by the contract, so they default to empty when absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryMovie {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub release_date: String,
    pub runtime: String,
    pub rating: f64,
    #[serde(default)]
    pub genres: String,
}

/// One ranked recommendation from the analysis service.
///
/// Rank is implied by position in [`AnalysisResult::similar_movies`]
/// (index 0 is the best match); the client never re-sorts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimilarMovie {
    pub title: String,
    /// Match percentage in the 0-100 range.
    pub similarity: f64,
    /// One-sentence explanation of why the movies are similar.
    pub justification: String,
    /// Genres shared with the query movie, in service order.
    pub shared_genres: Vec<String>,
    /// All genres of this movie as a comma-separated string.
    pub genres: String,
}

impl SimilarMovie {
    /// Split the comma-separated `genres` string into individual genre names.
    ///
    /// Empty segments and surrounding whitespace are dropped.
    pub fn genre_list(&self) -> Vec<&str> {
        self.genres
            .split(',')
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .collect()
    }
}

/// Complete response for one analysis request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisResult {
    pub query_movie: QueryMovie,
    pub similar_movies: Vec<SimilarMovie>,
}

/// Error payload the service returns with non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_response() {
        let json = r#"{
            "query_movie": {
                "id": "603",
                "title": "The Matrix",
                "overview": "A computer hacker learns about the true nature of reality.",
                "release_date": "1999-03-30",
                "genres": "Action, Science Fiction",
                "rating": 8.2,
                "runtime": "136min"
            },
            "similar_movies": [
                {
                    "title": "Inception",
                    "genres": "Action, Science Fiction, Adventure",
                    "similarity": 91.5,
                    "justification": "Both explore layered realities.",
                    "shared_genres": ["Action", "Science Fiction"]
                }
            ]
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.query_movie.title, "The Matrix");
        assert_eq!(result.query_movie.rating, 8.2);
        assert_eq!(result.similar_movies.len(), 1);
        assert_eq!(result.similar_movies[0].similarity, 91.5);
        assert_eq!(
            result.similar_movies[0].shared_genres,
            vec!["Action", "Science Fiction"]
        );
    }

    #[test]
    fn test_deserialize_without_optional_query_fields() {
        let json = r#"{
            "query_movie": {
                "title": "Heat",
                "release_date": "1995-12-15",
                "rating": 7.9,
                "runtime": "170min"
            },
            "similar_movies": []
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.query_movie.title, "Heat");
        assert!(result.query_movie.id.is_empty());
        assert!(result.query_movie.overview.is_empty());
        assert!(result.similar_movies.is_empty());
    }

    #[test]
    fn test_deserialize_rejects_missing_required_field() {
        // similarity is required; a body without it is malformed
        let json = r#"{
            "query_movie": {
                "title": "Heat",
                "release_date": "1995-12-15",
                "rating": 7.9,
                "runtime": "170min"
            },
            "similar_movies": [
                {"title": "Ronin", "justification": "", "shared_genres": [], "genres": ""}
            ]
        }"#;

        assert!(serde_json::from_str::<AnalysisResult>(json).is_err());
    }

    #[test]
    fn test_genre_list_splits_and_trims() {
        let movie = SimilarMovie {
            title: "Inception".to_string(),
            similarity: 91.5,
            justification: String::new(),
            shared_genres: vec![],
            genres: "Action, Science Fiction,  Adventure".to_string(),
        };
        assert_eq!(
            movie.genre_list(),
            vec!["Action", "Science Fiction", "Adventure"]
        );
    }

    #[test]
    fn test_genre_list_empty_string() {
        let movie = SimilarMovie {
            title: "Inception".to_string(),
            similarity: 91.5,
            justification: String::new(),
            shared_genres: vec![],
            genres: String::new(),
        };
        assert!(movie.genre_list().is_empty());
    }

    #[test]
    fn test_error_body_detail_defaults_to_empty() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.detail.is_empty());

        let body: ErrorBody = serde_json::from_str(r#"{"detail": "Movie not found"}"#).unwrap();
        assert_eq!(body.detail, "Movie not found");
    }
}
