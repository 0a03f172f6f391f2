use serde::{Deserialize, Deserializer, Serialize};

/// Decodes an explicit JSON `null` the same way as a missing field.
///
/// TMDB sends `null` for plenty of fields it documents as strings or numbers
/// (`overview`, `runtime`, `tagline` on obscure titles), and a single `null`
/// must not turn the whole record into a decode failure.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Minimal movie record shown as one cell of the popular grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MovieSummary {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
    /// ISO date (`2024-03-15`). Empty for unreleased or unknown titles.
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genre_ids: Vec<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Full movie record for the detail screen.
///
/// The detail endpoint returns every summary field at the top level, so the
/// summary is flattened rather than nested.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub summary: MovieSummary,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<Genre>,
    #[serde(rename = "runtime", default, deserialize_with = "null_as_default")]
    pub runtime_minutes: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_count: u64,
    #[serde(default)]
    pub tagline: Option<String>,
}

/// Response body of `/movie/popular`. Only the first page is ever read.
#[derive(Deserialize, Debug, Default)]
pub struct PopularPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<MovieSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_decodes_tmdb_payload() {
        let json = r#"{
            "adult": false,
            "backdrop_path": "/back.jpg",
            "genre_ids": [28, 12],
            "id": 693134,
            "original_language": "en",
            "overview": "Paul Atreides une-se a Chani.",
            "popularity": 1234.5,
            "poster_path": "/poster.jpg",
            "release_date": "2024-02-27",
            "title": "Duna: Parte Dois",
            "vote_average": 8.2,
            "vote_count": 5000
        }"#;

        let movie: MovieSummary = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 693134);
        assert_eq!(movie.title, "Duna: Parte Dois");
        assert_eq!(movie.poster_path.as_deref(), Some("/poster.jpg"));
        assert_eq!(movie.genre_ids, vec![28, 12]);
        assert!((movie.vote_average - 8.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_tolerates_nulls_and_missing_fields() {
        let json = r#"{"id": 7, "title": null, "poster_path": null, "release_date": null}"#;
        let movie: MovieSummary = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 7);
        assert_eq!(movie.title, "");
        assert_eq!(movie.poster_path, None);
        assert_eq!(movie.backdrop_path, None);
        assert_eq!(movie.release_date, "");
        assert_eq!(movie.vote_average, 0.0);
        assert!(movie.genre_ids.is_empty());
    }

    #[test]
    fn test_summary_requires_id() {
        let json = r#"{"title": "Sem id"}"#;
        assert!(serde_json::from_str::<MovieSummary>(json).is_err());
    }

    #[test]
    fn test_detail_flattens_summary_fields() {
        let json = r#"{
            "id": 550,
            "title": "Clube da Luta",
            "overview": "Um homem deprimido...",
            "release_date": "1999-10-15",
            "vote_average": 8.4,
            "vote_count": 27000,
            "runtime": 139,
            "tagline": "Caos. Confusão. Sabão.",
            "genres": [{"id": 18, "name": "Drama"}, {"id": 53, "name": "Thriller"}]
        }"#;

        let detail: MovieDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.summary.id, 550);
        assert_eq!(detail.summary.release_date, "1999-10-15");
        assert_eq!(detail.runtime_minutes, 139);
        assert_eq!(detail.vote_count, 27000);
        assert_eq!(detail.genres.len(), 2);
        assert_eq!(detail.genres[1].name, "Thriller");
        assert_eq!(detail.tagline.as_deref(), Some("Caos. Confusão. Sabão."));
        // The detail endpoint has `genres`, not `genre_ids`
        assert!(detail.summary.genre_ids.is_empty());
    }

    #[test]
    fn test_detail_null_runtime_is_zero() {
        let json = r#"{"id": 1, "runtime": null, "tagline": null}"#;
        let detail: MovieDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.runtime_minutes, 0);
        assert_eq!(detail.tagline, None);
    }

    #[test]
    fn test_popular_page_missing_results_is_empty() {
        let page: PopularPage = serde_json::from_str(r#"{"page": 1}"#).unwrap();
        assert!(page.results.is_empty());

        let page: PopularPage = serde_json::from_str(r#"{"results": null}"#).unwrap();
        assert!(page.results.is_empty());
    }
}
