use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use typed_builder::TypedBuilder;

/// A single movie entry in the catalogue.
///
/// Genres are held as a set: duplicates in the incoming JSON list collapse
/// on deserialization, and the set serializes back as a sorted list. Every
/// field, `genres` included, is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MovieRecord {
    #[builder(setter(into))]
    pub title: String,
    pub year: i32,
    /// Running time in minutes.
    pub runtime: i32,
    pub rating: f64,
    #[builder(default, setter(into))]
    pub description: String,
    #[builder(default, setter(into))]
    pub director: String,
    /// Billing order is preserved.
    #[builder(default)]
    pub actors: Vec<String>,
    #[builder(default, setter(into))]
    pub url: String,
    #[builder(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<String>))]
    pub genres: BTreeSet<String>,
}

impl Display for MovieRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_movie(genres: serde_json::Value) -> serde_json::Value {
        json!({
            "title": "Pelíšky",
            "year": 1999,
            "runtime": 115,
            "rating": 8.9,
            "description": "Two families in Prague, 1967.",
            "director": "Jan Hřebejk",
            "actors": ["Jiří Kodet", "Miroslav Donutil", "Bolek Polívka"],
            "url": "https://example.com/pelisky",
            "genres": genres,
        })
    }

    #[test]
    fn duplicate_genres_collapse() {
        let record: MovieRecord = serde_json::from_value(raw_movie(json!(["a", "a", "b"]))).unwrap();

        assert_eq!(record.genres.len(), 2);
        assert!(record.genres.contains("a"));
        assert!(record.genres.contains("b"));
    }

    #[test]
    fn actors_keep_their_order() {
        let record: MovieRecord = serde_json::from_value(raw_movie(json!([]))).unwrap();

        assert_eq!(
            record.actors,
            vec!["Jiří Kodet", "Miroslav Donutil", "Bolek Polívka"]
        );
    }

    #[test]
    fn missing_genres_is_rejected() {
        let mut raw = raw_movie(json!([]));
        raw.as_object_mut().unwrap().remove("genres");

        let err = serde_json::from_value::<MovieRecord>(raw).unwrap_err();
        assert!(err.to_string().contains("genres"));
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let mut raw = raw_movie(json!([]));
        raw.as_object_mut().unwrap().remove("year");

        let err = serde_json::from_value::<MovieRecord>(raw).unwrap_err();
        assert!(err.to_string().contains("year"));
    }

    #[test]
    fn wrong_type_is_rejected() {
        let mut raw = raw_movie(json!([]));
        raw["runtime"] = json!("two hours");

        assert!(serde_json::from_value::<MovieRecord>(raw).is_err());
    }

    #[test]
    fn genres_serialize_sorted_and_unique() {
        let record: MovieRecord =
            serde_json::from_value(raw_movie(json!(["drama", "comedy", "drama"]))).unwrap();

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["genres"], json!(["comedy", "drama"]));
    }

    #[test]
    fn builder_fills_defaults() {
        let record = MovieRecord::builder()
            .title("Kolja")
            .year(1996)
            .runtime(105)
            .rating(8.5)
            .build();

        assert_eq!(record.to_string(), "Kolja (1996)");
        assert!(record.actors.is_empty());
        assert!(record.genres.is_empty());
    }
}
