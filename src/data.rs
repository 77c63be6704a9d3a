use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::page::Page;

/// Errors from loading the recommendation dataset.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned HTTP {0}")]
    Status(u16),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

// The source JSON is hand-maintained; any string or sequence may be
// missing or null, and that must parse as empty rather than fail.
fn null_to_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

/// One city, temple, or beach.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Place {
    #[serde(deserialize_with = "null_to_default")]
    pub name: String,
    #[serde(deserialize_with = "null_to_default")]
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

/// A country and its cities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Country {
    #[serde(deserialize_with = "null_to_default")]
    pub name: String,
    #[serde(deserialize_with = "null_to_default")]
    pub cities: Vec<Place>,
}

/// The full recommendation dataset. Loaded once at startup and
/// immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Dataset {
    #[serde(deserialize_with = "null_to_default")]
    pub countries: Vec<Country>,
    #[serde(deserialize_with = "null_to_default")]
    pub temples: Vec<Place>,
    #[serde(deserialize_with = "null_to_default")]
    pub beaches: Vec<Place>,
}

impl Dataset {
    /// Load the dataset from a filesystem path or an http(s) URL.
    pub async fn load(source: &str) -> Result<Dataset, DataError> {
        if source.starts_with("http://") || source.starts_with("https://") {
            let response = reqwest::get(source).await?;
            if !response.status().is_success() {
                return Err(DataError::Status(response.status().as_u16()));
            }
            Ok(response.json().await?)
        } else {
            let text = std::fs::read_to_string(source)?;
            Ok(serde_json::from_str(&text)?)
        }
    }

    /// Load for the UI: any failure leaves the dataset absent and the
    /// explorer degrades to "not loaded" messages. No retry, no timeout.
    pub async fn load_or_none(source: &str) -> Option<Dataset> {
        match Self::load(source).await {
            Ok(data) => Some(data),
            Err(e) => {
                eprintln!("Failed to load dataset from {source}: {e}");
                None
            }
        }
    }

    /// City at a fixed position, if present.
    pub fn city(&self, country_idx: usize, city_idx: usize) -> Option<&Place> {
        self.countries.get(country_idx)?.cities.get(city_idx)
    }

    pub fn first_beach(&self) -> Option<&Place> {
        self.beaches.first()
    }

    /// Banner image URL for a page. Positional lookup, not content-based:
    /// home and about take the first city of the first and second country,
    /// contact takes the first beach.
    pub fn background_image(&self, page: Page) -> Option<&str> {
        let place = match page {
            Page::Home => self.city(0, 0),
            Page::About => self.city(1, 0),
            Page::Contact => self.first_beach(),
        }?;
        place.image_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        serde_json::from_str(
            r#"{
                "countries": [
                    {
                        "name": "Australia",
                        "cities": [
                            {"name": "Sydney", "description": "Opera House", "imageUrl": "sydney.jpg"}
                        ]
                    },
                    {
                        "name": "Japan",
                        "cities": [
                            {"name": "Tokyo", "description": "Neon streets", "imageUrl": "tokyo.jpg"}
                        ]
                    }
                ],
                "temples": [
                    {"name": "Angkor Wat", "description": "Khmer ruins", "imageUrl": "angkor.jpg"}
                ],
                "beaches": [
                    {"name": "Bora Bora", "description": "Lagoon", "imageUrl": "bora.jpg"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_tolerates_missing_fields() {
        let data: Dataset = serde_json::from_str(
            r#"{"countries": [{"cities": [{"name": "Sydney"}]}]}"#,
        )
        .unwrap();
        assert_eq!(data.countries[0].name, "");
        assert_eq!(data.countries[0].cities[0].description, "");
        assert!(data.countries[0].cities[0].image_url.is_none());
        assert!(data.temples.is_empty());
        assert!(data.beaches.is_empty());
    }

    #[test]
    fn test_parse_tolerates_nulls_and_unknown_keys() {
        let data: Dataset = serde_json::from_str(
            r#"{
                "countries": null,
                "temples": [{"name": null, "description": null, "imageUrl": null, "rating": 5}],
                "extra": true
            }"#,
        )
        .unwrap();
        assert!(data.countries.is_empty());
        assert_eq!(data.temples[0].name, "");
        assert!(data.temples[0].image_url.is_none());
    }

    #[test]
    fn test_background_per_page() {
        let data = sample();
        assert_eq!(data.background_image(Page::Home), Some("sydney.jpg"));
        assert_eq!(data.background_image(Page::About), Some("tokyo.jpg"));
        assert_eq!(data.background_image(Page::Contact), Some("bora.jpg"));
    }

    #[test]
    fn test_background_absent_when_element_missing() {
        let data = Dataset::default();
        assert_eq!(data.background_image(Page::Home), None);
        assert_eq!(data.background_image(Page::About), None);
        assert_eq!(data.background_image(Page::Contact), None);

        // A city without an image URL is addressable but yields no banner.
        let mut data = sample();
        data.countries[0].cities[0].image_url = None;
        assert_eq!(data.background_image(Page::Home), None);
    }

    #[test]
    fn test_positional_accessors() {
        let data = sample();
        assert_eq!(data.city(0, 0).unwrap().name, "Sydney");
        assert_eq!(data.city(1, 0).unwrap().name, "Tokyo");
        assert!(data.city(2, 0).is_none());
        assert!(data.city(0, 5).is_none());
        assert_eq!(data.first_beach().unwrap().name, "Bora Bora");
    }
}
