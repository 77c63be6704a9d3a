use crate::data::{Dataset, Place};

/// One card shown in the results panel. Built fresh per search,
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub image_url: Option<String>,
    pub description: String,
    pub tag: String,
}

impl Entry {
    fn from_place(place: &Place, tag: &str) -> Self {
        Entry {
            name: place.name.clone(),
            image_url: place.image_url.clone(),
            description: place.description.clone(),
            tag: tag.to_string(),
        }
    }
}

fn contains(haystack: &str, query: &str) -> bool {
    haystack.to_lowercase().contains(query)
}

/// Substring search over the dataset. `query` must already be trimmed and
/// lowercased by the caller. Results are concatenated in category order
/// cities, temples, beaches, insertion order preserved within each.
///
/// Temples and beaches also match whenever the query itself contains the
/// literal word "temple" / "beach", regardless of content.
pub fn search(data: &Dataset, query: &str) -> Vec<Entry> {
    let mut found = Vec::new();

    for country in &data.countries {
        let country_match = contains(&country.name, query);
        for city in &country.cities {
            if country_match
                || contains(&city.name, query)
                || contains(&city.description, query)
            {
                found.push(Entry::from_place(city, &country.name));
            }
        }
    }

    for temple in &data.temples {
        if contains(&temple.name, query)
            || contains(&temple.description, query)
            || query.contains("temple")
        {
            found.push(Entry::from_place(temple, "Temples"));
        }
    }

    for beach in &data.beaches {
        if contains(&beach.name, query)
            || contains(&beach.description, query)
            || query.contains("beach")
        {
            found.push(Entry::from_place(beach, "Beaches"));
        }
    }

    found
}

/// The two fixed cards shown on the home page before any search: first
/// city of the first and third country. Absent ones are skipped.
pub fn default_entries(data: &Dataset) -> Vec<Entry> {
    [data.city(0, 0), data.city(2, 0)]
        .into_iter()
        .flatten()
        .map(|city| Entry::from_place(city, ""))
        .collect()
}
