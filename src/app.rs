use crate::data::Dataset;
use crate::page::Page;
use crate::search::{self, Entry};

/// Input mode for the search bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

pub const MSG_NOT_LOADED: &str = "Data not loaded.";
pub const MSG_EMPTY_QUERY: &str = "Please enter a valid search query.";

/// Main application state. The dataset is injected once after the startup
/// load and never mutated.
pub struct App {
    pub dataset: Option<Dataset>,
    pub page: Page,
    /// The search UI exists only on the home page. Decided once here;
    /// every search/clear transition no-ops when false.
    pub search_enabled: bool,
    pub should_quit: bool,
    pub show_help: bool,

    pub query: String,
    pub input_mode: InputMode,

    /// Cards currently shown in the results panel.
    pub results: Vec<Entry>,

    /// Single status message region. Last write wins.
    pub message: Option<String>,

    /// Banner image URL picked for this page, if the dataset has one.
    pub banner_url: Option<String>,
}

impl App {
    pub fn new(dataset: Option<Dataset>, page: Page) -> Self {
        let banner_url = dataset
            .as_ref()
            .and_then(|d| d.background_image(page))
            .map(str::to_string);

        let mut app = App {
            dataset,
            page,
            search_enabled: page == Page::Home,
            should_quit: false,
            show_help: false,
            query: String::new(),
            input_mode: InputMode::Normal,
            results: Vec::new(),
            message: None,
            banner_url,
        };

        if app.page == Page::Home {
            app.render_default_cards();
        }
        app
    }

    pub fn show_message(&mut self, text: impl Into<String>) {
        self.message = Some(text.into());
    }

    pub fn hide_message(&mut self) {
        self.message = None;
    }

    /// Replace the results panel wholesale; nothing from the previous
    /// render survives.
    fn set_results(&mut self, entries: Vec<Entry>) {
        self.results = entries;
    }

    /// Show the two fixed home cards. Does nothing without a dataset.
    pub fn render_default_cards(&mut self) {
        if let Some(ref data) = self.dataset {
            let entries = search::default_entries(data);
            self.set_results(entries);
        }
    }

    /// Run a search for the current query. Checks are ordered as the user
    /// sees them: missing dataset first, then an empty query, and only
    /// then the engine.
    pub fn run_search(&mut self) {
        if !self.search_enabled {
            return;
        }

        let raw = self.query.clone();
        let trimmed = raw.trim().to_lowercase();

        let results = match self.dataset {
            Some(ref data) if !trimmed.is_empty() => search::search(data, &trimmed),
            Some(_) => {
                self.show_message(MSG_EMPTY_QUERY);
                return;
            }
            None => {
                self.show_message(MSG_NOT_LOADED);
                return;
            }
        };

        if results.is_empty() {
            self.show_message(format!(
                "No results found for \"{raw}\". Try: sydney, beach, tokyo, temple..."
            ));
            self.set_results(Vec::new());
            return;
        }

        self.hide_message();
        self.set_results(results);
    }

    /// Reset the search UI: empty query, no message, default cards, and
    /// focus back on the input.
    pub fn clear_search(&mut self) {
        if !self.search_enabled {
            return;
        }
        self.query.clear();
        self.hide_message();
        self.render_default_cards();
        self.input_mode = InputMode::Editing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Country, Dataset, Place};

    fn place(name: &str, description: &str) -> Place {
        Place {
            name: name.to_string(),
            description: description.to_string(),
            image_url: Some(format!("{}.jpg", name.to_lowercase())),
        }
    }

    fn sample() -> Dataset {
        Dataset {
            countries: vec![
                Country {
                    name: "Australia".to_string(),
                    cities: vec![place("Sydney", "Opera House")],
                },
                Country {
                    name: "Japan".to_string(),
                    cities: vec![place("Tokyo", "Neon streets")],
                },
                Country {
                    name: "Brazil".to_string(),
                    cities: vec![place("Rio de Janeiro", "Carnival city")],
                },
            ],
            temples: vec![place("Angkor Wat", "Khmer ruins")],
            beaches: vec![place("Bora Bora", "Lagoon")],
        }
    }

    #[test]
    fn test_home_starts_with_default_cards_and_no_message() {
        let app = App::new(Some(sample()), Page::Home);
        let names: Vec<&str> = app.results.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Sydney", "Rio de Janeiro"]);
        assert!(app.message.is_none());
        assert!(app.search_enabled);
    }

    #[test]
    fn test_banner_picked_per_page() {
        let app = App::new(Some(sample()), Page::Contact);
        assert_eq!(app.banner_url.as_deref(), Some("bora bora.jpg"));
        assert!(!app.search_enabled);
    }

    #[test]
    fn test_search_without_dataset_shows_not_loaded() {
        let mut app = App::new(None, Page::Home);
        app.query = "sydney".to_string();
        app.run_search();
        assert_eq!(app.message.as_deref(), Some(MSG_NOT_LOADED));
        assert!(app.results.is_empty());
    }

    #[test]
    fn test_blank_query_short_circuits_before_engine() {
        let mut app = App::new(Some(sample()), Page::Home);
        app.query = "   ".to_string();
        app.run_search();
        assert_eq!(app.message.as_deref(), Some(MSG_EMPTY_QUERY));
        // The default cards are left untouched.
        assert_eq!(app.results.len(), 2);
    }

    #[test]
    fn test_no_results_shows_message_and_clears_cards() {
        let mut app = App::new(Some(sample()), Page::Home);
        app.query = "zzz".to_string();
        app.run_search();
        assert_eq!(
            app.message.as_deref(),
            Some("No results found for \"zzz\". Try: sydney, beach, tokyo, temple...")
        );
        assert!(app.results.is_empty());

        // Running again leaves the panel empty, with no residue.
        app.run_search();
        assert!(app.results.is_empty());
    }

    #[test]
    fn test_no_results_message_echoes_raw_query() {
        let mut app = App::new(Some(sample()), Page::Home);
        app.query = "  ZzZ ".to_string();
        app.run_search();
        assert_eq!(
            app.message.as_deref(),
            Some("No results found for \"  ZzZ \". Try: sydney, beach, tokyo, temple...")
        );
    }

    #[test]
    fn test_successful_search_hides_message() {
        let mut app = App::new(Some(sample()), Page::Home);
        app.query = "zzz".to_string();
        app.run_search();
        assert!(app.message.is_some());

        app.query = "  Sydney ".to_string();
        app.run_search();
        assert!(app.message.is_none());
        assert_eq!(app.results.len(), 1);
        assert_eq!(app.results[0].tag, "Australia");
    }

    #[test]
    fn test_clear_restores_defaults_and_focus() {
        let mut app = App::new(Some(sample()), Page::Home);
        app.query = "zzz".to_string();
        app.run_search();

        app.clear_search();
        assert!(app.query.is_empty());
        assert!(app.message.is_none());
        assert_eq!(app.results.len(), 2);
        assert_eq!(app.input_mode, InputMode::Editing);
    }

    #[test]
    fn test_search_is_noop_off_the_home_page() {
        let mut app = App::new(Some(sample()), Page::About);
        app.query = "sydney".to_string();
        app.run_search();
        app.clear_search();
        assert!(app.message.is_none());
        assert!(app.results.is_empty());
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_message_region_is_last_write_wins() {
        let mut app = App::new(Some(sample()), Page::Home);
        app.show_message("first");
        app.show_message("second");
        assert_eq!(app.message.as_deref(), Some("second"));
        app.hide_message();
        app.hide_message();
        assert!(app.message.is_none());
    }
}
