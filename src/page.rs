/// Which page of the site the explorer was launched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Contact,
}

impl Page {
    /// Classify a route by filename suffix, case-insensitively.
    /// Anything that is not about.html or contact.html is the home page,
    /// including the recommendation page itself.
    pub fn from_path(path: &str) -> Self {
        let lower = path.to_lowercase();
        if lower.ends_with("about.html") {
            Self::About
        } else if lower.ends_with("contact.html") {
            Self::Contact
        } else {
            Self::Home
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }
}
