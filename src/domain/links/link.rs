/// Name of the synthetic subject that collects bullet links found before the
/// first header of a document.
pub const OTHERS_SUBJECT: &str = "Others";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
    pub id: Option<String>,
    pub title: String,
    pub url: String,
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,
}

impl Link {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            url: url.into(),
            timestamp: None,
        }
    }

    /// Matching key; `id` and `timestamp` never take part in identity.
    pub fn identity(&self) -> (&str, &str) {
        (&self.title, &self.url)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subject {
    pub name: String,
    pub links: Vec<Link>,
}

impl Subject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            links: Vec::new(),
        }
    }
}
