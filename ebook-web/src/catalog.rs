use serde::Deserialize;

/// One shelf entry. `file_name` doubles as the dynamic path segment that
/// opens the book.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
pub struct BookMeta {
    pub file_name: String,
    pub title: String,
    pub author: String,
}

/// Bundled book catalog backing the shelf view.
#[derive(Clone, PartialEq, Eq, Debug, Default, Deserialize)]
pub struct Catalog {
    pub books: Vec<BookMeta>,
}

impl Catalog {
    /// Parse the catalog bundled into the binary. A malformed bundle yields
    /// an empty shelf rather than a crash.
    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(include_str!("../assets/books.json")).unwrap_or_else(|err| {
            log::error!("book catalog failed to parse: {err}");
            Self::default()
        })
    }

    #[must_use]
    pub fn find(&self, file_name: &str) -> Option<&BookMeta> {
        self.books.iter().find(|book| book.file_name == file_name)
    }
}
