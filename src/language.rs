//! Language classification by file extension
//!
//! The extension → language mapping is plain data held in a [`LanguageTable`].
//! Callers can start from the built-in table or supply their own; the walker
//! never branches on specific extensions.

use std::collections::HashMap;
use std::path::Path;

/// Built-in extension table. Keys are lowercase and include the leading dot.
const DEFAULT_EXTENSIONS: &[(&str, &str)] = &[
    (".py", "Python"),
    (".js", "JavaScript"),
    (".ts", "TypeScript"),
    (".tsx", "TypeScript"),
    (".jsx", "JavaScript"),
    (".java", "Java"),
    (".pegjs", "PeggyJS PEG"),
    (".go", "Go"),
    (".rb", "Ruby"),
    (".php", "PHP"),
    (".c", "C"),
    (".h", "C/C++ Header"),
    (".cpp", "C++"),
    (".cs", "C#"),
    (".razor", "C#"),
    (".html", "HTML"),
    (".css", "CSS"),
    (".scss", "SCSS"),
    (".rs", "Rust"),
    (".swift", "Swift"),
    (".kt", "Kotlin"),
    (".sh", "Shell"),
    (".yaml", "YAML"),
    (".yml", "YAML"),
    (".json", "JSON"),
    (".md", "Markdown"),
    (".xml", "XML"),
    (".graphql", "GraphQL"),
    (".gql", "GraphQL"),
];

/// Mapping from file extension to a human-readable language label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTable {
    by_extension: HashMap<String, String>,
}

impl LanguageTable {
    /// An empty table. Nothing classifies until entries are added.
    pub fn empty() -> Self {
        Self {
            by_extension: HashMap::new(),
        }
    }

    /// Build a table from `(extension, label)` pairs.
    ///
    /// Extensions are normalized: lowercased, and given a leading dot if
    /// they lack one, so `"RS"`, `"rs"` and `".rs"` all name the same key.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use locreport::LanguageTable;
    ///
    /// let table = LanguageTable::from_pairs([(".vue", "Vue"), ("svelte", "Svelte")]);
    /// assert_eq!(table.classify(Path::new("App.vue")), Some("Vue"));
    /// assert_eq!(table.classify(Path::new("main.py")), None);
    /// ```
    pub fn from_pairs<I, E, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (E, L)>,
        E: AsRef<str>,
        L: Into<String>,
    {
        let mut table = Self::empty();
        for (ext, label) in pairs {
            table.insert(ext, label);
        }
        table
    }

    /// Add or replace a mapping.
    pub fn insert(&mut self, extension: impl AsRef<str>, label: impl Into<String>) {
        self.by_extension
            .insert(normalize_extension(extension.as_ref()), label.into());
    }

    /// Look up a label by extension (with or without the leading dot).
    pub fn get(&self, extension: &str) -> Option<&str> {
        self.by_extension
            .get(&normalize_extension(extension))
            .map(String::as_str)
    }

    /// Classify a path by its extension.
    ///
    /// Returns `None` when the file has no extension or the extension is not
    /// in the table; such files must be skipped by the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use locreport::LanguageTable;
    ///
    /// let table = LanguageTable::default();
    /// assert_eq!(table.classify(Path::new("src/App.TSX")), Some("TypeScript"));
    /// assert_eq!(table.classify(Path::new("notes.txt")), None);
    /// assert_eq!(table.classify(Path::new("Makefile")), None);
    /// ```
    pub fn classify(&self, path: &Path) -> Option<&str> {
        let ext = path.extension()?.to_str()?;
        self.get(ext)
    }

    pub fn len(&self) -> usize {
        self.by_extension.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_extension.is_empty()
    }
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_EXTENSIONS.iter().copied())
    }
}

fn normalize_extension(ext: &str) -> String {
    let ext = ext.to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{}", ext)
    }
}
