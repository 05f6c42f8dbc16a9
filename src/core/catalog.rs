//! Theme catalog: theme id → descriptor, loaded once at startup.
//!
//! The loader is best-effort: it reads a JSON document from a local path and
//! falls back to the embedded catalog on any failure.  Callers never see an
//! error from [`ThemeCatalog::load`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

/// Id every unknown theme resolves to.
pub const DEFAULT_THEME: &str = "loki";

/// Fixed rotation order used by theme cycling.
pub const THEME_CYCLE: &[&str] = &["loki", "matrix", "fallout", "tron"];

/// The id that follows `current` in [`THEME_CYCLE`].  Ids outside the cycle
/// advance to its first entry.
pub fn next_in_cycle(current: &str) -> &'static str {
    match THEME_CYCLE.iter().position(|id| *id == current) {
        Some(idx) => THEME_CYCLE[(idx + 1) % THEME_CYCLE.len()],
        None => THEME_CYCLE[0],
    }
}

// ───────────────────────────────────────── descriptor ────────

/// Display strings for a single theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDescriptor {
    pub id: String,
    pub display_name: String,
    pub system_name: String,
    pub version: String,
}

impl ThemeDescriptor {
    fn new(id: &str, display_name: &str, system_name: &str, version: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            system_name: system_name.to_string(),
            version: version.to_string(),
        }
    }

    /// `"ASGARD TERMINAL SYSTEM v3.0"`
    pub fn banner(&self) -> String {
        format!("{} {}", self.system_name, self.version)
    }
}

// ───────────────────────────────────────── errors ────────────

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read theme data: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed theme data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("theme data defines no themes")]
    Empty,
}

// ───────────────────────────────────────── wire format ───────

#[derive(Deserialize)]
struct CatalogDocument {
    themes: BTreeMap<String, ThemeEntry>,
}

#[derive(Deserialize)]
struct ThemeEntry {
    display_name: String,
    terminology: Terminology,
}

#[derive(Deserialize)]
struct Terminology {
    system_name: String,
    version: String,
}

// ───────────────────────────────────────── catalog ───────────

/// Read-only mapping from theme id to descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeCatalog {
    themes: BTreeMap<String, ThemeDescriptor>,
}

impl ThemeCatalog {
    /// The embedded catalog used whenever external theme data is unavailable.
    pub fn fallback() -> Self {
        let themes = [
            ThemeDescriptor::new("loki", "Loki", "ASGARD TERMINAL SYSTEM", "v3.0"),
            ThemeDescriptor::new("matrix", "Matrix", "NEURAL MATRIX TERMINAL", "v1.0"),
            ThemeDescriptor::new("fallout", "Fallout", "VAULT-TEC TERMINAL", "v2.077"),
            ThemeDescriptor::new("tron", "Tron", "TRON GRID TERMINAL", "v2.0"),
        ];
        Self {
            themes: themes.into_iter().map(|t| (t.id.clone(), t)).collect(),
        }
    }

    /// Parse a theme document.  Entries are layered over the embedded
    /// catalog, so the built-in ids always resolve.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        if doc.themes.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut catalog = Self::fallback();
        for (id, entry) in doc.themes {
            let descriptor = ThemeDescriptor {
                id: id.clone(),
                display_name: entry.display_name,
                system_name: entry.terminology.system_name,
                version: entry.terminology.version,
            };
            catalog.themes.insert(id, descriptor);
        }
        Ok(catalog)
    }

    /// Best-effort load from `source`.  Any failure yields [`Self::fallback`].
    pub async fn load(source: &Path) -> Self {
        match Self::try_load(source).await {
            Ok(catalog) => {
                tracing::debug!(
                    "loaded {} themes from {}",
                    catalog.themes.len(),
                    source.display()
                );
                catalog
            }
            Err(err) => {
                tracing::warn!(
                    "theme data unavailable at {} ({err}); using built-in themes",
                    source.display()
                );
                Self::fallback()
            }
        }
    }

    async fn try_load(source: &Path) -> Result<Self, CatalogError> {
        let contents = tokio::fs::read_to_string(source).await?;
        Self::from_json_str(&contents)
    }

    pub fn get(&self, id: &str) -> Option<&ThemeDescriptor> {
        self.themes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.themes.contains_key(id)
    }

    /// `id` if the catalog knows it, otherwise [`DEFAULT_THEME`].
    pub fn resolve<'a>(&self, id: &'a str) -> &'a str {
        if self.contains(id) {
            id
        } else {
            DEFAULT_THEME
        }
    }

    /// Descriptor for `id`, or the default theme's descriptor.
    pub fn descriptor(&self, id: &str) -> &ThemeDescriptor {
        self.themes
            .get(id)
            .or_else(|| self.themes.get(DEFAULT_THEME))
            .unwrap_or_else(|| fallback_default())
    }

    /// All known ids, sorted.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Static descriptor backing [`ThemeCatalog::descriptor`] when even the
/// default id is missing (only reachable through a hand-built catalog).
fn fallback_default() -> &'static ThemeDescriptor {
    static DEFAULT: std::sync::OnceLock<ThemeDescriptor> = std::sync::OnceLock::new();
    DEFAULT.get_or_init(|| {
        ThemeDescriptor::new(DEFAULT_THEME, "Loki", "ASGARD TERMINAL SYSTEM", "v3.0")
    })
}

// ───────────────────────────────────────── tests ─────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn fallback_defines_the_cycle_themes() {
        let catalog = ThemeCatalog::fallback();
        for id in THEME_CYCLE {
            assert!(catalog.contains(id), "missing {id}");
        }
        assert_eq!(catalog.get("fallout").unwrap().version, "v2.077");
        assert_eq!(catalog.get("matrix").unwrap().system_name, "NEURAL MATRIX TERMINAL");
    }

    #[test]
    fn cycle_wraps_after_four_steps() {
        let mut id = "loki";
        for _ in 0..4 {
            id = next_in_cycle(id);
        }
        assert_eq!(id, "loki");
        assert_eq!(next_in_cycle("tron"), "loki");
        assert_eq!(next_in_cycle("something-else"), "loki");
    }

    #[test]
    fn resolve_unknown_id_to_default() {
        let catalog = ThemeCatalog::fallback();
        assert_eq!(catalog.resolve("unknown"), "loki");
        assert_eq!(catalog.resolve("tron"), "tron");
        assert_eq!(catalog.descriptor("nope").id, "loki");
    }

    #[test]
    fn parse_document_layers_over_builtins() {
        let json = r#"{
            "themes": {
                "synthwave": {
                    "display_name": "Synthwave",
                    "terminology": { "system_name": "OUTRUN OS", "version": "v1984" }
                },
                "loki": {
                    "display_name": "Loki Prime",
                    "terminology": { "system_name": "BIFROST", "version": "v4.0" }
                }
            }
        }"#;
        let catalog = ThemeCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.get("synthwave").unwrap().banner(), "OUTRUN OS v1984");
        assert_eq!(catalog.get("loki").unwrap().display_name, "Loki Prime");
        assert!(catalog.contains("tron"));
    }

    #[test]
    fn parse_rejects_malformed_and_empty_documents() {
        assert!(matches!(
            ThemeCatalog::from_json_str("{ not json"),
            Err(CatalogError::Parse(_))
        ));
        assert!(matches!(
            ThemeCatalog::from_json_str(r#"{ "themes": {} }"#),
            Err(CatalogError::Empty)
        ));
        assert!(matches!(
            ThemeCatalog::from_json_str(r#"{ "themes": { "x": { "display_name": "X" } } }"#),
            Err(CatalogError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn load_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = ThemeCatalog::load(&dir.path().join("absent.json")).await;
        assert_eq!(catalog, ThemeCatalog::fallback());
    }

    #[tokio::test]
    async fn load_garbage_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<html>404</html>").unwrap();
        let catalog = ThemeCatalog::load(file.path()).await;
        assert_eq!(catalog, ThemeCatalog::fallback());
    }

    #[tokio::test]
    async fn load_reads_document_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "themes": {{ "tron": {{ "display_name": "TRON", "terminology": {{ "system_name": "ENCOM GRID", "version": "v9" }} }} }} }}"#
        )
        .unwrap();
        let catalog = ThemeCatalog::load(file.path()).await;
        assert_eq!(catalog.get("tron").unwrap().system_name, "ENCOM GRID");
        assert_eq!(catalog.len(), 4);
    }
}
