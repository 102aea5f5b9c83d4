//! Greeting templates.
//!
//! Loaded once at startup from `<data path>/greetings.txt`, one template
//! per line. Each template holds a `%v` placeholder for the player name.

use std::path::Path;

use rand::Rng;
use tracing::{info, warn};

use crate::common::error::CatalogError;

/// Placeholder replaced by the joining player's name.
pub const PLAYER_PLACEHOLDER: &str = "%v";

/// Read-only, non-empty list of greeting templates.
#[derive(Debug, Clone)]
pub struct GreetingCatalog {
    templates: Vec<String>,
}

impl GreetingCatalog {
    /// Load templates from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let source = path.display().to_string();

        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::IoError {
            path: source.clone(),
            source: e,
        })?;

        let catalog = Self::from_text(&content, &source)?;
        info!("Loaded {} greetings from {}", catalog.len(), source);
        Ok(catalog)
    }

    /// Build a catalog from file contents. `source` names the origin in errors.
    ///
    /// Lines are trimmed and blank lines dropped; the rest keep file order.
    pub fn from_text(content: &str, source: &str) -> Result<Self, CatalogError> {
        let templates: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        if templates.is_empty() {
            return Err(CatalogError::Empty {
                path: source.to_string(),
            });
        }

        for (i, template) in templates.iter().enumerate() {
            let placeholders = template.matches(PLAYER_PLACEHOLDER).count();
            if placeholders != 1 {
                warn!(
                    "Greeting {} in {} has {} '{}' placeholders (expected 1): {}",
                    i + 1,
                    source,
                    placeholders,
                    PLAYER_PLACEHOLDER,
                    template
                );
            }
        }

        Ok(Self { templates })
    }

    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Pick a template uniformly at random.
    pub fn pick(&self) -> &str {
        self.pick_with(&mut rand::thread_rng())
    }

    pub fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // Non-empty by construction
        &self.templates[rng.gen_range(0..self.templates.len())]
    }
}

/// Substitute `player` into `template`.
pub fn render(template: &str, player: &str) -> String {
    template.replacen(PLAYER_PLACEHOLDER, player, 1)
}
