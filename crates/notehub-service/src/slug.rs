//! Slug normalization and globally-unique slug generation.

use std::sync::Arc;

use notehub_core::result::AppResult;
use notehub_database::repositories::note::NoteRepository;

/// Maximum length of a normalized slug.
const MAX_SLUG_LEN: usize = 180;

/// Fallback when normalization produces an empty string.
const FALLBACK_SLUG: &str = "note";

/// Normalizes text into a lowercase, hyphenated, ASCII-safe slug.
///
/// Non-alphanumeric runs collapse into single hyphens, the result is
/// truncated to 180 characters, and an empty result falls back to `"note"`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len().min(MAX_SLUG_LEN));
    let mut pending_separator = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    if slug.len() > MAX_SLUG_LEN {
        slug.truncate(MAX_SLUG_LEN);
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Derives globally-unique slugs by linear probing against the notes table.
#[derive(Debug, Clone)]
pub struct SlugGenerator {
    /// Note repository for existence probes.
    note_repo: Arc<NoteRepository>,
}

impl SlugGenerator {
    /// Creates a new slug generator.
    pub fn new(note_repo: Arc<NoteRepository>) -> Self {
        Self { note_repo }
    }

    /// Returns an unused slug derived from `base_text`.
    ///
    /// Starting from the normalized candidate, appends `-2`, `-3`, …
    /// until a free candidate is found. Deterministic for a given set of
    /// existing slugs, but a concurrent create can still claim the winner
    /// between this probe and the insert; the database unique constraint
    /// turns that race into a retryable slug-collision error.
    pub async fn unique_slug(&self, base_text: &str) -> AppResult<String> {
        let base = slugify(base_text);
        let mut candidate = base.clone();
        let mut i = 1u32;

        while self.note_repo.slug_exists(&candidate).await? {
            i += 1;
            candidate = format!("{base}-{i}");
        }

        Ok(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_normalization() {
        assert_eq!(slugify("Weekly Plan"), "weekly-plan");
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("Draft"), "draft");
    }

    #[test]
    fn test_collapses_separator_runs() {
        assert_eq!(slugify("a  --  b"), "a-b");
        assert_eq!(slugify("  padded  "), "padded");
    }

    #[test]
    fn test_non_ascii_is_dropped() {
        assert_eq!(slugify("café ☕ notes"), "caf-notes");
    }

    #[test]
    fn test_empty_falls_back() {
        assert_eq!(slugify(""), "note");
        assert_eq!(slugify("???"), "note");
    }

    #[test]
    fn test_truncated_to_max_length() {
        let long = "a".repeat(500);
        assert_eq!(slugify(&long).len(), 180);
    }

    #[test]
    fn test_no_trailing_hyphen_after_truncation() {
        let text = format!("{} b", "a".repeat(179));
        let slug = slugify(&text);
        assert!(slug.len() <= 180);
        assert!(!slug.ends_with('-'));
    }
}
