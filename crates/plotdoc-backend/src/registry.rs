//! Backend registry.
//!
//! Backends are registered under a stable name. Deprecated entries remain
//! selectable for compatibility but are excluded from the capability
//! matrices, so `active_backends` is the column universe for table builds.

use crate::backend::{Backend, BackendError};
use crate::outline::OutlineBackend;
use crate::pixel::PixelBackend;

struct Entry {
    name: &'static str,
    deprecated: bool,
    build: fn() -> Box<dyn Backend>,
}

static ENTRIES: &[Entry] = &[
    Entry {
        name: "legacy",
        deprecated: true,
        build: || Box::new(OutlineBackend::named("legacy")),
    },
    Entry {
        name: "outline",
        deprecated: false,
        build: || Box::new(OutlineBackend::new()),
    },
    Entry {
        name: "pixel",
        deprecated: false,
        build: || Box::new(PixelBackend::new()),
    },
];

/// Names of the non-deprecated backends, sorted.
#[must_use]
pub fn backend_names() -> Vec<&'static str> {
    let mut names: Vec<_> = ENTRIES
        .iter()
        .filter(|entry| !entry.deprecated)
        .map(|entry| entry.name)
        .collect();
    names.sort_unstable();
    names
}

/// Select a backend by name and disable its interactive display.
pub fn select_backend(name: &str) -> Result<Box<dyn Backend>, BackendError> {
    let entry = ENTRIES
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| BackendError::UnknownBackend(name.to_owned()))?;
    if entry.deprecated {
        tracing::warn!(backend = entry.name, "selected a deprecated backend");
    }
    let mut backend = (entry.build)();
    backend.set_display(false);
    Ok(backend)
}

/// Instantiate every non-deprecated backend, sorted by name.
///
/// This is the column universe for support-matrix builds.
#[must_use]
pub fn active_backends() -> Vec<Box<dyn Backend>> {
    let mut entries: Vec<_> = ENTRIES.iter().filter(|entry| !entry.deprecated).collect();
    entries.sort_unstable_by_key(|entry| entry.name);
    entries
        .iter()
        .map(|entry| {
            let mut backend = (entry.build)();
            backend.set_display(false);
            backend
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_known_backend() {
        let backend = select_backend("pixel").unwrap();
        assert_eq!(backend.name(), "pixel");
    }

    #[test]
    fn test_select_unknown_backend() {
        let err = select_backend("nope").unwrap_err();
        assert!(matches!(err, BackendError::UnknownBackend(name) if name == "nope"));
    }

    #[test]
    fn test_deprecated_backend_still_selectable() {
        let backend = select_backend("legacy").unwrap();
        assert_eq!(backend.name(), "legacy");
    }

    #[test]
    fn test_active_backends_exclude_deprecated() {
        let names: Vec<_> = active_backends().iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["outline", "pixel"]);
    }

    #[test]
    fn test_backend_names_sorted() {
        assert_eq!(backend_names(), vec!["outline", "pixel"]);
    }
}
