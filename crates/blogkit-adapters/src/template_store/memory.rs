//! In-memory template store with built-in templates.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock, RwLockReadGuard},
};

use blogkit_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{Artifact, DomainValidator as validator, Template},
    error::{BlogkitError, BlogkitResult},
};
use tracing::debug;

use crate::builtin_templates;

/// Thread-safe in-memory template store, one template per artifact.
#[derive(Clone)]
pub struct InMemoryStore {
    inner: Arc<RwLock<HashMap<Artifact, Template>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a store with built-in templates loaded.
    pub fn with_builtin() -> BlogkitResult<Self> {
        let store = Self::new();
        store.load_builtin()?;
        Ok(store)
    }

    /// Load built-in templates, replacing any registered for the same artifact.
    pub fn load_builtin(&self) -> BlogkitResult<()> {
        let templates = builtin_templates::all_templates()?;

        for template in templates {
            self.insert(template)?;
        }

        debug!(count = self.len(), "built-in templates loaded");
        Ok(())
    }

    /// Register a template, replacing the previous one for its artifact.
    pub fn insert(&self, template: Template) -> BlogkitResult<()> {
        validator::validate_template(&template).map_err(BlogkitError::Domain)?;

        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        inner.insert(template.artifact(), template);
        Ok(())
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all templates.
    pub fn clear(&self) -> BlogkitResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        inner.clear();
        Ok(())
    }

    fn read(&self) -> BlogkitResult<RwLockReadGuard<'_, HashMap<Artifact, Template>>> {
        self.inner.read().map_err(|_| poisoned().into())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for InMemoryStore {
    fn get(&self, artifact: Artifact) -> BlogkitResult<Template> {
        self.read()?.get(&artifact).cloned().ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                artifact: artifact.to_string(),
            }
            .into()
        })
    }

    /// Templates in write order.
    fn list(&self) -> BlogkitResult<Vec<Template>> {
        let inner = self.read()?;

        Ok(Artifact::ALL
            .iter()
            .filter_map(|artifact| inner.get(artifact).cloned())
            .collect())
    }
}

fn poisoned() -> ApplicationError {
    ApplicationError::LockPoisoned {
        name: "template store",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_store_covers_every_artifact() {
        let store = InMemoryStore::with_builtin().unwrap();
        assert_eq!(store.len(), 4);

        let listed: Vec<_> = store.list().unwrap().iter().map(Template::artifact).collect();
        assert_eq!(listed, Artifact::ALL.to_vec());
    }

    #[test]
    fn missing_artifact_is_not_found() {
        let store = InMemoryStore::new();
        assert!(store.is_empty());

        let err = store.get(Artifact::Middleware).unwrap_err();
        assert!(matches!(
            err,
            BlogkitError::Application(ApplicationError::TemplateNotFound { ref artifact })
                if artifact == "middleware"
        ));
    }

    #[test]
    fn insert_replaces_and_validates() {
        let store = InMemoryStore::with_builtin().unwrap();
        let custom = Template::parse(Artifact::AdminPage, "custom", "// '{{ADMIN_PATH}}'").unwrap();
        store.insert(custom).unwrap();

        assert_eq!(store.len(), 4);
        assert_eq!(store.get(Artifact::AdminPage).unwrap().description(), "custom");

        let bad = Template::parse(Artifact::AdminPage, "bad", "{{NOPE}}").unwrap();
        assert!(store.insert(bad).is_err());
        assert_eq!(store.get(Artifact::AdminPage).unwrap().description(), "custom");
    }

    #[test]
    fn clear_empties_the_store() {
        let store = InMemoryStore::with_builtin().unwrap();
        store.clear().unwrap();
        assert!(store.list().unwrap().is_empty());
    }
}
