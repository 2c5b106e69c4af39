//! In-memory template store with built-in templates.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use rpcforge_core::{
    application::{
        ApplicationError,
        ports::{TemplateEntry, TemplateOrigin, TemplateStore},
    },
    error::ForgeResult,
};

use crate::builtin_templates;

#[derive(Debug, Clone)]
struct StoredTemplate {
    content: String,
    origin: TemplateOrigin,
}

/// Thread-safe in-memory template store.
///
/// Clones share the same templates.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<BTreeMap<String, StoredTemplate>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with built-in templates loaded.
    pub fn with_builtin() -> ForgeResult<Self> {
        let store = Self::new();
        store.load_builtin()?;
        Ok(store)
    }

    /// Load built-in templates, replacing any with the same id.
    pub fn load_builtin(&self) -> ForgeResult<()> {
        for (id, content) in builtin_templates::all() {
            self.insert(id, content.to_string(), TemplateOrigin::Builtin)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateStore for InMemoryStore {
    fn get(&self, id: &str) -> ForgeResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .get(id)
            .map(|stored| stored.content.clone())
            .ok_or_else(|| ApplicationError::TemplateNotFound { id: id.to_string() }.into())
    }

    fn list(&self) -> ForgeResult<Vec<TemplateEntry>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner
            .iter()
            .map(|(id, stored)| TemplateEntry {
                id: id.clone(),
                origin: stored.origin.clone(),
            })
            .collect())
    }

    fn insert(&self, id: &str, content: String, origin: TemplateOrigin) -> ForgeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.insert(id.to_string(), StoredTemplate { content, origin });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpcforge_core::error::ForgeError;
    use std::path::PathBuf;

    #[test]
    fn builtin_store_has_every_template() {
        let store = InMemoryStore::with_builtin().unwrap();
        assert_eq!(store.len(), builtin_templates::all().len());
        assert!(store.get("facadeImpl").unwrap().contains("{{facadeImplClassName}}"));
    }

    #[test]
    fn missing_template_is_not_found() {
        let err = InMemoryStore::new().get("facade").unwrap_err();
        assert!(matches!(
            err,
            ForgeError::Application(ApplicationError::TemplateNotFound { ref id }) if id == "facade"
        ));
    }

    #[test]
    fn insert_replaces_and_records_origin() {
        let store = InMemoryStore::with_builtin().unwrap();
        let path = PathBuf::from("tpl/manager.tpl");
        store
            .insert("manager", "custom".into(), TemplateOrigin::Override(path.clone()))
            .unwrap();

        assert_eq!(store.get("manager").unwrap(), "custom");
        let entry = store
            .list()
            .unwrap()
            .into_iter()
            .find(|e| e.id == "manager")
            .unwrap();
        assert_eq!(entry.origin, TemplateOrigin::Override(path));
    }

    #[test]
    fn list_is_sorted_by_id() {
        let store = InMemoryStore::with_builtin().unwrap();
        let ids: Vec<String> = store.list().unwrap().into_iter().map(|e| e.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }
}
