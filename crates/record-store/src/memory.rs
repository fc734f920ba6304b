use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::Tables;

/// Shared handle to the registry tables.
///
/// All three collections sit behind one lock. A caller that checks a
/// condition and then mutates must do both under a single [`write`] guard,
/// otherwise a concurrent writer can slip in between.
///
/// Cloning the handle shares the same tables.
///
/// [`write`]: InMemoryStore::write
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Creates a store with empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that owns the given tables.
    pub fn with_tables(tables: Tables) -> Self {
        Self {
            tables: Arc::new(RwLock::new(tables)),
        }
    }

    /// Acquires shared read access to the tables.
    pub async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    /// Acquires exclusive write access to the tables.
    pub async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }

    /// Returns a copy of the current tables.
    pub async fn snapshot(&self) -> Tables {
        self.tables.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{Course, Student};

    #[tokio::test]
    async fn clones_share_tables() {
        let store = InMemoryStore::new();
        let other = store.clone();

        store.write().await.courses.insert(Course::new(1u64, "Math"));

        assert_eq!(other.read().await.courses.len(), 1);
    }

    #[tokio::test]
    async fn separate_stores_are_isolated() {
        let a = InMemoryStore::new();
        let b = InMemoryStore::new();

        a.write().await.students.insert(Student::new(1u64, "Sophia"));

        assert_eq!(a.read().await.students.len(), 1);
        assert!(b.read().await.students.is_empty());
    }
}
