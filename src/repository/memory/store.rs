use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::{Error, Result};
use crate::models::Record;

struct StoreState<T> {
    next_id: i32,
    records: BTreeMap<i32, T>,
}

/// Process-local table keyed by id.
///
/// Every operation runs under one lock, so id assignment, insertion and
/// replacement are atomic with respect to each other. Ids start at 1 and are
/// never reused, even after a delete.
pub struct MemoryStore<T> {
    state: Mutex<StoreState<T>>,
}

impl<T: Record> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState {
                next_id: 1,
                records: BTreeMap::new(),
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState<T>>> {
        self.state
            .lock()
            .map_err(|_| Error::Internal("memory store lock poisoned".to_string()))
    }

    fn issue_id(state: &mut StoreState<T>) -> Result<i32> {
        let id = state.next_id;
        state.next_id = id
            .checked_add(1)
            .ok_or_else(|| Error::Internal("memory store ran out of ids".to_string()))?;
        Ok(id)
    }

    pub fn save(&self, mut record: T) -> Result<T> {
        let mut state = self.lock()?;
        let id = Self::issue_id(&mut state)?;
        record.set_id(id);
        state.records.insert(id, record.clone());
        Ok(record)
    }

    /// Saves `record` only if `accept` holds for every stored record, checked
    /// under the same lock as the insert.
    pub fn save_if(&self, mut record: T, accept: impl Fn(&T) -> bool) -> Result<Option<T>> {
        let mut state = self.lock()?;
        if !state.records.values().all(accept) {
            return Ok(None);
        }
        let id = Self::issue_id(&mut state)?;
        record.set_id(id);
        state.records.insert(id, record.clone());
        Ok(Some(record))
    }

    pub fn delete_by_id(&self, id: i32) -> Result<bool> {
        Ok(self.lock()?.records.remove(&id).is_some())
    }

    /// Removes the first record matching `predicate`.
    pub fn delete_where(&self, predicate: impl Fn(&T) -> bool) -> Result<bool> {
        let mut state = self.lock()?;
        let id = state
            .records
            .values()
            .find(|&record| predicate(record))
            .map(Record::id);
        Ok(match id {
            Some(id) => state.records.remove(&id).is_some(),
            None => false,
        })
    }

    /// Replaces the record stored under `record.id()` if, and only if, one is
    /// present at the moment of the swap.
    pub fn update(&self, record: T) -> Result<bool> {
        let mut state = self.lock()?;
        match state.records.get_mut(&record.id()) {
            Some(slot) => {
                *slot = record;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn find_by_id(&self, id: i32) -> Result<Option<T>> {
        Ok(self.lock()?.records.get(&id).cloned())
    }

    pub fn find_first(&self, predicate: impl Fn(&T) -> bool) -> Result<Option<T>> {
        Ok(self
            .lock()?
            .records
            .values()
            .find(|&record| predicate(record))
            .cloned())
    }

    pub fn find_all(&self) -> Result<Vec<T>> {
        Ok(self.lock()?.records.values().cloned().collect())
    }
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::file::File;

    #[test]
    fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        let first = store.save(File::new("a", vec![1])).unwrap();
        assert!(store.delete_by_id(first.id).unwrap());
        let second = store.save(File::new("b", vec![2])).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn save_if_rejects_without_consuming_an_id() {
        let store = MemoryStore::new();
        store.save(File::new("a", vec![])).unwrap();
        let rejected = store
            .save_if(File::new("a", vec![]), |f| f.name != "a")
            .unwrap();
        assert!(rejected.is_none());
        let accepted = store
            .save_if(File::new("b", vec![]), |f| f.name != "b")
            .unwrap();
        assert_eq!(accepted.map(|f| f.id), Some(2));
    }

    #[test]
    fn exhausted_id_counter_is_an_error() {
        let store: MemoryStore<File> = MemoryStore::new();
        store.state.lock().unwrap().next_id = i32::MAX;

        let result = store.save(File::new("a", vec![]));

        assert!(matches!(result, Err(Error::Internal(_))));
        assert!(store.find_all().unwrap().is_empty());
        assert_eq!(store.state.lock().unwrap().next_id, i32::MAX);
    }
}
