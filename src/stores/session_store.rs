// ============================================================================
// SESSION STORE - Código de vinculación persistido
// ============================================================================
// Un único valor opcional. Sin expiración: dura hasta un `clear()` explícito
// o hasta que un nuevo link lo sobrescribe. No valida el formato.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::errors::{AppError, AppResult};
use crate::utils::constants::STORAGE_KEY_LINKED_CODE;
use crate::utils::storage::{load_raw, remove_raw, save_raw};

pub trait SessionStore {
    fn get(&self) -> Option<String>;
    fn set(&self, code: &str) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;
}

/// `localStorage` del navegador, string plano bajo [`STORAGE_KEY_LINKED_CODE`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalSessionStore;

impl SessionStore for LocalSessionStore {
    fn get(&self) -> Option<String> {
        load_raw(STORAGE_KEY_LINKED_CODE).filter(|code| !code.is_empty())
    }

    fn set(&self, code: &str) -> AppResult<()> {
        save_raw(STORAGE_KEY_LINKED_CODE, code).map_err(AppError::Storage)
    }

    fn clear(&self) -> AppResult<()> {
        remove_raw(STORAGE_KEY_LINKED_CODE).map_err(AppError::Storage)
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemorySessionStore {
    code: Rc<RefCell<Option<String>>>,
}

impl MemorySessionStore {
    pub fn with_code(code: &str) -> Self {
        Self {
            code: Rc::new(RefCell::new(Some(code.to_string()))),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<String> {
        self.code.borrow().clone()
    }

    fn set(&self, code: &str) -> AppResult<()> {
        *self.code.borrow_mut() = Some(code.to_string());
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        *self.code.borrow_mut() = None;
        Ok(())
    }
}

/// Handle compartido vía contexto de Yew. Todos los flujos ven el mismo store:
/// lo que escribe una página lo ve el siguiente render de cualquier otra.
#[derive(Clone)]
pub struct SessionHandle {
    store: Rc<dyn SessionStore>,
}

impl SessionHandle {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self {
            store: Rc::new(store),
        }
    }

    pub fn browser() -> Self {
        Self::new(LocalSessionStore)
    }

    pub fn memory() -> Self {
        Self::new(MemorySessionStore::default())
    }

    pub fn code(&self) -> Option<String> {
        self.store.get()
    }

    pub fn is_linked(&self) -> bool {
        self.code().is_some()
    }

    pub fn set(&self, code: &str) -> AppResult<()> {
        self.store.set(code)
    }

    pub fn clear(&self) -> AppResult<()> {
        self.store.clear()
    }
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl std::fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionHandle")
            .field("linked", &self.is_linked())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_get_set_clear() {
        let handle = SessionHandle::memory();
        assert_eq!(handle.code(), None);

        handle.set("12345678").unwrap();
        assert_eq!(handle.code().as_deref(), Some("12345678"));
        assert!(handle.is_linked());

        handle.clear().unwrap();
        assert!(!handle.is_linked());
    }

    #[test]
    fn clones_share_the_same_store() {
        let handle = SessionHandle::new(MemorySessionStore::with_code("87654321"));
        let other = handle.clone();
        assert_eq!(handle, other);

        other.clear().unwrap();
        assert_eq!(handle.code(), None);
    }

    #[test]
    fn relink_overwrites() {
        let handle = SessionHandle::new(MemorySessionStore::with_code("11111111"));
        handle.set("22222222").unwrap();
        assert_eq!(handle.code().as_deref(), Some("22222222"));
    }

    #[test]
    fn distinct_stores_are_not_equal() {
        assert_ne!(SessionHandle::memory(), SessionHandle::memory());
    }
}
