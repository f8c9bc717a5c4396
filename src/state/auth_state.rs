// ============================================================================
// AUTH STATE - Token en memoria (espejo de localStorage)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct AuthState {
    token: Rc<RefCell<Option<String>>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: Option<String>) -> Self {
        let state = Self::new();
        state.set_token(token);
        state
    }

    /// Token presente ⇒ autenticado
    pub fn is_authenticated(&self) -> bool {
        self.token.borrow().is_some()
    }

    pub fn set_token(&self, token: Option<String>) {
        *self.token.borrow_mut() = token.filter(|t| !t.trim().is_empty());
    }

    pub fn get_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn logout(&self) {
        self.set_token(None);
    }
}
