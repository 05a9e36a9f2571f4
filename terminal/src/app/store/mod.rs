//! # State Store
//!
//! Two independent slices driven by pure reducers. Handlers never mutate a
//! slice directly; they build an [`Action`] and call [`Store::dispatch`].

pub mod auth;
pub mod pos;

pub use auth::{AuthAction, AuthSlice};
pub use pos::{PosAction, PosSlice, Slot, ValidateError};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Auth(AuthAction),
    Pos(PosAction),
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Action::Auth(action)
    }
}

impl From<PosAction> for Action {
    fn from(action: PosAction) -> Self {
        Action::Pos(action)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    pub auth: AuthSlice,
    pub pos: PosSlice,
}

impl Store {
    pub fn dispatch(&mut self, action: impl Into<Action>) {
        match action.into() {
            Action::Auth(action) => {
                let current = std::mem::take(&mut self.auth);
                self.auth = auth::reduce(current, action);
            }
            Action::Pos(action) => {
                let current = std::mem::take(&mut self.pos);
                self.pos = pos::reduce(current, action);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_routes_to_slice() {
        let mut store = Store::default();
        store.dispatch(AuthAction::LoginRequest);
        store.dispatch(PosAction::PendingRequest);

        assert!(store.auth.loading);
        assert!(store.pos.pending.loading);
        assert!(!store.pos.events.loading);
    }
}
