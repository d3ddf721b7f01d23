//! Top-level view state machine.
//!
//! Exactly one of login, register, or dashboard is visible. User clicks move
//! between login and register; everything else is decided by whether a
//! session token exists.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// The three mutually exclusive top-level screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Login,
    Register,
    Dashboard,
}

/// Current view plus the transitions allowed out of it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewRouter {
    current: View,
}

impl ViewRouter {
    #[must_use]
    pub fn current(self) -> View {
        self.current
    }

    /// Login → Register. Returns `false` from any other view.
    pub fn show_register(&mut self) -> bool {
        self.transition(View::Login, View::Register)
    }

    /// Register → Login. Returns `false` from any other view.
    pub fn show_login(&mut self) -> bool {
        self.transition(View::Register, View::Login)
    }

    /// Route by auth state: dashboard with a token, login without.
    pub fn route(&mut self, authenticated: bool) -> View {
        self.current = if authenticated { View::Dashboard } else { View::Login };
        self.current
    }

    /// Forced return to login after the session was invalidated.
    pub fn expire(&mut self) -> View {
        self.current = View::Login;
        self.current
    }

    fn transition(&mut self, from: View, to: View) -> bool {
        if self.current != from {
            return false;
        }
        self.current = to;
        true
    }
}
