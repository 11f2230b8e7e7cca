//! Navigation seam between the SDK and the host app's router.

/// Screens the login flow can transition to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The authenticated application area, entered after a successful login.
    App,
    /// The account registration screen.
    Register,
}

impl Route {
    /// The route name understood by the host app's router.
    pub fn name(&self) -> &'static str {
        match self {
            Route::App => "App",
            Route::Register => "Register",
        }
    }
}

/// Capability to move the user to another screen.
///
/// Implemented by the host app over its routing framework. Navigation is fire
/// and forget: the SDK does not observe whether the transition happened.
pub trait Navigator: Send + Sync {
    /// Transition to `route`.
    fn navigate(&self, route: Route);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_names_match_the_app_router() {
        assert_eq!(Route::App.name(), "App");
        assert_eq!(Route::Register.name(), "Register");
    }
}
