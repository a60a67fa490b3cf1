//! Route table and navigation guard
//!
//! Every view of the catalog lives at a fixed route. Commands map onto
//! routes, and `libcat open <route>` navigates by path.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

mod guard;

pub use guard::{GuardDecision, RouteGuard};

/// Which kind of account a view is meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Reader,
    Editor,
}

/// The routes exposed to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Route {
    /// `/` reader home with book search
    Home,
    /// `/editor` editor dashboard
    Editor,
    /// `/login` reader sign-in
    Login,
    /// `/register` account creation
    Register,
    /// `/login/editor` editor sign-in
    EditorLogin,
    /// `/editor/add` add an edition
    EditorAdd,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Editor,
        Route::Login,
        Route::Register,
        Route::EditorLogin,
        Route::EditorAdd,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Editor => "/editor",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::EditorLogin => "/login/editor",
            Route::EditorAdd => "/editor/add",
        }
    }

    /// The role a protected route serves, `None` for public routes
    pub fn role(self) -> Option<Role> {
        match self {
            Route::Home => Some(Role::Reader),
            Route::Editor | Route::EditorAdd => Some(Role::Editor),
            Route::Login | Route::Register | Route::EditorLogin => None,
        }
    }

    pub fn is_protected(self) -> bool {
        self.role().is_some()
    }

    /// Login route matching the route's role
    pub fn login_route(self) -> Option<Route> {
        self.role().map(Role::login_route)
    }

    /// The command that opens this route
    pub fn command(self) -> &'static str {
        match self {
            Route::Home => "libcat books",
            Route::Editor => "libcat editor",
            Route::Login => "libcat login",
            Route::Register => "libcat register",
            Route::EditorLogin => "libcat login --editor",
            Route::EditorAdd => "libcat editor add",
        }
    }
}

impl Role {
    pub fn login_route(self) -> Route {
        match self {
            Role::Reader => Route::Login,
            Role::Editor => Route::EditorLogin,
        }
    }

    /// Where a successful sign-in for this role lands
    pub fn landing_route(self) -> Route {
        match self {
            Role::Reader => Route::Home,
            Role::Editor => Route::Editor,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // `/editor/` and `/editor` are the same view
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };

        Route::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
            .ok_or_else(|| Error::UnknownRoute(trimmed.to_string()))
    }
}
