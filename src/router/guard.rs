//! Route guard
//!
//! Decides per navigation whether a view renders or redirects to the login
//! route for its role. The decision depends only on whether the session
//! holds a token at evaluation time, so a sign-out takes effect on the next
//! navigation.

use log::debug;

use super::Route;
use crate::session::SessionContext;

/// Authorization state observed when the guard is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardState {
    #[default]
    Unauthenticated,
    Authenticated,
}

/// Outcome of a guard evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render(Route),
    Redirect(Route),
}

pub struct RouteGuard {
    session: SessionContext,
}

impl RouteGuard {
    pub fn new(session: SessionContext) -> Self {
        Self { session }
    }

    pub fn state(&self) -> GuardState {
        if self.session.get().is_some() {
            GuardState::Authenticated
        } else {
            GuardState::Unauthenticated
        }
    }

    pub fn evaluate(&self, route: Route) -> GuardDecision {
        let decision = match (route.is_protected(), self.state()) {
            (false, _) | (true, GuardState::Authenticated) => GuardDecision::Render(route),
            (true, GuardState::Unauthenticated) => {
                GuardDecision::Redirect(route.login_route().unwrap_or(Route::Login))
            }
        };
        debug!("Guard for {}: {:?}", route, decision);
        decision
    }
}
