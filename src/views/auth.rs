//! Sign-in, account creation and sign-out

use log::{debug, info};

use crate::client::{CatalogApi, Credentials, Registration};
use crate::error::{Error, Result};
use crate::router::{Role, Route};
use crate::session::SessionContext;

/// Exchange credentials for a token and store it.
///
/// Returns the route to continue to. On failure the session is left as it
/// was and there is nowhere to go.
pub async fn login<A>(
    api: &A,
    session: &SessionContext,
    credentials: &Credentials,
    role: Role,
) -> Result<Route>
where
    A: CatalogApi + ?Sized,
{
    debug!("Signing in {} as {:?}", credentials.username, role);
    let token = api.obtain_token(credentials).await?;

    session.set(&token.access)?;
    info!("Signed in as {}", credentials.username);

    Ok(role.landing_route())
}

/// Create an account. Validation runs before anything is sent.
///
/// Returns the next route and the backend's confirmation message, if any.
pub async fn register<A>(api: &A, registration: &Registration) -> Result<(Route, Option<String>)>
where
    A: CatalogApi + ?Sized,
{
    registration.validate()?;
    let response = api.register(registration).await?;
    info!("Registered {}", registration.username);

    Ok((Route::Login, response.message))
}

/// Drop the token and go back to the start page
pub fn sign_out(session: &SessionContext) -> Result<Route> {
    session.clear()?;
    Ok(Route::Home)
}

/// Turn a refused authorized request into a sign-in prompt for `route`.
///
/// The stored token is cleared so the next navigation redirects.
pub fn expire_session(session: &SessionContext, route: Route) -> Result<Error> {
    session.clear()?;
    let login = route.login_route().unwrap_or(Route::Login);
    Ok(Error::SessionExpired { login })
}
