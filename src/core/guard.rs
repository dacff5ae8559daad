/// Routes only meaningful to signed-out users
pub const AUTH_ROUTES: [&str; 3] = ["/login", "/register", "/forgot-password"];

/// Landing page, reachable while signed out
pub const PUBLIC_ROUTE: &str = "/";

pub const LOGIN_ROUTE: &str = "/login";
pub const HOME_ROUTE: &str = "/swipe";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(&'static str),
}

/// Decide where a navigation to `path` should end up
///
/// No token inspection happens here: presence of a session is the only input.
pub fn guard(path: &str, authenticated: bool) -> RouteDecision {
    let is_auth_route = AUTH_ROUTES.contains(&path);
    let is_public_route = path == PUBLIC_ROUTE;

    match (authenticated, is_auth_route || is_public_route) {
        (false, false) => RouteDecision::Redirect(LOGIN_ROUTE),
        (true, true) => RouteDecision::Redirect(HOME_ROUTE),
        _ => RouteDecision::Allow,
    }
}
