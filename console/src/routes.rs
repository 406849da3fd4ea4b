// console/src/routes.rs

use std::str::FromStr;

use session::{SessionGate, SessionStore};

/// The console's view routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Signup,
    Dashboard,
    Doctors,
    Hospitals,
    Users,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Dashboard => "/dashboard",
            Route::Doctors => "/doctors",
            Route::Hospitals => "/hospitals",
            Route::Users => "/users",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        match path {
            "/login" => Some(Route::Login),
            "/signup" => Some(Route::Signup),
            "/dashboard" => Some(Route::Dashboard),
            "/doctors" => Some(Route::Doctors),
            "/hospitals" => Some(Route::Hospitals),
            "/users" => Some(Route::Users),
            _ => None,
        }
    }

    /// Everything behind the dashboard shell requires a session marker.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login | Route::Signup)
    }
}

impl FromStr for Route {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('/') {
            "login" => Ok(Route::Login),
            "signup" => Ok(Route::Signup),
            "dashboard" => Ok(Route::Dashboard),
            "doctors" => Ok(Route::Doctors),
            "hospitals" => Ok(Route::Hospitals),
            "users" => Ok(Route::Users),
            _ => Err(anyhow::anyhow!("Unknown route: {}", s)),
        }
    }
}

/// Where `/` lands: the configured landing page when a marker is present,
/// the login page when it is not.
pub fn entry_route<S: SessionStore>(gate: &SessionGate<S>, landing: Route) -> Route {
    match gate.authorize() {
        Ok(_) => landing,
        Err(_) => Route::Login,
    }
}

/// Decides whether a route may render; `Err` carries the redirect target.
pub fn resolve<S: SessionStore>(gate: &SessionGate<S>, route: Route) -> Result<Route, Route> {
    if route.is_protected() && gate.authorize().is_err() {
        return Err(Route::Login);
    }
    Ok(route)
}
