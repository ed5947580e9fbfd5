//! Client-side route table
//!
//! Maps the three view paths to their controllers; anything else falls
//! back to the topic list, mirroring a redirect to `/`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Topics,
    NewTopic,
    Profile,
}

impl Route {
    pub fn from_path(path: &str) -> Route {
        match path {
            "/" => Route::Topics,
            "/new" => Route::NewTopic,
            "/profile" => Route::Profile,
            _ => Route::Topics,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Topics => "/",
            Route::NewTopic => "/new",
            Route::Profile => "/profile",
        }
    }
}
