//! Cache invalidation hook for rendered pages.
//!
//! After an account mutation the storefront must stop serving a cached
//! rendering of the affected page. The rendering layer owns that cache; this
//! crate only tells it which path went stale through [`PathRevalidator`].
//!
//! Any `Fn(&str, RevalidateScope)` closure is a revalidator:
//!
//! ```rust
//! use std::sync::Mutex;
//! use bigcommerce_api::{PathRevalidator, RevalidateScope};
//!
//! let stale = Mutex::new(Vec::new());
//! let revalidator = |path: &str, scope: RevalidateScope| {
//!     stale.lock().unwrap().push(format!("{scope}:{path}"));
//! };
//!
//! revalidator.revalidate_path("/account/addresses", RevalidateScope::Page);
//! assert_eq!(stale.lock().unwrap().as_slice(), ["page:/account/addresses"]);
//! ```

use std::fmt;

/// Which cached renderings of a path become stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevalidateScope {
    /// Only the page rendered at the path.
    Page,
    /// The layout at the path and every page beneath it.
    Layout,
}

impl fmt::Display for RevalidateScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page => f.write_str("page"),
            Self::Layout => f.write_str("layout"),
        }
    }
}

/// Marks cached renderings of a path as stale.
pub trait PathRevalidator: Send + Sync {
    /// Invalidates the cached rendering of `path` within `scope`.
    fn revalidate_path(&self, path: &str, scope: RevalidateScope);
}

impl<F> PathRevalidator for F
where
    F: Fn(&str, RevalidateScope) + Send + Sync,
{
    fn revalidate_path(&self, path: &str, scope: RevalidateScope) {
        self(path, scope);
    }
}
