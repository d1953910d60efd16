//! Playlist Manager Router
//!
//! Maps URL paths to views. The table is fixed at compile time:
//!
//! | Path | View | Title |
//! |---|---|---|
//! | `/` | Home | Home Page |
//! | `/dashboard` | Dashboard | User Dashboard |
//! | `/playlist/:id` | Playlist (id passed as a prop) | Playlist Details |
//! | anything else | redirect to `/` | |
//!
//! [`Navigator`] adds history on top: pushes scroll to the top, back and
//! forward restore the saved offset, and every navigation sets the document
//! title.

pub mod error;
mod navigator;
mod resolve;
pub mod routes;

pub use error::{Result, RouterError};
pub use navigator::{Navigation, NavigationKind, Navigator, ScrollPosition};
pub use resolve::{ResolvedRoute, Router};
pub use routes::{RouteDef, RouteMeta, RouteTarget, View, DEFAULT_TITLE, ROUTES};
