//! The application's route table.

/// Title used when a route declares none
pub const DEFAULT_TITLE: &str = "Default App Title";

/// Screen a route renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Dashboard,
    Playlist,
}

impl View {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Dashboard => "dashboard",
            Self::Playlist => "playlist",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static route metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteMeta {
    pub title: Option<&'static str>,
    /// Declared for every route; nothing enforces it.
    pub requires_auth: bool,
}

impl RouteMeta {
    pub fn title_or_default(&self) -> &'static str {
        self.title.unwrap_or(DEFAULT_TITLE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    View(View),
    Redirect(&'static str),
}

/// One entry of a route table.
///
/// Pattern segments are static text, `:name` params, or a trailing
/// `:name(.*)*` catch-all that captures the rest of the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub target: RouteTarget,
    /// Pass path params to the view as props
    pub props: bool,
    pub meta: RouteMeta,
}

pub static ROUTES: &[RouteDef] = &[
    RouteDef {
        path: "/",
        name: Some("Home"),
        target: RouteTarget::View(View::Home),
        props: false,
        meta: RouteMeta {
            title: Some("Home Page"),
            requires_auth: false,
        },
    },
    RouteDef {
        path: "/dashboard",
        name: Some("Dashboard"),
        target: RouteTarget::View(View::Dashboard),
        props: false,
        meta: RouteMeta {
            title: Some("User Dashboard"),
            requires_auth: false,
        },
    },
    RouteDef {
        path: "/playlist/:id",
        name: Some("Playlist"),
        target: RouteTarget::View(View::Playlist),
        props: true,
        meta: RouteMeta {
            title: Some("Playlist Details"),
            requires_auth: false,
        },
    },
    RouteDef {
        path: "/:pathMatch(.*)*",
        name: None,
        target: RouteTarget::Redirect("/"),
        props: false,
        meta: RouteMeta {
            title: None,
            requires_auth: false,
        },
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Static(&'a str),
    Param(&'a str),
    CatchAll(&'a str),
}

/// Split a pattern into segments. Returns `None` for an empty param name
/// or a catch-all that is not last.
pub(crate) fn compile(pattern: &str) -> Option<Vec<Segment<'_>>> {
    let parts: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let last = parts.len().saturating_sub(1);

    parts
        .iter()
        .enumerate()
        .map(|(i, part)| match part.strip_prefix(':') {
            Some(rest) => match rest.strip_suffix("(.*)*") {
                Some(name) if !name.is_empty() && i == last => Some(Segment::CatchAll(name)),
                Some(_) => None,
                None if rest.is_empty() => None,
                None => Some(Segment::Param(rest)),
            },
            None => Some(Segment::Static(part)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_pattern_compiles() {
        for route in ROUTES {
            assert!(compile(route.path).is_some(), "{}", route.path);
        }
    }

    #[test]
    fn compile_recognises_segment_kinds() {
        assert!(compile("/").unwrap().is_empty());
        assert_eq!(
            compile("/playlist/:id").unwrap(),
            [Segment::Static("playlist"), Segment::Param("id")]
        );
        assert_eq!(
            compile("/:pathMatch(.*)*").unwrap(),
            [Segment::CatchAll("pathMatch")]
        );
    }

    #[test]
    fn compile_rejects_malformed_patterns() {
        assert!(compile("/a/:").is_none());
        assert!(compile("/:rest(.*)*/tail").is_none());
    }

    #[test]
    fn no_route_requires_auth() {
        assert!(ROUTES.iter().all(|r| !r.meta.requires_auth));
    }

    #[test]
    fn missing_title_falls_back() {
        assert_eq!(RouteMeta::default().title_or_default(), DEFAULT_TITLE);
        assert_eq!(ROUTES[1].meta.title_or_default(), "User Dashboard");
    }
}
