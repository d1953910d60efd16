//! Path resolution against a route table.

use crate::error::{Result, RouterError};
use crate::routes::{compile, RouteDef, RouteMeta, RouteTarget, Segment, View, ROUTES};
use std::borrow::Cow;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Redirect hops followed before giving up
const MAX_REDIRECTS: usize = 8;

/// Outcome of resolving a location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// Normalized path of the matched route (after redirects)
    pub path: String,
    pub name: Option<&'static str>,
    pub view: View,
    /// Percent-decoded path params
    pub params: BTreeMap<String, String>,
    /// Params handed to the view; empty unless the route enables props
    pub props: BTreeMap<String, String>,
    pub query: BTreeMap<String, String>,
    pub meta: RouteMeta,
    /// Path originally requested, when a redirect was followed
    pub redirected_from: Option<String>,
}

impl ResolvedRoute {
    pub fn title(&self) -> &'static str {
        self.meta.title_or_default()
    }
}

/// Resolves locations against an ordered route table. First match wins.
#[derive(Debug, Clone)]
pub struct Router {
    routes: &'static [RouteDef],
    base: String,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Router over the application's route table
    pub fn new() -> Self {
        Self::with_routes(ROUTES)
    }

    pub fn with_routes(routes: &'static [RouteDef]) -> Self {
        Self {
            routes,
            base: String::new(),
        }
    }

    /// Serve routes under a base path such as `/app`
    #[must_use]
    pub fn with_base(mut self, base: &str) -> Self {
        self.base = base.trim_end_matches('/').to_owned();
        self
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn routes(&self) -> &'static [RouteDef] {
        self.routes
    }

    /// Resolve a location (path with optional query and fragment).
    pub fn resolve(&self, location: &str) -> Result<ResolvedRoute> {
        let (path, query) = split_location(location);
        let mut query = parse_query(query);
        let mut current = normalize(self.strip_base(path));
        let mut redirected_from = None;

        for _ in 0..=MAX_REDIRECTS {
            let Some((route, params)) = self.match_path(&current)? else {
                warn!(path = %current, "No route matched");
                return Err(RouterError::NoMatch(current));
            };

            match route.target {
                RouteTarget::Redirect(to) => {
                    debug!(from = %current, to = %to, "Following redirect");
                    if redirected_from.is_none() {
                        redirected_from = Some(current);
                    }
                    current = normalize(to);
                    query.clear();
                }
                RouteTarget::View(view) => {
                    let props = if route.props {
                        params.clone()
                    } else {
                        BTreeMap::new()
                    };
                    debug!(path = %current, view = %view, "Resolved route");
                    return Ok(ResolvedRoute {
                        path: current,
                        name: route.name,
                        view,
                        params,
                        props,
                        query,
                        meta: route.meta,
                        redirected_from,
                    });
                }
            }
        }

        warn!(location = %location, "Redirect loop");
        Err(RouterError::RedirectLoop(location.to_owned()))
    }

    fn strip_base<'a>(&self, path: &'a str) -> &'a str {
        if self.base.is_empty() {
            return path;
        }
        match path.strip_prefix(self.base.as_str()) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => path,
        }
    }

    fn match_path(
        &self,
        path: &str,
    ) -> Result<Option<(&'static RouteDef, BTreeMap<String, String>)>> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        for route in self.routes {
            let pattern = compile(route.path).ok_or(RouterError::InvalidPattern(route.path))?;
            if let Some(params) = match_segments(&pattern, &segments) {
                return Ok(Some((route, params)));
            }
        }
        Ok(None)
    }
}

fn match_segments(pattern: &[Segment<'_>], path: &[&str]) -> Option<BTreeMap<String, String>> {
    let mut params = BTreeMap::new();
    let mut rest = path;

    for segment in pattern {
        match *segment {
            Segment::CatchAll(name) => {
                params.insert(name.to_owned(), decode(&rest.join("/")));
                return Some(params);
            }
            Segment::Static(text) => {
                let (head, tail) = rest.split_first()?;
                if !head.eq_ignore_ascii_case(text) {
                    return None;
                }
                rest = tail;
            }
            Segment::Param(name) => {
                let (head, tail) = rest.split_first()?;
                params.insert(name.to_owned(), decode(head));
                rest = tail;
            }
        }
    }

    rest.is_empty().then_some(params)
}

/// Split off the query string and drop the fragment
fn split_location(location: &str) -> (&str, &str) {
    let location = location.split_once('#').map_or(location, |(head, _)| head);
    location.split_once('?').unwrap_or((location, ""))
}

fn parse_query(query: &str) -> BTreeMap<String, String> {
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

/// Leading slash, no trailing slash, no empty segments
fn normalize(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

fn decode(raw: &str) -> String {
    urlencoding::decode(raw).map_or_else(|_| raw.to_owned(), Cow::into_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_slashes() {
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("/dashboard/"), "/dashboard");
        assert_eq!(normalize("//playlist//7"), "/playlist/7");
    }

    #[test]
    fn split_location_drops_fragment() {
        assert_eq!(split_location("/a?x=1#top"), ("/a", "x=1"));
        assert_eq!(split_location("/a#top?x=1"), ("/a", ""));
        assert_eq!(split_location("/a"), ("/a", ""));
    }

    #[test]
    fn param_is_percent_decoded() {
        let pattern = compile("/playlist/:id").unwrap();
        let params = match_segments(&pattern, &["playlist", "road%20trip"]).unwrap();
        assert_eq!(params["id"], "road trip");
    }

    #[test]
    fn invalid_utf8_escape_is_kept_raw() {
        assert_eq!(decode("%FF"), "%FF");
    }

    #[test]
    fn static_segments_ignore_case() {
        let pattern = compile("/dashboard").unwrap();
        assert!(match_segments(&pattern, &["DashBoard"]).is_some());
        assert!(match_segments(&pattern, &["dashboard", "extra"]).is_none());
    }

    #[test]
    fn catch_all_matches_empty_rest() {
        let pattern = compile("/:rest(.*)*").unwrap();
        assert_eq!(match_segments(&pattern, &[]).unwrap()["rest"], "");
    }

    static LOOPING: &[RouteDef] = &[
        RouteDef {
            path: "/a",
            name: None,
            target: RouteTarget::Redirect("/b"),
            props: false,
            meta: RouteMeta {
                title: None,
                requires_auth: false,
            },
        },
        RouteDef {
            path: "/b",
            name: None,
            target: RouteTarget::Redirect("/a"),
            props: false,
            meta: RouteMeta {
                title: None,
                requires_auth: false,
            },
        },
    ];

    #[test]
    fn redirect_loop_is_an_error() {
        let router = Router::with_routes(LOOPING);
        assert_eq!(
            router.resolve("/a"),
            Err(RouterError::RedirectLoop("/a".into()))
        );
        assert_eq!(router.resolve("/c"), Err(RouterError::NoMatch("/c".into())));
    }

    static BROKEN: &[RouteDef] = &[RouteDef {
        path: "/x/:",
        name: None,
        target: RouteTarget::View(View::Home),
        props: false,
        meta: RouteMeta {
            title: None,
            requires_auth: false,
        },
    }];

    #[test]
    fn malformed_pattern_is_reported() {
        let router = Router::with_routes(BROKEN);
        assert_eq!(
            router.resolve("/x/1"),
            Err(RouterError::InvalidPattern("/x/:"))
        );
    }
}
