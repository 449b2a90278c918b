//! Path routing.

use voyage_model::Page;

/// Map a navigation path to its page.
///
/// Exact match only: trailing slashes, query strings, and case variants all
/// resolve to [`Page::NotFound`].
pub fn resolve(path: &str) -> Page {
    match path {
        "/" => Page::Home,
        "/dataset-overview" => Page::Overview,
        "/dataset" => Page::DatasetView,
        "/distribution" => Page::Distribution,
        "/relationship" => Page::Relationship,
        "/categorical" => Page::Categorical,
        "/outcome" => Page::Outcome,
        _ => Page::NotFound,
    }
}

/// A navigation bar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub page: Page,
}

/// Navigation bar entries in display order.
pub fn nav_links() -> Vec<NavLink> {
    Page::navigable()
        .iter()
        .filter_map(|page| {
            page.path().map(|href| NavLink {
                label: page.label(),
                href,
                page: *page,
            })
        })
        .collect()
}
