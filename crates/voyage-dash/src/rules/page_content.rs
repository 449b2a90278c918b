use voyage_model::{Dataset, PageView, Recompute};

use crate::error::Result;
use crate::router::resolve;
use crate::view::build;

/// Page content for a path. Never suppressed: unknown paths render the
/// not-found notice.
pub fn page_content(dataset: &Dataset, path: &str) -> Result<Recompute<PageView>> {
    let page = resolve(path);
    Ok(Recompute::Recomputed(build(page, dataset)?))
}
