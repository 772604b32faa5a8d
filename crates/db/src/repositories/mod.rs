//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod media_repo;
pub mod page_content_repo;
pub mod portfolio_repo;

pub use media_repo::MediaRepo;
pub use page_content_repo::PageContentRepo;
pub use portfolio_repo::PortfolioRepo;

/// Build an `ILIKE` substring pattern, escaping `%`, `_` and `\` in `term`.
///
/// Returns `None` for a blank term so callers can skip the filter.
pub(crate) fn contains_pattern(term: Option<&str>) -> Option<String> {
    let term = term.map(str::trim).filter(|t| !t.is_empty())?;
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    Some(escaped)
}
