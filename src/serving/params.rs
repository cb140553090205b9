use std::collections::HashMap;

pub(crate) const VIEW_PARAM: &str = "_view";
pub(crate) const FORMAT_PARAM: &str = "_format";
pub(crate) const PAGE_PARAM: &str = "page";
pub(crate) const PER_PAGE_PARAM: &str = "per_page";

/// Decoded query string parameters.
pub(crate) type QueryParams = HashMap<String, String>;

pub(crate) fn param<'a>(query: &'a QueryParams, name: &str) -> Option<&'a str> {
    query.get(name).map(String::as_str)
}
