use crate::errors::{ErrorKind, Result};
use itertools::Itertools;

pub const DEFAULT_PER_PAGE: u32 = 20;
pub const MAX_PER_PAGE: u32 = 100;

/// A validated page of the register listing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub page: u32,
    pub per_page: u32,
    /// Known only when a register size estimate is configured
    pub last_page: Option<u32>,
}

impl Page {
    /// Validates the raw `page` and `per_page` query values. Absent values
    /// take the defaults.
    pub fn from_params(
        page: Option<&str>,
        per_page: Option<&str>,
        count_estimate: Option<u64>,
    ) -> Result<Page> {
        let page = parse_positive("page", page, 1)?;
        let per_page = parse_positive("per_page", per_page, DEFAULT_PER_PAGE)?;

        if per_page > MAX_PER_PAGE {
            bail!(ErrorKind::InvalidPagination(format!(
                "The per_page parameter must be at most {}.",
                MAX_PER_PAGE
            )))
        }

        let last_page = count_estimate.map(|count| {
            let pages = (count + u64::from(per_page) - 1) / u64::from(per_page);
            pages.max(1).min(u64::from(u32::MAX)) as u32
        });

        Ok(Page {
            page,
            per_page,
            last_page,
        })
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Without a known last page, a full upstream page implies there may be more.
    pub fn has_next(&self, items_on_page: usize) -> bool {
        match self.last_page {
            Some(last) => self.page < last,
            None => items_on_page >= self.per_page as usize,
        }
    }

    /// `(rel, page)` pairs for the navigation links of this page.
    pub fn links(&self, items_on_page: usize) -> Vec<(&'static str, u32)> {
        let mut links = vec![("first", 1)];
        if self.has_prev() {
            links.push(("prev", self.page - 1));
        }
        if self.has_next(items_on_page) {
            if let Some(next) = self.page.checked_add(1) {
                links.push(("next", next));
            }
        }
        if let Some(last) = self.last_page {
            links.push(("last", last));
        }

        links
    }

    pub fn href(&self, base: &str, page: u32) -> String {
        format!("{}?page={}&per_page={}", base, page, self.per_page)
    }

    /// Value for the `Link` response header.
    pub fn link_header(&self, base: &str, items_on_page: usize) -> String {
        self.links(items_on_page)
            .iter()
            .map(|(rel, page)| format!("<{}>; rel=\"{}\"", self.href(base, *page), rel))
            .join(", ")
    }
}

fn parse_positive(name: &str, value: Option<&str>, default: u32) -> Result<u32> {
    match value {
        None => Ok(default),
        Some(v) => match v.trim().parse::<u32>() {
            Ok(n) if n >= 1 => Ok(n),
            _ => Err(ErrorKind::InvalidPagination(format!(
                "The {} parameter must be a positive integer.",
                name
            ))
            .into()),
        },
    }
}
