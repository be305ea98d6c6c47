//! Project View Engine: tag vocabulary, filtering, and pagination over a
//! fetched project snapshot.
//!
//! Derived views are recomputed from the current inputs on every call.

use std::collections::BTreeSet;

use crate::records::ProjectView;

/// Projects per page on the full listing.
pub const PAGE_SIZE: usize = 6;

/// Projects shown on the home page preview.
pub const PREVIEW_SIZE: usize = 3;

/// Split a comma-separated tag string into trimmed, non-empty tokens.
pub fn split_tags(tags: &str) -> impl Iterator<Item = &str> {
    tags.split(',').map(str::trim).filter(|tag| !tag.is_empty())
}

/// Distinct tags across all projects in ascending order.
///
/// Empty tokens (e.g. from a trailing comma) are left out.
#[must_use]
pub fn derive_tag_vocabulary(projects: &[ProjectView]) -> Vec<String> {
    projects
        .iter()
        .flat_map(|project| split_tags(&project.tags))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Narrow `projects` by search term, then by tag, preserving snapshot order.
///
/// Both matches are case-insensitive substring checks. The tag is matched
/// against the raw `tags` string, so `"Go"` also matches `"Golang"`. An empty
/// term or tag leaves that stage a no-op.
#[must_use]
pub fn apply_filters<'a>(
    projects: &'a [ProjectView],
    search_term: &str,
    selected_tag: &str,
) -> Vec<&'a ProjectView> {
    let search = search_term.to_lowercase();
    let tag = selected_tag.to_lowercase();

    projects
        .iter()
        .filter(|project| {
            search.is_empty()
                || project.title.to_lowercase().contains(&search)
                || project.description.to_lowercase().contains(&search)
        })
        .filter(|project| tag.is_empty() || project.tags.to_lowercase().contains(&tag))
        .collect()
}

/// One page of a filtered sequence plus the numbers a pager needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number the slice was taken for.
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    page_size: usize,
}

impl<T> Page<T> {
    /// 1-based index of the first item on this page.
    #[must_use]
    pub fn first_item(&self) -> usize {
        self.current_page.saturating_sub(1) * self.page_size + 1
    }

    /// 1-based index of the last item on this page, capped at the total.
    #[must_use]
    pub fn last_item(&self) -> usize {
        (self.current_page * self.page_size).min(self.total_items)
    }

    /// Pager controls are only rendered when there is more than one page.
    #[must_use]
    pub fn shows_pager(&self) -> bool {
        self.total_pages > 1
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

fn page_count(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total_items.div_ceil(page_size)
    }
}

/// Slice `items[(page-1)*size .. page*size]`.
///
/// Out-of-range pages are not clamped; they produce an empty page. Callers
/// are expected to keep `current_page` within `1..=total_pages`. Pass a
/// slice of references to avoid cloning the items themselves.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page_size: usize, current_page: usize) -> Page<T> {
    let total_items = items.len();

    let slice = if current_page == 0 || page_size == 0 {
        &items[..0]
    } else {
        let start = (current_page - 1).saturating_mul(page_size).min(total_items);
        let end = current_page.saturating_mul(page_size).min(total_items);
        &items[start..end]
    };

    Page {
        items: slice.to_vec(),
        current_page,
        total_pages: page_count(total_items, page_size),
        total_items,
        page_size,
    }
}

/// Home page preview: the first [`PREVIEW_SIZE`] projects, unfiltered.
#[must_use]
pub fn preview(projects: &[ProjectView]) -> &[ProjectView] {
    &projects[..projects.len().min(PREVIEW_SIZE)]
}

/// Filter and page state for the project listing.
///
/// Changing the snapshot, the search term, or the selected tag resets the
/// current page to 1.
#[derive(Debug, Clone)]
pub struct ProjectBrowser {
    all_projects: Vec<ProjectView>,
    search_term: String,
    selected_tag: String,
    current_page: usize,
    page_size: usize,
}

impl Default for ProjectBrowser {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ProjectBrowser {
    #[must_use]
    pub fn new(projects: Vec<ProjectView>) -> Self {
        Self::with_page_size(projects, PAGE_SIZE)
    }

    #[must_use]
    pub fn with_page_size(projects: Vec<ProjectView>, page_size: usize) -> Self {
        Self {
            all_projects: projects,
            search_term: String::new(),
            selected_tag: String::new(),
            current_page: 1,
            page_size,
        }
    }

    pub fn set_projects(&mut self, projects: Vec<ProjectView>) {
        self.all_projects = projects;
        self.current_page = 1;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    pub fn set_selected_tag(&mut self, tag: impl Into<String>) {
        self.selected_tag = tag.into();
        self.current_page = 1;
    }

    /// Drop both filters and show the full snapshot from page 1.
    pub fn clear_filters(&mut self) {
        self.search_term.clear();
        self.selected_tag.clear();
        self.current_page = 1;
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub fn selected_tag(&self) -> &str {
        &self.selected_tag
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn all_projects(&self) -> &[ProjectView] {
        &self.all_projects
    }

    /// Tag vocabulary over the whole snapshot, not the filtered subset.
    #[must_use]
    pub fn tag_vocabulary(&self) -> Vec<String> {
        derive_tag_vocabulary(&self.all_projects)
    }

    #[must_use]
    pub fn filtered(&self) -> Vec<&ProjectView> {
        apply_filters(&self.all_projects, &self.search_term, &self.selected_tag)
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        page_count(self.filtered().len(), self.page_size)
    }

    /// True when the filters leave nothing to show (the empty state).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filtered().is_empty()
    }

    /// Move to `page` if it lies within `1..=total_pages`.
    ///
    /// Returns `false` and leaves the state untouched otherwise, mirroring a
    /// disabled pager button.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page == 0 || page > self.total_pages() {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.current_page + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    /// Visible projects for the current page.
    #[must_use]
    pub fn page(&self) -> Page<&ProjectView> {
        paginate(&self.filtered(), self.page_size, self.current_page)
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
