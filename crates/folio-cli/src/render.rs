//! Plain-text rendering of profile and project views.

use folio_core::{preview, Page, ProfileView, ProjectBrowser, ProjectView};

use crate::client::Snapshot;

pub const EMPTY_STATE_TITLE: &str = "No projects found";
pub const EMPTY_STATE_HINT: &str = "No projects match your current search criteria.";

#[must_use]
pub fn render_profile(profile: &ProfileView) -> String {
    let mut out = String::new();
    let name = profile.full_name();
    out.push_str(if name.is_empty() { "(unnamed)" } else { name.as_str() });
    out.push('\n');

    for (label, value) in [
        ("Bio", &profile.bio),
        ("Background", &profile.background),
        ("Education", &profile.education),
        ("Interests", &profile.interests),
    ] {
        if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
            out.push_str(&format!("\n{label}:\n  {}\n", value.trim()));
        }
    }

    let skills = profile.skill_list();
    if !skills.is_empty() {
        out.push_str(&format!("\nSkills: {}\n", skills.join(", ")));
    }

    for (label, value) in [
        ("GitHub", &profile.github),
        ("Email", &profile.email),
        ("LinkedIn", &profile.linkedin),
    ] {
        if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
            out.push_str(&format!("{label}: {value}\n"));
        }
    }
    out
}

#[must_use]
pub fn render_project_card(project: &ProjectView) -> String {
    let mut out = String::new();
    out.push_str(&format!("* {}\n", project.title));
    if !project.description.is_empty() {
        out.push_str(&format!("  {}\n", project.description));
    }
    let tags = project.tag_list();
    if !tags.is_empty() {
        out.push_str(&format!("  [{}]\n", tags.join("] [")));
    }
    if let Some(code) = project.code_link() {
        out.push_str(&format!("  Code: {code}\n"));
    }
    if let Some(demo) = project.demo_link() {
        out.push_str(&format!("  Demo: {demo}\n"));
    }
    out
}

/// Pager line: `< Previous  1 [2] 3  Next >`, with disabled ends shown in
/// parentheses. Empty when there is only one page.
#[must_use]
pub fn render_pager<T>(page: &Page<T>) -> String {
    if !page.shows_pager() {
        return String::new();
    }

    let previous = if page.has_previous() { "< Previous" } else { "(< Previous)" };
    let next = if page.has_next() { "Next >" } else { "(Next >)" };
    let numbers = (1..=page.total_pages)
        .map(|n| {
            if n == page.current_page {
                format!("[{n}]")
            } else {
                n.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!("{previous}  {numbers}  {next}")
}

/// Full listing for the browser's current filters and page, or the empty
/// state when nothing matches.
#[must_use]
pub fn render_listing(browser: &ProjectBrowser) -> String {
    let page = browser.page();
    if page.total_items == 0 {
        return format!("{EMPTY_STATE_TITLE}\n{EMPTY_STATE_HINT}\n");
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Showing {}-{} of {} projects\n\n",
        page.first_item(),
        page.last_item(),
        page.total_items
    ));
    for project in &page.items {
        out.push_str(&render_project_card(project));
        out.push('\n');
    }

    let pager = render_pager(&page);
    if !pager.is_empty() {
        out.push_str(&format!("{pager}\n"));
    }
    out
}

/// Home page: profile summary followed by the unfiltered project preview.
#[must_use]
pub fn render_home(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    match &snapshot.profile {
        Some(profile) => out.push_str(&render_profile(profile)),
        None => out.push_str("(profile unavailable)\n"),
    }

    let featured = preview(&snapshot.projects);
    if !featured.is_empty() {
        out.push_str("\nFeatured projects\n\n");
        for project in featured {
            out.push_str(&render_project_card(project));
            out.push('\n');
        }
    }
    out
}

#[must_use]
pub fn render_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No technologies tagged yet.\n".to_string();
    }
    let mut out = String::from("All Technologies\n");
    for tag in tags {
        out.push_str(&format!("  {tag}\n"));
    }
    out
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
