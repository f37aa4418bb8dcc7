use crate::projects::Project;

impl Project {
    /// `needle` must already be lowercase.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.stack.join(" ").to_lowercase().contains(needle)
    }
}

/// The stack is matched as one space-joined string, so a query may span two tags.
pub fn filter_projects<'a>(projects: &'a [Project], query: &str) -> Vec<&'a Project> {
    if query.is_empty() {
        return projects.iter().collect();
    }

    let needle = query.to_lowercase();
    projects
        .iter()
        .filter(|project| project.matches_lowercase(&needle))
        .collect()
}
