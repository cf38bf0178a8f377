//! Extra fields appended to a `get_playbook` result, keyed by playbook id.

/// What gets added on top of the verbatim record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Augmentation {
    pub usage_instructions: &'static [&'static str],
    /// Copy `template.folder_structure` into the result.
    pub include_folder_structure: bool,
}

pub const WIKI: Augmentation = Augmentation {
    usage_instructions: &[
        "Create the recommended folder structure in your project",
        "Start with README.md (Executive Summary) as your main entry point",
        "Create separate markdown files for each section in appropriate folders",
        "Use relative links to connect documents (e.g., [Architecture](overview/architecture.md))",
        "Fill in the placeholders with your specific content",
        "Customize sections as needed for your use case",
    ],
    include_folder_structure: true,
};

pub const REVIEW: Augmentation = Augmentation {
    usage_instructions: &[
        "Use this template to systematically review epics and stories",
        "Work through each section as a checklist",
        "Document specific issues and recommendations",
        "Provide actionable feedback with priority levels",
        "Use Atlassian tools to access and update issues as needed",
        "Add review comments directly to Jira issues",
    ],
    include_folder_structure: false,
};

pub const GENERIC: Augmentation = Augmentation {
    usage_instructions: &[
        "Copy the template sections",
        "Fill in the placeholders with your specific content",
        "Customize sections as needed for your use case",
        "Remove sections that don't apply",
    ],
    include_folder_structure: false,
};

const BY_ID: &[(&str, Augmentation)] = &[("comprehensive_wiki", WIKI), ("epic_story_review", REVIEW)];

/// Augmentation for `id`, falling back to [`GENERIC`].
pub fn for_id(id: &str) -> &'static Augmentation {
    BY_ID
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, aug)| aug)
        .unwrap_or(&GENERIC)
}
