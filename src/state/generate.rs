//! Project-generation form and the generated-code viewer.
//!
//! DESIGN
//! ======
//! The form keeps raw input strings and only produces a request once it
//! validates, so the submit handler never sends half-filled bodies. The
//! viewer owns the generated files in file-name order (a `BTreeMap` from the
//! wire) and the index of the visible tab.

#[cfg(test)]
#[path = "generate_test.rs"]
mod generate_test;

use crate::net::types::{GenerateProjectRequest, GeneratedProject};

/// `(value sent to the server, label shown in the select)`.
pub type SelectOption = (&'static str, &'static str);

pub const PROJECT_TYPES: &[SelectOption] = &[
    ("web", "Web Application"),
    ("api", "REST API"),
    ("cli", "Command-line Tool"),
    ("mobile", "Mobile App"),
    ("library", "Library"),
];

pub const COMPLEXITIES: &[SelectOption] = &[
    ("simple", "Simple"),
    ("moderate", "Moderate"),
    ("complex", "Complex"),
];

pub const STYLES: &[SelectOption] = &[
    ("modern", "Modern"),
    ("minimal", "Minimal"),
    ("corporate", "Corporate"),
    ("playful", "Playful"),
];

/// Raw form input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateForm {
    pub project_type: String,
    pub complexity: String,
    pub style: String,
    pub description: String,
    /// Comma- or newline-separated.
    pub features: String,
}

impl Default for GenerateForm {
    fn default() -> Self {
        Self {
            project_type: PROJECT_TYPES[0].0.to_owned(),
            complexity: COMPLEXITIES[0].0.to_owned(),
            style: STYLES[0].0.to_owned(),
            description: String::new(),
            features: String::new(),
        }
    }
}

impl GenerateForm {
    /// Validate and build the request body.
    ///
    /// # Errors
    ///
    /// A user-facing message when the description is blank or a select
    /// holds a value outside its option list.
    pub fn to_request(&self) -> Result<GenerateProjectRequest, String> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err("Please describe the project you want to generate.".to_owned());
        }
        check_option("project type", PROJECT_TYPES, &self.project_type)?;
        check_option("complexity", COMPLEXITIES, &self.complexity)?;
        check_option("style", STYLES, &self.style)?;
        Ok(GenerateProjectRequest {
            project_type: self.project_type.clone(),
            complexity: self.complexity.clone(),
            style: self.style.clone(),
            description: description.to_owned(),
            features: parse_features(&self.features),
        })
    }
}

fn check_option(field: &str, options: &[SelectOption], value: &str) -> Result<(), String> {
    if options.iter().any(|(option, _)| *option == value) {
        Ok(())
    } else {
        Err(format!("Unknown {field}: {value}"))
    }
}

/// Split on commas and newlines, trim, drop empties.
#[must_use]
pub fn parse_features(raw: &str) -> Vec<String> {
    raw.split([',', '\n'])
        .map(str::trim)
        .filter(|feature| !feature.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Tabbed view over a generated project's files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeViewer {
    pub project_name: String,
    files: Vec<(String, String)>,
    active: usize,
}

impl CodeViewer {
    /// Open on the first file.
    #[must_use]
    pub fn new(project: &GeneratedProject) -> Self {
        Self {
            project_name: project.name.clone(),
            files: project.files.iter().map(|(name, body)| (name.clone(), body.clone())).collect(),
            active: 0,
        }
    }

    /// File names in tab order.
    pub fn tabs(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Switch tabs; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.files.len() || index == self.active {
            return false;
        }
        self.active = index;
        true
    }

    #[must_use]
    pub fn active_name(&self) -> Option<&str> {
        self.files.get(self.active).map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn active_contents(&self) -> Option<&str> {
        self.files.get(self.active).map(|(_, body)| body.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
