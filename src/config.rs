//! Validated project configuration.
//! Flag values and prompt answers are merged into a single `ProjectConfig`
//! through one validation pass; the record is immutable once generation
//! begins. Derived values (domain slug, camel-cased domain name, the
//! placeholder replacement map) live here as well.

use indexmap::IndexMap;

use crate::constants::{
    DOMAIN_NAME_TOKEN, DOMAIN_PORT_TOKEN, DOMAIN_SLUG_TOKEN, PORT_MAX, PORT_MIN,
    PROJECT_NAME_TOKEN,
};
use crate::error::{Error, Result};

/// Mapping from literal placeholder token to its substitution value.
/// Tokens are disjoint literal strings, so insertion order does not affect
/// the result; the map is ordered anyway to keep output deterministic.
pub type ReplacementMap = IndexMap<String, String>;

/// The resolved configuration driving a single generation run.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Folder the project directory is created under; `None` means the
    /// current working directory
    pub output_folder: Option<String>,
    pub project_name: String,
    pub domain_name: String,
    pub domain_port: u16,
    pub skip_install: bool,
    pub skip_git: bool,
}

impl ProjectConfig {
    /// Builds a config from raw (flag or prompt) values, running every
    /// field validator once.
    ///
    /// # Errors
    /// * `Error::ValidationError` on the first field that fails validation
    pub fn new(
        output_folder: Option<String>,
        project_name: String,
        domain_name: String,
        domain_port: &str,
        skip_install: bool,
        skip_git: bool,
    ) -> Result<Self> {
        validate_project_name(&project_name).map_err(Error::ValidationError)?;
        validate_domain_name(&domain_name).map_err(Error::ValidationError)?;
        let domain_port = validate_domain_port(domain_port).map_err(Error::ValidationError)?;

        Ok(Self {
            output_folder: output_folder.filter(|folder| !folder.trim().is_empty()),
            project_name,
            domain_name,
            domain_port,
            skip_install,
            skip_git,
        })
    }

    /// URL-safe slug of the domain name.
    pub fn domain_slug(&self) -> String {
        slugify(&self.domain_name)
    }

    /// Camel-cased variant of the domain name.
    pub fn domain_camel_case(&self) -> String {
        camel_case(&self.domain_name)
    }

    /// The placeholder tokens this run substitutes and their values.
    pub fn replacements(&self) -> ReplacementMap {
        let mut replacements = ReplacementMap::new();
        replacements.insert(PROJECT_NAME_TOKEN.to_string(), self.project_name.clone());
        replacements.insert(DOMAIN_NAME_TOKEN.to_string(), self.domain_camel_case());
        replacements.insert(DOMAIN_SLUG_TOKEN.to_string(), format!("/{}", self.domain_slug()));
        replacements.insert(DOMAIN_PORT_TOKEN.to_string(), self.domain_port.to_string());
        replacements
    }
}

/// Validates a project name: non-empty, letters/digits/hyphens only.
pub fn validate_project_name(input: &str) -> std::result::Result<(), String> {
    if input.trim().is_empty() {
        return Err("Project name is required".to_string());
    }
    if !input.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err("Project name should only contain letters, numbers, and hyphens".to_string());
    }
    Ok(())
}

/// Validates a domain name: any non-empty text.
pub fn validate_domain_name(input: &str) -> std::result::Result<(), String> {
    if input.trim().is_empty() {
        return Err("Domain name is required".to_string());
    }
    Ok(())
}

/// Validates and parses a domain port: integer in [1024, 65535].
pub fn validate_domain_port(input: &str) -> std::result::Result<u16, String> {
    let port: u32 = input
        .trim()
        .parse()
        .map_err(|_| "Port must be a number".to_string())?;
    if port < u32::from(PORT_MIN) || port > u32::from(PORT_MAX) {
        return Err(format!("Port must be between {} and {}", PORT_MIN, PORT_MAX));
    }
    Ok(port as u16)
}

/// Derives a URL-safe slug: lowercase, runs of non-alphanumeric characters
/// collapsed to a single hyphen, no leading or trailing hyphen.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// Derives a camel-cased variant of a space-separated display name: the
/// first word's first character is lowercased, every following word's
/// first character is uppercased, and the remainder of each word is kept
/// as written.
pub fn camel_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for (index, word) in text.split(' ').filter(|w| !w.is_empty()).enumerate() {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if index == 0 {
                result.extend(first.to_lowercase());
            } else {
                result.extend(first.to_uppercase());
            }
            result.push_str(chars.as_str());
        }
    }
    result
}
