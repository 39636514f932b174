//! Common constants used throughout the stamp application.

/// Placeholder token replaced with the project name
pub const PROJECT_NAME_TOKEN: &str = "{{projectName}}";

/// Placeholder token replaced with the camel-cased domain name
pub const DOMAIN_NAME_TOKEN: &str = "{{DOMAIN_NAME}}";

/// Placeholder token replaced with `/` followed by the domain slug
pub const DOMAIN_SLUG_TOKEN: &str = "{{DOMAIN_NAME_SLUG}}";

/// Placeholder token replaced with the domain port as text
pub const DOMAIN_PORT_TOKEN: &str = "{{DOMAIN_PORT}}";

/// Transient build-artifact directory, excluded from every copy at any depth
pub const BUILD_ARTIFACT_DIR: &str = "node_modules";

/// Package descriptor whose name/description fields get the project name
pub const MANIFEST_FILE: &str = "package.json";

/// Extensions considered text-like and eligible for substitution.
/// Extensionless files are also eligible.
pub const TEXT_EXTENSIONS: [&str; 9] =
    ["js", "json", "vue", "html", "css", "md", "ts", "jsx", "tsx"];

/// Template filenames that cannot ship under their real name (tooling would
/// act on them prematurely), renamed at the target root after copy.
pub const RESERVED_FILES: [(&str, &str); 1] = [("gitignore", ".gitignore")];

/// Inclusive port range accepted for the dev server
pub const PORT_MIN: u16 = 1024;
pub const PORT_MAX: u16 = 65535;

/// Default name of the template directory next to the executable
pub const TEMPLATE_DIR_NAME: &str = "template";
