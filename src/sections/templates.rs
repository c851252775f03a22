//! Built-in configuration sections.
//!
//! Fixed templates with no substitution. Each starts with a blank line so
//! it stays visually separate from whatever precedes it in the file.

use super::writer::Section;

const ISORT: &str = "
[isort]
multi_line_output=3
include_trailing_comma=True
force_grid_wrap=0
use_parentheses=True
line_length=88
";

const MYPY: &str = "
[mypy]
ignore_missing_imports=True
warn_unused_ignores=True
warn_redundant_casts=True
check_untyped_defs=True
";

const FLAKE8: &str = "
[flake8]
max-line-length=88
extend-ignore=E203,W503
exclude=.git,__pycache__,build,dist
";

/// Sections every project gets: import sorting, type checking, linting.
pub fn known_sections() -> Vec<Section> {
    vec![
        Section::new("isort", ISORT),
        Section::new("mypy", MYPY),
        Section::new("flake8", FLAKE8),
    ]
}
