//! File contents written into a freshly scaffolded project.

/// Version stamped into every generated setup.py.
pub const DEFAULT_VERSION: &str = "1.0";

/// Ignore patterns for Python build and cache artifacts.
pub const GITIGNORE: &str = "\
# Byte-compiled / cache
__pycache__/
*.py[cod]
*$py.class

# Distribution / packaging
build/
dist/
*.egg-info/
.eggs/

# Environments
venv/
.venv/
env/

# Tooling caches
.mypy_cache/
.pytest_cache/
.coverage
";

/// Render the setup.py packaging descriptor.
///
/// Double quotes in description and author are escaped so the generated
/// file stays valid Python.
pub fn setup_py(project_name: &str, package_name: &str, description: &str, author: &str) -> String {
    format!(
        r#"from setuptools import setup

setup(
    name="{name}",
    version="{version}",
    description="{description}",
    author="{author}",
    packages=["{package}"],
)
"#,
        name = escape_quotes(project_name),
        version = DEFAULT_VERSION,
        description = escape_quotes(description),
        author = escape_quotes(author),
        package = package_name,
    )
}

fn escape_quotes(value: &str) -> String {
    value.replace('"', "\\\"")
}
