//! Version parsing for tool `--version` output

use semver::Version;

/// Extract a version from a tool's `--version` output.
///
/// Accepts outputs such as `Python 3.11.4`, `v20.11.0` or
/// `git version 2.43.0.windows.1`; missing minor/patch components are
/// treated as zero.
pub fn parse_version(output: &str) -> Option<Version> {
    let token = output
        .split_whitespace()
        .map(|t| t.strip_prefix('v').unwrap_or(t))
        .find(|t| t.starts_with(|c: char| c.is_ascii_digit()))?;

    let numeric: String = token
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut parts = numeric.split('.').filter(|p| !p.is_empty());
    let major = parts.next()?;
    let minor = parts.next().unwrap_or("0");
    let patch = parts.next().unwrap_or("0");

    Version::parse(&format!("{}.{}.{}", major, minor, patch)).ok()
}

/// Whether the version reported in `output` is at least `minimum`.
/// Unparseable output never meets a minimum.
pub fn meets_minimum(output: &str, minimum: &Version) -> bool {
    parse_version(output).is_some_and(|v| &v >= minimum)
}
