// src/filtering/extension.rs

use crate::config::DiscoveryConfig;

/// Checks if a file name passes the inclusion rules defined in `DiscoveryConfig`.
///
/// The filtering logic follows these rules in order:
///
/// 1.  **Allowlist mode:** If `config.only_names` is `Some`, the name must be in
///     that set. Suffix rules are not consulted.
/// 2.  **Suffix match:** Otherwise the name must end with one of
///     `config.extensions`. The comparison is case-sensitive and works on the
///     whole name, so multi-part suffixes such as `.d.ts` are supported.
///
/// Excluded file names are checked separately by
/// [`is_excluded_file`](crate::filtering::is_excluded_file).
///
/// # Examples
///
/// ```
/// use dirprint::config::Config;
/// use dirprint::filtering::passes_name_filters;
///
/// let mut config = Config::new_for_test("/project", "/project/output");
/// assert!(passes_name_filters("page.tsx", &config.discovery));
/// assert!(!passes_name_filters("Cargo.toml", &config.discovery));
///
/// config.discovery.only_names = Some(["Cargo.toml".to_string()].into());
/// assert!(passes_name_filters("Cargo.toml", &config.discovery));
/// assert!(!passes_name_filters("page.tsx", &config.discovery));
/// ```
pub fn passes_name_filters(file_name: &str, config: &DiscoveryConfig) -> bool {
    match &config.only_names {
        Some(allowed) => allowed.contains(file_name),
        None => config
            .extensions
            .iter()
            .any(|suffix| file_name.ends_with(suffix.as_str())),
    }
}
