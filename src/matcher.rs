//! Match the current path against a route pattern.
//!
//! This is the pure core of the router: a function from (current path, route
//! pattern, exactness flag) to a match result or no-match. Each route is
//! evaluated independently against the current location every time it is
//! asked; there is no ranking or precedence between sibling routes.

use regex::Regex;

use crate::error::Error;

/// The result of successfully matching a path against a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatch {
    /// The pattern the route was configured with, or `None` for a match-all
    /// route that had no pattern.
    pub pattern: Option<String>,
    /// The prefix of the current path the pattern actually matched.
    pub matched_prefix: String,
    /// Whether the matched prefix is the entire current path.
    pub is_exact: bool,
}

/// Match `current` against an optional route pattern.
///
/// A missing pattern matches everything, exactly. Otherwise the pattern is
/// treated as a regular expression fragment anchored at the start of the
/// path. The pattern is not escaped, so regex metacharacters keep their
/// pattern meaning.
///
/// `Ok(None)` means no match, which is a normal silent outcome. When `exact`
/// is set, a prefix match that does not cover the whole path is discarded
/// entirely. A pattern that fails to compile is returned as an error.
pub fn match_path(current: &str, pattern: Option<&str>, exact: bool)
-> Result<Option<PathMatch>, Error> {
    let pattern = match pattern {
        Some(pattern) => pattern,
        None => {
            return Ok(Some(PathMatch {
                pattern: None,
                matched_prefix: current.to_string(),
                is_exact: true,
            }));
        }
    };

    let regex = Regex::new(&format!("^{}", pattern))
        .map_err(|source| Error::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;

    // the match must start at the beginning of the path, a match further in
    // (possible with alternation despite the anchor) doesn't count
    let found = match regex.find(current).filter(|m| m.start() == 0) {
        Some(found) => found,
        None => return Ok(None),
    };

    let matched_prefix = found.as_str().to_string();
    let is_exact = matched_prefix == current;

    if exact && !is_exact {
        // there was a prefix match, but the route asked for an exact one
        return Ok(None);
    }

    Ok(Some(PathMatch {
        pattern: Some(pattern.to_string()),
        matched_prefix,
        is_exact,
    }))
}
