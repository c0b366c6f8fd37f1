//! Errors surfaced by the router.

/// The error type for routing operations.
///
/// No-match is never an error; the only failure in normal operation is a route
/// pattern that does not compile as a regular expression. That failure is
/// fatal to the render pass it occurs in and is propagated to the caller
/// rather than recovered.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The route pattern is not a valid regular expression fragment.
    #[error("invalid route pattern {pattern:?}: {source}")]
    Pattern {
        /// The pattern as it was configured on the route.
        pattern: String,
        /// The underlying regex compilation error.
        source: regex::Error,
    },
}
