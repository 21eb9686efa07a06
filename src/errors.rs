use std::fmt;

/// User-facing, recoverable errors produced while parsing or running a
/// search. The first error encountered aborts the query; none of these are
/// fatal to the host process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A token matched none of the recognized search categories
    UnclassifiableToken(String),
    /// The same value was requested with both polarities in one category,
    /// or a structural keyword was re-set with the opposite polarity
    ConflictingPredicate(String),
    /// Too many required values in one category; the payload names the cap
    CardinalityExceeded(&'static str),
    /// A move in the move category does not exist in the catalog
    UnknownMove(String),
    /// The query contained no tokens at all
    EmptyQuery,
    /// An `all`-only query was attempted in a broadcast context
    NotBroadcastable,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::UnclassifiableToken(token) => {
                write!(
                    f,
                    "'{}' could not be found in any of the search categories.",
                    token
                )
            }
            SearchError::ConflictingPredicate(value) => {
                write!(f, "A search cannot both include and exclude '{}'.", value)
            }
            SearchError::CardinalityExceeded(cap) => {
                write!(f, "You cannot search for more than {} at once.", cap)
            }
            SearchError::UnknownMove(move_id) => {
                write!(f, "'{}' is not a recognized move.", move_id)
            }
            SearchError::EmptyQuery => write!(f, "No search parameters were found."),
            SearchError::NotBroadcastable => {
                write!(f, "A search for all Pokemon cannot be broadcast.")
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// Type alias for Results using SearchError
pub type SearchResult<T> = Result<T, SearchError>;
