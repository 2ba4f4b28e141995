use std::fmt;

/// Boxed cause carried by [`Error::ExecutionFailed`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Where a driver made its decision: an ordinal for positional inputs, a key
/// for keyed ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Location<K = usize> {
    Index(usize),
    Key(K),
}

impl<K> Location<K> {
    pub fn index(&self) -> Option<usize> {
        match self {
            Location::Index(i) => Some(*i),
            Location::Key(_) => None,
        }
    }

    pub fn key(&self) -> Option<&K> {
        match self {
            Location::Index(_) => None,
            Location::Key(k) => Some(k),
        }
    }

    pub fn map<J>(self, f: impl FnOnce(K) -> J) -> Location<J> {
        match self {
            Location::Index(i) => Location::Index(i),
            Location::Key(k) => Location::Key(f(k)),
        }
    }
}

impl<K: fmt::Debug> fmt::Display for Location<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Index(i) => write!(f, "index {i}"),
            Location::Key(k) => write!(f, "key {k:?}"),
        }
    }
}

/// Failure reported by the algorithm drivers.
///
/// `T` is the element type, `K` the key type of keyed inputs. Positional
/// drivers leave `K` at its default and only ever report
/// [`Location::Index`].
#[derive(Debug, thiserror::Error)]
pub enum Error<T, K = usize> {
    /// The input yielded no element before the first read.
    #[error("empty input")]
    EmptyInput,

    /// A search scanned the whole input without a match.
    #[error("element not found")]
    ElementNotFound,

    /// `mismatch` found both inputs equal element-wise and equally long.
    #[error("inputs are equal")]
    EqualInputs,

    /// A quantifier (`all_of`, `any_of`, `none_of`) decided against the
    /// input at `location`.
    #[error("comparison failed at {location}")]
    ComparisonFailed { location: Location<K>, item: T },

    /// A user action or transform failed at `location`.
    ///
    /// `item` is `None` when the failure was latched by a stage inside a
    /// cursor pipeline, whose input has a different type than the elements
    /// the driver sees.
    #[error("execution failed at {location}")]
    ExecutionFailed {
        location: Location<K>,
        item: Option<T>,
        #[source]
        cause: BoxError,
    },
}

impl<T, K> Error<T, K> {
    pub fn comparison_failed(location: Location<K>, item: T) -> Self {
        Error::ComparisonFailed { location, item }
    }

    pub fn execution_failed(location: Location<K>, item: T, cause: impl Into<BoxError>) -> Self {
        Error::ExecutionFailed {
            location,
            item: Some(item),
            cause: cause.into(),
        }
    }

    pub fn is_empty_input(&self) -> bool {
        matches!(self, Error::EmptyInput)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::ElementNotFound)
    }

    pub fn is_equal_inputs(&self) -> bool {
        matches!(self, Error::EqualInputs)
    }

    pub fn is_comparison_failed(&self) -> bool {
        matches!(self, Error::ComparisonFailed { .. })
    }

    pub fn is_execution_failed(&self) -> bool {
        matches!(self, Error::ExecutionFailed { .. })
    }

    /// Location of the offending element, for the two variants that carry one.
    pub fn location(&self) -> Option<&Location<K>> {
        match self {
            Error::ComparisonFailed { location, .. } | Error::ExecutionFailed { location, .. } => {
                Some(location)
            },
            _ => None,
        }
    }

    pub fn item(&self) -> Option<&T> {
        match self {
            Error::ComparisonFailed { item, .. } => Some(item),
            Error::ExecutionFailed { item, .. } => item.as_ref(),
            _ => None,
        }
    }

    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Error::ExecutionFailed { cause, .. } => Some(cause.as_ref()),
            _ => None,
        }
    }

    /// Convert the carried item and key, e.g. from borrowed to owned
    pub fn map_parts<U, J>(self, item: impl FnOnce(T) -> U, key: impl FnOnce(K) -> J) -> Error<U, J> {
        match self {
            Error::EmptyInput => Error::EmptyInput,
            Error::ElementNotFound => Error::ElementNotFound,
            Error::EqualInputs => Error::EqualInputs,
            Error::ComparisonFailed { location, item: it } => Error::ComparisonFailed {
                location: location.map(key),
                item: item(it),
            },
            Error::ExecutionFailed {
                location,
                item: it,
                cause,
            } => Error::ExecutionFailed {
                location: location.map(key),
                item: it.map(item),
                cause,
            },
        }
    }
}

pub type Result<R, T, K = usize> = std::result::Result<R, Error<T, K>>;

/// A failure latched by a fallible stage of a cursor pipeline
///
/// The cursor that latched it stops at `End`; drivers pick it up with
/// [`Forward::take_fault`](crate::iterator::Forward::take_fault). `index` is
/// the ordinal the failed element would have had in the output of the
/// cursor reporting it.
#[derive(Debug, thiserror::Error)]
#[error("pipeline stage failed at index {index}")]
pub struct Fault {
    pub index: usize,
    #[source]
    pub cause: BoxError,
}

impl Fault {
    pub fn new(index: usize, cause: impl Into<BoxError>) -> Self {
        Fault {
            index,
            cause: cause.into(),
        }
    }

    /// The same failure as seen by a wrapping cursor
    pub(crate) fn reindex(self, index: usize) -> Self {
        Fault { index, ..self }
    }

    pub fn into_error<T, K>(self) -> Error<T, K> {
        Error::ExecutionFailed {
            location: Location::Index(self.index),
            item: None,
            cause: self.cause,
        }
    }
}

impl<T, K> From<Fault> for Error<T, K> {
    fn from(fault: Fault) -> Self {
        fault.into_error()
    }
}

/// Rejected `Range` construction arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("invalid range: {0}")]
    InvalidRange(String),

    #[error("unclean step: {0}")]
    UncleanStep(String),

    #[error("too many arguments: expected at most 3, got {0}")]
    TooManyArgs(usize),
}
