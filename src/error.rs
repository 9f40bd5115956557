//! Error types for the container adapters.
//!
//! Tree operations themselves never fail: a duplicate insert reports `false`
//! and erasing the end cursor does nothing. The only failure surfaces at the
//! map boundary, where bounds-checked access to a missing key is reported as
//! [`KeyNotFoundError`].

/// Represents a bounds-checked lookup of a key that is not present.
///
/// # Examples
///
/// ```rust
/// use rbkit::error::KeyNotFoundError;
///
/// let error = KeyNotFoundError {
///     container_name: "OrderedMap",
///     method_name: "at",
/// };
/// assert_eq!(format!("{error}"), "OrderedMap::at: key not found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyNotFoundError {
    /// The name of the container where the lookup failed.
    pub container_name: &'static str,
    /// The name of the method that performed the lookup.
    pub method_name: &'static str,
}

impl std::fmt::Display for KeyNotFoundError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}::{}: key not found",
            self.container_name, self.method_name
        )
    }
}

impl std::error::Error for KeyNotFoundError {}

/// Represents errors that can occur in the container adapters.
///
/// No operation returns this type directly. Each fallible method returns its
/// own concrete error, and `?` lifts it into `ContainerError` for callers that
/// combine several container calls.
///
/// # Examples
///
/// ```rust
/// use rbkit::error::ContainerError;
/// use rbkit::map::OrderedMap;
///
/// fn total(map: &OrderedMap<&str, i32>) -> Result<i32, ContainerError> {
///     Ok(map.at(&"apples")? + map.at(&"pears")?)
/// }
///
/// let map: OrderedMap<&str, i32> = [("apples", 3)].into_iter().collect();
/// let error = total(&map).unwrap_err();
/// assert_eq!(format!("{error}"), "OrderedMap::at: key not found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    /// A bounds-checked lookup did not find its key.
    KeyNotFound(KeyNotFoundError),
}

impl std::fmt::Display for ContainerError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KeyNotFound(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for ContainerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::KeyNotFound(error) => Some(error),
        }
    }
}

impl From<KeyNotFoundError> for ContainerError {
    fn from(error: KeyNotFoundError) -> Self {
        Self::KeyNotFound(error)
    }
}
