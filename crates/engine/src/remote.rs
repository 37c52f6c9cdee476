/// State of one piece of server data backing a view.
///
/// There is no retry: a failed fetch stays `Failed` until the view fetches
/// again.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Remote<T> {
    /// Nothing requested yet (e.g. no outing selected).
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Remote<T> {
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }
}

/// First failure among the fetches backing a view, in the order given.
pub fn first_error<'a>(errors: impl IntoIterator<Item = Option<&'a str>>) -> Option<&'a str> {
    errors.into_iter().flatten().next()
}
