use thiserror::Error;

/// Errors raised while building the route table or navigating
///
/// None of these are fatal to the application; each one is local to the
/// table build or navigation attempt that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// No registered route matches the path
    #[error("no route registered for path '{path}'")]
    UnregisteredPath { path: String },

    /// Programmatic navigation to a name that is not in the table
    #[error("unknown route name '{name}'")]
    UnknownRouteName { name: String },

    /// Two entries resolve the same path
    #[error("duplicate route path '{path}'")]
    DuplicatePath { path: String },

    /// Two entries share a name
    #[error("duplicate route name '{name}'")]
    DuplicateName { name: String },

    /// A route path is not in canonical form
    #[error("invalid route path '{path}': must start with '/' and contain no empty segments")]
    InvalidPath { path: String },

    /// URL generation is missing a required parameter
    #[error("route '{name}' requires parameter '{param}'")]
    MissingParam { name: String, param: String },

    /// A URL does not live under the configured base path
    #[error("url '{url}' is outside base path '{base}'")]
    OutsideBase { url: String, base: String },

    /// History traversal past either end of the stack
    #[error("history has no entry at offset {delta}")]
    HistoryOutOfRange { delta: isize },
}

pub type Result<T> = std::result::Result<T, RouterError>;
