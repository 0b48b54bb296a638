//! History strategies and backends
//!
//! [`HistoryMode`] decides how a route path is written into the address bar.
//! [`History`] is the seam to whatever owns the address bar: the browser in
//! production, [`MemoryHistory`] everywhere else.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouterError};
use crate::path::{join_base, split_path, strip_base};

/// How route paths are encoded into URLs
///
/// # Examples
///
/// ```
/// use sueldo_router::HistoryMode;
///
/// assert_eq!(HistoryMode::Web.encode("/app", "/salary"), "/app/salary");
/// assert_eq!(HistoryMode::Hash.encode("/app", "/salary"), "/app/#/salary");
///
/// assert_eq!(HistoryMode::Web.decode("/app", "/app/salary").unwrap(), "/salary");
/// assert_eq!(HistoryMode::Hash.decode("/app", "/app/#/salary").unwrap(), "/salary");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// History API: the route path follows the base path directly
    #[default]
    Web,
    /// Hash-based: the route path lives in the URL fragment
    Hash,
}

impl HistoryMode {
    /// Builds the URL for a route path under `base`
    pub fn encode(self, base: &str, path: &str) -> String {
        match self {
            HistoryMode::Web => join_base(base, path),
            HistoryMode::Hash => format!("{}#{}", join_base(base, "/"), path),
        }
    }

    /// Extracts the route path from a URL under `base`
    ///
    /// Query strings are dropped. A URL with no route path (an empty
    /// fragment in hash mode, or the bare base in web mode) decodes to `/`.
    pub fn decode(self, base: &str, url: &str) -> Result<String> {
        let outside = || RouterError::OutsideBase {
            url: url.to_string(),
            base: base.to_string(),
        };

        match self {
            HistoryMode::Web => strip_base(base, split_path(url))
                .map(str::to_string)
                .ok_or_else(outside),
            HistoryMode::Hash => {
                let (document, fragment) = url.split_once('#').unwrap_or((url, ""));
                strip_base(base, split_path(document)).ok_or_else(outside)?;

                let path = split_path(fragment);
                Ok(if path.is_empty() { "/".to_string() } else { path.to_string() })
            }
        }
    }
}

/// Owner of the address bar and the back/forward stack
pub trait History {
    /// The URL currently shown
    fn location(&self) -> &str;

    /// Appends an entry, discarding any forward entries
    fn push(&mut self, url: String);

    /// Overwrites the current entry
    fn replace(&mut self, url: String);

    /// Moves `delta` entries through the stack (negative = back)
    fn go(&mut self, delta: isize) -> Result<()>;

    /// Number of entries in the stack
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-process history stack
///
/// Behaves like the browser's session history: pushing after going back
/// drops the forward entries.
///
/// ```
/// use sueldo_router::{History, MemoryHistory};
///
/// let mut history = MemoryHistory::new("/");
/// history.push("/salary".to_string());
/// history.push("/fonasa".to_string());
/// history.go(-1).unwrap();
/// assert_eq!(history.location(), "/salary");
///
/// history.push("/salary-data".to_string());
/// assert!(history.go(1).is_err());
/// assert_eq!(history.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl MemoryHistory {
    /// Creates a stack holding a single entry
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
        }
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Index of the current entry
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn location(&self) -> &str {
        &self.entries[self.cursor]
    }

    fn push(&mut self, url: String) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(url);
        self.cursor = self.entries.len() - 1;
    }

    fn replace(&mut self, url: String) {
        self.entries[self.cursor] = url;
    }

    fn go(&mut self, delta: isize) -> Result<()> {
        let target = self
            .cursor
            .checked_add_signed(delta)
            .filter(|&idx| idx < self.entries.len())
            .ok_or(RouterError::HistoryOutOfRange { delta })?;

        self.cursor = target;
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
