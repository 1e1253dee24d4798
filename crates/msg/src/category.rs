use std::fmt;
use std::str::FromStr;

/// Category of a diagnostic message.
///
/// The set is closed: the four variants mirror upstream UHD's `type_t` enum
/// and handlers may rely on no further variants appearing. A category is
/// chosen once at the call site and used purely as a routing key.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Ordinary status output.
    Status,
    /// A recoverable problem worth telling the user about.
    Warning,
    /// A failure report.
    Error,
    /// High-frequency, latency-sensitive notice such as a streaming
    /// overflow indicator. The default policy adds no decoration to these.
    Fastpath,
}

impl Category {
    /// Returns the lowercase label used when rendering the category.
    ///
    /// # Examples
    ///
    /// ```
    /// use msg::Category;
    ///
    /// assert_eq!(Category::Status.as_str(), "status");
    /// assert_eq!(Category::Fastpath.as_str(), "fastpath");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fastpath => "fastpath",
        }
    }

    /// Returns the stable single-character code for this category.
    ///
    /// The codes match upstream UHD's enum values (`status = 's'`,
    /// `warning = 'w'`, `error = 'e'`, `fastpath = 'f'`) so handlers that
    /// persist or forward the code stay byte-compatible with the original.
    ///
    /// # Examples
    ///
    /// ```
    /// use msg::Category;
    ///
    /// assert_eq!(Category::Warning.code(), 'w');
    /// ```
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Status => 's',
            Self::Warning => 'w',
            Self::Error => 'e',
            Self::Fastpath => 'f',
        }
    }

    /// Reports whether this category is ordinary status output.
    #[must_use]
    pub const fn is_status(self) -> bool {
        matches!(self, Self::Status)
    }

    /// Reports whether this category is a warning.
    #[must_use]
    pub const fn is_warning(self) -> bool {
        matches!(self, Self::Warning)
    }

    /// Reports whether this category is an error report.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }

    /// Reports whether this category is a fastpath notice.
    #[must_use]
    pub const fn is_fastpath(self) -> bool {
        matches!(self, Self::Fastpath)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Category`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseCategoryError {
    _private: (),
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised message category")
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "status" => Ok(Self::Status),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "fastpath" => Ok(Self::Fastpath),
            _ => Err(ParseCategoryError { _private: () }),
        }
    }
}
