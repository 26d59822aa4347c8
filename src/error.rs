use std::{
    fmt::{self, Display},
    ops::Range,
};

/// The single failure of this crate: a version that could not be parsed or
/// whose components violate the Semantic Versioning grammar.
///
/// # Example
///
/// ```rust
/// use sem_ver::{ErrorKind, Version};
///
/// let error = Version::parse("1.2").unwrap_err();
/// assert_eq!(error.to_string(), "Could not parse 1.2");
/// assert_eq!(error.error_span(), Some(3..3));
///
/// let error = Version::parse("1.2.3-0123").unwrap_err();
/// assert_eq!(error.kind(), &ErrorKind::PreRelease(String::from("0123")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidVersion {
    kind: ErrorKind,
    span: Option<Span>,
}

impl InvalidVersion {
    pub(crate) fn unparseable(input: &str, span: Span) -> Self {
        Self {
            kind: ErrorKind::Unparseable {
                input: input.into(),
            },
            span: Some(span),
        }
    }

    pub(crate) fn not_a_number(part: Part, value: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::NotANumber {
                part,
                value: value.into(),
            },
            span: None,
        }
    }

    pub(crate) fn pre_release(identifier: &str) -> Self {
        Self {
            kind: ErrorKind::PreRelease(identifier.into()),
            span: None,
        }
    }

    pub(crate) fn build(identifier: &str) -> Self {
        Self {
            kind: ErrorKind::Build(identifier.into()),
            span: None,
        }
    }

    /// Returns the reason of this error.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the error message, same as the [`Display`] output.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Returns the byte range of the first character that broke the top-level grammar.
    ///
    /// Only errors of kind [`ErrorKind::Unparseable`] have a span.
    /// Truncated input is reported as an empty range at the end of the input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = sem_ver::parse("1.2.x").unwrap_err();
    /// assert_eq!(error.error_span(), Some(4..5));
    ///
    /// let error = sem_ver::Version::parse("1.2.3-*aaa").unwrap_err();
    /// assert_eq!(error.error_span(), None);
    /// ```
    #[inline]
    pub fn error_span(&self) -> Option<Range<usize>> {
        self.span.map(Range::from)
    }

    /// Returns a caret line marking the erroneous input if it was written under the original input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = sem_ver::parse("1.2.3 bar").unwrap_err();
    /// assert_eq!(error.indicate_erroneous_input().as_deref(), Some("~~~~~^"));
    ///
    /// let error = sem_ver::parse("1.2").unwrap_err();
    /// assert_eq!(error.indicate_erroneous_input().as_deref(), Some("~~~^"));
    /// ```
    pub fn indicate_erroneous_input(&self) -> Option<String> {
        let span = self.span?;
        Some(format!(
            "{0:~<start$}{0:^<width$}",
            "",
            start = span.start,
            width = (span.end - span.start).max(1)
        ))
    }
}

impl Display for InvalidVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.message())?;
        if f.alternate() {
            if let (ErrorKind::Unparseable { input }, Some(carets)) =
                (&self.kind, self.indicate_erroneous_input())
            {
                writeln!(f)?;
                writeln!(f, "|    {}", input)?;
                writeln!(f, "|    {}", carets)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for InvalidVersion {}

/// Reasons for an [`InvalidVersion`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// The input does not match `<major>.<minor>.<patch>[-<pre>][+<build>]`.
    #[error("Could not parse {input}")]
    Unparseable {
        /// The full input string.
        input: String,
    },
    /// A major, minor, or patch value that is not a non-negative integer.
    #[error("Could not construct the {part} number: `{value}` is not a non-negative integer")]
    NotANumber {
        /// The offending version part.
        part: Part,
        /// The rejected value, stringified.
        value: String,
    },
    /// A pre-release identifier with invalid characters or a leading zero.
    #[error("Invalid pre-release identifier: `{0}`")]
    PreRelease(String),
    /// A build identifier with invalid characters.
    #[error("Invalid build identifier: `{0}`")]
    Build(String),
}

/// The numeric parts of a version.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Part {
    /// The major number.
    Major,
    /// The minor number.
    Minor,
    /// The patch number.
    Patch,
}

impl Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Major => f.pad("major"),
            Part::Minor => f.pad("minor"),
            Part::Patch => f.pad("patch"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Span {
    start: usize,
    end: usize,
}

impl Span {
    pub(crate) fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub(crate) fn start(&self) -> usize {
        self.start
    }
}

impl From<Span> for Range<usize> {
    fn from(s: Span) -> Self {
        s.start..s.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(InvalidVersion::unparseable("1.2", Span::new(3, 3)) => "Could not parse 1.2")]
    #[test_case(InvalidVersion::not_a_number(Part::Minor, "-1") => "Could not construct the minor number: `-1` is not a non-negative integer")]
    #[test_case(InvalidVersion::pre_release("0123") => "Invalid pre-release identifier: `0123`")]
    #[test_case(InvalidVersion::build("dafj^") => "Invalid build identifier: `dafj^`")]
    fn test_message(error: InvalidVersion) -> String {
        assert_eq!(error.message(), error.to_string());
        error.to_string()
    }

    #[test]
    fn test_alternate_display() {
        let error = InvalidVersion::unparseable("1.2.3 bar", Span::new(5, 6));
        assert_eq!(
            format!("{:#}", error),
            "Could not parse 1.2.3 bar\n|    1.2.3 bar\n|    ~~~~~^\n"
        );
    }

    #[test]
    fn test_alternate_display_without_span() {
        let error = InvalidVersion::build("a+b");
        assert_eq!(format!("{:#}", error), "Invalid build identifier: `a+b`");
    }

    #[test]
    fn test_padded_display() {
        let error = InvalidVersion::pre_release("x&");
        assert_eq!(
            format!("{:*^40}", error),
            "**Invalid pre-release identifier: `x&`**"
        );
    }

    #[test]
    fn test_indicate_wide_span() {
        let error = InvalidVersion::unparseable("1.2.3 bar", Span::new(2, 5));
        assert_eq!(error.indicate_erroneous_input().as_deref(), Some("~~^^^"));
    }

    #[test]
    fn test_no_indication_without_span() {
        let error = InvalidVersion::not_a_number(Part::Major, "x");
        assert_eq!(error.indicate_erroneous_input(), None);
        assert_eq!(error.error_span(), None);
    }
}
