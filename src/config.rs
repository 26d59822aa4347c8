//! Inputs for validated construction of a [`Version`].
//!
//! The fields of a [`VersionConfig`] are loosely typed on purpose: numbers may arrive as text,
//! pre-release and build identifiers as a single value or as a sequence of strings and integers.
//! Everything is normalized and validated once, in [`VersionConfig::construct`].

use std::{
    convert::TryFrom,
    fmt::{self, Display},
};

use crate::{
    error::{InvalidVersion, Part},
    identifier::{is_numeric, is_valid_build, is_valid_pre_release},
    metadata::{Build, PreRelease},
    Version,
};

/// A single input value, either text or an integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scalar {
    /// A textual value
    Text(String),
    /// An integer value, wide enough to hold any signed or unsigned 64 bit number
    Integer(i128),
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::Integer(0)
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(text) => f.pad(text),
            Scalar::Integer(num) => Display::fmt(num, f),
        }
    }
}

impl From<&str> for Scalar {
    fn from(text: &str) -> Self {
        Scalar::Text(text.into())
    }
}

impl From<String> for Scalar {
    fn from(text: String) -> Self {
        Scalar::Text(text)
    }
}

macro_rules! scalar_from_int {
    ($($int:ty),+) => {
        $(
            impl From<$int> for Scalar {
                fn from(num: $int) -> Self {
                    Scalar::Integer(i128::from(num))
                }
            }
        )+
    };
}

scalar_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<usize> for Scalar {
    fn from(num: usize) -> Self {
        // usize is at most 64 bits wide on every supported platform
        Scalar::Integer(num as i128)
    }
}

impl Scalar {
    fn into_number(self, part: Part) -> Result<u64, InvalidVersion> {
        let number = match &self {
            Scalar::Integer(num) => u64::try_from(*num).ok(),
            Scalar::Text(text) if is_numeric(text) => text.parse::<u64>().ok(),
            Scalar::Text(_) => None,
        };
        number.ok_or_else(|| {
            tracing::debug!(%part, value = %self, "rejected version number");
            InvalidVersion::not_a_number(part, self.to_string())
        })
    }
}

/// Either a single value or an ordered sequence of values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StringOrSequence<T> {
    /// A single value, treated as a sequence of one
    Single(T),
    /// An ordered sequence of values
    Sequence(Vec<T>),
}

impl<T> Default for StringOrSequence<T> {
    fn default() -> Self {
        StringOrSequence::Sequence(Vec::new())
    }
}

impl StringOrSequence<Scalar> {
    /// Flattens into an ordered sequence of strings.
    ///
    /// Every value is stringified, empty strings are dropped.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use sem_ver::config::{Scalar, StringOrSequence};
    ///
    /// let input = StringOrSequence::from(vec![Scalar::from("beta1"), Scalar::from(""), Scalar::from(2)]);
    /// assert_eq!(input.normalize(), vec!["beta1", "2"]);
    ///
    /// assert_eq!(StringOrSequence::from("rc1").normalize(), vec!["rc1"]);
    /// assert!(StringOrSequence::from("").normalize().is_empty());
    /// ```
    pub fn normalize(self) -> Vec<String> {
        let values = match self {
            StringOrSequence::Single(value) => vec![value],
            StringOrSequence::Sequence(values) => values,
        };
        values
            .into_iter()
            .map(|value| match value {
                Scalar::Text(text) => text,
                Scalar::Integer(num) => num.to_string(),
            })
            .filter(|s| !s.is_empty())
            .collect()
    }
}

impl From<Scalar> for StringOrSequence<Scalar> {
    fn from(value: Scalar) -> Self {
        StringOrSequence::Single(value)
    }
}

impl From<&str> for StringOrSequence<Scalar> {
    fn from(text: &str) -> Self {
        StringOrSequence::Single(text.into())
    }
}

impl From<String> for StringOrSequence<Scalar> {
    fn from(text: String) -> Self {
        StringOrSequence::Single(text.into())
    }
}

impl From<i64> for StringOrSequence<Scalar> {
    fn from(num: i64) -> Self {
        StringOrSequence::Single(num.into())
    }
}

impl From<u64> for StringOrSequence<Scalar> {
    fn from(num: u64) -> Self {
        StringOrSequence::Single(num.into())
    }
}

impl From<i32> for StringOrSequence<Scalar> {
    fn from(num: i32) -> Self {
        StringOrSequence::Single(num.into())
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for StringOrSequence<Scalar> {
    fn from(values: Vec<T>) -> Self {
        StringOrSequence::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Scalar>, const N: usize> From<[T; N]> for StringOrSequence<Scalar> {
    fn from(values: [T; N]) -> Self {
        Vec::from(values).into()
    }
}

/// The field set for validated construction of a [`Version`].
///
/// Absent numbers default to `0`, absent identifiers to an empty sequence.
///
/// ## Examples
///
/// ```rust
/// use sem_ver::{Version, VersionConfig};
///
/// let version = VersionConfig::new()
///     .major(3)
///     .minor(1)
///     .pre(vec![sem_ver::Scalar::from("beta1"), sem_ver::Scalar::from(2)])
///     .build("exp")
///     .construct()
///     .unwrap();
/// assert_eq!(version.to_string(), "3.1.0-beta1.2+exp");
///
/// let version = Version::construct(VersionConfig {
///     patch: 7.into(),
///     ..VersionConfig::default()
/// });
/// assert_eq!(version, Ok(Version::new(0, 0, 7)));
///
/// assert!(VersionConfig::new().minor(-1).construct().is_err());
/// assert!(VersionConfig::new().pre("0123").construct().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionConfig {
    /// The major number
    pub major: Scalar,
    /// The minor number
    pub minor: Scalar,
    /// The patch number
    pub patch: Scalar,
    /// The pre-release identifiers
    pub pre: StringOrSequence<Scalar>,
    /// The build identifiers
    pub build: StringOrSequence<Scalar>,
}

impl VersionConfig {
    /// Constructs a config for `0.0.0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the major number.
    pub fn major(mut self, major: impl Into<Scalar>) -> Self {
        self.major = major.into();
        self
    }

    /// Sets the minor number.
    pub fn minor(mut self, minor: impl Into<Scalar>) -> Self {
        self.minor = minor.into();
        self
    }

    /// Sets the patch number.
    pub fn patch(mut self, patch: impl Into<Scalar>) -> Self {
        self.patch = patch.into();
        self
    }

    /// Sets the pre-release identifiers, a single one or a sequence.
    pub fn pre(mut self, pre: impl Into<StringOrSequence<Scalar>>) -> Self {
        self.pre = pre.into();
        self
    }

    /// Sets the build identifiers, a single one or a sequence.
    pub fn build(mut self, build: impl Into<StringOrSequence<Scalar>>) -> Self {
        self.build = build.into();
        self
    }

    /// Validates the config and constructs the Version.
    ///
    /// Checks major, minor, patch, then every pre-release identifier, then every build identifier,
    /// and stops at the first invalid value.
    pub fn construct(self) -> Result<Version, InvalidVersion> {
        let VersionConfig {
            major,
            minor,
            patch,
            pre,
            build,
        } = self;

        let major = major.into_number(Part::Major)?;
        let minor = minor.into_number(Part::Minor)?;
        let patch = patch.into_number(Part::Patch)?;

        let pre = pre.normalize();
        if let Some(invalid) = pre.iter().find(|id| !is_valid_pre_release(id)) {
            tracing::debug!(identifier = %invalid, "rejected pre-release identifier");
            return Err(InvalidVersion::pre_release(invalid));
        }

        let build = build.normalize();
        if let Some(invalid) = build.iter().find(|id| !is_valid_build(id)) {
            tracing::debug!(identifier = %invalid, "rejected build identifier");
            return Err(InvalidVersion::build(invalid));
        }

        Ok(Version::from_parts(
            major,
            minor,
            patch,
            PreRelease::from_validated(pre),
            Build::from_validated(build),
        ))
    }
}

impl TryFrom<VersionConfig> for Version {
    type Error = InvalidVersion;

    fn try_from(config: VersionConfig) -> Result<Self, Self::Error> {
        config.construct()
    }
}
