//! Semantic Version numbers.
//!
//! A [`Version`] is an immutable, validated value: it is either constructed from a
//! [`VersionConfig`] or parsed from a string, and every construction path runs the same
//! validation against the Semantic Versioning grammar.
//!
//! Versions are ordered by precedence as defined by Semantic Versioning 2.0.0.
//! Build metadata never takes part in precedence, equality, or hashing.
//!
//! ## Examples
//!
//! ```rust
//! use sem_ver::{Version, VersionConfig};
//!
//! let version = Version::parse("3.1.2-beta1.pre+1111").unwrap();
//! assert_eq!(version.major(), 3);
//! assert_eq!(version.pre()[..], ["beta1", "pre"]);
//! assert_eq!(version.to_string(), "3.1.2-beta1.pre+1111");
//!
//! let constructed = VersionConfig::new()
//!     .major(3)
//!     .minor(1)
//!     .patch(2)
//!     .pre(["beta1", "pre"])
//!     .construct()
//!     .unwrap();
//! assert_eq!(version, constructed);
//!
//! assert!(Version::parse("1.0.0-alpha").unwrap() < Version::parse("1.0.0").unwrap());
//! assert!(Version::parse("1.0.0-0123").is_err());
//! ```
//!
//! ## Features
//!
//! - `serde`: (de)serializes a Version as its string form
//! - `semver`: conversions from and into [`semver::Version`](https://docs.rs/semver)
#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    no_mangle_generic_items,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused_allocation,
    unused_comparisons,
    unused_extern_crates,
    unused_import_braces,
    unused_parens,
    unused_qualifications,
    unused_results,
    unused,
    while_true
)]

use std::{
    cmp::Ordering,
    convert::TryFrom,
    fmt::{self, Display, Write},
    hash::{Hash, Hasher},
    str::FromStr,
};

pub mod config;
mod error;
pub mod identifier;
mod metadata;
mod parser;

pub use config::{Scalar, StringOrSequence, VersionConfig};
pub use error::{ErrorKind, InvalidVersion, Part};
pub use metadata::{Build, PreRelease};
pub use parser::parse;

/// Represents a semantic version number.
///
/// Equality, ordering, and hashing consider major, minor, patch, and the pre-release identifiers.
/// Build identifiers are carried along for display only.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre: PreRelease,
    build: Build,
}

impl Version {
    /// Constructs the version `0.0.0`
    ///
    /// ## Examples
    ///
    /// ```
    /// # use sem_ver::Version;
    /// let version = Version::empty();
    /// assert_eq!(version.to_string(), "0.0.0")
    /// ```
    pub const fn empty() -> Self {
        Version::new(0, 0, 0)
    }

    /// Constructs a new version out of the three numeric components
    ///
    /// ## Examples
    ///
    /// ```
    /// # use sem_ver::Version;
    /// let version = Version::new(1, 2, 3);
    /// assert_eq!(version.to_string(), "1.2.3")
    /// ```
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre: PreRelease::empty(),
            build: Build::empty(),
        }
    }

    /// Validates the given config and constructs a Version out of it.
    ///
    /// See [`VersionConfig::construct`].
    pub fn construct(config: VersionConfig) -> Result<Self, InvalidVersion> {
        config.construct()
    }

    /// Parse a string slice into a Version.
    ///
    /// See [`parse`].
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use sem_ver::Version;
    /// let version = Version::parse("1.2.3+build.42");
    /// assert!(version.is_ok());
    ///
    /// let version = Version::parse("v1.2.3");
    /// assert_eq!(version.unwrap_err().to_string(), "Could not parse v1.2.3");
    /// ```
    pub fn parse(input: &str) -> Result<Self, InvalidVersion> {
        parse(input)
    }

    pub(crate) fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        pre: PreRelease,
        build: Build,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            pre,
            build,
        }
    }

    /// The major version.
    #[inline]
    pub const fn major(&self) -> u64 {
        self.major
    }

    /// The minor version.
    #[inline]
    pub const fn minor(&self) -> u64 {
        self.minor
    }

    /// The patch version.
    #[inline]
    pub const fn patch(&self) -> u64 {
        self.patch
    }

    /// The pre-release identifiers.
    #[inline]
    pub fn pre(&self) -> &PreRelease {
        &self.pre
    }

    /// The build identifiers.
    #[inline]
    pub fn build(&self) -> &Build {
        &self.build
    }

    /// Returns true if this version has pre-release identifiers, i.e. it represents a pre-release.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use sem_ver::Version;
    /// let version = Version::parse("1.0.0").unwrap();
    /// assert!(!version.is_pre_release());
    ///
    /// let version = Version::parse("1.0.0-pre").unwrap();
    /// assert!(version.is_pre_release());
    ///
    /// let version = Version::parse("1.0.0+build").unwrap();
    /// assert!(!version.is_pre_release());
    /// ```
    pub fn is_pre_release(&self) -> bool {
        self.pre.is_defined()
    }

    /// Returns true if this version carries build identifiers.
    pub fn has_build(&self) -> bool {
        self.build.is_defined()
    }
}

/// Compares two versions by precedence.
///
/// Major, minor, and patch are compared numerically.
/// A pre-release has lower precedence than the associated normal version,
/// pre-releases are compared identifier by identifier.
/// Build identifiers are ignored.
///
/// ## Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use sem_ver::{compare, Version};
///
/// let a = Version::parse("1.0.0-beta.2").unwrap();
/// let b = Version::parse("1.0.0-beta.11").unwrap();
/// assert_eq!(compare(&a, &b), Ordering::Less);
///
/// let a = Version::parse("1.0.0+a").unwrap();
/// let b = Version::parse("1.0.0+b").unwrap();
/// assert_eq!(compare(&a, &b), Ordering::Equal);
/// ```
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.cmp(b)
}

impl Default for Version {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<(u64, u64, u64)> for Version {
    fn from((x, y, z): (u64, u64, u64)) -> Self {
        Version::new(x, y, z)
    }
}

impl From<[u64; 3]> for Version {
    fn from(v: [u64; 3]) -> Self {
        Version::new(v[0], v[1], v[2])
    }
}

impl FromStr for Version {
    type Err = InvalidVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = InvalidVersion;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = String::with_capacity(16);
        write!(result, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if self.pre.is_defined() {
            write!(result, "-{}", self.pre)?;
        }
        if self.build.is_defined() {
            write!(result, "+{}", self.build)?;
        }

        f.pad(result.as_ref())
    }
}

impl PartialEq for Version {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.pre == other.pre
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| self.pre.cmp(&other.pre))
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, into: &mut H) {
        self.major.hash(into);
        self.minor.hash(into);
        self.patch.hash(into);
        self.pre.hash(into);
    }
}

#[cfg(feature = "serde")]
use serde::{
    de::{self, Deserialize, Deserializer, Visitor},
    ser::{Serialize, Serializer},
};

#[cfg(feature = "serde")]
impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VersionVisitor;

        impl<'de> Visitor<'de> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a semantic version string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Version::parse(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}

#[cfg(feature = "semver")]
impl TryFrom<&Version> for semver::Version {
    type Error = semver::Error;

    fn try_from(v: &Version) -> Result<Self, Self::Error> {
        Ok(semver::Version {
            major: v.major,
            minor: v.minor,
            patch: v.patch,
            pre: semver::Prerelease::new(&v.pre.to_string())?,
            build: semver::BuildMetadata::new(&v.build.to_string())?,
        })
    }
}

#[cfg(feature = "semver")]
impl TryFrom<Version> for semver::Version {
    type Error = semver::Error;

    fn try_from(v: Version) -> Result<Self, Self::Error> {
        semver::Version::try_from(&v)
    }
}

/// semver accepts pre-release identifiers such as `1a` that are rejected here,
/// so the conversion validates again.
#[cfg(feature = "semver")]
impl TryFrom<&semver::Version> for Version {
    type Error = InvalidVersion;

    fn try_from(v: &semver::Version) -> Result<Self, Self::Error> {
        VersionConfig::new()
            .major(v.major)
            .minor(v.minor)
            .patch(v.patch)
            .pre(v.pre.as_str().split('.').collect::<Vec<_>>())
            .build(v.build.as_str().split('.').collect::<Vec<_>>())
            .construct()
    }
}

#[cfg(feature = "semver")]
impl TryFrom<semver::Version> for Version {
    type Error = InvalidVersion;

    fn try_from(v: semver::Version) -> Result<Self, Self::Error> {
        Version::try_from(&v)
    }
}
