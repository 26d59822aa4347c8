use std::{
    cmp::Ordering,
    fmt::{self, Display},
    ops::Deref,
    slice,
};

use crate::identifier::is_numeric;

macro_rules! identifiers {
    ($name:ident, $what:literal) => {
        impl $name {
            #[doc = concat!("Constructs an empty ", $what, " segment")]
            pub const fn empty() -> Self {
                Self {
                    identifiers: Vec::new(),
                }
            }

            pub(crate) fn from_validated(identifiers: Vec<String>) -> Self {
                Self { identifiers }
            }

            #[doc = concat!("Returns true if there are no ", $what, " identifiers")]
            pub fn is_empty(&self) -> bool {
                self.identifiers.is_empty()
            }

            #[doc = concat!("Returns true if at least one ", $what, " identifier is defined")]
            pub fn is_defined(&self) -> bool {
                !self.identifiers.is_empty()
            }

            /// Returns an iterator over the identifiers
            pub fn iter(&self) -> slice::Iter<'_, String> {
                self.identifiers.iter()
            }
        }

        impl Deref for $name {
            type Target = [String];

            fn deref(&self) -> &Self::Target {
                &self.identifiers[..]
            }
        }

        impl AsRef<[String]> for $name {
            fn as_ref(&self) -> &[String] {
                &self.identifiers[..]
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a String;
            type IntoIter = slice::Iter<'a, String>;

            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.identifiers.join("."))
            }
        }
    };
}

/// The pre-release identifiers of a Version.
///
/// Identifiers are validated on construction of the [`crate::Version`] and never change afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PreRelease {
    identifiers: Vec<String>,
}

identifiers!(PreRelease, "pre-release");

/// The build identifiers of a Version.
///
/// Build identifiers are metadata only, they never take part in precedence or equality of versions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Build {
    identifiers: Vec<String>,
}

identifiers!(Build, "build");

impl PartialOrd for PreRelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PreRelease {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Ordering::Equal,
            // a normal version has a higher precedence than its pre-releases
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => PreReleaseCmp {
                lhs: self.iter(),
                rhs: other.iter(),
            }
            .find(|c| *c != Ordering::Equal)
            .unwrap_or(Ordering::Equal),
        }
    }
}

struct PreReleaseCmp<I, J> {
    lhs: I,
    rhs: J,
}

impl<'a, I, J> Iterator for PreReleaseCmp<I, J>
where
    I: Iterator<Item = &'a String>,
    J: Iterator<Item = &'a String>,
{
    type Item = Ordering;

    /// Identifiers consisting of only digits are compared numerically.
    /// Identifiers with letters or hyphens are compared lexically in ASCII sort order.
    /// Numeric identifiers always have lower precedence than non-numeric identifiers.
    /// A larger set of pre-release fields has a higher precedence than a smaller set, if all of the preceding identifiers are equal.
    /// Example: 1.0.0-alpha < 1.0.0-alpha.1 < 1.0.0-alpha.beta < 1.0.0-beta < 1.0.0-beta.2 < 1.0.0-beta.11 < 1.0.0-rc.1 < 1.0.0.
    fn next(&mut self) -> Option<Self::Item> {
        match (self.lhs.next(), self.rhs.next()) {
            (None, None) => None,
            (Some(_), None) => Some(Ordering::Greater),
            (None, Some(_)) => Some(Ordering::Less),
            (Some(a), Some(b)) => Some(match (is_numeric(a), is_numeric(b)) {
                (true, true) => cmp_numeric(a, b),
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (false, false) => a.as_bytes().cmp(b.as_bytes()),
            }),
        }
    }
}

/// Compares two digit strings by their numeric value, without an upper bound.
fn cmp_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
