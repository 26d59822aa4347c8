use crate::{
    config::VersionConfig,
    error::{InvalidVersion, Part, Span},
    Version,
};

/// Parse a string slice into a Version.
///
/// The input must match `<major>.<minor>.<patch>[-<pre>][+<build>]`,
/// where the numbers are ASCII digits, `<pre>` is anything up to the next `+`,
/// and `<build>` is the rest of the input.
/// Pre-release and build are split on `.` and validated like in [`VersionConfig::construct`],
/// so syntactically well-formed input can still be rejected for an invalid identifier.
/// Such errors keep their identifier message instead of `Could not parse <input>`.
///
/// ## Examples
///
/// ```rust
/// use sem_ver::{parse, Version};
///
/// let version = parse("3.1.2-beta1.pre+1111").unwrap();
/// assert_eq!(version.to_string(), "3.1.2-beta1.pre+1111");
/// assert_eq!(version.pre()[..], ["beta1", "pre"]);
///
/// assert_eq!(parse("1.2").unwrap_err().to_string(), "Could not parse 1.2");
/// assert_eq!(
///     parse("1.2.3-0123").unwrap_err().to_string(),
///     "Invalid pre-release identifier: `0123`"
/// );
/// ```
pub fn parse(input: &str) -> Result<Version, InvalidVersion> {
    let captures = scan(input).map_err(|span| {
        tracing::debug!(input, position = span.start(), "could not parse version");
        InvalidVersion::unparseable(input, span)
    })?;
    captures.into_config().construct()
}

/// The substrings matched by the top-level grammar, not yet validated.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Captures<'input> {
    major: &'input str,
    minor: &'input str,
    patch: &'input str,
    pre: Option<&'input str>,
    build: Option<&'input str>,
}

impl<'input> Captures<'input> {
    fn into_config(self) -> VersionConfig {
        let mut config = VersionConfig::new()
            .major(self.major)
            .minor(self.minor)
            .patch(self.patch);
        if let Some(pre) = self.pre {
            config = config.pre(pre.split('.').collect::<Vec<_>>());
        }
        if let Some(build) = self.build {
            config = config.build(build.split('.').collect::<Vec<_>>());
        }
        config
    }
}

#[derive(Debug, Copy, Clone)]
enum State {
    Part(Part),
    PreRelease,
    Build,
}

/// Splits the input along the top-level grammar.
///
/// On failure, returns the span of the first character that does not fit,
/// or an empty span at the end of the input if it ended too early.
fn scan(input: &str) -> Result<Captures<'_>, Span> {
    let bytes = input.as_bytes();
    let end = input.len();

    let mut numbers = [""; 3];
    let mut pre = None;
    let mut build = None;

    let mut pos = 0;
    let mut state = State::Part(Part::Major);

    loop {
        match state {
            State::Part(part) => {
                let start = pos;
                while pos < end && bytes[pos].is_ascii_digit() {
                    pos += 1;
                }
                if pos == start {
                    return Err(span_at(input, pos));
                }
                numbers[part as usize] = &input[start..pos];

                state = match (part, bytes.get(pos)) {
                    (Part::Major, Some(b'.')) => State::Part(Part::Minor),
                    (Part::Minor, Some(b'.')) => State::Part(Part::Patch),
                    (Part::Patch, Some(b'-')) => State::PreRelease,
                    (Part::Patch, Some(b'+')) => State::Build,
                    (Part::Patch, None) => break,
                    _ => return Err(span_at(input, pos)),
                };
                pos += 1;
            }
            State::PreRelease => {
                // `+` is ASCII, so any byte position found here is a char boundary
                let stop = input[pos..].find('+').map_or(end, |i| pos + i);
                if stop == pos {
                    return Err(span_at(input, pos));
                }
                pre = Some(&input[pos..stop]);
                if stop == end {
                    break;
                }
                pos = stop + 1;
                state = State::Build;
            }
            State::Build => {
                if pos == end {
                    return Err(span_at(input, pos));
                }
                build = Some(&input[pos..]);
                break;
            }
        }
    }

    let [major, minor, patch] = numbers;
    Ok(Captures {
        major,
        minor,
        patch,
        pre,
        build,
    })
}

fn span_at(input: &str, pos: usize) -> Span {
    let width = input[pos..].chars().next().map_or(0, char::len_utf8);
    Span::new(pos, pos + width)
}
