use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use regex::Regex;
use sem_ver::{compare, Version};

const INPUT_S: &str = "1.0.0";
const INPUT_XL: &str = "1.2.3-1.alpha1.9+build5.7.3aedf.01337";

fn regex_parser(re: &Regex, input: &str) -> Option<semver::Version> {
    let caps = re.captures(input)?;

    let mut version = semver::Version::new(
        caps.name("major")?.as_str().parse().ok()?,
        caps.name("minor")?.as_str().parse().ok()?,
        caps.name("patch")?.as_str().parse().ok()?,
    );

    if let Some(pre) = caps.name("prerelease") {
        version.pre = semver::Prerelease::new(pre.as_str()).ok()?;
    }
    if let Some(build) = caps.name("buildmetadata") {
        version.build = semver::BuildMetadata::new(build.as_str()).ok()?;
    }

    Some(version)
}

fn bench_parsers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Parser");
    let re = Regex::new(r"^(?P<major>0|[1-9]\d*)\.(?P<minor>0|[1-9]\d*)\.(?P<patch>0|[1-9]\d*)(?:-(?P<prerelease>(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+(?P<buildmetadata>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$").unwrap();

    for &input in [INPUT_S, INPUT_XL].iter() {
        let sem_ver = BenchmarkId::new("sem_ver", input);
        group.bench_with_input(sem_ver, input, |b, input| {
            b.iter(|| Version::parse(black_box(input)).unwrap())
        });
        let semver = BenchmarkId::new("semver", input);
        group.bench_with_input(semver, input, |b, input| {
            b.iter(|| semver::Version::parse(black_box(input)).unwrap())
        });
        let regex = BenchmarkId::new("regex", input);
        group.bench_with_input(regex, &(input, &re), |b, (input, re)| {
            b.iter(|| regex_parser(re, black_box(input)).unwrap())
        });
    }

    group.finish();
}

fn bench_precedence(c: &mut Criterion) {
    let mut group = c.benchmark_group("Precedence");
    let pairs = [
        ("1.0.0", "1.0.1"),
        ("1.0.0-beta.2", "1.0.0-beta.11"),
        ("1.0.0-alpha.beta", "1.0.0-alpha.1"),
    ];

    for &(lhs, rhs) in pairs.iter() {
        let versions = (Version::parse(lhs).unwrap(), Version::parse(rhs).unwrap());
        let id = BenchmarkId::new("compare", format!("{} <> {}", lhs, rhs));
        group.bench_with_input(id, &versions, |b, (lhs, rhs)| {
            b.iter(|| compare(black_box(lhs), black_box(rhs)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parsers, bench_precedence);
criterion_main!(benches);
