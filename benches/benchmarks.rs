//! Performance benchmarks for rcscan

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rcscan::test_utils::TestTree;
use rcscan::{DEFAULT_TARGET, ExclusionSet, FilteredScanner, ScanConfig, archive, scan};
use std::ffi::OsStr;
use tempfile::TempDir;

fn workspace(packages: usize, depth: usize, noise: usize) -> TestTree {
    let tree = TestTree::new();
    tree.populate_workspace(DEFAULT_TARGET, packages, depth, noise);
    tree
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    // Small workspace (10 packages)
    let small = workspace(10, 3, 5);
    group.bench_function("small_workspace_10_packages", |b| {
        b.iter(|| {
            FilteredScanner::new(ScanConfig::new(black_box(small.path())))
                .scan()
                .unwrap()
        })
    });

    // Larger workspace (100 packages)
    let large = workspace(100, 5, 20);
    group.bench_function("large_workspace_100_packages", |b| {
        b.iter(|| {
            FilteredScanner::new(ScanConfig::new(black_box(large.path())))
                .scan()
                .unwrap()
        })
    });

    // Same tree without pruning, to show what exclusions save
    let nothing = ExclusionSet::empty();
    group.bench_function("large_workspace_no_exclusions", |b| {
        b.iter(|| scan(black_box(large.path()), &nothing, DEFAULT_TARGET).unwrap())
    });

    group.finish();
}

fn bench_exclusion_lookup(c: &mut Criterion) {
    let set = ExclusionSet::with_defaults(["vendor", "coverage", "target"]);
    let mut group = c.benchmark_group("exclusion_lookup");

    group.bench_function("hit", |b| {
        b.iter(|| set.is_excluded(black_box(OsStr::new("Node_Modules"))))
    });

    group.bench_function("miss", |b| {
        b.iter(|| set.is_excluded(black_box(OsStr::new("redistribute"))))
    });

    group.finish();
}

fn bench_archive(c: &mut Criterion) {
    let tree = workspace(50, 1, 0);
    let report = FilteredScanner::new(ScanConfig::new(tree.path()))
        .scan()
        .unwrap();
    let out = TempDir::new().unwrap();
    let dest = out.path().join("bench.zip");

    c.bench_function("archive_50_files", |b| {
        b.iter(|| archive(&report.root, black_box(&report.matches), &dest).unwrap())
    });
}

criterion_group!(benches, bench_scan, bench_exclusion_lookup, bench_archive);
criterion_main!(benches);
