//! Performance benchmarks for git-tree-structure

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use git_tree_structure::test_utils::TestRepo;
use git_tree_structure::{
    Forest, GitPathSource, ListingOptions, OutputConfig, OutputFormat, REPO_ROOT, render,
};

/// Sorted paths spread over a few levels of directories.
fn synthetic_paths(dirs: usize, files_per_dir: usize) -> Vec<String> {
    let mut paths = Vec::with_capacity(dirs * files_per_dir);
    for d in 0..dirs {
        for f in 0..files_per_dir {
            paths.push(format!("pkg_{:03}/src/mod_{:02}/file_{:03}.rs", d, d % 7, f));
        }
    }
    paths.sort();
    paths
}

fn build_forest(paths: &[String]) -> Forest {
    let mut forest = Forest::new();
    forest.add_root(REPO_ROOT);
    for path in paths {
        forest.insert_path(path, REPO_ROOT);
    }
    forest
}

fn bench_build(c: &mut Criterion) {
    let paths = synthetic_paths(200, 50);

    c.bench_function("build_forest_10k", |b| {
        b.iter(|| build_forest(black_box(&paths)))
    });
}

fn bench_render(c: &mut Criterion) {
    let forest = build_forest(&synthetic_paths(200, 50));
    let config = OutputConfig::default();

    c.bench_function("render_yaml_10k", |b| {
        b.iter(|| render(black_box(&forest), OutputFormat::Yaml, &config))
    });

    c.bench_function("render_tree_10k", |b| {
        b.iter(|| render(black_box(&forest), OutputFormat::Tree, &config))
    });
}

fn bench_git_listing(c: &mut Criterion) {
    let repo = TestRepo::with_git();
    let paths = synthetic_paths(20, 25);
    repo.add_files(paths.iter().map(String::as_str));

    let source = GitPathSource::discover(repo.path()).expect("repository should open");
    let options = ListingOptions::default();

    c.bench_function("git_list_500", |b| {
        b.iter(|| source.list(black_box(REPO_ROOT), &options).expect("listing failed"))
    });
}

criterion_group!(benches, bench_build, bench_render, bench_git_listing);
criterion_main!(benches);
