// Criterion benchmark suite for property escape compilation and matching.
//
// Run: cargo bench
// Specific group: cargo bench -- compile
// HTML report: target/criterion/report/index.html

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ferroprop::api::{try_compile_property_escape, CharClass};
use ferroprop::rangeset::RangeSet;
use ferroprop::registry::{global, PropertyRegistry};
use ferroprop::unicode::Ucd;

// ---------------------------------------------------------------------------
// 1. registry_build -- alias table and set materialization
// ---------------------------------------------------------------------------

fn bench_registry_build(c: &mut Criterion) {
    c.bench_function("registry_build", |b| {
        b.iter(|| {
            let registry = PropertyRegistry::build(black_box(&Ucd)).expect("build failed");
            black_box(&registry);
        });
    });
}

// ---------------------------------------------------------------------------
// 2. compile -- escape resolution against the shared registry
// ---------------------------------------------------------------------------

fn bench_compile(c: &mut Criterion) {
    global();
    let cases: &[(&str, &str)] = &[
        ("gc_short", r"\p{Lu}"),
        ("gc_group", r"\p{Letter}"),
        ("gc_negated", r"\P{L}"),
        ("script", r"\p{Script=Greek}"),
        ("scx", r"\p{scx=Han}"),
        ("block", r"\p{Block=Arrows}"),
        ("binary", r"\p{Alphabetic}"),
    ];

    let mut group = c.benchmark_group("compile");
    for (name, pat) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), pat, |b, pat| {
            b.iter(|| {
                let outcome = try_compile_property_escape(true, black_box(pat)).expect("compile failed");
                black_box(outcome);
            });
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 3. char_class -- bracket expressions with several members
// ---------------------------------------------------------------------------

fn bench_char_class(c: &mut Criterion) {
    global();
    let cases: &[(&str, &str)] = &[
        ("literals", r"[a-zA-Z0-9_]"),
        ("mixed", r"[\p{Script=Greek}\p{Nd}a-f]"),
        ("negated", r"[^\p{L}\p{M}\p{N}]"),
    ];

    let mut group = c.benchmark_group("char_class");
    for (name, pat) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), pat, |b, pat| {
            b.iter(|| {
                let cc = CharClass::new(black_box(pat)).expect("compile failed");
                black_box(cc);
            });
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 4. membership -- binary search over large sets
// ---------------------------------------------------------------------------

fn bench_membership(c: &mut Criterion) {
    // Mixed-script input: Latin, Greek, Cyrillic, CJK
    let text = "Hello Κόσμε Привет 世界 café résumé naïve";
    let cases: &[(&str, &str)] = &[
        ("upper", r"\p{Lu}"),
        ("letter", r"\p{Letter}"),
        ("greek", r"\p{Script=Greek}"),
        ("cyrillic", r"\p{sc=Cyrl}"),
        ("unassigned", r"\p{Cn}"),
    ];

    let mut group = c.benchmark_group("membership");
    for (name, pat) in cases {
        let cc = CharClass::new(pat).expect("compile failed");
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| {
                let count = cc.find_iter(black_box(text)).count();
                black_box(count);
            });
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 5. set_algebra -- union and complement of large sets
// ---------------------------------------------------------------------------

fn bench_set_algebra(c: &mut Criterion) {
    let registry = global();
    let letter = registry.resolve_shorthand("L").expect("L").clone();
    let number = registry.resolve_shorthand("N").expect("N").clone();

    let mut group = c.benchmark_group("set_algebra");
    group.bench_function("union", |b| {
        b.iter(|| black_box(black_box(&letter).union(black_box(&number))));
    });
    group.bench_function("complement", |b| {
        b.iter(|| black_box(black_box(&letter).complement()));
    });
    group.bench_function("intersection", |b| {
        b.iter(|| black_box(black_box(&letter).intersection(black_box(&number))));
    });
    group.bench_function("add_range", |b| {
        b.iter(|| {
            let mut set: RangeSet = letter.clone();
            set.add_range(black_box(0x3000), black_box(0x3100));
            black_box(set);
        });
    });
    group.finish();
}

// ---------------------------------------------------------------------------
// Criterion harness
// ---------------------------------------------------------------------------

criterion_group!(
    benches,
    bench_registry_build,
    bench_compile,
    bench_char_class,
    bench_membership,
    bench_set_algebra,
);
criterion_main!(benches);
