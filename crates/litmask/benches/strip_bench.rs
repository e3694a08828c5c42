use criterion::{black_box, criterion_group, criterion_main, Criterion};
use litmask::{Backend, MaskOptions, ScannerBackend, SwcBackend};

// A medium-size JavaScript module exercising every literal shape the engine
// handles: strings, templates with interpolation, comments, and regexes.
const JS_SOURCE: &str = r#"
// runtime environment probing
const mode = process.env.NODE_ENV || 'development';
const banner = `build ${mode} for ${target}`;
/* replacement happens over masked text,
   so these strings never leak matches */
const pattern = /process\.env\.[A-Z_]+/g;
function replaceEnv(code, config) {
  return code.replace(pattern, (name) => {
    const key = name.slice('process.env.'.length);
    return JSON.stringify(config[key] ?? '');
  });
}
const defaults = {
  NODE_ENV: mode,
  DEBUG: "verbose",
  BASE_URL: 'https://example.invalid/api',
};
const summary = `replaced ${Object.keys(defaults).length} keys`;
export { replaceEnv, defaults, summary };
"#;

fn bench_scanner_strip(c: &mut Criterion) {
    let source = JS_SOURCE.repeat(64);
    c.bench_function("scanner_strip", |b| {
        b.iter(|| litmask::strip_literals(black_box(&source)).unwrap());
    });
}

fn bench_swc_strip(c: &mut Criterion) {
    let source = JS_SOURCE.repeat(64);
    let opts = MaskOptions::default();
    c.bench_function("swc_strip", |b| {
        b.iter(|| strip_with_oracle(black_box(&source), &opts));
    });
}

fn strip_with_oracle(source: &str, opts: &MaskOptions) -> String {
    litmask::strip_literals_with(&SwcBackend, source, opts).unwrap()
}

fn bench_boundary_query(c: &mut Criterion) {
    let source = JS_SOURCE.repeat(64);
    let bounds = ScannerBackend::default()
        .literal_boundaries(&source)
        .unwrap();
    let len = source.chars().count() as u32;
    c.bench_function("boundary_query", |b| {
        b.iter(|| {
            let mut hits = 0u32;
            let mut offset = 0u32;
            while offset < len {
                if bounds.is_literal_at(black_box(offset)) {
                    hits += 1;
                }
                offset += 7;
            }
            black_box(hits)
        });
    });
}

criterion_group!(
    benches,
    bench_scanner_strip,
    bench_swc_strip,
    bench_boundary_query
);
criterion_main!(benches);
