mod kv_nom;
mod kv_ruleseq;

use criterion::{black_box, criterion_group, Criterion};
use kv_nom::nom_parser;
use kv_ruleseq::{directive_parser, ruleseq_parser};
use log::trace;
use once_cell::sync::Lazy;

static INPUT: Lazy<String> = Lazy::new(|| {
    let pairs: Vec<String> = ('a'..='z')
        .cycle()
        .take(200)
        .enumerate()
        .map(|(i, c)| format!("{}{c}:{}", c.to_string().repeat(i % 7 + 1), i * 37))
        .collect();
    format!("({}) trailing", pairs.join(","))
});

pub type Pairs<'a> = Vec<(&'a str, &'a str)>;

pub fn bench_nom(c: &mut Criterion) {
    c.bench_function("kv_nom", |b| b.iter(|| nom_parser(black_box(&INPUT))));
}

pub fn bench_ruleseq(c: &mut Criterion) {
    c.bench_function("kv_ruleseq", |b| {
        b.iter(|| ruleseq_parser(black_box(&INPUT)))
    });
}

pub fn bench_directives(c: &mut Criterion) {
    c.bench_function("kv_directives", |b| {
        b.iter(|| directive_parser(black_box(&INPUT)))
    });
}

criterion_group!(benches, bench_nom, bench_ruleseq, bench_directives);

fn main() {
    env_logger::init();
    trace!(target: "rseq", "Logging enabled");
    assert_eq!(nom_parser(&INPUT), ruleseq_parser(&INPUT));
    assert_eq!(nom_parser(&INPUT), directive_parser(&INPUT));
    benches();
    Criterion::default().configure_from_args().final_summary();
}
