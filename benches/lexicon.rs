use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_ghost::Lexicon;

fn word_list() -> Vec<String> {
    let mut words = Vec::new();
    for a in 'a'..='z' {
        for b in ['a', 'e', 'i', 'o', 'u'] {
            for c in 'a'..='z' {
                words.push(format!("{a}{b}{c}"));
                words.push(format!("{a}{b}{c}ing"));
            }
        }
    }
    words
}

fn bench_load(c: &mut Criterion) {
    let words = word_list();
    c.bench_function("from_words", |b| {
        b.iter(|| Lexicon::from_words(black_box(words.iter().map(String::as_str))))
    });
}

fn bench_queries(c: &mut Criterion) {
    let lexicon = Lexicon::from_words(word_list());

    c.bench_function("has_prefix", |b| b.iter(|| lexicon.has_prefix(black_box("mat"))));
    c.bench_function("has_word", |b| b.iter(|| lexicon.has_word(black_box("muting"), 3)));
    c.bench_function("valid_continuations", |b| {
        b.iter(|| lexicon.valid_continuations(black_box("ro")))
    });
}

criterion_group!(benches, bench_load, bench_queries);
criterion_main!(benches);
