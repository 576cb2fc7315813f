use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use trie_tools::wordlist::index::Index;
use trie_tools::wordlist::trie::fixed::FixedTrie;
use trie_tools::wordlist::trie::hash::HashTrie;
use trie_tools::wordlist::trie::search::query_all;
use trie_tools::wordlist::trie::variable::VariableTrie;

fn random_words(n: usize, rng: &mut StdRng) -> Vec<String> {
    (0..n)
        .map(|_| {
            let len = rng.gen_range(3..12);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
        })
        .collect()
}

fn build<T: Index>(mut trie: T, words: &[String]) -> T {
    trie.insert_all(words.iter().map(|w| w.as_str()));
    trie
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(20240117);
    let words = random_words(50_000, &mut rng);
    // half members, half misses
    let mut queries: Vec<String> = words.iter().take(5_000).cloned().collect();
    queries.extend(random_words(5_000, &mut rng));

    {
        let mut group = c.benchmark_group("build");
        group.bench_function("variable", |b| {
            b.iter(|| black_box(build(VariableTrie::new(), &words)))
        });
        group.bench_function("fixed", |b| {
            b.iter(|| black_box(build(FixedTrie::alphanumeric(), &words)))
        });
        group.bench_function("hash", |b| {
            b.iter(|| black_box(build(HashTrie::new(), &words)))
        });
    }

    {
        let variable = build(VariableTrie::new(), &words);
        let fixed = build(FixedTrie::alphanumeric(), &words);
        let hash = build(HashTrie::new(), &words);

        let mut group = c.benchmark_group("query");
        group.bench_function("variable", |b| {
            b.iter(|| black_box(query_all(&variable, &queries)))
        });
        group.bench_function("fixed", |b| {
            b.iter(|| black_box(query_all(&fixed, &queries)))
        });
        group.bench_function("hash", |b| {
            b.iter(|| black_box(query_all(&hash, &queries)))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
