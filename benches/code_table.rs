use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use dna_huffman::{FrequencyTable, HuffmanTree, compress};

fn dna(len: usize) -> Vec<u8> {
    b"AACGTTTAGCAAAGTC".iter().copied().cycle().take(len).collect()
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");

    for size in [64, 4096, 65536].iter() {
        let input = dna(*size);
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::new("dna", size), &input, |b, input| {
            b.iter(|| compress(black_box(input)))
        });
    }
    group.finish();
}

fn bench_full_alphabet(c: &mut Criterion) {
    let input: Vec<u8> = (0..=255u8).cycle().take(1 << 16).collect();
    let freq = FrequencyTable::from_bytes(&input);

    c.bench_function("tree 256 symbols", |b| {
        b.iter(|| HuffmanTree::from_frequencies(black_box(&freq)))
    });
}

criterion_group!(benches, bench_compress, bench_full_alphabet);
criterion_main!(benches);
