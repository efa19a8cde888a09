use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use zdict_core::compression::{
    CompressionDictionary, CompressionService, DecompressionDictionary, DecompressionService, TrainData,
};

fn sample(i: usize) -> [u8; 64] {
    let line = format!("{{\"id\":{},\"user\":\"u{}\",\"op\":\"read\",\"ok\":true}}", 1000 + i % 9000, i % 13);
    let mut out = [b' '; 64];
    out[..line.len()].copy_from_slice(line.as_bytes());
    out
}

fn bench_small_records(c: &mut Criterion) {
    let samples: Vec<[u8; 64]> = (0..2000).map(sample).collect();
    let mut data = TrainData::with_capacity(16 * 1024).expect("reserve");
    data.train(&samples).expect("train");
    let cdict = CompressionDictionary::new(&data, 3).expect("cdict");
    let ddict = DecompressionDictionary::new(&data).expect("ddict");

    let input = sample(4242);
    let frame = CompressionService::compress_with_dict(&cdict, &input).expect("compress");

    let mut group = c.benchmark_group("record_64b");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("compress_plain", |b| {
        b.iter(|| CompressionService::compress(black_box(&input), 3).unwrap())
    });
    group.bench_function("compress_dict", |b| {
        b.iter(|| CompressionService::compress_with_dict(&cdict, black_box(&input)).unwrap())
    });
    group.bench_function("decompress_dict", |b| {
        let mut out = [0u8; 64];
        b.iter(|| DecompressionService::decompress_with_dict_into(&ddict, &mut out, black_box(&frame)).unwrap())
    });
    group.finish();
}

fn bench_levels(c: &mut Criterion) {
    let input: Vec<u8> = (0..64 * 1024).map(|i| sample(i / 64)[i % 64]).collect();
    let mut group = c.benchmark_group("levels_64k");
    group.throughput(Throughput::Bytes(input.len() as u64));
    for level in [1, 3, 9, 19] {
        group.bench_with_input(BenchmarkId::from_parameter(level), &level, |b, &level| {
            b.iter(|| CompressionService::compress(black_box(&input), level).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_small_records, bench_levels);
criterion_main!(benches);
