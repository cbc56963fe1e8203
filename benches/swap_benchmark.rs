// benches/swap_benchmark.rs
use bswap::{Bswap, Isa, TypedView};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const LENGTHS: [usize; 5] = [1, 10, 100, 1000, 10000];

fn benchmark_width(c: &mut Criterion, width: usize, unaligned: bool) {
    let name = format!(
        "swap_{}bit{}",
        width * 8,
        if unaligned { "_unaligned" } else { "" }
    );
    let mut group = c.benchmark_group(name);
    let offset = usize::from(unaligned);

    for swapper in Isa::ALL.into_iter().filter_map(Bswap::with_isa) {
        for len in LENGTHS {
            let mut backing: Vec<u8> = (0..offset + len * width).map(|i| i as u8).collect();

            group.throughput(Throughput::Bytes((len * width) as u64));
            group.bench_with_input(
                BenchmarkId::new(swapper.isa().name(), len),
                &len,
                |b, &len| {
                    b.iter(|| {
                        let mut view = TypedView::new(&mut backing, offset, width, len).unwrap();
                        swapper.swap(&mut view).unwrap();
                    });
                },
            );
        }
    }

    group.finish();
}

fn benchmark_aligned(c: &mut Criterion) {
    for width in [2, 4, 8] {
        benchmark_width(c, width, false);
    }
}

fn benchmark_unaligned(c: &mut Criterion) {
    for width in [2, 4, 8] {
        benchmark_width(c, width, true);
    }
}

criterion_group!(benches, benchmark_aligned, benchmark_unaligned);
criterion_main!(benches);
