use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use icosphere::{icosahedron, icosphere, subdivide_mesh};

fn bench_icosphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("icosphere");

    for nu in [4u32, 16, 64] {
        let vertex_count = 12 + 10 * (u64::from(nu) + 1) * (u64::from(nu) - 1);

        group.throughput(Throughput::Elements(vertex_count));
        group.bench_with_input(BenchmarkId::new("generate", nu), &nu, |b, &nu| {
            b.iter(|| icosphere(black_box(nu), None));
        });
    }

    group.finish();
}

fn bench_subdivide(c: &mut Criterion) {
    // Subdivision alone, without the final spherical projection
    let base = icosahedron();

    let mut group = c.benchmark_group("subdivide");

    for nu in [4u32, 16, 64] {
        group.bench_with_input(BenchmarkId::new("icosahedron", nu), &nu, |b, &nu| {
            b.iter(|| subdivide_mesh(black_box(&base), black_box(nu)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_icosphere, bench_subdivide);
criterion_main!(benches);
