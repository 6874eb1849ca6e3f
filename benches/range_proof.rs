use ark_ff::UniformRand;
use ark_std::rand::thread_rng;
use confidential_transfer::{
    CompactRangeProofSystemImpl, ContextConfig, CurveContext, RangeGroup, RangeProofSystem,
    RangeProofSystemImpl,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

const WIDTHS: [usize; 3] = [8, 32, 64];

fn context() -> CurveContext<RangeGroup> {
    CurveContext::from_seed(&ContextConfig::default(), [5u8; 32]).expect("context")
}

fn bench_prove(c: &mut Criterion) {
    let context = context();
    let mut rng = thread_rng();
    let mut g = c.benchmark_group("range_prove");
    g.throughput(Throughput::Elements(1));

    for bits in WIDTHS {
        let linear = RangeProofSystemImpl::new(&context, bits).expect("linear system");
        let compact = CompactRangeProofSystemImpl::new(&context, bits).expect("compact system");
        let blinding = ark_bn254::Fr::rand(&mut rng);

        g.bench_with_input(BenchmarkId::new("linear", bits), &bits, |b, _| {
            b.iter(|| black_box(linear.prove(130, &blinding, &mut rng).expect("prove")));
        });
        g.bench_with_input(BenchmarkId::new("compact", bits), &bits, |b, _| {
            b.iter(|| black_box(compact.prove(130, &blinding, &mut rng).expect("prove")));
        });
    }

    g.finish();
}

fn bench_verify(c: &mut Criterion) {
    let context = context();
    let mut rng = thread_rng();
    let mut g = c.benchmark_group("range_verify");
    g.throughput(Throughput::Elements(1));

    for bits in WIDTHS {
        let linear = RangeProofSystemImpl::new(&context, bits).expect("linear system");
        let compact = CompactRangeProofSystemImpl::new(&context, bits).expect("compact system");
        let blinding = ark_bn254::Fr::rand(&mut rng);
        let linear_proof = linear.prove(130, &blinding, &mut rng).expect("prove");
        let compact_proof = compact.prove(130, &blinding, &mut rng).expect("prove");

        g.bench_with_input(BenchmarkId::new("linear", bits), &linear_proof, |b, proof| {
            b.iter(|| linear.verify(black_box(proof)).expect("verify"));
        });
        g.bench_with_input(BenchmarkId::new("compact", bits), &compact_proof, |b, proof| {
            b.iter(|| compact.verify(black_box(proof)).expect("verify"));
        });
    }

    g.finish();
}

criterion_group!(benches, bench_prove, bench_verify);
criterion_main!(benches);
