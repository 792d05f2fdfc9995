use ark_bn254::{Fr, G1Projective};
use ark_std::UniformRand;
use criterion::{BenchmarkId, Criterion};
use multiexp_core::field::MultiExpScalar;
use multiexp_core::msm::{batch_exp, exp_window_size, fixed_base_exp, get_window_table};
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use tracing_subscriber::EnvFilter;

fn benchmark_fixed_base(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
    let g = G1Projective::rand(&mut rng);
    let scalar_size = <Fr as MultiExpScalar>::NUM_BITS;

    let mut group = c.benchmark_group("fixed_base");
    for log_size in [8, 12, 16] {
        let scalars: Vec<Fr> = std::iter::repeat_with(|| Fr::rand(&mut rng))
            .take(1 << log_size)
            .collect();
        let window = exp_window_size::<G1Projective, Fr>(scalars.len());

        group.bench_with_input(BenchmarkId::new("window_table", log_size), &window, |b, &w| {
            b.iter(|| get_window_table(scalar_size, w, g))
        });

        let table = get_window_table(scalar_size, window, g);
        group.bench_with_input(BenchmarkId::new("batch_exp", log_size), &scalars, |b, s| {
            b.iter(|| batch_exp(scalar_size, window, &table, s))
        });
        group.bench_with_input(BenchmarkId::new("fixed_base_exp", log_size), &scalars, |b, s| {
            b.iter(|| fixed_base_exp(g, s))
        });
    }
    group.finish();
}

fn main() {
    let log_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let mut criterion = Criterion::default()
        .configure_from_args()
        .sample_size(10);
    benchmark_fixed_base(&mut criterion);
    criterion.final_summary();
}
