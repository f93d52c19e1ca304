use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use toy_kyber::math::RingElement;
use toy_kyber::toy::{sampler::uniform_poly, TOY_PKE};

pub fn bench_toy_pke(c: &mut Criterion) {
    let pke = TOY_PKE;
    let mut rng = StdRng::seed_from_u64(42);
    let msg = 5;

    let mut group = c.benchmark_group("TOY PKE k=3 n=4 q=97");
    let (pk, sk) = pke.key_gen_with_rng(&mut rng);
    let ciphertext = pke.encrypt_with_rng(&pk, msg, &mut rng).unwrap();
    let coins = [7u8; 32];

    group.bench_function("KeyGen", |b| b.iter(|| pke.key_gen_with_rng(&mut rng)));
    group.bench_function("KeyGenFromSeed", |b| {
        b.iter(|| pke.key_gen_from_seed(&coins))
    });
    group.bench_function("Encrypt", |b| {
        b.iter(|| pke.encrypt_with_rng(&pk, msg, &mut rng))
    });
    group.bench_function("EncryptWithCoins", |b| {
        b.iter(|| pke.encrypt_with_coins(&pk, msg, &coins))
    });
    group.bench_function("Decrypt", |b| b.iter(|| pke.decrypt(&sk, &ciphertext)));
    group.finish();
}

pub fn bench_ring_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let a: RingElement<3329, 256> = uniform_poly(&mut rng);
    let b: RingElement<3329, 256> = uniform_poly(&mut rng);
    let (x, y): (RingElement<97, 4>, RingElement<97, 4>) =
        (uniform_poly(&mut rng), uniform_poly(&mut rng));

    let mut group = c.benchmark_group("Negacyclic multiplication");
    group.bench_function("n=4 q=97", |bench| bench.iter(|| x * y));
    group.bench_function("n=256 q=3329", |bench| bench.iter(|| a * b));
    group.finish();
}

criterion_group! {
    name = toy;
    config = Criterion::default().sample_size(100);
    targets = bench_toy_pke, bench_ring_mul
}

criterion_main!(toy);
