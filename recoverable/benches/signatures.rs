use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use recoverable::{SigningKey, VerifyingKey, solve_recovery_index};
use sha2::{Digest, Sha256};

fn bench_sign(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let digest = Sha256::digest(b"bench message");

    c.bench_function("compact_sign", |bencher| {
        bencher.iter(|| {
            let sig = sk.sign_digest(black_box(&digest)).expect("sign");
            black_box(sig);
        })
    });
}

fn bench_recover(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let digest = Sha256::digest(b"bench message");
    let sig = sk.sign_digest(&digest).expect("sign");

    c.bench_function("compact_recover", |bencher| {
        bencher.iter(|| {
            let vk = sig.recover_public_key(black_box(&digest)).expect("recover");
            black_box(vk);
        })
    });
}

fn bench_solve_index(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let vk = sk.verifying_key();
    let digest = Sha256::digest(b"bench message");
    let sig = sk.sign_digest(&digest).expect("sign");

    c.bench_function("compact_solve_index", |bencher| {
        bencher.iter(|| {
            let index =
                solve_recovery_index(sig.r(), sig.s(), black_box(&digest), &vk).expect("solve");
            black_box(index);
        })
    });
}

fn bench_verify(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let vk = VerifyingKey::from(&sk);
    let digest = Sha256::digest(b"bench message");
    let sig = sk.sign_digest(&digest).expect("sign");

    c.bench_function("compact_verify", |bencher| {
        bencher.iter(|| {
            let ok = vk
                .verify_digest(black_box(&digest), black_box(&sig))
                .expect("verify");
            black_box(ok);
        })
    });
}

criterion_group!(
    benches,
    bench_sign,
    bench_recover,
    bench_solve_index,
    bench_verify
);
criterion_main!(benches);
