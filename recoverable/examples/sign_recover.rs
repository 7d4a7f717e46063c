use rand::SeedableRng;
use rand::rngs::StdRng;
use recoverable::{RecordingObserver, Signature, Signer, SignerConfig, SigningKey, VerifyingKey};

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let vk = VerifyingKey::from(&sk);

    let sk_bytes = bincode::serialize(&sk).expect("serialize sk");
    let vk_bytes = bincode::serialize(&vk).expect("serialize vk");

    let msg = b"hello compact signatures";
    let observer = RecordingObserver::new();
    let signer = Signer::with_observer(SignerConfig::default(), &observer);

    let sig = signer.sign_message(msg, &sk).expect("sign");
    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");
    println!("signature: {sig}");
    for event in observer.events() {
        println!("  {event:?}");
    }

    let sk2: SigningKey = bincode::deserialize(&sk_bytes).expect("deserialize sk");
    let vk2: VerifyingKey = bincode::deserialize(&vk_bytes).expect("deserialize vk");
    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");

    let recovered = sig2
        .recover_public_key_from_message(msg)
        .expect("recover");
    assert_eq!(recovered, vk2);
    assert!(vk2.verify_message(msg, &sig2).expect("verify"));
    assert_eq!(sk2.sign_message(msg).expect("sign"), sig);

    println!("recovered key: {}", hex::encode(recovered.to_compressed()));
}
