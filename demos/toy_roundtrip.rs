use std::env;

use toy_kyber::toy::{TOY_N, TOY_PKE};
use toy_kyber::ToyError;

fn main() -> Result<(), ToyError> {
    env_logger::init();

    let args = env::args().collect::<Vec<String>>();
    let plain = match args.get(1) {
        None => 5,
        Some(arg) => match arg.trim().parse::<u64>() {
            Ok(plain) => plain,
            Err(_) => {
                println!("Usage:");
                println!("toy_roundtrip: [plaintext in 0..{}]", 1u64 << TOY_N);
                return Ok(());
            }
        },
    };

    let pke = TOY_PKE;
    let (pk, sk) = pke.key_gen();
    let ciphertext = pke.encrypt(&pk, plain)?;
    let decrypted = pke.decrypt(&sk, &ciphertext);

    println!("Plaintext: {}", plain);
    println!("Decrypted: {}", decrypted);
    Ok(())
}
