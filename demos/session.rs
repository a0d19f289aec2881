//! One interactive encrypt/decrypt round trip on the console.
//!
//! Generates a key pair from the small-prime pool, prints every component,
//! reads a message, and shows the ciphertext and the recovered plaintext.

use std::error::Error;
use std::io::{self, BufRead, Write};

use mini_rsa::{
    traits::{PrivateKeyParts, PublicKeyParts},
    RsaPrivateKey, RsaPublicKey,
};

fn main() -> Result<(), Box<dyn Error>> {
    let mut rng = rand::thread_rng();

    let key = RsaPrivateKey::<u64>::new(&mut rng)?;
    let [p, q] = key.primes();

    println!("P = {}", p);
    println!("Q = {}", q);
    println!("N = {}", key.n());
    println!("Phi(N) = {}", (p - 1) * (q - 1));
    println!();
    println!("e = {}", key.e());
    println!("d = {}", key.d());
    println!();

    print!("Enter 1 < M < {}: ", key.n());
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let m: u64 = line.trim().parse()?;
    let m = m % key.n();

    println!();
    println!("M = {}", m);

    let c = RsaPublicKey::from(&key).encrypt(m)?;
    println!("C = {}", c);
    println!("M = {}", key.decrypt(c)?);

    Ok(())
}
