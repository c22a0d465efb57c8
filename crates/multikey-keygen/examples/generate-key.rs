use multikey_encoding::Curve;
use multikey_keygen::{KeyProvider, OsRngProvider};

fn main() {
    let keypair = OsRngProvider
        .generate_keypair(Curve::Secp256k1)
        .expect("Couldn't generate secp256k1 keypair");

    println!("Signing Key: {}", hex::encode(&keypair.secret_bytes));
    println!("Verifying Key: {}", hex::encode(&keypair.public_bytes));
    println!(
        "Verifying Key (compressed): {}",
        hex::encode(&keypair.public_bytes_compressed)
    );
    println!(
        "Encoded: {}",
        keypair.public_multikey().expect("Couldn't encode multikey")
    );
}
