//! BLS operations over the sylow BLS12-381 implementation.
//!
//! Wire formats: secret keys are 32-byte big-endian field elements,
//! signatures are 64-byte G1 affine points, public keys are 128-byte G2
//! affine points, all hex-encoded.

use anyhow::{anyhow, Context, Result};
use serde_json::json;
use sha3::Keccak256;
use sylow::{
    pairing, Fp, G1Affine, G1Projective, G2Affine, G2Projective, GroupTrait, KeyPair, XMDExpander,
};

use crate::cli::Commands;

const DST: &[u8; 30] = b"WARLOCK-CHAOS-V01-CS01-SHA-256";
const SECURITY_BITS: u64 = 128;

pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::GenerateKeys => generate_keys(),
        Commands::Sign { secret, message } => sign(&secret, &message),
        Commands::PublicKeyFromSecret { secret } => public_key_from_secret(&secret),
        Commands::AggregateKeys { public_keys } => aggregate_keys(&public_keys),
        Commands::AggregateSignatures { signatures } => aggregate_signatures(&signatures),
        Commands::Verify {
            signature,
            public_key,
            message,
        } => verify(&signature, &public_key, &message),
    }
}

fn generate_keys() -> Result<()> {
    let key_pair = KeyPair::generate();
    let result = json!({
        "secretKey": hex::encode(key_pair.secret_key.to_be_bytes()),
        "publicKey": hex::encode(G2Affine::from(key_pair.public_key).to_be_bytes()),
    });
    println!("{result}");
    Ok(())
}

fn public_key_from_secret(secret: &str) -> Result<()> {
    let secret_key = decode_secret_key(secret)?;
    let public_key = G2Projective::generator() * secret_key;
    println!("{}", hex::encode(G2Affine::from(public_key).to_be_bytes()));
    Ok(())
}

fn sign(secret: &str, message: &str) -> Result<()> {
    let secret_key = decode_secret_key(secret)?;
    let hashed_message = hash_to_g1(message)?;
    let signature = hashed_message * secret_key;
    println!("{}", hex::encode(G1Affine::from(signature).to_be_bytes()));
    Ok(())
}

fn aggregate_keys(public_keys: &[String]) -> Result<()> {
    let mut agg_key = G2Projective::zero();
    for key_hex in public_keys {
        agg_key = agg_key + decode_public_key(key_hex)?;
    }
    println!("{}", hex::encode(G2Affine::from(agg_key).to_be_bytes()));
    Ok(())
}

fn aggregate_signatures(signatures: &[String]) -> Result<()> {
    let mut agg_sig = G1Projective::zero();
    for sig_hex in signatures {
        agg_sig = agg_sig + decode_signature(sig_hex)?;
    }
    println!("{}", hex::encode(G1Affine::from(agg_sig).to_be_bytes()));
    Ok(())
}

fn verify(signature: &str, public_key: &str, message: &str) -> Result<()> {
    let signature = decode_signature(signature)?;
    let public_key = decode_public_key(public_key)?;
    let hashed_message = hash_to_g1(message)?;

    let lhs = pairing(&signature, &G2Projective::generator());
    let rhs = pairing(&hashed_message, &public_key);

    println!("{}", json!({ "valid": lhs == rhs }));
    Ok(())
}

fn decode_secret_key(secret: &str) -> Result<Fp> {
    let bytes = decode_fixed::<32>("secret key", secret)?;
    Fp::from_be_bytes(&bytes)
        .into_option()
        .context("secret key is not a canonical field element")
}

fn decode_public_key(key_hex: &str) -> Result<G2Projective> {
    let bytes = decode_fixed::<128>("public key", key_hex)?;
    let affine = G2Affine::from_be_bytes(&bytes)
        .into_option()
        .context("public key is not a valid curve point")?;
    Ok(G2Projective::from(affine))
}

fn decode_signature(sig_hex: &str) -> Result<G1Projective> {
    let bytes = decode_fixed::<64>("signature", sig_hex)?;
    let affine = G1Affine::from_be_bytes(&bytes)
        .into_option()
        .context("signature is not a valid curve point")?;
    Ok(G1Projective::from(affine))
}

fn hash_to_g1(message: &str) -> Result<G1Projective> {
    let expander = XMDExpander::<Keccak256>::new(DST, SECURITY_BITS);
    G1Projective::hash_to_curve(&expander, message.as_bytes())
        .map_err(|e| anyhow!("hashing message to curve failed: {e:?}"))
}

fn decode_fixed<const N: usize>(what: &str, hex_str: &str) -> Result<[u8; N]> {
    let bytes = hex::decode(hex_str).with_context(|| format!("{what} is not valid hex"))?;
    bytes
        .try_into()
        .map_err(|b: Vec<u8>| anyhow!("{what} must be {N} bytes, got {}", b.len()))
}
