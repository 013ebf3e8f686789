use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "BLS Tool")]
#[command(version = "1.0")]
#[command(about = "Tool for BLS key generation, signing, and aggregation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a fresh keypair and print it as JSON.
    GenerateKeys,

    /// Sign a message with a secret key (hex), printing the signature as hex.
    Sign {
        #[arg(short, long)]
        secret: String,

        #[arg(short, long)]
        message: String,
    },

    /// Derive the public key for a secret key (hex).
    PublicKeyFromSecret {
        #[arg(short, long)]
        secret: String,
    },

    /// Sum a list of public keys (hex) into one aggregate key.
    AggregateKeys {
        #[arg(short, long, num_args=1..)]
        public_keys: Vec<String>,
    },

    /// Sum a list of signatures (hex) into one aggregate signature.
    AggregateSignatures {
        #[arg(short, long, num_args=1..)]
        signatures: Vec<String>,
    },

    /// Check a signature (aggregate or single) against a public key and message.
    Verify {
        #[arg(short, long)]
        signature: String,

        #[arg(short, long)]
        public_key: String,

        #[arg(short, long)]
        message: String,
    },
}
