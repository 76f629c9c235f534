//! Prints the `ADMIN_PASSWORD_HASH` line for a chosen admin password.

use std::process::ExitCode;

use clap::Parser;
use sha2::{Digest, Sha256};

const MIN_PASSWORD_LENGTH: usize = 12;

#[derive(Parser, Debug)]
#[command(name = "generate-password-hash")]
#[command(about = "Generate the SHA-256 hash for the admin password")]
struct Args {
    /// Admin password, at least 12 characters
    password: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.password.chars().count() < MIN_PASSWORD_LENGTH {
        eprintln!(
            "A senha deve ter no mínimo {} caracteres.",
            MIN_PASSWORD_LENGTH
        );
        return ExitCode::FAILURE;
    }

    let hash = hex::encode(Sha256::digest(args.password.as_bytes()));

    println!("Adicione ao seu .env:");
    println!("ADMIN_PASSWORD_HASH={}", hash);

    ExitCode::SUCCESS
}
