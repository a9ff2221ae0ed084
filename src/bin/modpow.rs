use clap::Parser;
use montpow::mod_pow;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "modpow")]
#[command(about = "Montgomery-style modular exponentiation demo", long_about = None)]
#[command(version)]
struct Args {
    /// Base operand
    #[arg(short, long, env = "MODPOW_BASE", default_value = "125")]
    base: u64,

    /// Exponent
    #[arg(short, long, env = "MODPOW_EXPONENT", default_value = "16")]
    exponent: u64,

    /// Modulus
    #[arg(short, long, env = "MODPOW_MODULUS", default_value = "21")]
    modulus: u64,
}

/// Fixed battery of known input/output pairs, checked before any output.
///
/// A zero exponent yields `1 mod n`, so the modulus-1 rows expect 0.
const SELF_CHECK: &[(u64, u64, u64, u64)] = &[
    (0, 0, 1, 0),
    (0, 1, 1, 0),
    (1, 0, 1, 0),
    (1, 1, 1, 0),
    (3, 5, 7, 5),
    (4, 13, 497, 445),
    (7, 560, 561, 1),
    (2, 1_000_000_000, 10_000_007, 6_705_727),
];

fn self_check() {
    for &(a, b, n, want) in SELF_CHECK {
        let got = mod_pow(a, b, n)
            .unwrap_or_else(|e| panic!("self-check {a}^{b} mod {n} errored: {e}"));
        assert_eq!(got, want, "self-check mismatch for {a}^{b} mod {n}");
    }
    debug!(cases = SELF_CHECK.len(), "self-check passed");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    self_check();

    let args = Args::parse();
    info!(
        a = args.base,
        b = args.exponent,
        n = args.modulus,
        "computing modular exponentiation"
    );

    let result = mod_pow(args.base, args.exponent, args.modulus)?;
    println!(
        "{} pow {} mod {} = {}",
        args.base, args.exponent, args.modulus, result
    );

    Ok(())
}
