use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use alloy_primitives::{Address, U256};
use claimtree::{build_distribution, parse_u256, Distribution};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "airdrop")]
#[command(about = "Build and check Merkle airdrop distributions", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a distribution artifact from a balances file
    Build(BuildArgs),
    /// Check an existing distribution artifact
    Verify(VerifyArgs),
}

#[derive(Args)]
struct BuildArgs {
    /// JSON object mapping account address to amount (hex string, decimal
    /// string or number); member order assigns claim indices
    #[arg(short, long)]
    input: PathBuf,

    /// Output file for the distribution artifact
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct VerifyArgs {
    /// Distribution artifact to check
    #[arg(short, long)]
    input: PathBuf,
}

fn parse_amount(value: &serde_json::Value) -> Result<U256> {
    match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .map(U256::from)
            .context("Amount too large for a JSON number, use a string"),
        serde_json::Value::String(s) => Ok(parse_u256(s)?),
        _ => anyhow::bail!("Expected number or string amount"),
    }
}

fn build(args: &BuildArgs) -> Result<()> {
    let file = File::open(&args.input).context("Failed to open balances file")?;
    let balances: serde_json::Map<String, serde_json::Value> =
        serde_json::from_reader(BufReader::new(file)).context("Failed to parse balances file")?;

    let mut pairs = Vec::with_capacity(balances.len());
    for (account, amount) in &balances {
        let account: Address = account
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid account address {account}: {e}"))?;
        let amount =
            parse_amount(amount).with_context(|| format!("Invalid amount for {account}"))?;
        pairs.push((account, amount));
    }

    let distribution = build_distribution(&pairs)?;

    println!("accounts: {}", distribution.len());
    println!("token total: {}", distribution.token_total);
    println!("merkle root: {}", distribution.merkle_root);

    let out = File::create(&args.output).context("Failed to create output file")?;
    let mut writer = BufWriter::new(out);
    distribution.to_writer(&mut writer)?;
    writer.flush().context("Failed to write output file")?;

    println!("wrote {}", args.output.display());
    Ok(())
}

fn verify(args: &VerifyArgs) -> Result<()> {
    let file = File::open(&args.input).context("Failed to open distribution file")?;
    let distribution = Distribution::from_reader(BufReader::new(file))?;
    distribution.validate()?;

    println!("merkle root: {}", distribution.merkle_root);
    println!("{} claims verified", distribution.len());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build(args) => build(&args)?,
        Commands::Verify(args) => verify(&args)?,
    }

    Ok(())
}
