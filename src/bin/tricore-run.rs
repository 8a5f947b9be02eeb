use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tricore_lift::{ArchConfig, Cpu, IlExecutor, IsaVariant, LinearMemory, TriCore};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Run a raw TriCore image by lifting and evaluating each instruction"
)]
struct Opts {
    #[arg(long, value_enum, default_value_t = IsaVariant::V16)]
    isa: IsaVariant,
    /// Load address of the image.
    #[arg(long, value_parser = parse_u32, default_value = "0")]
    base: u32,
    /// Entry point; defaults to the load address.
    #[arg(short, long, value_parser = parse_u32)]
    entry: Option<u32>,
    /// Initial stack pointer (A10).
    #[arg(long, value_parser = parse_u32)]
    sp: Option<u32>,
    #[arg(long, default_value_t = 16 * 1024 * 1024)]
    mem_size: usize,
    #[arg(long, default_value_t = 10_000_000)]
    max_steps: u64,
    /// Print the final register state as JSON.
    #[arg(long)]
    dump: bool,
    #[arg(value_name = "BINFILE")]
    input: String,
}

fn parse_u32(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("{s}: {e}"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let mut mem = LinearMemory::at(opts.base, opts.mem_size);

    let bytes = std::fs::read(&opts.input).with_context(|| format!("reading {}", opts.input))?;
    mem.load(opts.base, &bytes)?;

    let cfg = ArchConfig { variant: opts.isa };
    let mut cpu = Cpu::new(cfg);
    cpu.reset(opts.entry.unwrap_or(opts.base));
    if let Some(sp) = opts.sp {
        cpu.a[10] = sp;
    }

    let dec = TriCore::new(cfg);
    let exec = IlExecutor;

    let mut steps = 0u64;
    while steps < opts.max_steps {
        if let Err(trap) = cpu.step(&mut mem, &dec, &exec) {
            tracing::warn!(pc = cpu.pc, steps, %trap, "stopped");
            break;
        }
        steps += 1;
    }
    tracing::info!(steps, pc = cpu.pc, "finished");

    if opts.dump {
        println!("{}", serde_json::to_string_pretty(&cpu)?);
    }
    Ok(())
}
