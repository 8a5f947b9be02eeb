use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;

use tricore_lift::disasm::{render, Token};
use tricore_lift::{IlTrace, IsaVariant, TriCore};

use tricore_disasm::{analyze_entries, build_report, load_raw_bin, window, Block, EdgeOut, FunctionOut, Image};

#[derive(Parser, Debug)]
#[command(author, version, about = "TriCore disassembler CLI", long_about=None)]
struct Cli {
    /// Load address for the binary in target address space
    #[arg(long, default_value_t = 0u32)]
    base: u32,
    /// Skip N bytes at start of file before loading
    #[arg(long, default_value_t = 0usize)]
    skip: usize,
    /// Instruction set revision
    #[arg(long, value_enum, default_value_t = IsaVariant::V16)]
    isa: IsaVariant,
    /// Input binary path
    #[arg(value_name = "BINFILE")]
    input: String,
    /// Limit bytes loaded (default: to EOF after --skip)
    #[arg(long)]
    len: Option<usize>,
    /// Subcommand
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List loaded segments (simple single-segment for raw .bin)
    Sections,
    /// Disassemble a range [start, end) in bytes
    Range {
        /// Start address (hex or dec)
        start: String,
        /// End address (hex or dec, exclusive)
        end: String,
        /// Show instruction bytes
        #[arg(long)]
        show_bytes: bool,
        /// Output format: text or json (token streams)
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<String>,
    },
    /// Lift a range [start, end) to IL
    Lift {
        start: String,
        end: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        #[arg(long, value_name = "FILE")]
        out: Option<String>,
    },
    /// Analyze code graph from entry points
    Analyze {
        /// Entry addresses (hex or dec). Repeat flag to add multiple entries.
        #[arg(long = "entry", value_name = "ADDR", num_args = 1.., required = false)]
        entries: Vec<String>,
        /// Maximum instructions to decode before stopping
        #[arg(long, default_value_t = 100_000usize)]
        max_instr: usize,
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Emit a linear disassembly listing of analyzed code (text format only)
        #[arg(long)]
        listing: bool,
        /// Show instruction bytes in listing
        #[arg(long)]
        show_bytes: bool,
        /// Import labels from JSON (Vec<{ addr, name }>)
        #[arg(long, value_name = "FILE")]
        labels_in: Option<String>,
        /// Export labels to JSON (Vec<{ addr, name }>)
        #[arg(long, value_name = "FILE")]
        labels_out: Option<String>,
        /// Write analysis output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<String>,
    },
}

fn parse_u32(s: &str) -> Result<u32> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Ok(u32::from_str_radix(hex, 16)?)
    } else {
        Ok(s.parse::<u32>()?)
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat { Text, Json }

#[derive(Debug, Clone, serde::Serialize)]
struct BlockOut { start: u32, end: u32, insns: Vec<String> }

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct LabelKV { addr: u32, name: String }

#[derive(Debug, Clone, serde::Serialize)]
struct ReportWithLabels {
    entries: Vec<u32>,
    blocks: Vec<BlockOut>,
    edges: Vec<EdgeOut>,
    functions: Vec<FunctionOut>,
    labels: Vec<LabelKV>,
}

#[derive(Debug, Clone, serde::Serialize)]
struct TokenLine { addr: u32, len: u8, tokens: Vec<Token> }

#[derive(Debug, Clone, serde::Serialize)]
struct LiftedLine { addr: u32, len: u8, il: IlTrace }

/// One listing line: `addr: [bytes]  text`, or `.byte`/`.half` on failure.
/// Returns the line and the number of bytes consumed.
fn disasm_line(cpu: &TriCore, img: &Image, pc: u32, show_bytes: bool) -> Option<(String, u8)> {
    let bytes = window(img, pc, TriCore::MAX_INSTRUCTION_LENGTH);
    if bytes.is_empty() {
        return None;
    }
    let mut line = format!("{pc:#010x}: ");
    let (len, text) = match cpu.render_text(bytes, pc) {
        Ok((len, tokens)) => (len, render(&tokens)),
        Err(invalid) => {
            tracing::debug!(pc, %invalid, "undecodable bytes");
            let len = invalid.length.min(bytes.len() as u8).max(1);
            (len, format!(".byte {}", hex_bytes(&bytes[..len as usize]).trim_end()))
        }
    };
    if show_bytes {
        let _ = write!(line, "{:<12} ", hex_bytes(&bytes[..(len as usize).min(bytes.len())]));
    }
    line.push_str(&text);
    Some((line, len))
}

fn hex_bytes(bytes: &[u8]) -> String {
    bytes.iter().fold(String::new(), |mut s, b| {
        let _ = write!(s, "{b:02x} ");
        s
    })
}

fn emit(out: Option<String>, text: String) -> Result<()> {
    match out {
        Some(path) => std::fs::write(path, text)?,
        None => print!("{text}"),
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let img = load_raw_bin(Path::new(&cli.input), cli.base, cli.skip, cli.len)?;
    let cpu = TriCore::with_variant(cli.isa);

    match cli.cmd {
        Command::Sections => {
            println!("{:<10} {:<12} {:<12} {:<6} {:<6}", "name", "start", "end", "perms", "kind");
            for s in &img.segments {
                println!(
                    "{:<10} {:#010x}   {:#010x}   {:<6} {:<6}",
                    s.name, s.base, s.end(), s.perms, s.kind
                );
            }
        }
        Command::Range { start, end, show_bytes, format, out } => {
            let start = parse_u32(&start)?;
            let end = parse_u32(&end)?;
            anyhow::ensure!(end >= start, "end must be >= start");

            let mut pc = start;
            match format {
                OutputFormat::Text => {
                    let mut buf = String::new();
                    while pc < end {
                        let Some((line, len)) = disasm_line(&cpu, &img, pc, show_bytes) else {
                            let _ = writeln!(buf, "{pc:#010x}: <oob>");
                            break;
                        };
                        let _ = writeln!(buf, "{line}");
                        pc = pc.wrapping_add(len as u32);
                    }
                    emit(out, buf)?;
                }
                OutputFormat::Json => {
                    let mut lines = Vec::new();
                    while pc < end {
                        let bytes = window(&img, pc, TriCore::MAX_INSTRUCTION_LENGTH);
                        if bytes.is_empty() { break; }
                        match cpu.render_text(bytes, pc) {
                            Ok((len, tokens)) => {
                                lines.push(TokenLine { addr: pc, len, tokens });
                                pc = pc.wrapping_add(len as u32);
                            }
                            Err(invalid) => pc = pc.wrapping_add(invalid.length.max(1) as u32),
                        }
                    }
                    emit(out, serde_json::to_string_pretty(&lines)? + "\n")?;
                }
            }
        }
        Command::Lift { start, end, format, out } => {
            let start = parse_u32(&start)?;
            let end = parse_u32(&end)?;
            anyhow::ensure!(end >= start, "end must be >= start");

            let mut pc = start;
            let mut lifted = Vec::new();
            while pc < end {
                let bytes = window(&img, pc, TriCore::MAX_INSTRUCTION_LENGTH);
                if bytes.is_empty() { break; }
                let mut il = IlTrace::new();
                match cpu.lift(bytes, pc, &mut il) {
                    Ok(len) => {
                        lifted.push(LiftedLine { addr: pc, len, il });
                        pc = pc.wrapping_add(len as u32);
                    }
                    Err(invalid) => {
                        tracing::warn!(pc, %invalid, "cannot lift");
                        pc = pc.wrapping_add(invalid.length.max(1) as u32);
                    }
                }
            }
            let text = match format {
                OutputFormat::Json => serde_json::to_string_pretty(&lifted)? + "\n",
                OutputFormat::Text => lifted.iter().fold(String::new(), |mut buf, l| {
                    let _ = writeln!(buf, "{:#010x}:", l.addr);
                    for stmt in &l.il.stmts {
                        let _ = writeln!(buf, "    {stmt}");
                    }
                    buf
                }),
            };
            emit(out, text)?;
        }
        Command::Analyze { entries, max_instr, format, listing, show_bytes, labels_in, labels_out, out } => {
            // default seed: start of first segment
            let mut seeds: Vec<u32> = if entries.is_empty() {
                img.segments.first().map(|s| s.base).into_iter().collect()
            } else {
                entries.iter().map(|e| parse_u32(e)).collect::<Result<_>>()?
            };
            seeds.sort_unstable();
            seeds.dedup();
            let analysis = analyze_entries(&cpu, &img, &seeds, max_instr);
            let report = build_report(&seeds, &analysis);

            // Prepare labels (imported or autogenerated)
            let mut labels: HashMap<u32, String> = HashMap::new();
            if let Some(path) = &labels_in {
                let txt = std::fs::read_to_string(path)?;
                for kv in serde_json::from_str::<Vec<LabelKV>>(&txt)? { labels.insert(kv.addr, kv.name); }
            }
            for f in &report.functions { labels.entry(f.entry).or_insert_with(|| format!("sub_{:08x}", f.entry)); }
            for b in &report.blocks { labels.entry(b.start).or_insert_with(|| format!("loc_{:08x}", b.start)); }
            let mut lbl_vec: Vec<LabelKV> = labels.iter().map(|(k, v)| LabelKV { addr: *k, name: v.clone() }).collect();
            lbl_vec.sort_by_key(|kv| kv.addr);
            if let Some(outp) = &labels_out {
                std::fs::write(outp, serde_json::to_string_pretty(&lbl_vec)?)?;
            }

            match format {
                OutputFormat::Json => {
                    let blocks = enrich_blocks(&cpu, &img, &report.blocks, show_bytes);
                    let full = ReportWithLabels {
                        entries: report.entries,
                        blocks,
                        edges: report.edges,
                        functions: report.functions,
                        labels: lbl_vec,
                    };
                    emit(out, serde_json::to_string_pretty(&full)? + "\n")?;
                }
                OutputFormat::Text => {
                    let mut buf = String::new();
                    let _ = writeln!(buf, "Analysis summary:");
                    let _ = writeln!(buf, "  entries   : {:?}", seeds.iter().map(|a| format!("{a:#010x}")).collect::<Vec<_>>());
                    let _ = writeln!(buf, "  insts     : {}", analysis.visited.len());
                    let _ = writeln!(buf, "  blocks    : {}", report.blocks.len());
                    let _ = writeln!(buf, "  edges     : {}", report.edges.len());
                    let _ = writeln!(buf, "  functions : {}", report.functions.len());
                    let _ = writeln!(buf, "Edges:");
                    for e in &report.edges {
                        let _ = writeln!(buf, "  {:#010x} -> {:#010x} ({})", e.from, e.to, e.kind);
                    }
                    if listing {
                        let mut pcs: Vec<u32> = analysis.widths.keys().copied().collect();
                        pcs.sort_unstable();
                        let _ = writeln!(buf, "\nListing (analyzed PCs):");
                        for pc in pcs {
                            if let Some(lbl) = labels.get(&pc) {
                                let _ = writeln!(buf, "{pc:#010x} <{lbl}>:");
                            }
                            if let Some((line, _)) = disasm_line(&cpu, &img, pc, show_bytes) {
                                let _ = writeln!(buf, "  {line}");
                            }
                        }
                    }
                    emit(out, buf)?;
                }
            }
        }
    }

    Ok(())
}

fn enrich_blocks(cpu: &TriCore, img: &Image, blocks: &[Block], show_bytes: bool) -> Vec<BlockOut> {
    blocks
        .iter()
        .map(|b| {
            let mut insns = Vec::new();
            let mut pc = b.start;
            while pc < b.end {
                let Some((line, len)) = disasm_line(cpu, img, pc, show_bytes) else { break };
                insns.push(line);
                pc = pc.wrapping_add(len as u32);
            }
            BlockOut { start: b.start, end: b.end, insns }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tricore_disasm::Segment;

    fn image(bytes: Vec<u8>) -> Image {
        Image { segments: vec![Segment { name: "s".into(), base: 0, bytes, perms: "r-x", kind: "raw" }] }
    }

    #[test]
    fn parse_u32_hex_and_dec() {
        assert_eq!(parse_u32("0x10").unwrap(), 0x10);
        assert_eq!(parse_u32("16").unwrap(), 16);
        assert!(parse_u32("zz").is_err());
    }

    #[test]
    fn range_disasm_decodes_simple() {
        // mov.u d0, #2
        let raw32 = (2u32 << 12) | 0xBBu32;
        let img = image(raw32.to_le_bytes().to_vec());
        let (line, len) = disasm_line(&TriCore::default(), &img, 0, true).unwrap();
        assert_eq!(len, 4);
        assert_eq!(line, "0x00000000: bb 20 00 00  mov.u d0, #2");
    }

    #[test]
    fn undecodable_bytes_become_data() {
        let img = image(vec![0x21, 0x00, 0x00, 0x00]);
        let (line, len) = disasm_line(&TriCore::default(), &img, 0, false).unwrap();
        assert_eq!(len, 4);
        assert!(line.ends_with(".byte 21 00 00 00"));
    }
}
