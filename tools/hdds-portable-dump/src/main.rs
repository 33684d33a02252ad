// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! hdds-portable-dump - Inspect, decode and produce portable scalar streams

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use hdds_portable::{
    CodecOptions, EndianPolicy, Endianness, PortableError, PortableReader, PortableWriter, Scalar,
    ScalarKind,
};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hdds-portable-dump")]
#[command(about = "Inspect and decode portable binary scalar streams")]
#[command(version)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report the stream flag and decode records
    Inspect {
        /// Input stream file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Record layout, e.g. "u32,f64,bool"
        #[arg(short, long)]
        layout: Option<String>,

        /// Number of records to decode (0 = until end of stream)
        #[arg(short = 'n', long, default_value = "0")]
        count: u64,

        /// Print the undecoded remainder as hex
        #[arg(long)]
        hex: bool,
    },

    /// Encode values into a portable stream
    Encode {
        /// Record layout, e.g. "u32,f64,bool"
        #[arg(short, long)]
        layout: String,

        /// Comma-separated values matching the layout (may repeat it)
        #[arg(short, long, allow_hyphen_values = true)]
        values: String,

        /// Output file
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Payload byte order: native, little, big
        #[arg(short, long, default_value = "native")]
        endianness: String,

        /// Codec options YAML (overrides --endianness)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

fn main() {
    // RUST_LOG=debug shows the codec's flag and swap decisions
    env_logger::init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let result = match cli.command {
        Commands::Inspect {
            input,
            layout,
            count,
            hex,
        } => cmd_inspect(&input, layout.as_deref(), count, hex),
        Commands::Encode {
            layout,
            values,
            output,
            endianness,
            config,
        } => cmd_encode(&layout, &values, &output, &endianness, config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn parse_layout(layout: &str) -> anyhow::Result<Vec<ScalarKind>> {
    let kinds = layout
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.parse::<ScalarKind>().map_err(anyhow::Error::msg))
        .collect::<anyhow::Result<Vec<_>>>()?;
    if kinds.is_empty() {
        anyhow::bail!("Layout is empty");
    }
    Ok(kinds)
}

fn parse_policy(s: &str) -> anyhow::Result<EndianPolicy> {
    match s.to_lowercase().as_str() {
        "native" | "n" => Ok(EndianPolicy::Native),
        "little" | "le" => Ok(EndianPolicy::Little),
        "big" | "be" => Ok(EndianPolicy::Big),
        _ => anyhow::bail!("Unknown endianness: {}", s),
    }
}

fn parse_scalar(kind: ScalarKind, text: &str) -> anyhow::Result<Scalar> {
    let text = text.trim();
    let value = match kind {
        ScalarKind::Bool => Scalar::Bool(match text {
            "true" | "1" => true,
            "false" | "0" => false,
            _ => anyhow::bail!("Invalid bool: {}", text),
        }),
        ScalarKind::U8 => Scalar::U8(text.parse()?),
        ScalarKind::I8 => Scalar::I8(text.parse()?),
        ScalarKind::U16 => Scalar::U16(text.parse()?),
        ScalarKind::I16 => Scalar::I16(text.parse()?),
        ScalarKind::U32 => Scalar::U32(text.parse()?),
        ScalarKind::I32 => Scalar::I32(text.parse()?),
        ScalarKind::U64 => Scalar::U64(text.parse()?),
        ScalarKind::I64 => Scalar::I64(text.parse()?),
        ScalarKind::F32 => Scalar::F32(text.parse()?),
        ScalarKind::F64 => Scalar::F64(text.parse()?),
    };
    Ok(value)
}

fn open_input(path: &Path) -> anyhow::Result<Box<dyn Read>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

fn cmd_inspect(input: &Path, layout: Option<&str>, count: u64, hex: bool) -> anyhow::Result<()> {
    let kinds = layout.map(parse_layout).transpose()?;
    let mut reader = PortableReader::new(open_input(input)?)
        .with_context(|| format!("Failed to read stream header from {}", input.display()))?;

    let declared = reader.declared_endianness();
    println!(
        "{} flag={} declared={} host={} swap={}",
        ">>>".green().bold(),
        declared.flag(),
        declared.to_string().cyan(),
        Endianness::native(),
        if reader.must_swap() {
            "yes".yellow()
        } else {
            "no".normal()
        }
    );

    if let Some(kinds) = kinds {
        let records = decode_records(&mut reader, &kinds, count)?;
        eprintln!("{} Decoded {} record(s)", "---".dimmed(), records);
    }

    if hex {
        let offset = reader.bytes_read();
        let mut rest = Vec::new();
        reader
            .into_inner()
            .read_to_end(&mut rest)
            .context("Failed to read stream remainder")?;
        print_hex(offset, &rest);
    }

    Ok(())
}

fn decode_records<R: Read>(
    reader: &mut PortableReader<R>,
    kinds: &[ScalarKind],
    count: u64,
) -> anyhow::Result<u64> {
    let mut records = 0;
    while count == 0 || records < count {
        let mut fields = Vec::with_capacity(kinds.len());
        for (i, &kind) in kinds.iter().enumerate() {
            match reader.read_scalar(kind) {
                Ok(value) => fields.push(format!("{}={}", kind.to_string().dimmed(), value)),
                // Clean end of stream on a record boundary
                Err(PortableError::StreamExhausted { available: 0, .. })
                    if i == 0 && count == 0 =>
                {
                    return Ok(records);
                }
                Err(e) => {
                    return Err(e).with_context(|| {
                        format!("Record #{} field {} ({})", records + 1, i, kind)
                    })
                }
            }
        }
        records += 1;
        println!("{} {}", format!("#{}", records).yellow(), fields.join(" "));
    }
    Ok(records)
}

fn print_hex(offset: u64, bytes: &[u8]) {
    for (i, chunk) in bytes.chunks(16).enumerate() {
        let hex: Vec<String> = chunk.iter().map(|b| format!("{:02x}", b)).collect();
        println!(
            "{}  {}",
            format!("{:08x}", offset + (i * 16) as u64).dimmed(),
            hex.join(" ")
        );
    }
}

fn cmd_encode(
    layout: &str,
    values: &str,
    output: &Path,
    endianness: &str,
    config: Option<&Path>,
) -> anyhow::Result<()> {
    let kinds = parse_layout(layout)?;
    let options = match config {
        Some(path) => CodecOptions::load_yaml(path)?,
        None => CodecOptions::new().with_endianness(parse_policy(endianness)?),
    };

    let texts: Vec<&str> = values.split(',').collect();
    if texts.len() % kinds.len() != 0 {
        anyhow::bail!(
            "{} value(s) do not fill whole records of {} field(s)",
            texts.len(),
            kinds.len()
        );
    }

    let file =
        File::create(output).with_context(|| format!("Failed to create {}", output.display()))?;
    let mut writer = PortableWriter::with_options(BufWriter::new(file), options)?;
    for (text, &kind) in texts.iter().zip(kinds.iter().cycle()) {
        let value = parse_scalar(kind, text).with_context(|| format!("Invalid {}", kind))?;
        writer.write_scalar(value)?;
    }
    writer.flush()?;

    println!(
        "{} Wrote {} bytes ({} record(s), {}) to {}",
        ">>>".green().bold(),
        writer.bytes_written(),
        texts.len() / kinds.len(),
        writer.endianness(),
        output.display()
    );
    Ok(())
}
