use std::process::ExitCode;

use anyhow::{anyhow, bail, Context, Result};
use blip_bytes::codec::decode::{batch::batch_len, decode_batch};
use blip_bytes::{next_after, PrimitiveType, Value};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Inspect the fixed-width big-endian primitive layout.
#[derive(Debug, Parser)]
#[command(name = "blip-bytes", version, about)]
struct Cli {
    /// Log rejected calls and intermediate values.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encode a value and print its bytes as hex.
    Encode {
        /// boolean, byte, char, short, int, float, long, double or text
        #[arg(value_name = "TYPE")]
        ty: PrimitiveType,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Decode hex bytes as a value.
    Decode {
        #[arg(value_name = "TYPE")]
        ty: PrimitiveType,
        hex: String,
        #[arg(long, default_value_t = 0)]
        offset: usize,
        /// Defaults to the type width, or the rest of the input for text.
        #[arg(long)]
        length: Option<usize>,
        /// Decode the whole input as consecutive values.
        #[arg(long, conflicts_with_all = ["offset", "length"])]
        all: bool,
    },
    /// Print the character after CHAR, the exclusive bound of a prefix scan.
    NextAfter { c: char },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> Result<Vec<String>> {
    match command {
        Command::Encode { ty, value } => {
            let value = parse_value(ty, &value)
                .with_context(|| format!("cannot parse {value:?} as {ty}"))?;
            debug!(?value, "encoding");
            Ok(vec![hex::encode(value.to_bytes())])
        }
        Command::Decode {
            ty,
            hex,
            offset,
            length,
            all,
        } => {
            let bytes = parse_hex(&hex)?;
            if all {
                return decode_all(ty, &bytes);
            }
            let length = match (length, ty.width()) {
                (Some(length), _) => length,
                (None, Some(width)) => width,
                (None, None) => bytes.len().saturating_sub(offset),
            };
            let value = Value::decode(ty, &bytes, offset, length)
                .with_context(|| format!("cannot decode {ty} at offset {offset}"))?;
            Ok(vec![render(&value)])
        }
        Command::NextAfter { c } => {
            let next = next_after(c).ok_or_else(|| anyhow!("no character follows U+{:04X}", c as u32))?;
            Ok(vec![format!("{next} U+{:04X}", next as u32)])
        }
    }
}

fn decode_all(ty: PrimitiveType, bytes: &[u8]) -> Result<Vec<String>> {
    let values: Vec<Value> = match ty {
        PrimitiveType::Boolean => batch::<bool>(bytes)?.into_iter().map(Value::Boolean).collect(),
        PrimitiveType::Byte => batch::<i8>(bytes)?.into_iter().map(Value::Byte).collect(),
        PrimitiveType::Char => batch::<u16>(bytes)?.into_iter().map(Value::Char).collect(),
        PrimitiveType::Short => batch::<i16>(bytes)?.into_iter().map(Value::Short).collect(),
        PrimitiveType::Int => batch::<i32>(bytes)?.into_iter().map(Value::Int).collect(),
        PrimitiveType::Float => batch::<f32>(bytes)?.into_iter().map(Value::Float).collect(),
        PrimitiveType::Long => batch::<i64>(bytes)?.into_iter().map(Value::Long).collect(),
        PrimitiveType::Double => batch::<f64>(bytes)?.into_iter().map(Value::Double).collect(),
        PrimitiveType::Text => bail!("text has no fixed width; use --length instead of --all"),
    };
    Ok(values.iter().map(render).collect())
}

fn batch<T: blip_bytes::Primitive>(bytes: &[u8]) -> Result<Vec<T>> {
    let count = batch_len::<T>(bytes).context("input is not a whole number of values")?;
    Ok(decode_batch::<T>(bytes, count)?)
}

fn parse_value(ty: PrimitiveType, raw: &str) -> Result<Value> {
    Ok(match ty {
        PrimitiveType::Boolean => Value::Boolean(raw.parse()?),
        PrimitiveType::Byte => Value::Byte(raw.parse()?),
        PrimitiveType::Char => {
            let mut chars = raw.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                bail!("expected exactly one character");
            };
            let code_unit = u16::try_from(c as u32)
                .map_err(|_| anyhow!("U+{:X} does not fit in one UTF-16 code unit", c as u32))?;
            Value::Char(code_unit)
        }
        PrimitiveType::Short => Value::Short(raw.parse()?),
        PrimitiveType::Int => Value::Int(raw.parse()?),
        PrimitiveType::Float => Value::Float(raw.parse()?),
        PrimitiveType::Long => Value::Long(raw.parse()?),
        PrimitiveType::Double => Value::Double(raw.parse()?),
        PrimitiveType::Text => Value::Text(raw.to_string()),
    })
}

fn parse_hex(raw: &str) -> Result<Vec<u8>> {
    let digits: String = raw
        .trim_start_matches("0x")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    hex::decode(&digits).with_context(|| format!("invalid hex input {raw:?}"))
}

fn render(value: &Value) -> String {
    match value {
        Value::Boolean(v) => v.to_string(),
        Value::Byte(v) => v.to_string(),
        Value::Char(v) => match char::from_u32(u32::from(*v)) {
            Some(c) => format!("{c} U+{v:04X}"),
            None => format!("U+{v:04X} (unpaired surrogate)"),
        },
        Value::Short(v) => v.to_string(),
        Value::Int(v) => v.to_string(),
        Value::Float(v) => format!("{v:?} bits=0x{:08x}", v.to_bits()),
        Value::Long(v) => v.to_string(),
        Value::Double(v) => format!("{v:?} bits=0x{:016x}", v.to_bits()),
        Value::Text(v) => v.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<Vec<String>> {
        let mut argv = vec!["blip-bytes"];
        argv.extend_from_slice(args);
        run(Cli::try_parse_from(argv)?.command)
    }

    #[test]
    fn test_encode_commands() {
        assert_eq!(run_args(&["encode", "int", "1"]).unwrap(), vec!["00000001"]);
        assert_eq!(run_args(&["encode", "long", "-1"]).unwrap(), vec!["ffffffffffffffff"]);
        assert_eq!(run_args(&["encode", "double", "NaN"]).unwrap(), vec!["7ff8000000000000"]);
        assert_eq!(run_args(&["encode", "char", "á"]).unwrap(), vec!["00e1"]);
        assert_eq!(run_args(&["encode", "text", "a:b"]).unwrap(), vec!["613a62"]);
        assert!(run_args(&["encode", "int", "x"]).is_err());
        assert!(run_args(&["encode", "char", "ab"]).is_err());
        assert!(run_args(&["encode", "uuid", "1"]).is_err());
    }

    #[test]
    fn test_decode_commands() {
        assert_eq!(run_args(&["decode", "int", "ffffffff"]).unwrap(), vec!["-1"]);
        assert_eq!(
            run_args(&["decode", "float", "0x3f800000"]).unwrap(),
            vec!["1.0 bits=0x3f800000"]
        );
        assert_eq!(
            run_args(&["decode", "short", "aa:00:2a", "--offset", "1"]).unwrap(),
            vec!["42"]
        );
        assert_eq!(
            run_args(&["decode", "text", "613a62", "--offset", "2"]).unwrap(),
            vec!["b"]
        );
        assert_eq!(
            run_args(&["decode", "int", "0000000100000002", "--all"]).unwrap(),
            vec!["1", "2"]
        );
    }

    #[test]
    fn test_decode_errors_keep_cause() {
        let err = run_args(&["decode", "long", "000000", "--length", "3"]).unwrap_err();
        assert!(format!("{err:#}").contains("Wrong length: 3, expected 8"));

        let err = run_args(&["decode", "int", "00000000", "--offset", "2"]).unwrap_err();
        assert!(format!("{err:#}").contains("exceed the capacity of the array: 4"));

        assert!(run_args(&["decode", "int", "000000", "--all"]).is_err());
        assert!(run_args(&["decode", "text", "00", "--all"]).is_err());
        assert!(run_args(&["decode", "int", "zz"]).is_err());
    }

    #[test]
    fn test_next_after_command() {
        assert_eq!(run_args(&["next-after", ":"]).unwrap(), vec!["; U+003B"]);
        assert!(run_args(&["next-after", "\u{10FFFF}"]).is_err());
    }
}
