//! Resolve result codes from the command line.
//!
//! ```text
//! rescode-lookup 0x80004005 -2005270523
//! rescode-lookup --no-platform 0x887A0005
//! rescode-lookup --all
//! rescode-lookup --strict 0x80004005   # fails if no table describes the code
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG=debug` - Show provider registration / expansion
//! - `RESCODE_PLATFORM_LOOKUP=0` - Same as `--no-platform`
//! - `RESCODE_PRELOAD_BUNDLED=0` - Start without the bundled tables

use std::process::ExitCode;

use clap::Parser;
use rescode::{Descriptor, RegistryConfig, ResultCode, ResultRegistry};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "rescode-lookup", version, about = "Describe HRESULT-style result codes")]
struct Args {
    /// Codes to resolve: 0x-prefixed hex or signed/unsigned decimal
    #[arg(value_name = "CODE", allow_negative_numbers = true)]
    codes: Vec<String>,

    /// Skip the OS message table and only use the bundled tables
    #[arg(long)]
    no_platform: bool,

    /// Print every known descriptor
    #[arg(long)]
    all: bool,

    /// Fail for codes that only resolve to the Unknown module
    #[arg(long)]
    strict: bool,
}

/// Parse and describe one argument. The error is the message to print.
fn resolve(registry: &ResultRegistry, arg: &str, strict: bool) -> Result<Descriptor, String> {
    let code: ResultCode = arg.parse().map_err(|e| format!("{arg}: {e}"))?;
    let descriptor = registry.find(code);
    if strict && descriptor.is_unknown_module() {
        return Err(format!("{descriptor} (no registered table describes {code})"));
    }
    Ok(descriptor)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = RegistryConfig::from_env();
    if args.no_platform {
        config = config.platform_lookup(false);
    }
    let registry = ResultRegistry::new(config);

    if args.all {
        print!("{}", registry.dump_string());
    }

    let mut status = ExitCode::SUCCESS;
    for arg in &args.codes {
        match resolve(&registry, arg, args.strict) {
            Ok(descriptor) => println!("{descriptor}"),
            Err(msg) => {
                eprintln!("error: {msg}");
                status = ExitCode::FAILURE;
            }
        }
    }

    if args.codes.is_empty() && !args.all {
        eprintln!("no codes given (try --help)");
        status = ExitCode::from(2);
    }

    status
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ResultRegistry {
        ResultRegistry::new(RegistryConfig::new().platform_lookup(false))
    }

    #[test]
    fn resolves_bundled_code() {
        let d = resolve(&registry(), "0x80004005", true).unwrap();
        assert_eq!(d.api_code(), "E_FAIL");
    }

    #[test]
    fn negative_decimal_resolves() {
        let d = resolve(&registry(), "-2147467259", false).unwrap();
        assert_eq!(d.api_code(), "E_FAIL");
    }

    #[test]
    fn unparsable_reported_once() {
        let msg = resolve(&registry(), "0xZZ", false).unwrap_err();
        assert_eq!(msg, "0xZZ: invalid hexadecimal result code: 0xZZ");
    }

    #[test]
    fn unknown_allowed_unless_strict() {
        let registry = registry();
        let d = resolve(&registry, "0x81234567", false).unwrap();
        assert!(d.is_unknown_module());

        let msg = resolve(&registry, "0x81234567", true).unwrap_err();
        assert!(msg.contains("ApiCode: [Unknown]"));
        assert!(msg.ends_with("(no registered table describes 0x81234567)"));
    }
}
