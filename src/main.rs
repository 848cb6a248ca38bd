//! radix-conv - CLI Entry Point
//!
//! Commands:
//! - `radix-conv decode <input>` - Value of a number written in the base
//! - `radix-conv encode <value>` - Write a value in the base
//! - `radix-conv add <a> <b>` / `multiply <a> <b>` - Arithmetic in the base
//! - `radix-conv convert <input> --to <radix>` - Rewrite a number in another base
//!
//! The base is chosen with `--base`, `--digits` or `--config` (default: 10).

use clap::{Args, Parser, Subcommand};
use radix::{Base, BaseConfig, ConfigError, OverflowMode, load_config, save_config};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "radix-conv")]
#[command(version = "0.1.0")]
#[command(about = "Convert and compute with numbers in any positional base")]
struct Cli {
    #[command(flatten)]
    base: BaseArgs,

    /// Fail on 64-bit overflow instead of wrapping around
    #[arg(long, global = true)]
    checked: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Selects the base the command works in.
#[derive(Args, Debug)]
struct BaseArgs {
    /// Radix with implicit digits 0-9, A-Z (2 to 36)
    #[arg(short, long, global = true)]
    base: Option<u32>,

    /// Explicit digit symbols, lowest value first
    #[arg(short, long, global = true)]
    digits: Option<String>,

    /// JSON base definition file
    #[arg(short, long, global = true)]
    config: Option<String>,
}

impl BaseArgs {
    /// Turn the flags into a base definition. Base 10 if none is given.
    fn to_config(&self) -> Result<BaseConfig, ConfigError> {
        match (self.base, self.digits.as_deref(), self.config.as_deref()) {
            (None, None, None) => Ok(BaseConfig::with_radix(10)),
            (Some(radix), None, None) => Ok(BaseConfig::with_radix(radix)),
            (None, Some(digits), None) => Ok(BaseConfig::with_digits(digits)),
            (None, None, Some(path)) => load_config(path),
            _ => Err(ConfigError::Ambiguous),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value of a number written in the base
    Decode {
        /// Number in the base, most significant digit first
        input: String,
    },
    /// Write a value in the base
    Encode {
        /// Unsigned 64-bit value
        value: u64,
    },
    /// Add two numbers written in the base
    Add {
        a: String,
        b: String,
    },
    /// Multiply two numbers written in the base
    Multiply {
        a: String,
        b: String,
    },
    /// Rewrite a number from the base into another base
    Convert {
        /// Number in the source base
        input: String,
        /// Target radix with implicit digits
        #[arg(short, long)]
        to: Option<u32>,
        /// Target digit symbols
        #[arg(long)]
        to_digits: Option<String>,
    },
    /// Show the digit alphabet of the base
    Digits {
        /// Write the base definition to a JSON file
        #[arg(short, long)]
        save: Option<String>,
    },
    /// Run the built-in self-test
    Test,
}

/// Result of one operation, printed with `--json`.
#[derive(Serialize)]
struct Report<'a> {
    operation: &'a str,
    base: &'a Base,
    inputs: Vec<String>,
    result: String,
}

fn main() {
    let cli = Cli::parse();

    let mut config = match cli.base.to_config() {
        Ok(config) => config,
        Err(e) => fail("Invalid base", e),
    };
    if cli.checked {
        config.overflow = OverflowMode::Checked;
    }
    let base = match config.build() {
        Ok(base) => base,
        Err(e) => fail("Invalid base", e),
    };
    let mode = config.overflow;

    match cli.command {
        Some(Commands::Decode { input }) => {
            let value = mode.decode(&base, &input).unwrap_or_else(|e| fail("Decode error", e));
            report(cli.json, "decode", &base, vec![input], value.to_string());
        }
        Some(Commands::Encode { value }) => {
            let encoded = base.encode(value);
            report(cli.json, "encode", &base, vec![value.to_string()], encoded);
        }
        Some(Commands::Add { a, b }) => {
            let sum = mode.add(&base, &a, &b).unwrap_or_else(|e| fail("Addition error", e));
            report(cli.json, "add", &base, vec![a, b], sum);
        }
        Some(Commands::Multiply { a, b }) => {
            let product = mode.multiply(&base, &a, &b).unwrap_or_else(|e| fail("Multiplication error", e));
            report(cli.json, "multiply", &base, vec![a, b], product);
        }
        Some(Commands::Convert { input, to, to_digits }) => {
            convert(cli.json, &base, mode, input, to, to_digits);
        }
        Some(Commands::Digits { save }) => {
            show_digits(cli.json, &base, &config, save);
        }
        Some(Commands::Test) => {
            run_self_test();
        }
        None => {
            println!("radix-conv v0.1.0");
            println!("A positional numeral-base converter");
            println!();
            println!("Use --help for available commands");
            println!();
            demo_conversions();
        }
    }
}

/// Report a failure and exit.
fn fail(context: &str, error: impl std::fmt::Display) -> ! {
    eprintln!("❌ {}: {}", context, error);
    std::process::exit(1);
}

fn report(json: bool, operation: &str, base: &Base, inputs: Vec<String>, result: String) {
    if json {
        let report = Report { operation, base, inputs, result };
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => fail("Failed to render JSON", e),
        }
    } else {
        println!("{}", result);
    }
}

fn convert(json: bool, base: &Base, mode: OverflowMode, input: String, to: Option<u32>, to_digits: Option<String>) {
    let target_config = match (to, to_digits) {
        (Some(radix), None) => BaseConfig::with_radix(radix),
        (None, Some(digits)) => BaseConfig::with_digits(digits),
        (None, None) => BaseConfig::with_radix(10),
        (Some(_), Some(_)) => fail("Invalid target base", ConfigError::Ambiguous),
    };
    let target = match target_config.build() {
        Ok(target) => target,
        Err(e) => fail("Invalid target base", e),
    };

    let value = mode.decode(base, &input).unwrap_or_else(|e| fail("Decode error", e));
    let converted = target.encode(value);
    report(json, "convert", base, vec![input, target.digits().iter().collect()], converted);
}

fn show_digits(json: bool, base: &Base, config: &BaseConfig, save: Option<String>) {
    if json {
        match serde_json::to_string_pretty(config) {
            Ok(text) => println!("{}", text),
            Err(e) => fail("Failed to render JSON", e),
        }
    } else {
        println!("{}", base);
    }

    if let Some(path) = save {
        if let Err(e) = save_config(&path, config) {
            fail("Failed to save base definition", e);
        }
        println!("✓ Saved to {}", path);
    }
}

fn demo_conversions() {
    println!("━━━ Base Conversion Demo ━━━");
    println!();

    let hex = Base::hexadecimal();
    let binary = Base::binary();
    let decimal = Base::decimal();

    println!("Implicit digits:");
    for radix in [2, 8, 16, 36] {
        if let Ok(base) = Base::new(radix) {
            println!("  {}", base);
        }
    }
    println!();

    println!("Encoding 2026:");
    println!("  base 2:  {}", binary.encode(2026));
    println!("  base 10: {}", decimal.encode(2026));
    println!("  base 16: {}", hex.encode(2026));
    println!();

    println!("Hexadecimal arithmetic:");
    if let (Ok(sum), Ok(product)) = (hex.add("FF", "1"), hex.multiply("A", "A")) {
        println!("  FF + 1 = {}", sum);
        println!("  A × A  = {}", product);
    }
    println!();

    if let Ok(balanced) = Base::from_alphabet("-0+") {
        println!("Custom digits {}:", balanced);
        println!("  42 = {}", balanced.encode(42));
    }
    println!();

    println!("✓ Core conversions working!");
}

fn run_self_test() {
    println!("━━━ radix-conv Self-Test ━━━");
    println!();

    let mut passed = 0;
    let mut failed = 0;

    // Test 1: Alphabet sizes
    print!("Implicit alphabet sizes... ");
    let ok = (2..=36).all(|radix| Base::new(radix).map(|b| b.radix() == radix).unwrap_or(false));
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 2: Radix bounds
    print!("Radix bounds (1 and 37 rejected)... ");
    if Base::new(1).is_err() && Base::new(37).is_err() {
        println!("✓");
        passed += 1;
    } else {
        println!("✗");
        failed += 1;
    }

    // Test 3: Round trip
    print!("Conversion roundtrip... ");
    let ok = (2..=36).filter_map(|radix| Base::new(radix).ok()).all(|base| {
        [0u64, 1, 35, 36, 1_295, 1_296, 123_456_789, u64::MAX]
            .iter()
            .all(|&value| base.decode(&base.encode(value)) == Ok(value))
    });
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 4: Invalid digit
    print!("Invalid digit rejected... ");
    if Base::hexadecimal().decode("G").is_err() {
        println!("✓");
        passed += 1;
    } else {
        println!("✗");
        failed += 1;
    }

    // Test 5: Arithmetic
    print!("Hexadecimal add/multiply... ");
    let hex = Base::hexadecimal();
    match (hex.add("FF", "1"), hex.multiply("A", "A")) {
        (Ok(sum), Ok(product)) if sum == "100" && product == "64" => {
            println!("✓");
            passed += 1;
        }
        (sum, product) => {
            println!("✗ (got {:?} and {:?}, expected 100 and 64)", sum, product);
            failed += 1;
        }
    }

    // Test 6: Duplicate digits
    print!("Duplicate digits rejected... ");
    if Base::from_alphabet("0120").is_err() {
        println!("✓");
        passed += 1;
    } else {
        println!("✗");
        failed += 1;
    }

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Results: {} passed, {} failed", passed, failed);

    if failed == 0 {
        println!("✓ All tests passed!");
    } else {
        std::process::exit(1);
    }
}
