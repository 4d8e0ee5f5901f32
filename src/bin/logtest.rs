//! Multi-threaded logging stress harness
//!
//! Spawns N producer threads each writing M info lines through the
//! process-wide logger, with stdout mirroring off, and reports elapsed
//! time and the expected line count for verification.

use std::process::ExitCode;
use std::time::Instant;
use tslog::core::{LogLevel, LoggerConfig};
use tslog::global;

struct TestConfig {
    threads: usize,
    lines: usize,
    output_file: String,
    level: LogLevel,
    help: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            threads: 8,
            lines: 100_000,
            output_file: "logs/test.log".to_string(),
            level: LogLevel::Info,
            help: false,
        }
    }
}

fn print_usage(program_name: &str) {
    println!(
        "Usage: {} [options]\n\
         Options:\n\
         \x20 --threads N     Number of threads (default: 8)\n\
         \x20 --lines M       Lines per thread (default: 100000)\n\
         \x20 --out PATH      Output file (default: logs/test.log)\n\
         \x20 --level LEVEL   Log level (default: info)\n\
         \x20 --help          Show this help",
        program_name
    );
}

fn parse_args(args: &[String]) -> Result<TestConfig, String> {
    let mut config = TestConfig::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" => config.help = true,
            "--threads" => {
                let value = iter.next().ok_or("--threads requires a value")?;
                config.threads = value
                    .parse()
                    .map_err(|_| format!("invalid thread count: {}", value))?;
            }
            "--lines" => {
                let value = iter.next().ok_or("--lines requires a value")?;
                config.lines = value
                    .parse()
                    .map_err(|_| format!("invalid line count: {}", value))?;
            }
            "--out" => {
                config.output_file = iter.next().ok_or("--out requires a value")?.clone();
            }
            "--level" => {
                let value = iter.next().ok_or("--level requires a value")?;
                config.level = value
                    .parse()
                    .map_err(|_| format!("invalid log level: {}", value))?;
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(config)
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let config = match parse_args(&args[1..]) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}", message);
            print_usage(&args[0]);
            return ExitCode::FAILURE;
        }
    };

    if config.help {
        print_usage(&args[0]);
        return ExitCode::SUCCESS;
    }

    println!(
        "Starting log test with {} threads, {} lines each, output: {}",
        config.threads, config.lines, config.output_file
    );

    // Mirroring every line to stdout would dominate the measurement
    global::init(
        LoggerConfig::new(&config.output_file)
            .with_level(config.level)
            .with_stdout(false),
    );

    let start = Instant::now();

    let handles: Vec<_> = (0..config.threads)
        .map(|thread_id| {
            let lines = config.lines;
            std::thread::spawn(move || {
                for i in 0..lines {
                    global::info(format!("thread={} line={}", thread_id, i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("producer thread panicked");
    }

    global::shutdown();
    let elapsed = start.elapsed();

    let expected_lines = config.threads * config.lines;
    println!("Test completed in {}ms", elapsed.as_millis());
    println!("Expected lines: {}", expected_lines);
    println!(
        "Check the log file for verification: {}",
        config.output_file
    );

    ExitCode::SUCCESS
}
