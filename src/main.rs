//! CLI entry point for storyterm

use std::path::PathBuf;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "play" => {
            if args.len() < 3 {
                eprintln!("Error: Missing data directory path");
                eprintln!();
                print_usage();
                process::exit(1);
            }
            let data_dir = PathBuf::from(&args[2]);
            let skip_boot = args.get(3).map(|s| s == "--skip-boot").unwrap_or(false);
            run(data_dir, skip_boot);
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Error: Unknown command '{command}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    }
}

fn run(data_dir: PathBuf, skip_boot: bool) {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to start runtime: {e}");
            process::exit(1);
        }
    };
    if let Err(e) = runtime.block_on(storyterm::cli::run_play(data_dir, skip_boot)) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn print_usage() {
    println!("storyterm - Terminal Story Engine");
    println!();
    println!("USAGE:");
    println!("    storyterm play <data-dir> [--skip-boot]");
    println!();
    println!("COMMANDS:");
    println!("    play <data-dir> [--skip-boot]    Boot the engine against a data directory");
    println!("    --help, -h                       Show this help message");
    println!();
    println!("OPTIONS:");
    println!("    --skip-boot    Skip the boot message theater");
    println!();
    println!("EXAMPLES:");
    println!("    storyterm play data/");
    println!("    storyterm play data/ --skip-boot");
}
