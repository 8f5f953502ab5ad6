use crate::{Options, repair_recipe};
use std::env;
use std::fs;
use std::io::{self, Read, Write};

fn print_help(program: &str) {
    eprintln!(
        "Usage: {prog} [OPTIONS] [INPUT]\n\
         \n\
         INPUT: optional input file with raw model output. When omitted, reads from stdin.\n\
         \n\
         Options:\n\
           -o, --output FILE          Write the canonical record to FILE (default stdout)\n\
           -t, --fallback-title TEXT  Title used when none can be recovered (default 未命名菜谱)\n\
               --pretty               Pretty-print the output record\n\
               --warnings             Print repair diagnostics to stderr\n\
               --raw-limit N          Max characters of raw text echoed in failure reports\n\
           -h, --help                 Show this help\n",
        prog = program
    );
}

struct CliMode {
    input: Option<String>,
    output: Option<String>,
    fallback_title: String,
    pretty: bool,
    warnings: bool,
}

fn parse_args() -> (Options, CliMode) {
    let mut args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "recipemend".to_string());
    args.remove(0);

    let mut opts = Options::default();
    let mut mode = CliMode {
        input: None,
        output: None,
        fallback_title: "未命名菜谱".to_string(),
        pretty: false,
        warnings: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help(&program);
                std::process::exit(0);
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing FILE for --output");
                    std::process::exit(2);
                }
                mode.output = Some(args[i].clone());
            }
            "-t" | "--fallback-title" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing TEXT for --fallback-title");
                    std::process::exit(2);
                }
                mode.fallback_title = args[i].clone();
            }
            "--pretty" => {
                mode.pretty = true;
            }
            "--warnings" => {
                mode.warnings = true;
            }
            "--raw-limit" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing N for --raw-limit");
                    std::process::exit(2);
                }
                opts.raw_text_limit = args[i].parse().unwrap_or(opts.raw_text_limit);
            }
            other => {
                if other.starts_with('-') {
                    eprintln!("Unknown option: {}", other);
                    print_help(&program);
                    std::process::exit(2);
                }
                mode.input = Some(other.to_string());
            }
        }
        i += 1;
    }
    (opts, mode)
}

pub fn run() -> i32 {
    let (opts, mode) = parse_args();

    let raw = match &mode.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Failed to read {}: {}", path, e);
                return 2;
            }
        },
        None => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("Failed to read stdin: {}", e);
                return 2;
            }
            buf
        }
    };

    match repair_recipe(&raw, &mode.fallback_title, &opts) {
        Ok(repaired) => {
            if mode.warnings {
                for w in &repaired.warnings {
                    eprintln!("warning[{}]: {}", w.stage, w.message);
                }
            }
            let out = if mode.pretty {
                serde_json::to_string_pretty(&repaired.record)
            } else {
                serde_json::to_string(&repaired.record)
            };
            let out = match out {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Failed to serialize record: {}", e);
                    return 2;
                }
            };
            match &mode.output {
                Some(path) => {
                    if let Err(e) = fs::write(path, out + "\n") {
                        eprintln!("Failed to write {}: {}", path, e);
                        return 2;
                    }
                }
                None => {
                    let stdout = io::stdout();
                    let mut h = stdout.lock();
                    let _ = h.write_all(out.as_bytes());
                    let _ = h.write_all(b"\n");
                }
            }
            0
        }
        Err(failure) => {
            let report = serde_json::to_string_pretty(&failure)
                .unwrap_or_else(|_| failure.message.clone());
            eprintln!("{}", report);
            1
        }
    }
}
