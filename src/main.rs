use clap::Parser;
use std::io::Read;
use shell_scanner::logging::init_tracing;
use shell_scanner::render::{render_tokens, RenderOptions};
use shell_scanner::scanner::{scan, validate};

#[derive(Parser)]
#[command(name = "shell-scanner")]
#[command(about = "Split a shell-like command line into tokens")]
#[command(version)]
struct Cli {
    /// Scan the command line given as an argument
    #[arg(short = 'c')]
    input: Option<String>,

    /// Output tokens as JSON (kind, raw, value, escapedValue)
    #[arg(long = "json")]
    json: bool,

    /// Show raw spans, leading whitespace included
    #[arg(long = "raw")]
    raw: bool,

    /// Print the rebuilt command line instead of tokens
    #[arg(long = "escaped")]
    escaped: bool,

    /// Exit with status 1 if any input was not recognized
    #[arg(long = "strict")]
    strict: bool,

    /// File holding the command line to scan
    #[arg()]
    input_file: Option<String>,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    // Determine input source: -c, file, or stdin
    let input = if let Some(s) = cli.input {
        s
    } else if let Some(ref file) = cli.input_file {
        match std::fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error: Cannot read input file: {}: {}", file, e);
                std::process::exit(1);
            }
        }
    } else {
        use std::io::IsTerminal;
        if std::io::stdin().is_terminal() {
            eprintln!("Error: No input provided. Use -c 'input', provide a file, or pipe via stdin.");
            std::process::exit(1);
        }
        let mut buf = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
            eprintln!("Error: Cannot read stdin: {}", e);
            std::process::exit(1);
        }
        buf
    };

    let tokens = scan(&input);

    let options = RenderOptions {
        json: cli.json,
        raw: cli.raw,
        escaped: cli.escaped,
    };
    match render_tokens(&tokens, &options) {
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    if cli.strict {
        if let Err(e) = validate(&tokens) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
