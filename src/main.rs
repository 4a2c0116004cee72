use anyhow::{bail, Result};
use sqlscan::{BareWords, Halt, Lexer, Options};

const USAGE: &str = "usage: sqlscan [--name <tag>] [--identifiers] <query>";

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Quiet unless RUST_LOG is set, e.g. RUST_LOG=sqlscan=trace
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> Result<()> {
    init_tracing();

    let mut name = String::from("sqlscan");
    let mut options = Options::new();
    let mut query = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--name" => match args.next() {
                Some(tag) => name = tag,
                None => bail!("Missing <tag> after --name\n{USAGE}"),
            },
            "--identifiers" => options = options.bare_words(BareWords::Identifier),
            flag if flag.starts_with("--") => bail!("Unknown option: {flag}\n{USAGE}"),
            _ if query.is_some() => bail!("Unexpected argument: {arg}\n{USAGE}"),
            _ => query = Some(arg),
        }
    }
    let Some(query) = query else {
        bail!("Missing <query>\n{USAGE}");
    };

    let mut lexer = Lexer::with_options(name, &query, options);
    loop {
        match lexer.pull() {
            Ok(token) => println!("{:?} {}", token.token_type, token),
            Err(Halt::EndOfInput(token)) => {
                println!("{:?} {}", token.token_type, token);
                break;
            }
            Err(halt @ Halt::Lexical(_)) => bail!(halt),
        }
    }

    Ok(())
}
