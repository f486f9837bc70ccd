use anyhow::Context;
use clap::Parser;
use log::debug;
use std::ffi::{OsStr, OsString};
use std::io::{self, Write};

/// Print the normalized argument vector of this invocation.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Tokenize RAW as a command line and print its arguments instead.
    #[arg(short, long, value_name = "RAW")]
    split: Option<String>,

    /// Print the vector as one shell-quoted line (non-UTF-8 bytes are replaced).
    #[arg(short, long)]
    quote: bool,

    /// Prefix each argument with its index.
    #[arg(short, long, conflicts_with = "quote")]
    numbered: bool,

    /// Terminate entries with NUL instead of newline.
    #[arg(short = 'z', long)]
    null: bool,

    /// Anything else; it is part of the printed vector.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<OsString>,
}

#[cfg(unix)]
fn write_arg<W: Write>(out: &mut W, arg: &OsStr) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;
    out.write_all(arg.as_bytes())
}

#[cfg(not(unix))]
fn write_arg<W: Write>(out: &mut W, arg: &OsStr) -> io::Result<()> {
    out.write_all(arg.to_string_lossy().as_bytes())
}

fn write_vector<W: Write>(out: &mut W, vector: &[OsString], args: &Args) -> io::Result<()> {
    let terminator = if args.null { '\0' } else { '\n' };

    if args.quote {
        let line = argvnorm::join(vector.iter().map(|arg| arg.to_string_lossy()));
        return write!(out, "{}{}", line, terminator);
    }

    for (i, arg) in vector.iter().enumerate() {
        if args.numbered {
            write!(out, "{:>3}  ", i)?;
        }
        write_arg(out, arg)?;
        write!(out, "{}", terminator)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let argv = argvnorm::get_main_args();
    let args = Args::parse_from(&argv);
    debug!("{} trailing arguments", args.rest.len());

    let vector: Vec<OsString> = match &args.split {
        Some(raw) => match argvnorm::tokenize(raw) {
            Ok(tokens) => tokens.into_iter().map(OsString::from).collect(),
            Err(e) => argvnorm::fail(&e),
        },
        None => argv,
    };

    let mut stdout = io::stdout().lock();
    write_vector(&mut stdout, &vector, &args).context("writing to stdout")?;
    stdout.flush().context("flushing stdout")?;
    Ok(())
}
