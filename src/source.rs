use std::env;
use std::ffi::OsString;
use std::path::Path;
use std::process;

use log::debug;

use crate::error::{ArgsError, Result};
use crate::parser::tokenize;

/// Where the invocation arguments come from.
///
/// Each platform compiles in exactly one implementation as [`PlatformSource`];
/// both are always available for building a vector from explicit input.
pub trait ArgumentSource {
    /// Consumes the source and produces the canonical argument vector.
    fn argument_vector(self) -> Result<Vec<OsString>>;

    /// Short name used in logs.
    fn describe(&self) -> &'static str;
}

/// Arguments the operating system has already split, passed through untouched.
#[derive(Debug, Clone)]
pub struct NativeSplitSource {
    args: Vec<OsString>,
}

impl NativeSplitSource {
    pub fn new<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Captures this process's arguments. Never fails; the `Result` matches the
    /// raw-string source so callers are the same on every platform.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(env::args_os()))
    }
}

impl ArgumentSource for NativeSplitSource {
    fn argument_vector(self) -> Result<Vec<OsString>> {
        Ok(self.args)
    }

    fn describe(&self) -> &'static str {
        "native split"
    }
}

/// A single unsplit command line, tokenized with shell quoting rules.
#[derive(Debug, Clone)]
pub struct RawStringSource {
    raw: String,
}

impl RawStringSource {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Fetches the command line exactly as the OS stored it at process creation.
    #[cfg(windows)]
    pub fn from_env() -> Result<Self> {
        win::raw_command_line().map(Self::new)
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl ArgumentSource for RawStringSource {
    fn argument_vector(self) -> Result<Vec<OsString>> {
        Ok(tokenize(&self.raw)?.into_iter().map(OsString::from).collect())
    }

    fn describe(&self) -> &'static str {
        "raw command line"
    }
}

#[cfg(windows)]
pub type PlatformSource = RawStringSource;

#[cfg(not(windows))]
pub type PlatformSource = NativeSplitSource;

#[cfg(windows)]
mod win {
    use std::io;

    use crate::error::{ArgsError, Result};

    #[link(name = "kernel32")]
    unsafe extern "system" {
        fn GetCommandLineW() -> *const u16;
    }

    pub(super) fn raw_command_line() -> Result<String> {
        // SAFETY: GetCommandLineW takes no arguments and returns either null or a
        // pointer to a NUL-terminated buffer owned by the process for its lifetime.
        let ptr = unsafe { GetCommandLineW() };
        if ptr.is_null() {
            return Err(ArgsError::RawCommandLineUnavailable(
                io::Error::last_os_error(),
            ));
        }

        let mut len = 0;
        // SAFETY: the buffer is NUL-terminated, so every read up to and
        // including the terminator is in bounds.
        while unsafe { *ptr.add(len) } != 0 {
            len += 1;
        }
        // SAFETY: `len` units were just read from the live buffer and it is never
        // freed or written while the process runs.
        let wide = unsafe { std::slice::from_raw_parts(ptr, len) };

        String::from_utf16(wide).map_err(|_| ArgsError::InvalidEncoding)
    }
}

/// Builds the argument vector from an explicit source.
pub fn main_args_from<S: ArgumentSource>(source: S) -> Result<Vec<OsString>> {
    let kind = source.describe();
    let args = source.argument_vector()?;
    debug!("{} source produced {} arguments", kind, args.len());
    Ok(args)
}

/// Returns this process's arguments, or the error that prevented building them.
///
/// Use this instead of [`get_main_args`] when the caller wants to decide what
/// a failure means.
pub fn try_main_args() -> Result<Vec<OsString>> {
    main_args_from(PlatformSource::from_env()?)
}

/// Returns this process's arguments in the same shape on every platform.
///
/// There is no usable fallback if they cannot be obtained, so this writes
/// `<program>: <error>` to stderr and exits with status 1.
pub fn get_main_args() -> Vec<OsString> {
    match try_main_args() {
        Ok(args) => args,
        Err(e) => fail(&e),
    }
}

/// Reports `err` for this program and exits with status 1.
pub fn fail(err: &ArgsError) -> ! {
    debug!("argument normalization failed: {:?}", err);
    eprintln!("{}: {}", program_name(), err);
    process::exit(1);
}

/// The name of the running executable, for diagnostics.
///
/// Read from the executable path rather than argv, which may be what failed.
pub fn program_name() -> String {
    env::current_exe()
        .ok()
        .as_deref()
        .and_then(Path::file_stem)
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}
