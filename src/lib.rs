//! Produces a process's command-line arguments as an ordered vector of strings,
//! whether the platform hands them over already split or as one raw line.

pub mod error;
pub mod parser;
pub mod quote;
pub mod source;

pub use error::{ArgsError, QuoteKind, Result};
pub use parser::tokenize;
pub use quote::{join, quote};
pub use source::{
    ArgumentSource, NativeSplitSource, PlatformSource, RawStringSource, fail, get_main_args,
    main_args_from, program_name, try_main_args,
};
