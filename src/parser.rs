use crate::error::{ArgsError, QuoteKind, Result};

/// Splits a raw command line into a vector of arguments.
///
/// This tokenizer handles:
/// - Single quotes (`'...'`): Preserves literal contents, no escapes at all.
/// - Double quotes (`"..."`): Preserves contents; only `\"` and `\\` are escapes.
/// - Unquoted text: Split on runs of whitespace; a backslash takes the next
///   character literally.
///
/// Quoted and unquoted segments with no whitespace between them form a single
/// argument, and a bare `""` or `''` yields an empty argument. An empty or
/// all-whitespace input yields an empty vector.
///
/// # Errors
/// Returns [`ArgsError::MalformedQuoting`] if a quoted region is never closed.
///
/// # Example
/// ```
/// let args = argvnorm::tokenize("mlr --icsv 'then chain' a\"b c\"d").unwrap();
/// assert_eq!(args, vec!["mlr", "--icsv", "then chain", "ab cd"]);
/// ```
pub fn tokenize(input: &str) -> Result<Vec<String>> {
    let mut args = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(_, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let mut arg = String::new();

        loop {
            match chars.peek() {
                Some(&(offset, '\'')) => {
                    chars.next(); // Consume opening '
                    loop {
                        match chars.next() {
                            Some((_, '\'')) => break,
                            Some((_, c)) => arg.push(c),
                            None => {
                                return Err(ArgsError::malformed_quoting(QuoteKind::Single, offset));
                            }
                        }
                    }
                }
                Some(&(offset, '"')) => {
                    chars.next(); // Consume opening "
                    loop {
                        match chars.next() {
                            Some((_, '"')) => break,
                            Some((_, '\\')) => match chars.peek() {
                                Some(&(_, next @ ('"' | '\\'))) => {
                                    arg.push(next);
                                    chars.next();
                                }
                                _ => arg.push('\\'),
                            },
                            Some((_, c)) => arg.push(c),
                            None => {
                                return Err(ArgsError::malformed_quoting(QuoteKind::Double, offset));
                            }
                        }
                    }
                }
                Some(&(_, '\\')) => {
                    chars.next(); // Consume \
                    match chars.next() {
                        Some((_, c)) => arg.push(c),
                        // Nothing left to escape.
                        None => arg.push('\\'),
                    }
                }
                Some(&(_, c)) if c.is_whitespace() => break,
                Some(&(_, c)) => {
                    arg.push(c);
                    chars.next();
                }
                None => break,
            }
        }
        log::trace!("token {}: {:?}", args.len(), arg);
        args.push(arg);
    }
    Ok(args)
}
