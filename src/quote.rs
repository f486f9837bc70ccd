use std::borrow::Cow;

/// Characters that end or change a token when read back by the tokenizer.
fn is_significant(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\'' | '"' | '\\')
}

/// Quotes a single argument so that [`tokenize`](crate::tokenize) reads it back unchanged.
///
/// Quoting is done by `shell_words`, which leaves plain words alone and single-quotes
/// everything else, writing embedded single quotes as `'\''`.
pub fn quote(arg: &str) -> Cow<'_, str> {
    match shell_words::quote(arg) {
        // shell_words leaves some words bare that the tokenizer would still
        // split or unescape, e.g. ones holding a carriage return or U+3000.
        Cow::Borrowed(word) if word.is_empty() || word.contains(is_significant) => {
            Cow::Owned(format!("'{}'", word.replace('\'', r"'\''")))
        }
        quoted => quoted,
    }
}

/// Joins arguments into one raw command line, quoting each as needed.
pub fn join<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .map(|arg| quote(arg.as_ref()).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;

    #[test]
    fn safe_arguments_are_borrowed() {
        assert!(matches!(quote("--icsv"), Cow::Borrowed("--icsv")));
        assert!(matches!(quote("a/b.csv"), Cow::Borrowed(_)));
    }

    #[test]
    fn quotes_whitespace_and_specials() {
        assert_eq!(quote("a b"), "'a b'");
        assert_eq!(quote(""), "''");
        assert_eq!(quote("$x"), "'$x'");
        assert_eq!(quote(r"a\b"), r"'a\b'");
    }

    #[test]
    fn embedded_single_quote() {
        assert_eq!(quote("it's"), r"'it'\''s'");
    }

    #[test]
    fn join_tokenizes_back() {
        let vectors: Vec<Vec<&str>> = vec![
            vec![],
            vec![""],
            vec!["mlr", "--icsv", "put", "$z = $x . \" \" . $y"],
            vec!["it's", "\"quoted\"", r"back\slash", "  ", "\t\n"],
            vec!["'", "''", "\"", "a'b\"c\\d"],
            vec!["ünï côdé", "日本 語"],
        ];
        for v in vectors {
            let raw = join(&v);
            assert_eq!(tokenize(&raw).unwrap(), v, "raw line {raw:?}");
        }
    }

    #[test]
    fn whitespace_outside_the_shell_set_is_quoted() {
        assert_eq!(quote("a\rb"), "'a\rb'");
        assert_eq!(quote("x\u{3000}y"), "'x\u{3000}y'");
        let v = vec!["a\rb", "x\u{3000}y", "\u{a0}"];
        assert_eq!(tokenize(&join(&v)).unwrap(), v);
    }

    #[test]
    fn plain_vector_joins_with_single_spaces() {
        assert_eq!(join(&["mlr", "cat", "x.csv"]), "mlr cat x.csv");
    }
}
