use std::str::{FromStr, SplitAsciiWhitespace};

use crate::error::{Error, Result};

/// Reads whitespace-separated tokens from problem input.
pub struct Scanner<'a> {
    tokens: SplitAsciiWhitespace<'a>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Scanner {
            tokens: input.split_ascii_whitespace(),
        }
    }

    /// Parses the next token as `T`.
    pub fn next<T: FromStr>(&mut self) -> Result<T> {
        let token = self.tokens.next().ok_or(Error::UnexpectedEof)?;
        token.parse().map_err(|_| Error::Parse {
            token: token.to_string(),
        })
    }

    /// Parses the next `n` tokens as `T`.
    pub fn vec<T: FromStr>(&mut self, n: usize) -> Result<Vec<T>> {
        (0..n).map(|_| self.next()).collect()
    }

    /// Parses the next token as a count or index; negative values are a parse error.
    pub fn usize(&mut self) -> Result<usize> {
        self.next()
    }

    pub fn is_exhausted(&self) -> bool {
        self.tokens.clone().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scanner_reads_mixed_tokens() {
        let mut sc = Scanner::new("3 -4\n  7\t8\r\n");
        assert_eq!(sc.usize().unwrap(), 3);
        assert_eq!(sc.next::<i64>().unwrap(), -4);
        assert_eq!(sc.vec::<u32>(2).unwrap(), vec![7, 8]);
        assert!(sc.is_exhausted());
    }

    #[test]
    fn test_scanner_reports_eof() {
        let mut sc = Scanner::new("1");
        assert_eq!(sc.next::<i32>().unwrap(), 1);
        assert!(matches!(sc.next::<i32>(), Err(Error::UnexpectedEof)));
    }

    #[test]
    fn test_scanner_reports_bad_token() {
        let mut sc = Scanner::new("-2 x");
        assert!(matches!(sc.usize(), Err(Error::Parse { token }) if token == "-2"));
        assert!(matches!(sc.next::<i32>(), Err(Error::Parse { token }) if token == "x"));
    }
}
