//! Natural ordering for line codes.
//!
//! Codes are split into digit and non-digit runs. Digit runs compare by
//! numeric value, text runs compare case-insensitively, and a digit run
//! sorts before a text run. Pure integers therefore order by value, and
//! `"5" < "12N" < "31" < "31E" < "FB2"`. Ties fall back to byte order so
//! the result is a total order.

use std::cmp::Ordering;

#[derive(Debug, PartialEq, Eq)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

fn chunks(code: &str) -> impl Iterator<Item = Chunk<'_>> {
    let mut rest = code;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = rest
            .find(|c: char| c.is_ascii_digit() != digits)
            .unwrap_or(rest.len());
        let (head, tail) = rest.split_at(end);
        rest = tail;
        Some(if digits {
            Chunk::Digits(head)
        } else {
            Chunk::Text(head)
        })
    })
}

fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = chunks(a);
    let mut right = chunks(b);
    loop {
        let ordering = match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(Chunk::Digits(x)), Some(Chunk::Digits(y))) => cmp_digits(x, y),
            (Some(Chunk::Text(x)), Some(Chunk::Text(y))) => cmp_text(x, y),
            (Some(Chunk::Digits(_)), Some(Chunk::Text(_))) => Ordering::Less,
            (Some(Chunk::Text(_)), Some(Chunk::Digits(_))) => Ordering::Greater,
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(codes: &[&'static str]) -> Vec<&'static str> {
        let mut codes = codes.to_vec();
        codes.sort_by(|a, b| natural_cmp(a, b));
        codes
    }

    #[test]
    fn test_numbers_by_value() {
        assert_eq!(sorted(&["100", "5", "20", "11"]), ["5", "11", "20", "100"]);
    }

    #[test]
    fn test_mixed_codes_interleave() {
        assert_eq!(
            sorted(&["31E", "FB2", "12N", "31", "5", "110"]),
            ["5", "12N", "31", "31E", "110", "FB2"]
        );
    }

    #[test]
    fn test_embedded_digits() {
        assert_eq!(sorted(&["FB10", "FB2", "fb3"]), ["FB2", "fb3", "FB10"]);
    }

    #[test]
    fn test_leading_zeros_are_stable() {
        assert_eq!(natural_cmp("05", "5"), Ordering::Less);
        assert_eq!(natural_cmp("5", "5"), Ordering::Equal);
        assert_eq!(natural_cmp("007A", "7B"), Ordering::Less);
    }
}
