use core::cmp::Ordering;

use super::Comparer;

/// Human friendly ordering for strings with embedded numbers.
///
/// Both strings are split into maximal runs that alternate between ASCII digits
/// and everything else. Runs are compared pairwise: two digit runs by their
/// integer value, any other pair as text. The first pair that differs decides;
/// if one run sequence is a prefix of the other the shorter string comes first.
///
/// ```
/// use collection::{Collection, NaturalStringComparer};
///
/// let mut files = Collection::from(["img12.png", "img2.png", "img10.png", "img1.png"]);
/// files.sort_with(&NaturalStringComparer);
/// assert_eq!(files.to_vec(), ["img1.png", "img2.png", "img10.png", "img12.png"]);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalStringComparer;

impl<T: AsRef<str> + ?Sized> Comparer<T> for NaturalStringComparer {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        let mut left = Runs { rest: a.as_ref() };
        let mut right = Runs { rest: b.as_ref() };

        loop {
            match (left.next(), right.next()) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(x), Some(y)) => match x.compare(y) {
                    Ordering::Equal => {}
                    decided => return decided,
                },
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Run<'a> {
    text: &'a str,
    numeric: bool,
}

impl Run<'_> {
    fn compare(self, other: Run<'_>) -> Ordering {
        if self.numeric && other.numeric {
            compare_digits(self.text, other.text)
        } else {
            self.text.cmp(other.text)
        }
    }
}

/// Compares two ASCII digit strings by value, without parsing, so runs longer
/// than any integer type still order correctly.
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

struct Runs<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let numeric = self.rest.chars().next()?.is_ascii_digit();
        let end = self
            .rest
            .find(|c: char| c.is_ascii_digit() != numeric)
            .unwrap_or(self.rest.len());
        let (text, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Run { text, numeric })
    }
}
