use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Locale-style comparison for display names.
///
/// Letters compare case-insensitively and runs of digits compare by numeric
/// value, so `v2` sorts before `v10`. Names differing only in case or in
/// leading zeros compare equal, which leaves their order to a stable sort.
pub fn sort_compare(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        let ordering = match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                compare_digits(&take_digits(&mut left), &take_digits(&mut right))
            }
            (Some(x), Some(y)) => {
                left.next();
                right.next();
                x.to_lowercase().cmp(y.to_lowercase())
            }
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.next_if(|c| c.is_ascii_digit()) {
        digits.push(c);
    }
    digits
}

fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names() {
        assert_eq!(sort_compare("a", "b"), Ordering::Less);
        assert_eq!(sort_compare("b", "a"), Ordering::Greater);
        assert_eq!(sort_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(sort_compare("Alpha", "beta"), Ordering::Less);
        assert_eq!(sort_compare("alpha", "Beta"), Ordering::Less);
    }

    #[test]
    fn test_numeric_runs() {
        assert_eq!(sort_compare("v2.0", "v10.0"), Ordering::Less);
        assert_eq!(sort_compare("v1.9.9", "v1.10.0"), Ordering::Less);
        assert_eq!(sort_compare("release-007", "release-8"), Ordering::Less);
        assert_eq!(sort_compare("release-007", "release-7"), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(sort_compare("v1", "v1.0"), Ordering::Less);
    }

    #[test]
    fn test_case_only_difference_is_equal() {
        assert_eq!(sort_compare("Tag", "tag"), Ordering::Equal);
        assert_eq!(sort_compare("V1.0", "v1.0"), Ordering::Equal);
    }
}
