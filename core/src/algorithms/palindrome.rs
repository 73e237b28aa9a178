/// Recursive palindrome check: ends must match and the interior must itself be a palindrome.
///
/// Recursion depth is `len / 2`, so very long inputs are bounded by the thread's stack.
pub fn is_palindrome<T: PartialEq>(seq: &[T]) -> bool {
    match seq {
        [] | [_] => true,
        [first, inner @ .., last] => first == last && is_palindrome(inner),
    }
}

/// Case-sensitive check over the characters of `s`, taken literally.
pub fn is_palindrome_str(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    is_palindrome(&chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenarios() {
        assert!(is_palindrome_str("racecar"));
        assert!(!is_palindrome_str("hello"));
    }

    #[test]
    fn test_short_inputs() {
        assert!(is_palindrome_str(""));
        assert!(is_palindrome_str("x"));
        assert!(is_palindrome_str("aa"));
        assert!(!is_palindrome_str("ab"));
    }

    #[test]
    fn test_case_and_spaces_are_literal() {
        assert!(!is_palindrome_str("Racecar"));
        assert!(!is_palindrome_str("nurses run"));
        assert!(is_palindrome_str("nurses  sesrun"));
        assert!(is_palindrome_str(" aba "));
    }

    #[test]
    fn test_multibyte_chars() {
        assert!(is_palindrome_str("été"));
        assert!(is_palindrome_str("上海自来水来自海上"));
    }

    #[test]
    fn test_reverse_symmetry() {
        for s in ["racecar", "hello", "abba", "abca", "", "z", "noon?"] {
            let reversed: String = s.chars().rev().collect();
            assert_eq!(is_palindrome_str(s), is_palindrome_str(&reversed), "{s:?}");
        }
    }

    #[test]
    fn test_generic_over_numbers() {
        assert!(is_palindrome(&[1, 2, 3, 2, 1]));
        assert!(!is_palindrome(&[1, 2, 3, 1]));
    }
}
