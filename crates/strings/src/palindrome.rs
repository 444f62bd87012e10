/// Palindrome check over ASCII letters and digits, ignoring case and every
/// other character.
pub fn is_palindrome(s: &str) -> bool {
    let cleaned: Vec<u8> = s
        .bytes()
        .filter(u8::is_ascii_alphanumeric)
        .map(|b| b.to_ascii_lowercase())
        .collect();

    let mut left = 0usize;
    let mut right = cleaned.len();
    while right - left > 1 {
        if cleaned[left] != cleaned[right - 1] {
            return false;
        }
        left += 1;
        right -= 1;
    }
    true
}

/// Same answer as [`is_palindrome`] without building a cleaned copy.
pub fn is_palindrome_two_pointer(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut left = 0usize;
    let mut right = bytes.len();

    loop {
        while left < right && !bytes[left].is_ascii_alphanumeric() {
            left += 1;
        }
        while left < right && !bytes[right - 1].is_ascii_alphanumeric() {
            right -= 1;
        }
        if right - left < 2 {
            return true;
        }
        if !bytes[left].eq_ignore_ascii_case(&bytes[right - 1]) {
            return false;
        }
        left += 1;
        right -= 1;
    }
}

/// Exact comparison with the reversed string.
pub fn is_simple_palindrome(s: &str) -> bool {
    s.chars().eq(s.chars().rev())
}

/// Longest palindromic substring by centre expansion. The leftmost one wins
/// ties.
pub fn longest_palindrome(s: &str) -> &str {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() < 2 {
        return s;
    }

    let mut best_start = 0usize;
    let mut best_len = 1usize;
    for i in 0..chars.len() {
        for right in [i, i + 1] {
            let radius = expand_around_center(&chars, i, right);
            let len = right - i + 2 * radius - 1;
            if len > best_len {
                best_len = len;
                best_start = i + 1 - radius;
            }
        }
    }

    let byte_at = |char_idx: usize| {
        s.char_indices()
            .nth(char_idx)
            .map_or(s.len(), |(byte_idx, _)| byte_idx)
    };
    &s[byte_at(best_start)..byte_at(best_start + best_len)]
}

/// Number of palindromic substrings, counting equal substrings at different
/// positions separately.
pub fn count_palindromic_substrings(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    (0..chars.len())
        .map(|i| expand_around_center(&chars, i, i) + expand_around_center(&chars, i, i + 1))
        .sum()
}

/// How many steps the palindrome centred on `left..=right` grows outwards.
/// Every step is itself a palindrome.
fn expand_around_center(chars: &[char], left: usize, right: usize) -> usize {
    let mut k = 0usize;
    while k <= left && right + k < chars.len() && chars[left - k] == chars[right + k] {
        k += 1;
    }
    k
}
