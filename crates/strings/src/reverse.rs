pub fn reverse_in_place<T>(items: &mut [T]) {
    let mut left = 0usize;
    let mut right = items.len();
    while right - left > 1 {
        right -= 1;
        items.swap(left, right);
        left += 1;
    }
}

/// Swaps the outer pair, then recurses on the inside. Recursion depth is
/// half the length.
pub fn reverse_recursive<T>(items: &mut [T]) {
    let len = items.len();
    if len < 2 {
        return;
    }
    items.swap(0, len - 1);
    reverse_recursive(&mut items[1..len - 1]);
}

pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

/// Reverses the characters of every space-separated word, keeping the
/// spaces where they are.
pub fn reverse_words(s: &str) -> String {
    s.split(' ')
        .map(reverse_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_arrays() {
        let cases: [(&[char], &[char]); 4] = [
            (&['h', 'e', 'l', 'l', 'o'], &['o', 'l', 'l', 'e', 'h']),
            (&['H', 'a', 'n', 'n', 'a', 'h'], &['h', 'a', 'n', 'n', 'a', 'H']),
            (&['A'], &['A']),
            (&[], &[]),
        ];

        for (input, expected) in cases {
            let mut a = input.to_vec();
            reverse_in_place(&mut a);
            assert_eq!(a, expected);

            let mut b = input.to_vec();
            reverse_recursive(&mut b);
            assert_eq!(b, expected);
        }
    }

    #[test]
    fn strings_and_words() {
        assert_eq!(reverse_string("hello"), "olleh");
        assert_eq!(reverse_string("JavaScript"), "tpircSavaJ");
        assert_eq!(reverse_string("12345"), "54321");
        assert_eq!(reverse_string("añb"), "bña");

        assert_eq!(
            reverse_words("Let's take LeetCode contest"),
            "s'teL ekat edoCteeL tsetnoc"
        );
        assert_eq!(reverse_words("God Ding"), "doG gniD");
        assert_eq!(reverse_words("a  b"), "a  b");
    }
}
