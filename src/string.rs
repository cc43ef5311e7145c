/// Wraps `string` with `wrapper` on both sides.
///
/// ```
/// assert_eq!(dragon_helpers::str_wrap("value", "\""), "\"value\"");
/// ```
pub fn str_wrap(string: &str, wrapper: &str) -> String {
    let mut wrapped = String::with_capacity(string.len() + 2 * wrapper.len());
    wrapped.push_str(wrapper);
    wrapped.push_str(string);
    wrapped.push_str(wrapper);
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_wrap() {
        assert_eq!(str_wrap("b", "a"), "aba");
        assert_eq!(str_wrap("", "--"), "----");
        assert_eq!(str_wrap("plain", ""), "plain");
    }
}
