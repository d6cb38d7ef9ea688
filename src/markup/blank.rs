/// `Some(s)` only if `s` has at least one non-whitespace character
pub(crate) fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}
