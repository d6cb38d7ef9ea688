//! Escaping of values embedded in attributes and element content

use std::borrow::Cow;

/// Output encoder applied to user-supplied strings before they enter markup.
///
/// Hosts with their own templating encoder can implement this and pass it to
/// the `*_with` emitters so output matches the rest of the page.
pub trait Escaper {
    fn escape<'a>(&self, s: &'a str) -> Cow<'a, str>;
}

/// HTML encoder covering `&`, `<`, `>` and both quote characters
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEscaper;

impl Escaper for HtmlEscaper {
    fn escape<'a>(&self, s: &'a str) -> Cow<'a, str> {
        htmlize::escape_all_quotes(s)
    }
}

impl<F> Escaper for F
where
    F: Fn(&str) -> String,
{
    fn escape<'a>(&self, s: &'a str) -> Cow<'a, str> {
        Cow::Owned(self(s))
    }
}
