//! Culture-independent number formatting for attribute and style values

/// Format a number the way JavaScript's `Number#toString` does: shortest
/// round-trip decimal, no `.0` on whole numbers, no grouping separators.
///
/// Non-finite values print as `NaN`, `Infinity` and `-Infinity`.
pub fn format_number(v: f64) -> String {
    let mut out = String::new();
    write_number(&mut out, v);
    out
}

pub(crate) fn write_number(out: &mut String, v: f64) {
    if v.is_nan() {
        out.push_str("NaN");
        return;
    }
    if v.is_infinite() {
        out.push_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
        return;
    }
    // -0 prints as 0
    let v = if v == 0.0 { 0.0 } else { v };
    let mut buf = ryu_js::Buffer::new();
    out.push_str(buf.format_finite(v));
}
