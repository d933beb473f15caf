use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Cell texts read as missing. Matched exactly, no trimming.
static NA_VALUES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
        "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
    ]
    .into_iter()
    .collect()
});

pub fn is_missing(raw: &str) -> bool {
    NA_VALUES.contains(raw)
}

pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "True" | "TRUE" | "true" => Some(true),
        "False" | "FALSE" | "false" => Some(false),
        _ => None,
    }
}

pub fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Integers past `i64::MAX` that still fit in 64 bits.
pub fn parse_uint(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

/// Optionally signed run of ASCII digits, whatever its magnitude.
pub fn is_int_literal(raw: &str) -> bool {
    let t = raw.trim();
    let digits = t.strip_prefix(['+', '-']).unwrap_or(t);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Rejects NaN spellings that slipped past the NA set (e.g. "NAN").
pub fn parse_float(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Name empty header cells `Unnamed: <idx>` and suffix repeats with `.1`, `.2`, ...
/// A suffixed name that collides again gets suffixed in turn.
pub fn normalize_headers<'a, I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut out = Vec::new();

    for (idx, name) in raw.into_iter().enumerate() {
        let mut col = if name.is_empty() {
            format!("Unnamed: {}", idx)
        } else {
            name.to_string()
        };
        let mut cur = counts.get(&col).copied().unwrap_or(0);
        while cur > 0 {
            counts.insert(col.clone(), cur + 1);
            col = format!("{}.{}", col, cur);
            cur = counts.get(&col).copied().unwrap_or(0);
        }
        counts.insert(col.clone(), cur + 1);
        out.push(col);
    }
    out
}
