//! Tolerant table-row scanning for registry pages.
//!
//! Only `<tr>` blocks and their `<td>`/`<th>` cells are read. Attribute order,
//! whitespace, nested inline markup and upper-case tags are all tolerated.
//! Header rows (every cell a `<th>`) are dropped. Nothing here knows which
//! column means what; that is [`crate::normalize`]'s job.

use once_cell::sync::Lazy;
use regex::Regex;

static ROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<tr\b[^>]*>(.*?)</tr\s*>").expect("row pattern compiles"));

static CELL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<t([dh])\b[^>]*>(.*?)</t[dh]\s*>").expect("cell pattern compiles")
});

static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").expect("break pattern compiles"));

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").expect("tag pattern compiles"));

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("ws pattern compiles"));

/// Extract the text cells of every data row in `html`, in document order.
#[must_use]
pub fn table_rows(html: &str) -> Vec<Vec<String>> {
    ROW.captures_iter(html)
        .filter_map(|row| {
            let mut all_header = true;
            let cells: Vec<String> = CELL
                .captures_iter(&row[1])
                .map(|cell| {
                    if cell[1].eq_ignore_ascii_case("d") {
                        all_header = false;
                    }
                    cell_text(&cell[2])
                })
                .collect();
            (!cells.is_empty() && !all_header).then_some(cells)
        })
        .collect()
}

/// Plain text of one cell: tags stripped, entities decoded, whitespace collapsed.
#[must_use]
pub fn cell_text(raw: &str) -> String {
    let text = LINE_BREAK.replace_all(raw, " ");
    let text = TAG.replace_all(&text, "");
    let text = decode_entities(&text);
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
