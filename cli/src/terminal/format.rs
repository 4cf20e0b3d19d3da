use rackmap_core::render::{CORNER, TEE};

const INDENTS: [&str; 2] = ["| ", "  "];

/// Splits a rendered tree line into its drawing glyphs and its label.
///
/// Glyphs are any run of two-column indents followed by at most one connector.
/// The root line has no glyphs.
pub fn split_glyphs(line: &str) -> (&str, &str) {
    let mut end = 0;

    while let Some(pair) = line.get(end..end + 2) {
        if INDENTS.contains(&pair) {
            end += 2;
            continue;
        }
        if pair == TEE || pair == CORNER {
            end += 2;
        }
        break;
    }

    line.split_at(end)
}
