//! The pure text-to-text transformation.

use crate::engine::{extract::KeyStrategy, record::Record};

/// Formats every key and joins the records with `\n`, with no trailing newline.
pub fn render_records<'a, I>(keys: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    keys.into_iter()
        .map(|key| Record::new(key).to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Transforms a `key: value` blob using the line strategy.
///
/// ```
/// assert_eq!(
///     defaultgen::transform("v_hone: true"),
///     r#"("v_hone", false, false, false),"#
/// );
/// ```
pub fn transform(blob: &str) -> String {
    transform_with(blob, KeyStrategy::Line)
}

pub fn transform_with(blob: &str, strategy: KeyStrategy) -> String {
    render_records(strategy.extract(blob))
}
