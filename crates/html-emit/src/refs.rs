//! Reference tag generation for style and script assets.

use crate::attrs::{render_attributes, AttributeValue, Attributes};

/// Render `<link>` tags for a list of stylesheet paths.
///
/// Each path is prefixed with `public_path` and rendered as
/// `<link href="..." rel="stylesheet">`, concatenated with no separator.
/// A caller-supplied `rel` attribute wins over the `"stylesheet"` default
/// and keeps its position in the attribute map; the default `rel` is
/// appended after the caller's attributes otherwise.
///
/// An empty `files` slice renders as the empty string.
pub fn css_references(files: &[String], public_path: &str, attributes: &Attributes) -> String {
    let mut attributes = attributes.clone();
    attributes
        .entry("rel".to_string())
        .or_insert_with(|| AttributeValue::from("stylesheet"));
    let rendered = render_attributes(&attributes);

    files
        .iter()
        .map(|file| format!(r#"<link href="{public_path}{file}"{rendered}>"#))
        .collect()
}

/// Render `<script>` tags for a list of script paths.
///
/// Each path is prefixed with `public_path` and rendered as
/// `<script src="..."></script>`, concatenated with no separator. Extra
/// attributes land between the `src` and the closing bracket.
pub fn js_references(files: &[String], public_path: &str, attributes: &Attributes) -> String {
    let rendered = render_attributes(attributes);

    files
        .iter()
        .map(|file| format!(r#"<script src="{public_path}{file}"{rendered}></script>"#))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn css_reference_gets_default_rel() {
        let out = css_references(&files(&["a.css"]), "", &Attributes::new());
        assert_eq!(out, r#"<link href="a.css" rel="stylesheet">"#);
    }

    #[test]
    fn explicit_rel_overrides_default() {
        let attrs = Attributes::from([("rel".to_string(), AttributeValue::from("preload"))]);
        let out = css_references(&files(&["a.css"]), "", &attrs);
        assert_eq!(out, r#"<link href="a.css" rel="preload">"#);
    }

    #[test]
    fn explicit_rel_keeps_its_position() {
        let attrs = Attributes::from([
            ("rel".to_string(), AttributeValue::from("preload")),
            ("as".to_string(), AttributeValue::from("style")),
        ]);
        let out = css_references(&files(&["a.css"]), "", &attrs);
        assert_eq!(out, r#"<link href="a.css" rel="preload" as="style">"#);
    }

    #[test]
    fn css_references_concatenate_in_order() {
        let out = css_references(&files(&["a.css", "b.css"]), "/static/", &Attributes::new());
        assert_eq!(
            out,
            r#"<link href="/static/a.css" rel="stylesheet"><link href="/static/b.css" rel="stylesheet">"#
        );
    }

    #[test]
    fn js_reference_with_public_path() {
        let out = js_references(&files(&["a.js"]), "pub/", &Attributes::new());
        assert_eq!(out, r#"<script src="pub/a.js"></script>"#);
    }

    #[test]
    fn js_reference_with_flag_attribute() {
        let attrs = Attributes::from([("defer".to_string(), AttributeValue::from(true))]);
        let out = js_references(&files(&["a.js"]), "", &attrs);
        assert_eq!(out, r#"<script src="a.js" defer></script>"#);
    }

    #[test]
    fn empty_file_lists_render_empty_strings() {
        assert_eq!(css_references(&[], "pub/", &Attributes::new()), "");
        assert_eq!(js_references(&[], "pub/", &Attributes::new()), "");
    }
}
