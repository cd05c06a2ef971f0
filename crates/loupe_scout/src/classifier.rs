//! Line tag classifier.
//!
//! Finds the names of opening tags on a single line of template text. This
//! is a lexical heuristic, not a parser: it looks for `<name` candidates and
//! then throws away the ones that only *look* like tags, such as generic type
//! parameters inside bound expressions (`@click="(e: Event<Foo>) => …"`),
//! URLs in comments (`<https://…>`) and malformed quirks.

use once_cell::sync::Lazy;
use regex_lite::Regex;

/// `<` followed by word characters or hyphens.
static TAG_CANDIDATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<([\w-]+)").expect("Invalid regex"));

/// First `<…>` run on the line that starts with a word character and
/// contains no space.
static COMPLETE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(\w+?[^ ]+?)\W*?>").expect("Invalid regex"));

static END_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</([a-zA-Z0-9_-]+)>").expect("Invalid regex"));

/// `<Name>` or `<Name<Inner>>` after `=`, `:` or `"`: a type argument
/// inside an attribute value or expression.
static PROPERTY_TYPING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"[=:"]+?[^</]+?<\s*([a-zA-Z0-9_-]+)\s*>"#,
        "|",
        r#"[=:"]+?[^</]+?<([a-zA-Z0-9_-]*?)<\s*?\W*?([a-zA-Z0-9_-]+?)\W*?\s*?>"#,
    ))
    .expect("Invalid regex")
});

/// Line-level facts shared by every candidate on the line.
#[derive(Debug)]
struct LineShape<'a> {
    complete_tag: Option<&'a str>,
    has_end_tag: bool,
    typed_names: Vec<&'a str>,
}

impl<'a> LineShape<'a> {
    fn of(line: &'a str) -> Self {
        let complete_tag = COMPLETE_TAG
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str());

        let typed_names = PROPERTY_TYPING
            .captures(line)
            .map(|caps| {
                caps.iter()
                    .skip(1)
                    .flatten()
                    .map(|m| m.as_str())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            complete_tag,
            has_end_tag: END_TAG.is_match(line),
            typed_names,
        }
    }

    /// A complete tag that holds `<` or `>` is two tags glued together.
    fn complete_tag_is_compound(&self) -> bool {
        self.complete_tag
            .is_some_and(|tag| tag.contains('<') || tag.contains('>'))
    }

    fn rejects(&self, candidate: &str) -> bool {
        // Quirk: the line's first complete tag is something else entirely
        // (a link, an autolink in a comment, a half-written tag).
        let quirk = self.complete_tag.is_some_and(|tag| tag != candidate)
            && !self.complete_tag_is_compound()
            && !self.has_end_tag
            && self.typed_names.is_empty();

        quirk || self.typed_names.iter().any(|&name| name == candidate)
    }
}

/// Extract the genuine opening-tag names on a line.
///
/// Names are returned left to right with duplicates preserved, exactly as
/// written (no normalization).
///
/// ```
/// use loupe_scout::classify_line;
///
/// assert_eq!(classify_line("<The><Welcome>Hello</Welcome></The>"), ["The", "Welcome"]);
/// assert!(classify_line(r#"@click="(x: SomeType<Type>) => run()""#).is_empty());
/// ```
pub fn classify_line(line: &str) -> Vec<String> {
    if !line.contains('<') {
        return Vec::new();
    }

    let candidates: Vec<&str> = TAG_CANDIDATE
        .captures_iter(line)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .collect();

    if candidates.is_empty() {
        return Vec::new();
    }

    let shape = LineShape::of(line);

    candidates
        .into_iter()
        .filter(|candidate| !shape.rejects(candidate))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(line: &str) -> Vec<String> {
        classify_line(line)
    }

    #[test]
    fn test_nested_tags() {
        assert_eq!(tags("<The><Welcome>Hello</Welcome></The>"), ["The", "Welcome"]);
        assert_eq!(tags("<The><Welcome />Hello</The>"), ["The", "Welcome"]);
    }

    #[test]
    fn test_single_tag_forms() {
        assert_eq!(tags(r#"<TheWelcome msg="You did it!" />"#), ["TheWelcome"]);
        assert_eq!(tags(r#"<TheWelcome msg="You did it!""#), ["TheWelcome"]);
        assert_eq!(tags("<TheWelcome />"), ["TheWelcome"]);
        assert_eq!(tags("<TheWelcome></TheWelcome>"), ["TheWelcome"]);
        assert_eq!(tags("<TheWelcome"), ["TheWelcome"]);
        assert_eq!(tags("  <the-welcome>"), ["the-welcome"]);
    }

    #[test]
    fn test_attribute_values_with_slashes() {
        assert_eq!(
            tags(r#"<TheWelcome href="https://x.com/a" target="_blank">@a</TheWelcome>"#),
            ["TheWelcome"]
        );
        assert_eq!(
            tags(
                r#"<TheWelcome href="https://x.com/vuejs" target="_blank" rel="noopener">@vuejs</TheWelcome>"#
            ),
            ["TheWelcome"]
        );
    }

    #[test]
    fn test_generic_inside_attribute_of_real_tag() {
        assert_eq!(
            tags(
                r#"<TheWelcome href="javascript:void(0)" @click="(someVar: SomeType<ThisNot>) => openReadmeInEditor""#
            ),
            ["TheWelcome"]
        );
    }

    #[test]
    fn test_closing_tags_yield_nothing() {
        assert!(tags("</TheWelcome>").is_empty());
        assert!(tags("< /TheWelcome>").is_empty());
        assert!(tags("  </div>").is_empty());
    }

    #[test]
    fn test_generic_type_parameters_yield_nothing() {
        assert!(tags(r#"@click="(x: SomeType<Type>) => run()""#).is_empty());
        assert!(tags(r#"@click="(someVar: SomeType<Type<'bar'>>) => openReadmeInEditor""#).is_empty());
        assert!(tags(r#"@click="(someVar: SomeType<Type<bar>>) => openReadmeInEditor""#).is_empty());
    }

    #[test]
    fn test_casts_yield_nothing() {
        assert!(tags(r#"property="openReadmeInEditor as Type<OfType>""#).is_empty());
        assert!(tags(r#"property="openReadmeInEditor as Type<OfType<'bar'>>""#).is_empty());
        assert!(tags(r#"property="openReadmeInEditor as Type<OfType<bar>>""#).is_empty());
    }

    #[test]
    fn test_comment_with_autolink_yields_nothing() {
        assert!(tags("<!-- text here <https://urlhere.com> hello-->").is_empty());
        assert!(tags("<!-- plain comment -->").is_empty());
    }

    #[test]
    fn test_duplicates_preserved_in_order() {
        assert_eq!(
            tags("<v-chip>a</v-chip><v-chip>b</v-chip>"),
            ["v-chip", "v-chip"]
        );
    }

    #[test]
    fn test_plain_text_yields_nothing() {
        assert!(tags("").is_empty());
        assert!(tags("Hello {{ name }}").is_empty());
        assert!(tags("{{ a < b ? a : b }}").is_empty());
    }
}
