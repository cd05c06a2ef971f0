//! Built-in tag vocabularies.
//!
//! Stored in their customary spelling (kebab-case for Vue built-ins in
//! templates, camelCase for SVG elements). [`IgnoreSet`](crate::IgnoreSet)
//! normalizes them on insertion, so each set only needs one spelling per tag.

use phf::phf_set;

// =============================================================================
// Compile-time Perfect Hash Sets
// =============================================================================

/// HTML elements, including obsolete and deprecated ones that still parse.
pub static HTML_TAGS: phf::Set<&'static str> = phf_set! {
    "a", "abbr", "acronym", "address", "applet", "area", "article", "aside",
    "audio", "b", "base", "basefont", "bdi", "bdo", "bgsound", "big", "blink",
    "blockquote", "body", "br", "button", "canvas", "caption", "center",
    "cite", "code", "col", "colgroup", "command", "content", "data",
    "datalist", "dd", "del", "details", "dfn", "dialog", "dir", "div", "dl",
    "dt", "element", "em", "embed", "fieldset", "figcaption", "figure",
    "font", "footer", "form", "frame", "frameset", "h1", "h2", "h3", "h4",
    "h5", "h6", "head", "header", "hgroup", "hr", "html", "i", "iframe",
    "image", "img", "input", "ins", "isindex", "kbd", "keygen", "label",
    "legend", "li", "link", "listing", "main", "map", "mark", "marquee",
    "math", "menu", "menuitem", "meta", "meter", "multicol", "nav", "nextid",
    "nobr", "noembed", "noframes", "noscript", "object", "ol", "optgroup",
    "option", "output", "p", "param", "picture", "plaintext", "pre",
    "progress", "q", "rb", "rbc", "rp", "rt", "rtc", "ruby", "s", "samp",
    "script", "search", "section", "select", "shadow", "slot", "small",
    "source", "spacer", "span", "strike", "strong", "style", "sub",
    "summary", "sup", "svg", "table", "tbody", "td", "template", "textarea",
    "tfoot", "th", "thead", "time", "title", "tr", "track", "tt", "u", "ul",
    "var", "video", "wbr", "xmp",
};

/// SVG elements (SVG 1.1 plus the commonly used SVG 2 additions).
pub static SVG_TAGS: phf::Set<&'static str> = phf_set! {
    "a", "altGlyph", "altGlyphDef", "altGlyphItem", "animate",
    "animateColor", "animateMotion", "animateTransform", "circle",
    "clipPath", "color-profile", "cursor", "defs", "desc", "ellipse",
    "feBlend", "feColorMatrix", "feComponentTransfer", "feComposite",
    "feConvolveMatrix", "feDiffuseLighting", "feDisplacementMap",
    "feDistantLight", "feDropShadow", "feFlood", "feFuncA", "feFuncB",
    "feFuncG", "feFuncR", "feGaussianBlur", "feImage", "feMerge",
    "feMergeNode", "feMorphology", "feOffset", "fePointLight",
    "feSpecularLighting", "feSpotLight", "feTile", "feTurbulence", "filter",
    "font", "font-face", "font-face-format", "font-face-name",
    "font-face-src", "font-face-uri", "foreignObject", "g", "glyph",
    "glyphRef", "hkern", "image", "line", "linearGradient", "marker", "mask",
    "metadata", "missing-glyph", "mpath", "path", "pattern", "polygon",
    "polyline", "radialGradient", "rect", "script", "set", "stop", "style",
    "svg", "switch", "symbol", "text", "textPath", "title", "tref", "tspan",
    "use", "view", "vkern",
};

/// Components and special elements provided by the Vue runtime.
pub static VUE_TAGS: phf::Set<&'static str> = phf_set! {
    "component",
    "slot",
    "template",
    "transition",
    "transition-group",
    "keep-alive",
    "teleport",
    "suspense",
    "base-transition",
};

/// Components registered by Vue Router.
pub static VUE_ROUTER_TAGS: phf::Set<&'static str> = phf_set! {
    "router-link",
    "router-view",
};

// =============================================================================
// Lookup Functions
// =============================================================================

/// Check if a name is an HTML element (exact spelling).
#[inline]
pub fn is_html_tag(name: &str) -> bool {
    HTML_TAGS.contains(name)
}

/// Check if a name is an SVG element (exact spelling).
#[inline]
pub fn is_svg_tag(name: &str) -> bool {
    SVG_TAGS.contains(name)
}

/// Check if a name is a Vue built-in (exact spelling).
#[inline]
pub fn is_vue_tag(name: &str) -> bool {
    VUE_TAGS.contains(name)
}

/// Check if a name is a Vue Router component (exact spelling).
#[inline]
pub fn is_vue_router_tag(name: &str) -> bool {
    VUE_ROUTER_TAGS.contains(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_tags() {
        assert!(is_html_tag("div"));
        assert!(is_html_tag("h1"));
        assert!(is_html_tag("textarea"));
        assert!(!is_html_tag("router-link"));
    }

    #[test]
    fn test_svg_tags() {
        assert!(is_svg_tag("clipPath"));
        assert!(is_svg_tag("feGaussianBlur"));
        assert!(!is_svg_tag("div"));
    }

    #[test]
    fn test_vue_tags() {
        assert!(is_vue_tag("keep-alive"));
        assert!(is_vue_tag("teleport"));
        assert!(!is_vue_tag("KeepAlive"));
        assert!(is_vue_router_tag("router-view"));
    }
}
