//! Removal of Inter `android:fontFamily` attributes from layout XML.

use std::sync::LazyLock;

use regex::Regex;

use crate::transform::{Transform, rewrite};

/// An `android:fontFamily` attribute pointing at an `@font/inter_*` resource,
/// together with the whitespace that separates it from the previous token.
/// Changes are reported at the attribute itself.
static INTER_FONT_FAMILY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s*(?P<at>android:fontFamily="@font/inter_[^"]+")"#)
        .expect("font family pattern is valid")
});

/// Remove every Inter `android:fontFamily` attribute from `content`
///
/// The attribute and all whitespace before it are dropped, including blank
/// lines between it and the previous token; whatever follows keeps its own
/// indentation. Content without a match is returned as-is.
///
/// # Example
/// ```
/// use layout_patch::strip_font_family;
///
/// let xml = "<TextView\n    android:fontFamily=\"@font/inter_bold\"\n    android:text=\"Hi\" />";
/// let result = strip_font_family(xml);
/// assert_eq!(result.content, "<TextView\n    android:text=\"Hi\" />");
/// assert_eq!(result.change_count(), 1);
/// ```
pub fn strip_font_family(content: &str) -> Transform {
    rewrite(content, &INTER_FONT_FAMILY, |_| String::new())
}
