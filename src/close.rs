//! Repair of self-closing tags whose `/>` went missing.
//!
//! The signature of the damage is an `android:` attribute that runs straight
//! into a line break and the next element, e.g.
//!
//! ```text
//! <ImageView
//!     android:src="@drawable/logo"
//!     <TextView
//! ```
//!
//! Only following elements whose name starts with an uppercase letter are
//! treated as siblings. Framework widgets such as `TextView` qualify; fully
//! qualified custom views (`com.example.Badge`) do not.

use std::sync::LazyLock;

use regex::Regex;

use crate::transform::{Transform, rewrite};

/// `android:name="value"`, whitespace containing a line break, then `<` and
/// an uppercase letter.
static DANGLING_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?P<at>android:\w+="[^"]+")(\s*\n\s*)(<[A-Z])"#)
        .expect("dangling attribute pattern is valid")
});

const SELF_CLOSE: &str = " />";

/// Insert ` />` after every attribute left dangling before a sibling tag
///
/// Whitespace between the attribute and the next tag is preserved exactly.
/// Anything not matching the damage signature is left alone; the result is
/// not checked for well-formedness.
pub fn close_dangling_tags(content: &str) -> Transform {
    rewrite(content, &DANGLING_ATTRIBUTE, |caps| {
        format!("{}{}{}{}", &caps[1], SELF_CLOSE, &caps[2], &caps[3])
    })
}
