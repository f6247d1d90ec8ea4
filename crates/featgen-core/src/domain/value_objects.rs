//! Domain value objects: FeatureName and FeatureLayout.
//!
//! # Design
//!
//! These are pure value types: equality-by-value, no identity, no I/O.
//! `FeatureName` is computed once from user input and every casing form is
//! derived eagerly so templates and paths never re-derive it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

// ── FeatureName ───────────────────────────────────────────────────────────────

/// A feature name and its canonical casing forms.
///
/// `snake_case` feeds paths and file names; `pascal_case` feeds generated type
/// identifiers. Both are deterministic functions of the original input.
///
/// | Input            | snake_case       | pascal_case     |
/// |------------------|------------------|-----------------|
/// | `"Order History"`| `order_history`  | `OrderHistory`  |
/// | `"userProfile"`  | `user_profile`   | `Userprofile`   |
/// | `"cart_item"`    | `cart_item`      | `CartItem`      |
/// | `"foo_Bar"`      | `foo__bar`       | `FooBar`        |
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureName {
    original: String,
    snake_case: String,
    pascal_case: String,
}

impl FeatureName {
    /// Normalize free-form input. Never fails; malformed input yields a
    /// degenerate (possibly empty) result.
    pub fn new(raw: impl Into<String>) -> Self {
        let original = raw.into();
        let snake_case = to_snake_case(&original);
        let pascal_case = to_pascal_case(&original);
        Self {
            original,
            snake_case,
            pascal_case,
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn snake_case(&self) -> &str {
        &self.snake_case
    }

    pub fn pascal_case(&self) -> &str {
        &self.pascal_case
    }

    /// Uppercased snake form, used for config section headers.
    pub fn screaming_snake_case(&self) -> String {
        self.snake_case.to_uppercase()
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

/// Convert to snake_case by treating the input as already cased.
///
/// ## Rules
///
/// 1. An uppercase letter that is not the first character gets a `_` in
///    front of it, unless it follows a space (the space becomes the
///    separator in step 3).
/// 2. Every letter is lowercased.
/// 3. Every space becomes `_`.
///
/// An existing `_` before an uppercase letter is not collapsed, so
/// `"foo_Bar"` becomes `"foo__bar"`.
fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;

    for (idx, c) in s.chars().enumerate() {
        if c.is_uppercase() && idx > 0 && prev != Some(' ') {
            out.push('_');
        }
        out.extend(c.to_lowercase());
        prev = Some(c);
    }

    out.replace(' ', "_")
}

/// Convert to PascalCase.
///
/// Splits on runs of `_` or whitespace, then uppercases the first character
/// of each word and lowercases the rest. Empty words vanish.
fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            // to_uppercase handles Unicode correctly (e.g., "ß" -> "SS")
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

// ── FeatureLayout ─────────────────────────────────────────────────────────────

/// Where features live inside a project.
///
/// The default is the conventional `lib/src/features` production root with a
/// mirrored `test/src/features` tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureLayout {
    pub base_path: String,
    pub test_base_path: String,
}

impl FeatureLayout {
    pub const DEFAULT_BASE_PATH: &'static str = "lib/src/features";
    pub const DEFAULT_TEST_BASE_PATH: &'static str = "test/src/features";

    pub fn new(base_path: impl Into<String>, test_base_path: impl Into<String>) -> Self {
        Self {
            base_path: trim_slashes(base_path.into()),
            test_base_path: trim_slashes(test_base_path.into()),
        }
    }

    /// `<base_path>/<snake>`
    pub fn feature_root(&self, name: &FeatureName) -> PathBuf {
        PathBuf::from(&self.base_path).join(name.snake_case())
    }

    /// `<test_base_path>/<snake>`
    pub fn test_root(&self, name: &FeatureName) -> PathBuf {
        PathBuf::from(&self.test_base_path).join(name.snake_case())
    }

    /// The marker that identifies a feature inside the index config.
    ///
    /// Always `/`-separated regardless of platform since it is matched
    /// against YAML text.
    pub fn registration_marker(&self, name: &FeatureName) -> String {
        format!("{}/{}", self.base_path, name.snake_case())
    }
}

impl Default for FeatureLayout {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_PATH, Self::DEFAULT_TEST_BASE_PATH)
    }
}

fn trim_slashes(path: String) -> String {
    path.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_converges_to_snake() {
        let name = FeatureName::new("Order History");
        assert_eq!(name.snake_case(), "order_history");
        assert_eq!(name.pascal_case(), "OrderHistory");
    }

    #[test]
    fn lower_words_with_space() {
        let name = FeatureName::new("user profile");
        assert_eq!(name.snake_case(), "user_profile");
        assert_eq!(name.pascal_case(), "UserProfile");
    }

    #[test]
    fn camel_case_input_splits_on_capitals() {
        let name = FeatureName::new("UserProfile");
        assert_eq!(name.snake_case(), "user_profile");
        // Pascal form only splits on explicit separators.
        assert_eq!(name.pascal_case(), "Userprofile");
    }

    #[test]
    fn snake_input_is_preserved() {
        let name = FeatureName::new("cart_item");
        assert_eq!(name.snake_case(), "cart_item");
        assert_eq!(name.pascal_case(), "CartItem");
    }

    #[test]
    fn underscore_before_capital_is_doubled() {
        let name = FeatureName::new("foo_Bar");
        assert_eq!(name.snake_case(), "foo__bar");
        assert_eq!(name.pascal_case(), "FooBar");
    }

    #[test]
    fn consecutive_capitals_each_get_separator() {
        assert_eq!(FeatureName::new("ABC").snake_case(), "a_b_c");
    }

    #[test]
    fn leading_and_doubled_separators_are_skipped_in_pascal() {
        let name = FeatureName::new("__order  history_");
        assert_eq!(name.pascal_case(), "OrderHistory");
    }

    #[test]
    fn degenerate_inputs_do_not_fail() {
        let empty = FeatureName::new("");
        assert_eq!(empty.snake_case(), "");
        assert_eq!(empty.pascal_case(), "");

        let separators = FeatureName::new("_ _");
        assert_eq!(separators.pascal_case(), "");
        assert!(!separators.snake_case().contains(' '));
    }

    #[test]
    fn snake_case_never_has_uppercase_or_spaces() {
        for raw in [
            "Order History",
            "HTTP Client",
            "already_snake",
            "  Leading Space",
            "MiXeD cAsE Name",
            "Émile Zola",
            "x",
        ] {
            let snake = FeatureName::new(raw).snake_case().to_string();
            assert!(!snake.contains(' '), "space in {snake:?} from {raw:?}");
            assert!(
                !snake.chars().any(char::is_uppercase),
                "uppercase in {snake:?} from {raw:?}"
            );
        }
    }

    #[test]
    fn pascal_matches_capitalized_snake_words() {
        for raw in ["user profile", "order_history", "a b c", "shopping cart item"] {
            let name = FeatureName::new(raw);
            let rebuilt: String = name.snake_case().split('_').map(capitalize).collect();
            assert_eq!(name.pascal_case(), rebuilt, "input {raw:?}");
        }
    }

    #[test]
    fn screaming_snake_is_uppercased_snake() {
        assert_eq!(
            FeatureName::new("Order History").screaming_snake_case(),
            "ORDER_HISTORY"
        );
    }

    #[test]
    fn display_shows_original_input() {
        assert_eq!(FeatureName::new("Order History").to_string(), "Order History");
    }

    #[test]
    fn layout_defaults_and_roots() {
        let layout = FeatureLayout::default();
        let name = FeatureName::new("order history");
        assert_eq!(
            layout.feature_root(&name),
            PathBuf::from("lib/src/features/order_history")
        );
        assert_eq!(
            layout.test_root(&name),
            PathBuf::from("test/src/features/order_history")
        );
        assert_eq!(
            layout.registration_marker(&name),
            "lib/src/features/order_history"
        );
    }

    #[test]
    fn layout_trims_trailing_slash() {
        let layout = FeatureLayout::new("lib/features/", "test/features//");
        assert_eq!(layout.base_path, "lib/features");
        assert_eq!(layout.test_base_path, "test/features");
    }
}
