//! The pattern table: named sub-patterns composed into the compiled regular
//! expressions that drive every pipeline pass.
//!
//! The grammar is deliberately built from small named constants (numeric
//! literal, unit, identifier, escape, URL characters) so each composite
//! pattern can be audited against the CSS token it approximates. Several
//! patterns rely on lookahead assertions, hence `fancy_regex` rather than
//! plain `regex`.

use std::sync::LazyLock;

use fancy_regex::Regex;

/// Placeholder markers. Backtick is not legal CSS syntax; the pipeline
/// rewrites any literal backtick to `%60` before the first marker is
/// inserted, so these can never collide with source text.
pub const TOKEN_TMP: &str = "`TMP`";
pub const TOKEN_NOFLIP_SINGLE: &str = "`NOFLIP_SINGLE`";
pub const TOKEN_NOFLIP_CLASS: &str = "`NOFLIP_CLASS`";
pub const TOKEN_COMMENT: &str = "`COMMENT`";

// Leaf sub-patterns.
const NON_ASCII: &str = r"[^\x20-\x7e]";
const UNICODE: &str = r"(?:\\[0-9a-f]{1,6}(?:\r\n|\s)?)";
const NUM: &str = r"(?:[0-9]*\.[0-9]+|[0-9]+)";
const UNIT: &str = r"(?:em|ex|px|cm|mm|in|pt|pc|deg|rad|grad|ms|s|hz|khz|%)";
const DIRECTION: &str = r"direction\s*:\s*";
const URL_SPECIAL_CHARS: &str = r"[!#$%&*-~]";
const VALID_AFTER_URI_CHARS: &str = r#"["']?\s*"#;
const NON_LETTER: &str = r"(^|[^a-zA-Z])";
const CHARS_WITHIN_SELECTOR: &str = r"[^\}]*?";
const NOFLIP: &str = r"\/\*\!?\s*@noflip\s*\*\/";
// Single or multi-line comment, tolerant of embedded `*` and `/`.
const COMMENT: &str = r"\/\*[^*]*\*+([^\/*][^*]*\*+)*\/";

// Composite sub-patterns. These need runtime assembly, so they live in lazy
// statics rather than consts.
static ESCAPE: LazyLock<String> =
  LazyLock::new(|| format!(r"(?:{UNICODE}|\\[^\r\n\f0-9a-f])"));
static NMSTART: LazyLock<String> =
  LazyLock::new(|| format!("(?:[_a-z]|{}|{})", NON_ASCII, ESCAPE.as_str()));
static NMCHAR: LazyLock<String> =
  LazyLock::new(|| format!("(?:[_a-z0-9-]|{}|{})", NON_ASCII, ESCAPE.as_str()));
static IDENT: LazyLock<String> =
  LazyLock::new(|| format!("-?{}{}*", NMSTART.as_str(), NMCHAR.as_str()));
static QUANT: LazyLock<String> =
  LazyLock::new(|| format!(r"{}(?:\s*{}|{})?", NUM, UNIT, IDENT.as_str()));
static SIGNED_QUANT: LazyLock<String> =
  LazyLock::new(|| format!("((?:-?{})|(?:inherit|auto))", QUANT.as_str()));
static COLOR: LazyLock<String> = LazyLock::new(|| format!("(#?{}+)", NMCHAR.as_str()));
static URL_CHARS: LazyLock<String> = LazyLock::new(|| {
  format!(
    "(?:{}|{}|{})*",
    URL_SPECIAL_CHARS,
    NON_ASCII,
    ESCAPE.as_str()
  )
});
// Rejects a match that is really part of a selector: nothing but selector
// syntax may stand between the word and an opening brace.
static LOOKAHEAD_NOT_OPEN_BRACE: LazyLock<String> = LazyLock::new(|| {
  format!(
    r"(?!({}|\r?\n|\s|#|:|\.|,|\+|>|\(|\))*?\{{)",
    NMCHAR.as_str()
  )
});
// Rejects (or requires) a match inside a URL reference's argument, i.e. one
// followed only by URL characters up to the closing parenthesis.
static LOOKAHEAD_NOT_CLOSING_PAREN: LazyLock<String> = LazyLock::new(|| {
  format!(r"(?!{}?{}\))", URL_CHARS.as_str(), VALID_AFTER_URI_CHARS)
});
static LOOKAHEAD_FOR_CLOSING_PAREN: LazyLock<String> = LazyLock::new(|| {
  format!(r"(?={}?{}\))", URL_CHARS.as_str(), VALID_AFTER_URI_CHARS)
});

pub static COMMENT_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(&format!("(?i){COMMENT}")).unwrap());
pub static NOFLIP_SINGLE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(&format!(
    "(?i)({}{}[^;}}]+;?)",
    NOFLIP,
    LOOKAHEAD_NOT_OPEN_BRACE.as_str()
  ))
  .unwrap()
});
pub static NOFLIP_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(&format!(r"(?i)({}{}\}})", NOFLIP, CHARS_WITHIN_SELECTOR)).unwrap()
});
pub static DIRECTION_LTR_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(&format!("(?i)({DIRECTION})ltr")).unwrap());
pub static DIRECTION_RTL_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(&format!("(?i)({DIRECTION})rtl")).unwrap());
pub static LEFT_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(&format!(
    "(?i){}(left){}{}",
    NON_LETTER,
    LOOKAHEAD_NOT_CLOSING_PAREN.as_str(),
    LOOKAHEAD_NOT_OPEN_BRACE.as_str()
  ))
  .unwrap()
});
pub static RIGHT_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(&format!(
    "(?i){}(right){}{}",
    NON_LETTER,
    LOOKAHEAD_NOT_CLOSING_PAREN.as_str(),
    LOOKAHEAD_NOT_OPEN_BRACE.as_str()
  ))
  .unwrap()
});
pub static LEFT_IN_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(&format!(
    "(?i){}(left){}",
    NON_LETTER,
    LOOKAHEAD_FOR_CLOSING_PAREN.as_str()
  ))
  .unwrap()
});
pub static RIGHT_IN_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(&format!(
    "(?i){}(right){}",
    NON_LETTER,
    LOOKAHEAD_FOR_CLOSING_PAREN.as_str()
  ))
  .unwrap()
});
pub static LTR_IN_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(&format!(
    "(?i){}(ltr){}",
    NON_LETTER,
    LOOKAHEAD_FOR_CLOSING_PAREN.as_str()
  ))
  .unwrap()
});
pub static RTL_IN_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(&format!(
    "(?i){}(rtl){}",
    NON_LETTER,
    LOOKAHEAD_FOR_CLOSING_PAREN.as_str()
  ))
  .unwrap()
});
pub static CURSOR_EAST_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(&format!("(?i){NON_LETTER}([ns]?)e-resize")).unwrap());
pub static CURSOR_WEST_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(&format!("(?i){NON_LETTER}([ns]?)w-resize")).unwrap());
pub static FOUR_NOTATION_QUANT_RE: LazyLock<Regex> = LazyLock::new(|| {
  let q = SIGNED_QUANT.as_str();
  Regex::new(&format!(
    r"(?i)((?:margin|padding|border-width)\s*:\s*){q}(\s+){q}(\s+){q}(\s+){q}"
  ))
  .unwrap()
});
pub static FOUR_NOTATION_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
  let c = COLOR.as_str();
  Regex::new(&format!(r"(?i)(-color\s*:\s*){c}(\s+){c}(\s+){c}(\s+){c}")).unwrap()
});
// The `[^%:;}]` run keeps the match inside a single declaration and away
// from pseudo-selector colons; only the first percentage is horizontal.
pub static BG_HORIZONTAL_PERCENTAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(&format!(
    r"(?i)(background(?:-position)?\s*:\s*[^%:;}}]*?)(-?{})(%\s*(?:{}|{}))",
    NUM,
    QUANT.as_str(),
    IDENT.as_str()
  ))
  .unwrap()
});
pub static BG_HORIZONTAL_PERCENTAGE_X_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(&format!(r"(?i)(background-position-x\s*:\s*)(-?{NUM})(%)")).unwrap()
});
pub static BORDER_RADIUS_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)(border-radius\s*:\s*)([^;]*)").unwrap());
