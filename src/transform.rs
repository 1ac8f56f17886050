//! The ordered rewrite pipeline. Pass order is a correctness invariant:
//! protected regions go in before any directional rewrite runs and come out
//! in reverse order, and the bidirectional swaps stage through a temporary
//! marker so a freshly written value is never swapped back.

use fancy_regex::Captures;

use crate::patterns::{
  BG_HORIZONTAL_PERCENTAGE_RE, BG_HORIZONTAL_PERCENTAGE_X_RE, BORDER_RADIUS_RE, COMMENT_RE,
  CURSOR_EAST_RE, CURSOR_WEST_RE, DIRECTION_LTR_RE, DIRECTION_RTL_RE, FOUR_NOTATION_COLOR_RE,
  FOUR_NOTATION_QUANT_RE, LEFT_IN_URL_RE, LEFT_RE, LTR_IN_URL_RE, NOFLIP_CLASS_RE,
  NOFLIP_SINGLE_RE, RIGHT_IN_URL_RE, RIGHT_RE, RTL_IN_URL_RE, TOKEN_COMMENT, TOKEN_NOFLIP_CLASS,
  TOKEN_NOFLIP_SINGLE, TOKEN_TMP,
};
use crate::tokenizer::Tokenizer;

/// Options for [`transform`].
///
/// Both default to off: filenames routinely contain directional words
/// (`arrow-left.png`) that are usually not meant to be flipped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
  /// Swap `ltr` and `rtl` inside `url(...)` arguments.
  pub swap_ltr_rtl_in_url: bool,
  /// Swap `left` and `right` inside `url(...)` arguments.
  pub swap_left_right_in_url: bool,
}

/// Transform a left-to-right stylesheet into its right-to-left mirror.
///
/// Total over arbitrary input: text that fails to resemble CSS passes
/// through with only the matching patterns applied. Comments and spans
/// annotated with `/* @noflip */` come out byte-identical.
#[tracing::instrument(level = "trace", skip_all, fields(len = css.len()))]
pub fn transform(css: &str, options: TransformOptions) -> String {
  let mut noflip_single = Tokenizer::new(&NOFLIP_SINGLE_RE, TOKEN_NOFLIP_SINGLE);
  let mut noflip_class = Tokenizer::new(&NOFLIP_CLASS_RE, TOKEN_NOFLIP_CLASS);
  let mut comments = Tokenizer::new(&COMMENT_RE, TOKEN_COMMENT);

  // Backtick is the reserved marker character. It is not legal CSS outside
  // url() arguments, where %60 is equivalent.
  let css = css.replace('`', "%60");

  // The @noflip annotation is itself a comment, so no-flip spans must be
  // captured before the generic comment pass swallows the annotation.
  let css = noflip_single.tokenize(&css);
  let css = noflip_class.tokenize(&css);
  let mut css = comments.tokenize(&css);

  if options.swap_ltr_rtl_in_url {
    css = LTR_IN_URL_RE.replace_all(&css, "${1}`TMP`").into_owned();
    css = RTL_IN_URL_RE.replace_all(&css, "${1}ltr").into_owned();
    css = css.replace(TOKEN_TMP, "rtl");
  }

  if options.swap_left_right_in_url {
    css = LEFT_IN_URL_RE.replace_all(&css, "${1}`TMP`").into_owned();
    css = RIGHT_IN_URL_RE.replace_all(&css, "${1}left").into_owned();
    css = css.replace(TOKEN_TMP, "right");
  }

  // direction: ltr <-> rtl.
  css = DIRECTION_LTR_RE.replace_all(&css, "${1}`TMP`").into_owned();
  css = DIRECTION_RTL_RE.replace_all(&css, "${1}ltr").into_owned();
  css = css.replace(TOKEN_TMP, "rtl");

  // left <-> right, covering property names and values alike.
  css = LEFT_RE.replace_all(&css, "${1}`TMP`").into_owned();
  css = RIGHT_RE.replace_all(&css, "${1}left").into_owned();
  css = css.replace(TOKEN_TMP, "right");

  // cursor: ne-resize <-> nw-resize, keeping the n/s prefix.
  css = CURSOR_EAST_RE
    .replace_all(&css, "${1}${2}`TMP`")
    .into_owned();
  css = CURSOR_WEST_RE
    .replace_all(&css, "${1}${2}e-resize")
    .into_owned();
  css = css.replace(TOKEN_TMP, "w-resize");

  css = BORDER_RADIUS_RE
    .replace_all(&css, flip_border_radius)
    .into_owned();

  // Swap the second and fourth value of four-value shorthands, leaving the
  // original whitespace runs in place.
  css = FOUR_NOTATION_QUANT_RE
    .replace_all(&css, "${1}${2}${3}${8}${5}${6}${7}${4}")
    .into_owned();
  css = FOUR_NOTATION_COLOR_RE
    .replace_all(&css, "${1}${2}${3}${8}${5}${6}${7}${4}")
    .into_owned();

  css = BG_HORIZONTAL_PERCENTAGE_RE
    .replace_all(&css, flip_background_position)
    .into_owned();
  css = BG_HORIZONTAL_PERCENTAGE_X_RE
    .replace_all(&css, flip_background_position)
    .into_owned();

  // Restore in reverse order of protection.
  let css = comments.detokenize(&css);
  let css = noflip_class.detokenize(&css);
  noflip_single.detokenize(&css)
}

/// Mirror the horizontal percentage of a background position: `p%` becomes
/// `(100 - p)%`. Percentages are parsed as integers; a fractional value
/// fails the parse and is treated as 0, as in the original implementation.
fn flip_background_position(caps: &Captures) -> String {
  let value = caps[2].parse::<i32>().unwrap_or(0);
  format!("{}{}{}", &caps[1], 100 - value, &caps[3])
}

/// Reorder border-radius corner values. The value list is split on
/// whitespace and re-joined with single spaces.
fn flip_border_radius(caps: &Captures) -> String {
  let values: Vec<&str> = caps[2].split_whitespace().collect();
  let reordered: Vec<&str> = match values[..] {
    [a, b, c, d] => vec![b, a, d, c],
    [a, b, c] => vec![b, a, c],
    [a, b] => vec![b, a],
    [a] => vec![a],
    _ => Vec::new(),
  };
  format!("{}{}", &caps[1], reordered.join(" "))
}

#[cfg(test)]
mod tests {
  use super::{transform, TransformOptions};

  fn flip(css: &str) -> String {
    transform(css, TransformOptions::default())
  }

  #[test]
  fn escapes_the_reserved_marker_character() {
    assert_eq!(flip("content: '`'"), "content: '%60'");
  }

  #[test]
  fn options_default_to_not_touching_urls() {
    let options = TransformOptions::default();
    assert!(!options.swap_ltr_rtl_in_url);
    assert!(!options.swap_left_right_in_url);
  }

  #[test]
  fn is_identity_on_directionally_neutral_input() {
    assert_eq!(flip("body { color: #777 }"), "body { color: #777 }");
    assert_eq!(flip(""), "");
    assert_eq!(flip("not css at all"), "not css at all");
  }
}
