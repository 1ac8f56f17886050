//! Reversible tokenizer: swaps pattern matches for placeholder markers so
//! the rewrite passes can run over the remaining text, then restores the
//! original fragments verbatim.

use fancy_regex::{Captures, Regex};

/// Protects text spans from the rewrite passes.
///
/// `tokenize` logs every matched fragment in left-to-right order and leaves
/// a marker in its place; `detokenize` replaces the k-th marker occurrence
/// with the k-th logged fragment. The passes in between never touch marker
/// text, so the pairing stays exact. One instance per protected category per
/// transform invocation; instances are never shared or reused.
pub(crate) struct Tokenizer {
  regex: &'static Regex,
  token: &'static str,
  matches: Vec<String>,
}

impl Tokenizer {
  pub(crate) fn new(regex: &'static Regex, token: &'static str) -> Self {
    Tokenizer {
      regex,
      token,
      matches: Vec::new(),
    }
  }

  /// Replace matching spans with the placeholder marker, logging each
  /// original fragment in match order.
  pub(crate) fn tokenize(&mut self, css: &str) -> String {
    let token = self.token;
    let matches = &mut self.matches;
    self
      .regex
      .replace_all(css, |caps: &Captures| {
        matches.push(caps[0].to_string());
        token
      })
      .into_owned()
  }

  /// Restore the logged fragments into the marker occurrences, in order.
  ///
  /// A marker without a logged fragment means a rewrite pass altered marker
  /// text; that is a pipeline bug, not bad input.
  pub(crate) fn detokenize(&mut self, css: &str) -> String {
    let mut fragments = std::mem::take(&mut self.matches).into_iter();
    let mut out = String::with_capacity(css.len());
    let mut rest = css;
    while let Some(pos) = rest.find(self.token) {
      let fragment = fragments
        .next()
        .expect("placeholder marker without a logged fragment");
      out.push_str(&rest[..pos]);
      out.push_str(&fragment);
      rest = &rest[pos + self.token.len()..];
    }
    out.push_str(rest);
    debug_assert!(
      fragments.next().is_none(),
      "logged fragment was never restored"
    );
    out
  }
}
