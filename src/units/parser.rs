//! Parsing and rendering of symbolic unit expressions.
//!
//! The grammar: terms are separated by `*`, a term is a symbol optionally
//! followed by `^` and a signed integer exponent, and at most one `/` per
//! nesting level flips the sign of everything after it. A denominator may be
//! wrapped in parentheses, so `m*kg/s^2`, `A/(B*C)`, and `(((B)))` all
//! parse.
//!
//! Rendering is the inverse, normalized: positive-exponent terms first in
//! insertion order joined by `*` (with `^e` only for e > 1), then `/` and the
//! negative-exponent terms with their signs dropped, parenthesized when the
//! denominator has more than one term. When every exponent is negative there
//! is no numerator to hang a `/` on, so terms render with explicit negative
//! exponents (`s^-1`).

use crate::error::UnitError;
use std::fmt;

const DOT: char = '*';
const EXPONENT: char = '^';
const SOLIDUS: char = '/';

/// Accumulates unit symbols and exponents from parsed expressions.
///
/// Appending an existing symbol merges exponents; terms that cancel to zero
/// stay in the list but vanish from the rendering. Terms keep their
/// insertion order.
#[derive(Clone, Debug, Default)]
pub struct UnitParser {
    terms: Vec<(String, i32)>,
}

impl UnitParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `expr` and merge its terms.
    ///
    /// # Errors
    /// [`UnitError::Parse`] on unbalanced parentheses or a malformed
    /// exponent.
    pub fn append(&mut self, expr: &str) -> Result<(), UnitError> {
        self.parse(expr, 1)
    }

    /// Parse `expr` with every exponent negated, as if the whole expression
    /// were a divisor.
    ///
    /// # Errors
    /// Same as [`UnitParser::append`].
    pub fn append_flipped(&mut self, expr: &str) -> Result<(), UnitError> {
        self.parse(expr, -1)
    }

    /// Merge a single `symbol^exponent` term.
    ///
    /// # Errors
    /// [`UnitError::UnexpectedSymbol`] if `symbol` contains a separator
    /// character (`*`, `/`, `^`).
    pub fn append_term(&mut self, symbol: &str, exponent: i32) -> Result<(), UnitError> {
        if symbol.contains([DOT, SOLIDUS, EXPONENT]) {
            return Err(UnitError::UnexpectedSymbol(symbol.to_string()));
        }
        if let Some(entry) = self.terms.iter_mut().find(|(s, _)| s == symbol) {
            entry.1 += exponent;
        } else {
            self.terms.push((symbol.to_string(), exponent));
        }
        Ok(())
    }

    /// The accumulated `(symbol, exponent)` terms, in insertion order.
    pub fn terms(&self) -> &[(String, i32)] {
        &self.terms
    }

    fn parse(&mut self, expr: &str, flip: i32) -> Result<(), UnitError> {
        // split into numerator and denominator on the first solidus
        let (numerator, denominator) = match expr.split_once(SOLIDUS) {
            Some((n, d)) => (n.trim(), Some(d)),
            None => (expr.trim(), None),
        };

        // a parenthesized group re-parses as a whole
        if let Some(rest) = numerator.strip_prefix('(') {
            let Some(inner) = rest.strip_suffix(')') else {
                return Err(UnitError::Parse(format!(
                    "expected ) at the end of {numerator}"
                )));
            };
            self.parse(inner, flip)?;
        } else if numerator.ends_with(')') {
            return Err(UnitError::Parse(format!(
                "missing ( at the beginning of {numerator}"
            )));
        } else {
            for term in numerator.split(DOT) {
                let term = term.trim();
                let (symbol, exponent) = match term.split_once(EXPONENT) {
                    Some((sym, exp)) => {
                        let exp: i32 = exp.trim().parse().map_err(|_| {
                            UnitError::Parse(format!("malformed exponent in term {term:?}"))
                        })?;
                        (sym.trim(), flip * exp)
                    }
                    None => (term, flip),
                };
                self.append_term(symbol, exponent)?;
            }
        }

        // the denominator parses with the sign flipped
        if let Some(d) = denominator {
            self.parse(d, -flip)?;
        }
        Ok(())
    }
}

impl fmt::Display for UnitParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_terms(&self.terms))
    }
}

/// Render `(symbol, exponent)` terms in the normalized `m*kg/s^2` form.
pub(crate) fn render_terms(terms: &[(String, i32)]) -> String {
    let numerator: Vec<&(String, i32)> = terms.iter().filter(|(_, e)| *e > 0).collect();
    let denominator: Vec<&(String, i32)> = terms.iter().filter(|(_, e)| *e < 0).collect();

    if numerator.is_empty() {
        // nothing to hang a solidus on: render raw negative exponents
        return denominator
            .iter()
            .map(|(s, e)| format!("{s}{EXPONENT}{e}"))
            .collect::<Vec<_>>()
            .join(&DOT.to_string());
    }

    let mut out = numerator
        .iter()
        .map(|(s, e)| {
            if *e == 1 {
                s.clone()
            } else {
                format!("{s}{EXPONENT}{e}")
            }
        })
        .collect::<Vec<_>>()
        .join(&DOT.to_string());

    if !denominator.is_empty() {
        let den = denominator
            .iter()
            .map(|(s, e)| {
                if *e == -1 {
                    s.clone()
                } else {
                    format!("{s}{EXPONENT}{}", -e)
                }
            })
            .collect::<Vec<_>>()
            .join(&DOT.to_string());
        out.push(SOLIDUS);
        if denominator.len() > 1 {
            out.push('(');
            out.push_str(&den);
            out.push(')');
        } else {
            out.push_str(&den);
        }
    }
    out
}
