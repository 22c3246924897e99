use std::error::Error;
use std::fmt;

use crate::core::curves::grammar::{Grammar, Symbol};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpandSequenceError {
    /// Some generation up to `iterations` would hold more than `max_len` symbols.
    IterationTooLarge {
        iterations: u32,
        peak_len: u128,
        max_len: usize,
    },
}

impl fmt::Display for ExpandSequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationTooLarge {
                iterations,
                peak_len,
                max_len,
            } => {
                write!(
                    f,
                    "{} iterations would expand to {} symbols, more than the limit of {}",
                    iterations, peak_len, max_len
                )
            }
        }
    }
}

impl Error for ExpandSequenceError {}

/// The symbols one input symbol is rewritten into.
pub(crate) enum Production {
    Rule(std::str::Chars<'static>),
    Identity(std::iter::Once<Symbol>),
}

impl Iterator for Production {
    type Item = Symbol;

    #[inline]
    fn next(&mut self) -> Option<Symbol> {
        match self {
            Self::Rule(chars) => chars.next(),
            Self::Identity(once) => once.next(),
        }
    }
}

#[inline]
pub(crate) fn produce(grammar: &Grammar, symbol: Symbol) -> Production {
    match grammar.rule(symbol) {
        Some(replacement) => Production::Rule(replacement.chars()),
        None => Production::Identity(std::iter::once(symbol)),
    }
}

/// Sequence lengths predicted from per-symbol counts, without expanding.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LengthPrediction {
    /// Length of the requested generation.
    pub final_len: u128,
    /// Longest generation on the way there, the axiom included.
    pub peak_len: u128,
}

/// Predicts how long `iterations` generations of `grammar` will be.
///
/// Each generation's symbol counts follow from the previous generation's
/// counts and the number of times each symbol appears in each rule, so the
/// work is proportional to the alphabet size rather than the sequence length.
/// Counts saturate at `u128::MAX`.
#[must_use]
pub fn predict_len(grammar: &Grammar, iterations: u32) -> LengthPrediction {
    let mut alphabet: Vec<Symbol> = grammar
        .axiom
        .chars()
        .chain(grammar.rules.iter().flat_map(|(s, replacement)| std::iter::once(*s).chain(replacement.chars())))
        .collect();
    alphabet.sort_unstable();
    alphabet.dedup();

    let index_of = |symbol: Symbol| alphabet.binary_search(&symbol).unwrap_or_default();

    // transitions[s] lists (t, n): one `s` becomes `n` copies of `t`.
    let transitions: Vec<Vec<(usize, u128)>> = alphabet
        .iter()
        .map(|&symbol| {
            let mut targets: Vec<(usize, u128)> = Vec::new();
            for target in produce(grammar, symbol) {
                let t = index_of(target);
                match targets.iter_mut().find(|(i, _)| *i == t) {
                    Some((_, n)) => *n += 1,
                    None => targets.push((t, 1)),
                }
            }
            targets
        })
        .collect();

    let mut counts = vec![0_u128; alphabet.len()];
    for symbol in grammar.axiom.chars() {
        counts[index_of(symbol)] += 1;
    }

    let total = |counts: &[u128]| counts.iter().fold(0_u128, |acc, n| acc.saturating_add(*n));
    let mut peak_len = total(&counts);

    for _ in 0..iterations {
        let mut next = vec![0_u128; alphabet.len()];
        for (s, targets) in transitions.iter().enumerate() {
            for &(t, n) in targets {
                next[t] = next[t].saturating_add(counts[s].saturating_mul(n));
            }
        }

        if next == counts {
            break;
        }

        counts = next;
        peak_len = peak_len.max(total(&counts));
    }

    LengthPrediction {
        final_len: total(&counts),
        peak_len,
    }
}

/// Length of the symbol sequence after `iterations` generations.
#[must_use]
pub fn expanded_len(grammar: &Grammar, iterations: u32) -> u128 {
    predict_len(grammar, iterations).final_len
}

pub(crate) fn check_len(
    grammar: &Grammar,
    iterations: u32,
    max_len: usize,
) -> Result<LengthPrediction, ExpandSequenceError> {
    let prediction = predict_len(grammar, iterations);

    if prediction.peak_len > max_len as u128 {
        return Err(ExpandSequenceError::IterationTooLarge {
            iterations,
            peak_len: prediction.peak_len,
            max_len,
        });
    }

    Ok(prediction)
}

/// Rewrites the axiom `iterations` times.
///
/// Every generation is built from the previous one by substituting all
/// symbols at once; symbols without a rule are copied through. Fails before
/// allocating anything if any generation would exceed `max_len` symbols.
pub fn expand_sequence(
    grammar: &Grammar,
    iterations: u32,
    max_len: usize,
) -> Result<Vec<Symbol>, ExpandSequenceError> {
    let prediction = check_len(grammar, iterations, max_len)?;

    let mut current = grammar.axiom_symbols();

    for _ in 0..iterations {
        let mut next: Vec<Symbol> = Vec::with_capacity(current.len());
        next.extend(current.iter().flat_map(|&symbol| produce(grammar, symbol)));

        if next == current {
            break;
        }

        current = next;
    }

    debug_assert_eq!(current.len() as u128, prediction.final_len);

    Ok(current)
}
