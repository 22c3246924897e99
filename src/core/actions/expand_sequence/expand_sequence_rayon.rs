use rayon::prelude::*;

use crate::core::actions::expand_sequence::expand_sequence::{ExpandSequenceError, check_len, produce};
use crate::core::curves::grammar::{Grammar, Symbol};

/// Expands the axiom like [`expand_sequence`](super::expand_sequence::expand_sequence),
/// computing each generation with rayon's work-stealing scheduler.
///
/// The output is identical to the sequential expander: rayon keeps the input
/// order when collecting.
pub fn expand_sequence_rayon(
    grammar: &Grammar,
    iterations: u32,
    max_len: usize,
) -> Result<Vec<Symbol>, ExpandSequenceError> {
    check_len(grammar, iterations, max_len)?;

    let mut current = grammar.axiom_symbols();

    for _ in 0..iterations {
        let next: Vec<Symbol> = current
            .par_iter()
            .flat_map_iter(|&symbol| produce(grammar, symbol))
            .collect();

        if next == current {
            break;
        }

        current = next;
    }

    Ok(current)
}
