//! Example-driven verification helpers for functions presumed to be mappings.
//!
//! Each helper iterates its examples in input order and fails fast on the
//! first mismatch, wrapping the underlying equality failure with the 1-based
//! example index that triggered it.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::assertions::equal;
use crate::errors::Failure;
use crate::hash::stable_hash_string;
use crate::serde::to_canonical_json_string;

/// Asserts `fwd(input)` equals the expected output for every example pair.
pub fn forward<A, B, F>(mut fwd: F, pairs: &[(A, B)]) -> Result<(), Failure>
where
    A: Serialize,
    B: Serialize,
    F: FnMut(&A) -> B,
{
    for (index, (input, expected)) in pairs.iter().enumerate() {
        equal(&fwd(input), expected, "")
            .map_err(|failure| failure.with_example("forward", index + 1))?;
    }
    Ok(())
}

/// Asserts `bwd(expectedOutput)` equals the input for every example pair.
pub fn backward<A, B, F>(mut bwd: F, pairs: &[(A, B)]) -> Result<(), Failure>
where
    A: Serialize,
    B: Serialize,
    F: FnMut(&B) -> A,
{
    for (index, (input, expected)) in pairs.iter().enumerate() {
        equal(&bwd(expected), input, "")
            .map_err(|failure| failure.with_example("backward", index + 1))?;
    }
    Ok(())
}

/// Asserts the round-trip law `bwd(fwd(item))` equals `item` for every item.
pub fn inverses<A, B, F, G>(mut fwd: F, mut bwd: G, items: &[A]) -> Result<(), Failure>
where
    A: Serialize,
    B: Serialize,
    F: FnMut(&A) -> B,
    G: FnMut(&B) -> A,
{
    for (index, item) in items.iter().enumerate() {
        equal(&bwd(&fwd(item)), item, "")
            .map_err(|failure| failure.with_example("inverses", index + 1))?;
    }
    Ok(())
}

/// Asserts that `fwd` produces no duplicate outputs over the sampled items.
///
/// Outputs are identified by their deep structural hash, so two distinct
/// structured outputs never collapse even when a lossy string rendering of
/// them would coincide. On a duplicate the failure names the previously seen
/// input, the current input, and the shared output.
pub fn injects<A, B, F>(mut fwd: F, items: &[A]) -> Result<(), Failure>
where
    A: Serialize,
    B: Serialize,
    F: FnMut(&A) -> B,
{
    let mut seen: BTreeMap<String, &A> = BTreeMap::new();
    for item in items {
        let result = fwd(item);
        let key = stable_hash_string(&result)?;
        if let Some(previous) = seen.get(&key) {
            return Err(Failure::new(format!(
                "duplicate result:\n  {}\n  {}\nboth map to\n  {}",
                to_canonical_json_string(previous)?,
                to_canonical_json_string(item)?,
                to_canonical_json_string(&result)?
            )));
        }
        seen.insert(key, item);
    }
    Ok(())
}
