//! Shannon entropy estimators over frequency tables, in bits per symbol.

use crate::frequency::{ConditionalFrequencyTable, FrequencyTable};

/// Zero-order entropy H(X) of the observed symbol distribution.
///
/// Returns `0.0` for an empty table.
pub fn entropy(frequencies: &FrequencyTable) -> f64 {
    if frequencies.is_empty() {
        return 0.0;
    }

    let total = frequencies.total() as f64;
    let mut entropy = 0.0;
    for (_, count) in frequencies.iter() {
        let probability = count as f64 / total;
        entropy -= probability * probability.log2();
    }

    entropy
}

/// First-order conditional entropy H(Xn | Xn-1).
///
/// Each context `i` observed in `frequencies` contributes the entropy of its
/// successor row, normalised by the marginal count `c_i` and weighted by
/// `c_i / N`. Rows whose context never occurs as a symbol are not visited.
/// Returns `0.0` for an empty table.
pub fn conditional_entropy(pairs: &ConditionalFrequencyTable, frequencies: &FrequencyTable) -> f64 {
    if frequencies.is_empty() {
        return 0.0;
    }

    let total = frequencies.total() as f64;
    let mut entropy = 0.0;
    for (context, context_count) in frequencies.iter() {
        let context_count = context_count as f64;
        let mut local = 0.0;
        for &count in pairs.row(context).iter().filter(|&&c| c > 0) {
            let probability = count as f64 / context_count;
            local -= probability * probability.log2();
        }
        entropy += (context_count / total) * local;
    }

    entropy
}

/// Pair mass recorded under contexts that never occur as a symbol.
///
/// These pairs are invisible to [`conditional_entropy`].
pub fn skipped_pairs(pairs: &ConditionalFrequencyTable, frequencies: &FrequencyTable) -> u64 {
    (0..=255u8)
        .filter(|&context| frequencies.count(context) == 0)
        .map(|context| pairs.row_total(context))
        .sum()
}
