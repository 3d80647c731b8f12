//! Symbol and symbol-pair frequency tables, built in a single pass.

use crate::config::ContextModel;

const ALPHABET: usize = 256;

/// Occurrence count per byte value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Box<[u64; ALPHABET]>,
    total: u64,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self {
            counts: Box::new([0; ALPHABET]),
            total: 0,
        }
    }

    fn increment(&mut self, symbol: u8) {
        self.counts[symbol as usize] += 1;
        self.total += 1;
    }

    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Number of symbols counted (N).
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct byte values observed.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Observed symbols with their counts, in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(symbol, &c)| (symbol as u8, c))
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Occurrence count per (previous, next) symbol pair, as a 256x256 matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalFrequencyTable {
    counts: Vec<u64>,
    total: u64,
}

impl ConditionalFrequencyTable {
    pub fn new() -> Self {
        Self {
            counts: vec![0; ALPHABET * ALPHABET],
            total: 0,
        }
    }

    fn increment(&mut self, previous: u8, next: u8) {
        self.counts[previous as usize * ALPHABET + next as usize] += 1;
        self.total += 1;
    }

    pub fn count(&self, previous: u8, next: u8) -> u64 {
        self.counts[previous as usize * ALPHABET + next as usize]
    }

    /// Successor counts of one context, indexed by the next symbol.
    pub fn row(&self, previous: u8) -> &[u64] {
        let start = previous as usize * ALPHABET;
        &self.counts[start..start + ALPHABET]
    }

    pub fn row_total(&self, previous: u8) -> u64 {
        self.row(previous).iter().sum()
    }

    /// Number of pairs recorded.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn distinct_pairs(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }
}

impl Default for ConditionalFrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Both tables of a finished pass.
#[derive(Debug, Clone)]
pub struct SymbolStatistics {
    pub frequencies: FrequencyTable,
    pub pairs: ConditionalFrequencyTable,
    pub model: ContextModel,
}

/// Tallies symbols and first-order pairs as they stream in.
#[derive(Debug)]
pub struct FrequencyAccumulator {
    frequencies: FrequencyTable,
    pairs: ConditionalFrequencyTable,
    model: ContextModel,
    previous: Option<u8>,
    first: Option<u8>,
}

impl FrequencyAccumulator {
    pub fn new(model: ContextModel) -> Self {
        let previous = match model {
            ContextModel::Sentinel => Some(0),
            ContextModel::Cyclic => None,
        };
        Self {
            frequencies: FrequencyTable::new(),
            pairs: ConditionalFrequencyTable::new(),
            model,
            previous,
            first: None,
        }
    }

    pub fn push(&mut self, symbol: u8) {
        if let Some(previous) = self.previous {
            self.pairs.increment(previous, symbol);
        }
        if self.first.is_none() {
            self.first = Some(symbol);
        }
        self.previous = Some(symbol);
        self.frequencies.increment(symbol);
    }

    pub fn extend(&mut self, data: &[u8]) {
        for &symbol in data {
            self.push(symbol);
        }
    }

    /// Symbols seen so far.
    pub fn total(&self) -> u64 {
        self.frequencies.total()
    }

    pub fn finish(mut self) -> SymbolStatistics {
        if self.model == ContextModel::Cyclic {
            if let (Some(last), Some(first)) = (self.previous, self.first) {
                self.pairs.increment(last, first);
            }
        }
        log::debug!(
            "frequency pass finished: {} symbols, {} distinct, {} distinct pairs",
            self.frequencies.total(),
            self.frequencies.distinct(),
            self.pairs.distinct_pairs()
        );
        SymbolStatistics {
            frequencies: self.frequencies,
            pairs: self.pairs,
            model: self.model,
        }
    }
}
