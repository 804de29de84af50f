//! Property-based test generators using proptest.
//!
//! Operations refer to products by [`Target`] rather than by id, because ids
//! are minted by the store and only known once a sequence is running.

use proptest::prelude::*;
use proptest::sample::Index;

/// Which product an operation aims at.
#[derive(Debug, Clone)]
pub enum Target {
    /// One of the ids handed out so far, deleted ones included.
    Known(Index),
    /// An id the store never produced.
    Unknown(String),
}

impl Target {
    /// Resolves this target against the ids handed out so far.
    pub fn resolve(&self, issued: &[String]) -> String {
        match self {
            Self::Known(index) if !issued.is_empty() => issued[index.index(issued.len())].clone(),
            Self::Known(_) => "never-issued".to_string(),
            Self::Unknown(id) => id.clone(),
        }
    }
}

/// One store operation.
#[derive(Debug, Clone)]
pub enum StoreOp {
    /// Create a product.
    Add,
    /// Partially update a product.
    Update {
        /// Target product.
        target: Target,
        /// New name, empty for unset.
        name: String,
        /// New price, zero for unset.
        price: f64,
    },
    /// Delete a product.
    Delete {
        /// Target product.
        target: Target,
    },
    /// Look up a product.
    Get {
        /// Target product.
        target: Target,
    },
    /// Scan every product.
    GetAll,
}

/// Strategy for generating operation targets.
///
/// Mostly known ids, sometimes ids that were never issued.
pub fn target_strategy() -> impl Strategy<Value = Target> {
    prop_oneof![
        4 => any::<Index>().prop_map(Target::Known),
        1 => "[a-z0-9]{1,12}".prop_map(|s| Target::Unknown(format!("missing-{s}"))),
    ]
}

/// Strategy for update names; empty means unset.
pub fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just(String::new()),
        3 => "[A-Za-z][A-Za-z ]{0,15}",
    ]
}

/// Strategy for update prices; zero means unset.
pub fn price_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        1 => Just(0.0),
        3 => (1u32..100_000).prop_map(|cents| f64::from(cents) / 100.0),
    ]
}

/// Strategy for a single operation.
pub fn op_strategy() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        3 => Just(StoreOp::Add),
        3 => (target_strategy(), name_strategy(), price_strategy())
            .prop_map(|(target, name, price)| StoreOp::Update { target, name, price }),
        2 => target_strategy().prop_map(|target| StoreOp::Delete { target }),
        2 => target_strategy().prop_map(|target| StoreOp::Get { target }),
        1 => Just(StoreOp::GetAll),
    ]
}

/// Strategy for a sequence of up to `max_len` operations.
pub fn op_sequence_strategy(max_len: usize) -> impl Strategy<Value = Vec<StoreOp>> {
    prop::collection::vec(op_strategy(), 0..=max_len)
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum number of operations per sequence.
    pub max_ops: usize,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_ops: 64,
        }
    }
}

impl PropTestConfig {
    /// Creates a config for quick tests.
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_ops: 24,
        }
    }

    /// Converts to proptest config.
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig::with_cases(self.cases)
    }
}
