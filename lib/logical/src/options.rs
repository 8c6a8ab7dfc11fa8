/// The algorithm used for evaluating an equi-join.
///
/// Both algorithms produce the same tuples in the same order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum JoinAlgorithm {
    /// Builds a hash index over the join keys of the right input and probes it for every left
    /// tuple.
    #[default]
    Hash,
    /// Compares every pair of left and right tuples.
    NestedLoop,
}

/// Options for executing a mapping pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionOptions {
    /// The algorithm used for all equi-joins in the pipeline.
    pub join_algorithm: JoinAlgorithm,
}

impl ExecutionOptions {
    /// Returns a copy of the options that uses `join_algorithm`.
    #[must_use]
    pub fn with_join_algorithm(mut self, join_algorithm: JoinAlgorithm) -> Self {
        self.join_algorithm = join_algorithm;
        self
    }
}
