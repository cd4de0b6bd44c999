//! Tabu Search configuration.

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use tardiness_search::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(100)
///     .with_tabu_len(5)
///     .with_gamma(25.0);
/// assert_eq!(config.max_iterations, 100);
/// assert_eq!(config.tabu_len, 5);
/// assert_eq!(config.gamma, 25.0);
/// ```
#[derive(Debug, Clone)]
pub struct TabuConfig {
    /// Iteration budget `K`. The search performs moves for
    /// `k = 0..=K` unless it runs out of admissible swaps first.
    pub max_iterations: usize,
    /// Tabu-list capacity `L` (number of forbidden swap pairs).
    pub tabu_len: usize,
    /// Tolerated cost degradation for non-aspirational moves: a swap
    /// worsening the current cost by `gamma` or more is inadmissible
    /// unless it produces a new global best. Larger values explore
    /// more worsening moves.
    pub gamma: f64,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tabu_len: 20,
            gamma: 10.0,
        }
    }
}

impl TabuConfig {
    /// Sets the iteration budget `K`.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu-list capacity `L`.
    pub fn with_tabu_len(mut self, len: usize) -> Self {
        self.tabu_len = len;
        self
    }

    /// Sets the degradation threshold `gamma`.
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }
}
