//! RVNS configuration.

/// Configuration parameters for Randomized Variable Neighborhood Search.
///
/// # Examples
///
/// ```
/// use tardiness_search::rvns::RvnsConfig;
///
/// let config = RvnsConfig::default()
///     .with_max_iterations(200)
///     .with_max_neighborhood(8)
///     .with_seed(7)
///     .with_refinement(true);
/// assert_eq!(config.max_iterations, 200);
/// assert_eq!(config.max_neighborhood, Some(8));
/// assert_eq!(config.seed, 7);
/// assert!(config.refinement);
/// ```
#[derive(Debug, Clone)]
pub struct RvnsConfig {
    /// Outer iteration budget `K`. Every iteration runs to completion;
    /// RVNS has no early termination.
    pub max_iterations: usize,
    /// Largest neighborhood index `max_I`. `None` selects the
    /// conventional `n - 1`, the neighborhood spanning the whole
    /// search space.
    pub max_neighborhood: Option<usize>,
    /// Seed for the engine-owned random generator. Each `search` call
    /// reseeds from this value, so identical calls reproduce identical
    /// move sequences.
    pub seed: u64,
    /// Whether each shaken candidate is refined by an embedded Tabu
    /// Search (`K = i`, `L = max_I`, `gamma = 0`) before the
    /// acceptance test.
    pub refinement: bool,
}

impl Default for RvnsConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            max_neighborhood: None,
            seed: 0,
            refinement: false,
        }
    }
}

impl RvnsConfig {
    /// Sets the outer iteration budget `K`.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the largest neighborhood index `max_I`.
    pub fn with_max_neighborhood(mut self, max_i: usize) -> Self {
        self.max_neighborhood = Some(max_i);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables the embedded Tabu refinement step.
    pub fn with_refinement(mut self, refinement: bool) -> Self {
        self.refinement = refinement;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = RvnsConfig::default();
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.max_neighborhood, None);
        assert_eq!(config.seed, 0);
        assert!(!config.refinement);
    }

    #[test]
    fn test_config_builder() {
        let config = RvnsConfig::default()
            .with_max_iterations(50)
            .with_max_neighborhood(3)
            .with_seed(123)
            .with_refinement(true);
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.max_neighborhood, Some(3));
        assert_eq!(config.seed, 123);
        assert!(config.refinement);
    }
}
