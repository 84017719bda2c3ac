use crate::error::ConfigError;
use super::evaluation::ScoreWeights;

/// Profundidade máxima aceite. A árvore cresce exponencialmente sem poda.
pub const MAX_SEARCH_DEPTH: u8 = 12;

/// Como os ramos irmãos são percorridos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Fork/join no pool de threads do motor.
    #[default]
    Parallel,
    /// Mesma árvore, percorrida numa só thread. Útil como referência.
    Sequential,
}

/// Configuração da busca
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub threads: usize,
    pub mode: SearchMode,
    pub weights: ScoreWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: 4,
            threads: num_cpus::get().max(1),
            mode: SearchMode::Parallel,
            weights: ScoreWeights::default(),
        }
    }
}

impl SearchConfig {
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threads == 0 {
            return Err(ConfigError::ZeroThreads);
        }
        if self.max_depth > MAX_SEARCH_DEPTH {
            return Err(ConfigError::DepthTooLarge { depth: self.max_depth, max: MAX_SEARCH_DEPTH });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SearchConfig::default();
        assert!(config.threads >= 1);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(SearchConfig::default().with_threads(0).validate(), Err(ConfigError::ZeroThreads));
        assert_eq!(
            SearchConfig::default().with_depth(MAX_SEARCH_DEPTH + 1).validate(),
            Err(ConfigError::DepthTooLarge { depth: MAX_SEARCH_DEPTH + 1, max: MAX_SEARCH_DEPTH })
        );
    }
}
