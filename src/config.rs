//! Construction-time configuration for the perf-log decorators.

use tracing::Level;

/// Options captured when a decorator is constructed.
///
/// Per-call overrides are expressed by handing a different `PerfConfig` to a
/// single call; nothing here is shared or mutated between calls.
#[derive(Debug, Clone)]
pub struct PerfConfig {
    /// Level the timing record is emitted at
    pub level: Level,
    /// Whether the wrapped call's return value is included in the record
    pub print_return: bool,
    /// Decimal places used for the elapsed-seconds figure
    pub float_precision: usize,
}

impl Default for PerfConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            print_return: false,
            float_precision: 3,
        }
    }
}

impl PerfConfig {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_print_return(mut self) -> Self {
        self.print_return = true;
        self
    }

    pub fn with_precision(mut self, places: usize) -> Self {
        self.float_precision = places;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_info_without_result_printing() {
        let config = PerfConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert!(!config.print_return);
        assert_eq!(config.float_precision, 3);
    }

    #[test]
    fn builders_override_fields() {
        let config = PerfConfig::new(Level::DEBUG)
            .with_print_return()
            .with_precision(6);
        assert_eq!(config.level, Level::DEBUG);
        assert!(config.print_return);
        assert_eq!(config.float_precision, 6);
    }
}
