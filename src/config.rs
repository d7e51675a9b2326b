//! Runtime configuration. There is no config file: this is a library and a
//! thin CLI, not a service. The one knob beyond `k`/`zero_index` is how many
//! threads the work-stealing pool should use.

/// Configures the rayon thread pool a call runs under.
///
/// `threads: None` sizes the pool to `num_cpus::get()` (hardware
/// parallelism).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SymdelConfig {
    pub threads: Option<usize>,
}

impl SymdelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threads(threads: usize) -> Self {
        Self {
            threads: Some(threads),
        }
    }

    /// Resolves `threads` to a concrete count, falling back to
    /// `num_cpus::get()` when unset.
    fn resolved_threads(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get).max(1)
    }

    /// Builds a scoped rayon pool sized per `resolved_threads` and runs `f`
    /// inside it.
    pub(crate) fn scoped<T: Send>(&self, f: impl FnOnce() -> T + Send) -> T {
        rayon::ThreadPoolBuilder::new()
            .num_threads(self.resolved_threads())
            .build()
            .expect("failed to build rayon thread pool")
            .install(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_leaves_threads_unset() {
        assert_eq!(SymdelConfig::new().threads, None);
    }

    #[test]
    fn scoped_runs_closure_with_explicit_thread_count() {
        let config = SymdelConfig::with_threads(2);
        let result = config.scoped(|| 2 + 2);
        assert_eq!(result, 4);
    }

    #[test]
    fn unset_threads_resolve_to_num_cpus() {
        assert_eq!(SymdelConfig::new().resolved_threads(), num_cpus::get().max(1));
    }
}
