use std::collections::HashMap;
use std::sync::OnceLock;

use parking_lot::RwLock;
use regex::Regex;
use tracing::debug;

/// Maximum number of compiled patterns kept in memory
const CAPACITY: usize = 128;

static PATTERNS: OnceLock<PatternCache> = OnceLock::new();

/// A bounded cache of compiled patterns keyed by pattern text
struct PatternCache {
    capacity: usize,
    patterns: RwLock<HashMap<String, Regex>>,
}

impl PatternCache {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            patterns: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    fn get_or_compile(&self, pattern: &str) -> Result<Regex, regex::Error> {
        if let Some(re) = self.patterns.read().get(pattern) {
            // Regex clones share the compiled program
            return Ok(re.clone());
        }

        let re = Regex::new(pattern)?;
        debug!(pattern, "compiled pattern");

        let mut patterns = self.patterns.write();
        if let Some(cached) = patterns.get(pattern) {
            return Ok(cached.clone());
        }

        if patterns.len() >= self.capacity {
            // Any entry will do, evicted patterns are compiled again on next use
            if let Some(evicted) = patterns.keys().next().cloned() {
                patterns.remove(&evicted);
                debug!(pattern = %evicted, "evicted pattern");
            }
        }
        patterns.insert(pattern.to_owned(), re.clone());

        Ok(re)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.patterns.read().len()
    }

    #[cfg(test)]
    fn contains(&self, pattern: &str) -> bool {
        self.patterns.read().contains_key(pattern)
    }
}

fn patterns() -> &'static PatternCache {
    PATTERNS.get_or_init(|| PatternCache::new(CAPACITY))
}

/// Get the compiled matcher for a pattern, compiling it on first use.
///
/// Compiled matchers are shared by every caller in the process. Concurrent
/// first uses of the same pattern may compile it more than once, but only
/// one matcher is ever stored. Compilation errors are not cached. At most
/// `CAPACITY` patterns are kept, an arbitrary one is evicted to make room.
pub(crate) fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    patterns().get_or_compile(pattern)
}
