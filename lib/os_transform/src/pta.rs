//! Bridge to the points-to/reachability engine.

use os_ir::MethodUid;
use std::collections::BTreeSet;

/// Read-only snapshot of the methods the points-to engine's last completed
/// solution determined reachable from the program entry points.
#[derive(Debug, Default)]
pub struct ReachableMethods {
    methods: BTreeSet<MethodUid>,
}

impl ReachableMethods {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot<I: IntoIterator<Item = MethodUid>>(methods: I) -> Self {
        Self {
            methods: methods.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, method: MethodUid) -> bool {
        self.methods.contains(&method)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}
