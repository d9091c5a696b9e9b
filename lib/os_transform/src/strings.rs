//! Bridge to the string analysis engine.
//!
//! The engine tracks "hotspot" values: call arguments whose string content
//! the analysis resolved. When a method body is duplicated, the results
//! attached to the original values must be carried over to the fresh values
//! of the copy, keyed by the copy's resolved call signature and argument
//! position.

use os_ir::ValueId;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
struct HotspotResult {
    tag: String,
    // Call signature and argument index the value was registered under,
    // if it was registered through a call site.
    call: Option<(String, usize)>,
}

#[derive(Debug, Default)]
pub struct StringResults {
    has_run: bool,
    results: BTreeMap<ValueId, HotspotResult>,
}

impl StringResults {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the analysis as completed; hotspot queries are meaningless
    /// before this.
    pub fn mark_run(&mut self) {
        self.has_run = true;
    }

    #[must_use]
    pub fn has_run(&self) -> bool {
        self.has_run
    }

    /// Registers a tracked value with its analysis result.
    pub fn record_hotspot(&mut self, value: ValueId, tag: &str) {
        self.results.insert(
            value,
            HotspotResult {
                tag: tag.to_string(),
                call: None,
            },
        );
    }

    #[must_use]
    pub fn is_hotspot_value(&self, value: ValueId) -> bool {
        self.results.contains_key(&value)
    }

    #[must_use]
    pub fn result(&self, value: ValueId) -> Option<&str> {
        self.results.get(&value).map(|r| r.tag.as_str())
    }

    /// Copies the result attached to `original` onto `new_value`, registered
    /// under the given call signature and argument index.
    pub fn copy_result(
        &mut self,
        original: ValueId,
        call_signature: &str,
        arg_index: usize,
        new_value: ValueId,
    ) {
        if let Some(result) = self.results.get(&original) {
            let copied = HotspotResult {
                tag: result.tag.clone(),
                call: Some((call_signature.to_string(), arg_index)),
            };
            self.results.insert(new_value, copied);
        }
    }

    /// Looks a result up by the call signature and argument index it was
    /// registered under.
    #[must_use]
    pub fn result_at(&self, call_signature: &str, arg_index: usize) -> Option<&str> {
        self.results.values().find_map(|r| match &r.call {
            Some((sig, idx)) if sig == call_signature && *idx == arg_index => Some(r.tag.as_str()),
            _ => None,
        })
    }
}
