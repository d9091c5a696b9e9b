//! Classification registries shared across the analysis run.
//!
//! The registries are explicit values injected into the transform rather
//! than ambient global state, so that tests can run against fresh ones.

use os_ir::MethodUid;
use std::collections::{BTreeMap, BTreeSet};

/// Safety classification of a system method for downstream policy checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodClassification {
    Safe,
    Spec,
    Banned,
}

/// Registry of the external API surface: which classes belong to the
/// system/container categories and how their methods are classified.
#[derive(Debug, Default)]
pub struct ApiRegistry {
    system_classes: BTreeSet<String>,
    container_classes: BTreeSet<String>,
    classifications: BTreeMap<MethodUid, MethodClassification>,
}

impl ApiRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_system_class(&mut self, name: &str) {
        self.system_classes.insert(name.to_string());
    }

    #[must_use]
    pub fn is_system_class(&self, name: &str) -> bool {
        self.system_classes.contains(name)
    }

    pub fn add_container_class(&mut self, name: &str) {
        self.container_classes.insert(name.to_string());
    }

    #[must_use]
    pub fn is_container_class(&self, name: &str) -> bool {
        self.container_classes.contains(name)
    }

    pub fn set_classification(&mut self, method: MethodUid, class: MethodClassification) {
        self.classifications.insert(method, class);
    }

    #[must_use]
    pub fn classification(&self, method: MethodUid) -> Option<MethodClassification> {
        self.classifications.get(&method).copied()
    }
}

/// Registry of the analyzed project layout: which classes come from project
/// sources, which were generated, and which are bundled libraries.
#[derive(Debug, Default)]
pub struct ProjectRegistry {
    src_classes: BTreeSet<String>,
    gen_classes: BTreeSet<String>,
    lib_classes: BTreeSet<String>,
}

impl ProjectRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_src_class(&mut self, name: &str) {
        self.src_classes.insert(name.to_string());
    }

    #[must_use]
    pub fn is_src_class(&self, name: &str) -> bool {
        self.src_classes.contains(name)
    }

    pub fn add_gen_class(&mut self, name: &str) {
        self.gen_classes.insert(name.to_string());
    }

    #[must_use]
    pub fn is_gen_class(&self, name: &str) -> bool {
        self.gen_classes.contains(name)
    }

    pub fn add_lib_class(&mut self, name: &str) {
        self.lib_classes.insert(name.to_string());
    }

    #[must_use]
    pub fn is_lib_class(&self, name: &str) -> bool {
        self.lib_classes.contains(name)
    }
}
