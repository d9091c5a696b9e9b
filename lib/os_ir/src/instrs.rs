//! Instruction bodies and rebindable call sites.
//!
//! The model keeps only the instruction shapes the transforms care about:
//! call sites with a resolved, rebindable target and positionally identified
//! argument values. Everything else is opaque filler that must survive
//! duplication unchanged.

use crate::uids::{MethodUid, SceneCounters};
use std::fmt;

/// Process-unique identifier of one value occurrence inside a body.
/// Auxiliary analyses (e.g. string analysis) key their per-value results
/// on these ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ValueId(usize);

impl ValueId {
    pub(crate) fn new(id: usize) -> Self {
        Self(id)
    }
}

impl fmt::Display for ValueId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A rebindable slot holding one value occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueBox {
    value: ValueId,
}

impl ValueBox {
    pub(crate) fn new(value: ValueId) -> Self {
        Self { value }
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> ValueId {
        self.value
    }
}

/// Dispatch kind of a call-site instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokeKind {
    /// Regular virtual dispatch through the receiver's dynamic type.
    Virtual,
    /// Non-virtual dispatch: constructor chaining, `super`-style calls,
    /// private method calls.
    Special,
    /// Static dispatch, no receiver.
    Static,
}

/// A call-site instruction with a resolved target reference.
#[derive(Debug, Clone)]
pub struct InvokeInstr {
    kind: InvokeKind,
    target: MethodUid,
    args: Vec<ValueBox>,
}

impl InvokeInstr {
    #[must_use]
    pub fn new(kind: InvokeKind, target: MethodUid, args: Vec<ValueBox>) -> Self {
        Self { kind, target, args }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> InvokeKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> MethodUid {
        self.target
    }

    #[inline]
    pub fn args(&self) -> &[ValueBox] {
        &self.args
    }

    /// Rebinds the resolved target reference of this call site.
    pub fn retarget(&mut self, target: MethodUid) {
        self.target = target;
    }
}

#[derive(Debug, Clone)]
pub enum Instr {
    Nop,
    Return,
    Invoke(InvokeInstr),
}

impl Instr {
    #[must_use]
    pub fn as_invoke(&self) -> Option<&InvokeInstr> {
        match self {
            Self::Invoke(invoke) => Some(invoke),
            _ => None,
        }
    }
}

/// An ordered method body.
#[derive(Debug, Clone, Default)]
pub struct Body {
    instrs: Vec<Instr>,
}

impl Body {
    #[must_use]
    pub fn new(instrs: Vec<Instr>) -> Self {
        Self { instrs }
    }

    #[inline]
    pub fn instrs(&self) -> &[Instr] {
        &self.instrs
    }

    #[inline]
    pub fn instrs_mut(&mut self) -> &mut [Instr] {
        &mut self.instrs
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.instrs.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instrs.is_empty()
    }

    /// Builds a deep, independent copy of this body. The copy has the same
    /// instruction count with 1:1 positional correspondence to the original,
    /// call-site targets keep pointing at the same resolved methods, and
    /// every value slot receives a fresh [`ValueId`]. Nothing is shared
    /// between the two bodies.
    #[must_use]
    pub(crate) fn duplicate(&self, counters: &mut SceneCounters) -> Self {
        let instrs = self
            .instrs
            .iter()
            .map(|instr| match instr {
                Instr::Nop => Instr::Nop,
                Instr::Return => Instr::Return,
                Instr::Invoke(invoke) => {
                    let args = invoke
                        .args
                        .iter()
                        .map(|_| ValueBox::new(counters.new_value_id()))
                        .collect();
                    Instr::Invoke(InvokeInstr::new(invoke.kind, invoke.target, args))
                }
            })
            .collect();
        Self { instrs }
    }
}
