/// Register merging across shader stages
///
/// Registers are collected in a sparse map keyed by binding while stages are
/// added; the dense, binding-indexed list is only produced once the highest
/// binding is known.

use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::stage::ShaderStageFlags;
use crate::descriptor::{RegisterKind, ShaderRegister};

/// Highest binding accepted; the register list is dense up to the highest binding
pub const MAX_BINDING: u32 = u16::MAX as u32;

/// Registers under construction, keyed by binding
#[derive(Debug, Default)]
pub struct RegisterTable {
    registers: FxHashMap<u32, ShaderRegister>,
}

impl RegisterTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or update the register at `binding`
    ///
    /// The first stage to touch a binding sets its kind and name. Later stages
    /// must agree on the kind and OR their access into the mask. Bindings above
    /// `MAX_BINDING` are rejected.
    pub fn merge(
        &mut self,
        binding: u32,
        kind: RegisterKind,
        access: ShaderStageFlags,
        name: &str,
    ) -> Result<&ShaderRegister> {
        if binding > MAX_BINDING {
            crate::oish_bail!("oish::registers", Error::UnsupportedResource(format!(
                "'{}' uses binding {} (highest supported binding is {})", name, binding, MAX_BINDING
            )));
        }

        let register = self.registers.entry(binding).or_insert_with(|| ShaderRegister {
            binding,
            kind,
            access: ShaderStageFlags::empty(),
            name: name.to_string(),
        });

        if register.kind != kind {
            crate::oish_bail!("oish::registers", Error::RegisterConflict {
                binding,
                existing: register.kind,
                found: kind,
            });
        }

        let merged = register.access | access;
        if merged.is_empty() {
            crate::oish_bail!("oish::registers", Error::InvalidRegisterAccess {
                binding,
                name: register.name.clone(),
            });
        }
        register.access = merged;

        crate::oish_trace!("oish::registers", "Binding {} '{}' ({:?}) access {:?}",
            binding, register.name, register.kind, register.access);

        Ok(register)
    }

    /// Register at a binding
    pub fn get(&self, binding: u32) -> Option<&ShaderRegister> {
        self.registers.get(&binding)
    }

    /// Highest binding in use
    pub fn max_binding(&self) -> Option<u32> {
        self.registers.keys().copied().max()
    }

    pub fn len(&self) -> usize {
        self.registers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registers.is_empty()
    }

    /// Dense list indexed by binding; unused bindings are `Undefined`
    pub fn into_dense(mut self) -> Vec<ShaderRegister> {
        let Some(max) = self.max_binding() else {
            return Vec::new();
        };

        (0..=max)
            .map(|binding| {
                self.registers
                    .remove(&binding)
                    .unwrap_or_else(|| ShaderRegister::undefined(binding))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "registers_tests.rs"]
mod tests;
