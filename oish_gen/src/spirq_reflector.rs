/// SPIR-V reflection backend built on spirq
///
/// Converts spirq's entry point variables into the library-independent
/// `ReflectedStage` consumed by `ShaderDescriptorBuilder`.

use oish_core::oish::{Error, Result};
use oish_core::oish::format::ScalarKind;
use oish_core::oish::reflect::{
    ReflectedMember, ReflectedResource, ReflectedStage, ReflectedStruct, ReflectedType,
    ReflectedVariable, Reflector, ResourceKind,
};
use oish_core::oish::stage::ShaderStage;

/// `Reflector` implementation backed by spirq
#[derive(Debug, Default, Clone, Copy)]
pub struct SpirqReflector;

impl Reflector for SpirqReflector {
    fn reflect(&self, stage: ShaderStage, words: &[u32]) -> Result<ReflectedStage> {
        let entry_points = spirq::ReflectConfig::new()
            .spv(words)
            .ref_all_rscs(true)
            .reflect()
            .map_err(|e| oish_core::oish_err!("oish::spirq",
                Error::ReflectionFailed(format!("{:?} stage: {:?}", stage, e))))?;

        let Some(entry_point) = entry_points.first() else {
            oish_core::oish_bail!("oish::spirq",
                Error::ReflectionFailed(format!("{:?} stage has no entry point", stage)));
        };
        if entry_points.len() > 1 {
            oish_core::oish_warn!("oish::spirq", "{:?} stage has {} entry points, using '{}'",
                stage, entry_points.len(), entry_point.name);
        }

        let mut reflected = ReflectedStage::default();

        for var in entry_point.vars.iter() {
            match var {
                spirq::var::Variable::Input { name, location, ty } => {
                    reflected.inputs.push(ReflectedVariable {
                        name: name.clone().unwrap_or_default(),
                        location: location.loc(),
                        ty: Self::spirq_type_to_reflected(ty),
                    });
                }
                spirq::var::Variable::Output { name, location, ty } => {
                    reflected.outputs.push(ReflectedVariable {
                        name: name.clone().unwrap_or_default(),
                        location: location.loc(),
                        ty: Self::spirq_type_to_reflected(ty),
                    });
                }
                spirq::var::Variable::Descriptor { name, desc_bind, desc_ty, ty, .. } => {
                    let kind = Self::spirq_desc_type_to_resource_kind(desc_ty)?;
                    let binding = desc_bind.bind();
                    reflected.resources.push(ReflectedResource {
                        name: Self::resource_name(name.as_deref(), ty, binding),
                        set: desc_bind.set(),
                        binding,
                        kind,
                        ty: Self::spirq_type_to_reflected(ty),
                    });
                }
                spirq::var::Variable::PushConstant { name, .. } => {
                    oish_core::oish_debug!("oish::spirq", "Ignoring push constant block '{}'",
                        name.as_deref().unwrap_or(""));
                }
                _ => {}
            }
        }

        oish_core::oish_trace!("oish::spirq", "{:?} entry point '{}': {} inputs, {} outputs, {} resources",
            stage, entry_point.name, reflected.inputs.len(), reflected.outputs.len(),
            reflected.resources.len());

        Ok(reflected)
    }
}

impl SpirqReflector {
    pub fn new() -> Self {
        Self
    }

    /// Variable name, else the block type name, else `binding<N>`
    fn resource_name(name: Option<&str>, ty: &spirq::ty::Type, binding: u32) -> String {
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            return name.to_string();
        }
        if let spirq::ty::Type::Struct(st) = ty {
            if let Some(name) = st.name.as_deref().filter(|n| !n.is_empty()) {
                return name.to_string();
            }
        }
        format!("binding{}", binding)
    }

    /// Convert spirq descriptor type to a resource kind
    fn spirq_desc_type_to_resource_kind(desc_ty: &spirq::ty::DescriptorType) -> Result<ResourceKind> {
        use spirq::ty::DescriptorType;
        match desc_ty {
            DescriptorType::UniformBuffer() => Ok(ResourceKind::UniformBuffer),
            DescriptorType::StorageBuffer(..) => Ok(ResourceKind::StorageBuffer),
            DescriptorType::SampledImage() => Ok(ResourceKind::SampledImage),
            DescriptorType::StorageImage(..) => Ok(ResourceKind::StorageImage),
            DescriptorType::CombinedImageSampler() => Ok(ResourceKind::CombinedImageSampler),
            DescriptorType::Sampler() => Ok(ResourceKind::Sampler),
            other => {
                oish_core::oish_bail!("oish::spirq",
                    Error::UnsupportedResource(format!("SPIR-V descriptor type {:?}", other)));
            }
        }
    }

    /// Convert a spirq ScalarType to our ScalarKind (`None` for void)
    fn spirq_scalar_to_kind(scalar_ty: &spirq::ty::ScalarType) -> Option<ScalarKind> {
        use spirq::ty::ScalarType;
        match scalar_ty {
            ScalarType::Float { bits: 16 } => Some(ScalarKind::Half),
            ScalarType::Float { bits: 64 } => Some(ScalarKind::Double),
            ScalarType::Float { .. } => Some(ScalarKind::Float),
            ScalarType::Integer { bits: 8, .. } => Some(ScalarKind::Char),
            ScalarType::Integer { bits: 64, is_signed: true } => Some(ScalarKind::Int64),
            ScalarType::Integer { bits: 64, is_signed: false } => Some(ScalarKind::UInt64),
            ScalarType::Integer { is_signed: true, .. } => Some(ScalarKind::Int),
            ScalarType::Integer { is_signed: false, .. } => Some(ScalarKind::UInt),
            ScalarType::Boolean => Some(ScalarKind::Bool),
            ScalarType::Void => None,
        }
    }

    /// Recursively convert a spirq Type to our ReflectedType
    fn spirq_type_to_reflected(ty: &spirq::ty::Type) -> ReflectedType {
        use spirq::ty::Type;
        match ty {
            Type::Scalar(s) => Self::spirq_scalar_to_kind(s)
                .map_or(ReflectedType::Opaque, ReflectedType::Scalar),
            Type::Vector(v) => Self::spirq_scalar_to_kind(&v.scalar_ty)
                .map_or(ReflectedType::Opaque, |kind| ReflectedType::Vector(kind, v.nscalar)),
            Type::Matrix(m) => Self::spirq_scalar_to_kind(&m.vector_ty.scalar_ty)
                .map_or(ReflectedType::Opaque, |scalar| ReflectedType::Matrix {
                    scalar,
                    columns: m.nvector,
                    rows: m.vector_ty.nscalar,
                }),
            Type::Array(a) => ReflectedType::Array {
                element: Box::new(Self::spirq_type_to_reflected(&a.element_ty)),
                count: a.nelement,
                stride: a.stride.map(|s| s as u32),
            },
            Type::Struct(st) => ReflectedType::Struct(ReflectedStruct {
                name: st.name.clone().unwrap_or_default(),
                size: ty.nbyte().map(|s| s as u32),
                members: st.members.iter().map(|m| ReflectedMember {
                    name: m.name.clone().unwrap_or_default(),
                    offset: m.offset.unwrap_or(0) as u32,
                    size: m.ty.nbyte().map(|s| s as u32),
                    ty: Self::spirq_type_to_reflected(&m.ty),
                }).collect(),
            }),
            // Images, samplers and acceleration structures carry no data layout
            _ => ReflectedType::Opaque,
        }
    }
}

#[cfg(test)]
#[path = "spirq_reflector_tests.rs"]
mod tests;
