//! A module's exported API surface, as described by a surface provider.
//!
//! Members arrive capability-tagged: the provider decides once, at load
//! time, whether each export is a callable, a type, or something else, so
//! enumeration is a pure match over a closed tag set.

use rustc_hash::FxHashSet;
use serde::Deserialize;

pub mod provider;

/// The capability of an exported member, decided at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    /// A plain function, including foreign/native functions, element-wise
    /// dispatch objects, and multiple-dispatch wrappers.
    Callable,
    /// A type whose public methods may be enumerated.
    Type,
    /// Anything else (constants, submodules, data).
    Other,
}

/// An attribute of an exported type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeAttr {
    pub name: String,
    #[serde(default)]
    pub callable: bool,
    /// Plain field accessors carry no independent documentation and are
    /// excluded from enumeration.
    #[serde(default)]
    pub data_descriptor: bool,
    #[serde(default)]
    pub doc: Option<String>,
}

/// One entry in a module's declared export list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Member {
    pub name: String,
    pub kind: MemberKind,
    #[serde(default)]
    pub doc: Option<String>,
    /// Attribute set for [`MemberKind::Type`] members; empty otherwise.
    #[serde(default)]
    pub attrs: Vec<TypeAttr>,
}

/// A module's name and export list, in declared export order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModuleSurface {
    pub name: String,
    pub exports: Vec<Member>,
}

/// A public callable paired with its documentation text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedObject {
    /// Either a bare function name or `TypeName.methodName`.
    pub name: String,
    pub doc: Option<String>,
}

fn is_public(name: &str) -> bool {
    !name.starts_with('_')
}

/// Enumerate a module's public callables in declared export order.
///
/// Callables are yielded first; when `include_classes` is set, each public
/// type's callable, non-underscore, non-data-descriptor attributes follow as
/// `Type.attr`. Names whose module-qualified form appears in `skip` are
/// never yielded.
pub fn public_surface<'a>(
    module: &'a ModuleSurface,
    include_classes: bool,
    skip: &'a FxHashSet<String>,
) -> impl Iterator<Item = QualifiedObject> + 'a {
    let functions = module
        .exports
        .iter()
        .filter(|member| is_public(&member.name) && member.kind == MemberKind::Callable)
        .map(|member| QualifiedObject {
            name: member.name.clone(),
            doc: member.doc.clone(),
        });
    let methods = module
        .exports
        .iter()
        .filter(move |member| {
            include_classes && is_public(&member.name) && member.kind == MemberKind::Type
        })
        .flat_map(|member| {
            member
                .attrs
                .iter()
                .filter(|attr| attr.callable && is_public(&attr.name) && !attr.data_descriptor)
                .map(move |attr| QualifiedObject {
                    name: format!("{}.{}", member.name, attr.name),
                    doc: attr.doc.clone(),
                })
        });
    functions
        .chain(methods)
        .filter(move |object| !skip.contains(&format!("{}.{}", module.name, object.name)))
}
