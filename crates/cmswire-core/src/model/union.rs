use crate::model::{ContentModel, ModelFn, RegistryFn};

///
/// UnionModel
///
/// Closed set of component variants forming one polymorphic contract.
/// Emitted by `#[derive(ComponentUnion)]`; variant order is declaration order.
///

#[derive(Debug)]
pub struct UnionModel {
    pub path: &'static str,
    pub ident: &'static str,
    pub variants: Vec<UnionVariant>,
    /// The union's discriminator registry, built on first use.
    pub registry: RegistryFn,
}

impl UnionModel {
    /// Variant content models in declaration order.
    pub fn models(&self) -> impl Iterator<Item = &'static ContentModel> + '_ {
        self.variants.iter().map(|variant| (variant.model)())
    }
}

///
/// UnionVariant
///

#[derive(Clone, Copy, Debug)]
pub struct UnionVariant {
    pub ident: &'static str,
    pub model: ModelFn,
}
