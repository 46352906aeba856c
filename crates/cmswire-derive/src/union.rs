use darling::{
    FromDeriveInput, FromField, FromVariant,
    ast::{Data, Fields},
    util::Ignored,
};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Error, Generics, Ident, Type};

///
/// UnionInput
///

#[derive(FromDeriveInput)]
#[darling(attributes(content), supports(enum_newtype))]
struct UnionInput {
    ident: Ident,
    generics: Generics,
    data: Data<UnionVariant, Ignored>,
}

///
/// UnionVariant
/// One component alternative; wraps exactly one type.
///

#[derive(FromVariant)]
#[darling(attributes(content))]
struct UnionVariant {
    ident: Ident,
    fields: Fields<UnionVariantField>,
}

#[derive(FromField)]
struct UnionVariantField {
    ty: Type,
}

// derive_component_union
pub fn derive_component_union(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let input = match UnionInput::from_derive_input(&input) {
        Ok(input) => input,
        Err(err) => return err.write_errors(),
    };

    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

#[allow(clippy::too_many_lines)]
fn expand(input: &UnionInput) -> Result<TokenStream, Error> {
    let ident = &input.ident;
    let ident_str = ident.to_string();

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "ComponentUnion cannot be derived for generic types",
        ));
    }

    let Data::Enum(variants) = &input.data else {
        return Err(Error::new_spanned(
            ident,
            "ComponentUnion can only be derived for enums",
        ));
    };
    if variants.is_empty() {
        return Err(Error::new_spanned(
            ident,
            "a component union needs at least one variant",
        ));
    }

    let mut idents = Vec::new();
    let mut tys = Vec::new();
    for variant in variants {
        let Some(field) = variant.fields.iter().next() else {
            return Err(Error::new_spanned(
                &variant.ident,
                "union variants must wrap exactly one component type",
            ));
        };

        idents.push(&variant.ident);
        tys.push(&field.ty);
    }
    let ident_strs = idents.iter().map(ToString::to_string);

    Ok(quote! {
        impl ::cmswire::traits::ComponentUnion for #ident {
            fn union_model() -> &'static ::cmswire::model::UnionModel {
                static MODEL: ::std::sync::OnceLock<::cmswire::model::UnionModel> =
                    ::std::sync::OnceLock::new();

                MODEL.get_or_init(|| ::cmswire::model::UnionModel {
                    path: ::std::concat!(::std::module_path!(), "::", #ident_str),
                    ident: #ident_str,
                    variants: ::std::vec![#(
                        ::cmswire::model::UnionVariant {
                            ident: #ident_strs,
                            model: <#tys as ::cmswire::traits::Content>::model,
                        }
                    ),*],
                    registry: <Self as ::cmswire::traits::ComponentUnion>::registry,
                })
            }

            fn registry() -> ::std::result::Result<
                &'static ::cmswire::registry::Registry,
                ::cmswire::registry::RegistryError,
            > {
                static REGISTRY: ::std::sync::OnceLock<
                    ::std::result::Result<
                        ::cmswire::registry::Registry,
                        ::cmswire::registry::RegistryError,
                    >,
                > = ::std::sync::OnceLock::new();

                REGISTRY
                    .get_or_init(|| {
                        ::cmswire::registry::Registry::from_union(
                            <Self as ::cmswire::traits::ComponentUnion>::union_model(),
                        )
                    })
                    .as_ref()
                    .map_err(::std::clone::Clone::clone)
            }

            fn variant_model(&self) -> &'static ::cmswire::model::ContentModel {
                match self {
                    #(Self::#idents(_) => <#tys as ::cmswire::traits::Content>::model(),)*
                }
            }

            fn write_variant(
                &self,
            ) -> ::std::result::Result<::cmswire::wire::WireMap, ::cmswire::write::WriteError> {
                match self {
                    #(Self::#idents(value) => ::cmswire::traits::Content::write_fields(value),)*
                }
            }

            fn decode_variant(
                model: &::cmswire::model::ContentModel,
                node: ::cmswire::wire::WireNode,
            ) -> ::std::result::Result<Self, ::cmswire::read::ReadError> {
                #(
                    if model.path == <#tys as ::cmswire::traits::Content>::model().path {
                        return ::cmswire::read::decode_value::<#tys>(node).map(Self::#idents);
                    }
                )*

                ::std::result::Result::Err(::cmswire::read::ReadError::UnknownVariant {
                    union: #ident_str,
                    path: model.path,
                })
            }
        }

        impl ::cmswire::traits::WireField for #ident {
            fn kind() -> ::cmswire::model::FieldKind {
                ::cmswire::model::FieldKind::Union(
                    <Self as ::cmswire::traits::ComponentUnion>::union_model,
                )
            }

            fn to_wire(
                &self,
            ) -> ::std::result::Result<::cmswire::wire::WireNode, ::cmswire::write::WriteError> {
                ::cmswire::write::map_union(self)
            }
        }

        impl<'de> ::cmswire::__reexports::serde::Deserialize<'de> for #ident {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::cmswire::__reexports::serde::Deserializer<'de>,
            {
                let node = <::cmswire::wire::WireNode as ::cmswire::__reexports::serde::Deserialize>::deserialize(deserializer)?;

                ::cmswire::read::decode_union::<Self>(node)
                    .map_err(<D::Error as ::cmswire::__reexports::serde::de::Error>::custom)
            }
        }
    })
}

///
/// TESTS
///
