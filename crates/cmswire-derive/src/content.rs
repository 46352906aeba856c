use crate::helper::{quote_option, scalar_kind};
use convert_case::{Case, Casing};
use darling::{FromDeriveInput, FromField, ast::Data, util::Ignored};
use proc_macro2::TokenStream;
use quote::quote;
use std::collections::BTreeMap;
use syn::{DeriveInput, Error, Generics, Ident, LitStr, Type, ext::IdentExt};

///
/// ContentInput
///

#[derive(FromDeriveInput)]
#[darling(attributes(content), supports(struct_named))]
struct ContentInput {
    ident: Ident,
    generics: Generics,
    data: Data<Ignored, ContentField>,

    #[darling(default)]
    collection: Option<LitStr>,

    #[darling(default)]
    single: Option<LitStr>,

    #[darling(default)]
    component: Option<LitStr>,
}

///
/// ContentField
///

#[derive(FromField)]
#[darling(attributes(content))]
struct ContentField {
    ident: Option<Ident>,
    ty: Type,

    /// Wire name override.
    #[darling(default)]
    rename: Option<LitStr>,

    /// Left out of the model and the wire payload.
    #[darling(default)]
    skip: bool,

    /// Never eagerly populated.
    #[darling(default)]
    skip_populate: bool,

    /// Serialized with serde as a plain scalar.
    #[darling(default)]
    scalar: bool,

    /// Holds the document id used when this type is referenced.
    #[darling(default)]
    document_id: bool,
}

impl ContentField {
    fn wire_name(&self, ident: &Ident) -> String {
        self.rename.as_ref().map_or_else(
            || ident.unraw().to_string().to_case(Case::Camel),
            LitStr::value,
        )
    }
}

///
/// DeclaredMarker
///

enum DeclaredMarker {
    Collection(LitStr),
    Single(LitStr),
    Component(LitStr),
}

impl DeclaredMarker {
    const fn lit(&self) -> &LitStr {
        match self {
            Self::Collection(lit) | Self::Single(lit) | Self::Component(lit) => lit,
        }
    }

    const fn needs_document_id(&self) -> bool {
        matches!(self, Self::Collection(_) | Self::Single(_))
    }

    fn to_tokens(&self) -> TokenStream {
        let lit = self.lit();

        match self {
            Self::Collection(_) => quote!(::cmswire::model::Marker::Collection(#lit)),
            Self::Single(_) => quote!(::cmswire::model::Marker::Singleton(#lit)),
            Self::Component(_) => quote!(::cmswire::model::Marker::Component(#lit)),
        }
    }
}

// resolve_marker
fn resolve_marker(input: &ContentInput) -> Result<Option<DeclaredMarker>, Error> {
    let declared: Vec<(&str, DeclaredMarker)> = [
        input
            .collection
            .clone()
            .map(|lit| ("collection", DeclaredMarker::Collection(lit))),
        input
            .single
            .clone()
            .map(|lit| ("single", DeclaredMarker::Single(lit))),
        input
            .component
            .clone()
            .map(|lit| ("component", DeclaredMarker::Component(lit))),
    ]
    .into_iter()
    .flatten()
    .collect();

    if declared.len() > 1 {
        let names = declared
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ");

        return Err(Error::new_spanned(
            &input.ident,
            format!("content type declares conflicting markers ({names}); use at most one"),
        ));
    }

    let Some((name, marker)) = declared.into_iter().next() else {
        return Ok(None);
    };

    if marker.lit().value().trim().is_empty() {
        return Err(Error::new_spanned(
            marker.lit(),
            format!("`{name}` name must not be empty"),
        ));
    }

    Ok(Some(marker))
}

// derive_content
pub fn derive_content(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let input = match ContentInput::from_derive_input(&input) {
        Ok(input) => input,
        Err(err) => return err.write_errors(),
    };

    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

#[allow(clippy::too_many_lines)]
fn expand(input: &ContentInput) -> Result<TokenStream, Error> {
    let ident = &input.ident;
    let ident_str = ident.to_string();

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "Content cannot be derived for generic types",
        ));
    }

    let marker = resolve_marker(input)?;
    let Data::Struct(fields) = &input.data else {
        return Err(Error::new_spanned(
            ident,
            "Content can only be derived for structs with named fields",
        ));
    };

    let mut field_models = Vec::new();
    let mut writes = Vec::new();
    let mut seen = BTreeMap::<String, &Ident>::new();
    let mut document_id: Option<&Ident> = None;
    let mut named_document_id: Option<&Ident> = None;

    for field in fields.iter() {
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        let name = field.wire_name(field_ident);

        if field.document_id {
            if let Some(previous) = document_id {
                return Err(Error::new_spanned(
                    field_ident,
                    format!("document id already declared on `{previous}`"),
                ));
            }
            document_id = Some(field_ident);
        }
        if name == "documentId" {
            named_document_id = Some(field_ident);
        }

        if field.skip {
            continue;
        }

        if name.is_empty() {
            return Err(Error::new_spanned(field_ident, "wire name must not be empty"));
        }
        if let Some(previous) = seen.insert(name.clone(), field_ident) {
            return Err(Error::new_spanned(
                field_ident,
                format!("wire name `{name}` is already used by `{previous}`"),
            ));
        }

        let ty = &field.ty;
        let field_ident_str = field_ident.unraw().to_string();
        let kind = if field.scalar {
            scalar_kind(ty)
        } else {
            quote!(<#ty as ::cmswire::traits::WireField>::kind())
        };
        let skip_populate = field.skip_populate.then(|| quote!(.skip_populate()));

        field_models.push(quote! {
            ::cmswire::model::FieldModel::new(#field_ident_str, #name, #kind) #skip_populate
        });

        let value = if field.scalar {
            quote!(::cmswire::write::scalar_to_wire(&self.#field_ident)?)
        } else {
            quote!(::cmswire::traits::WireField::to_wire(&self.#field_ident)?)
        };
        writes.push(quote! {
            map.insert(::std::string::String::from(#name), #value);
        });
    }

    let document_id = document_id.or(named_document_id);
    if let Some(marker) = &marker
        && marker.needs_document_id()
        && document_id.is_none()
    {
        return Err(Error::new_spanned(
            ident,
            "collection and single types need a document id: add a `document_id` field \
             or mark one with #[content(document_id)]",
        ));
    }

    let marker_tokens = quote_option(marker.as_ref().map(DeclaredMarker::to_tokens));
    let document_id_fn = document_id.map(|field| {
        quote! {
            fn document_id(&self) -> ::std::option::Option<&str> {
                ::cmswire::traits::AsDocumentId::as_document_id(&self.#field)
            }
        }
    });

    Ok(quote! {
        impl ::cmswire::traits::Content for #ident {
            fn model() -> &'static ::cmswire::model::ContentModel {
                static MODEL: ::std::sync::OnceLock<::cmswire::model::ContentModel> =
                    ::std::sync::OnceLock::new();

                MODEL.get_or_init(|| ::cmswire::model::ContentModel {
                    path: ::std::concat!(::std::module_path!(), "::", #ident_str),
                    ident: #ident_str,
                    marker: #marker_tokens,
                    fields: ::std::vec![#(#field_models),*],
                })
            }

            #[allow(unused_mut)]
            fn write_fields(
                &self,
            ) -> ::std::result::Result<::cmswire::wire::WireMap, ::cmswire::write::WriteError> {
                let mut map = ::cmswire::wire::WireMap::new();
                #(#writes)*

                ::std::result::Result::Ok(map)
            }

            #document_id_fn
        }

        impl ::cmswire::traits::WireField for #ident {
            fn kind() -> ::cmswire::model::FieldKind {
                ::cmswire::model::FieldKind::Content(<Self as ::cmswire::traits::Content>::model)
            }

            fn to_wire(
                &self,
            ) -> ::std::result::Result<::cmswire::wire::WireNode, ::cmswire::write::WriteError> {
                ::cmswire::write::map_nested(self)
            }
        }
    })
}

///
/// TESTS
///
