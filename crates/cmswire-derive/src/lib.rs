use proc_macro::TokenStream;

mod content;
mod helper;
mod union;

/// Derive `Content` and `WireField` for a struct with named fields.
///
/// Type attributes (at most one): `#[content(collection = "articles")]`,
/// `#[content(single = "homepage")]`, `#[content(component = "shared.quote")]`.
///
/// Field attributes: `rename = "..."`, `skip`, `skip_populate`, `scalar`,
/// `document_id`.
#[proc_macro_derive(Content, attributes(content))]
pub fn derive_content(input: TokenStream) -> TokenStream {
    content::derive_content(input.into()).into()
}

/// Derive `ComponentUnion`, `WireField` and `Deserialize` for an enum whose
/// variants each wrap one component type.
#[proc_macro_derive(ComponentUnion, attributes(content))]
pub fn derive_component_union(input: TokenStream) -> TokenStream {
    union::derive_component_union(input.into()).into()
}
