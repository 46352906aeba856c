use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericArgument, PathArguments, Type};

/// Whether the last path segment of `ty` is `ident`.
pub fn is_path_ident(ty: &Type, ident: &str) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };

    path.path
        .segments
        .last()
        .is_some_and(|segment| segment.ident == ident)
}

/// First type argument of `ty` when its last segment is `ident`
/// (`Option<T>` → `T`).
pub fn generic_arg<'a>(ty: &'a Type, ident: &str) -> Option<&'a Type> {
    if !is_path_ident(ty, ident) {
        return None;
    }

    let Type::Path(path) = ty else {
        return None;
    };
    let PathArguments::AngleBracketed(args) = &path.path.segments.last()?.arguments else {
        return None;
    };

    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    })
}

/// Field kind for a `#[content(scalar)]` field.
/// `Option` and `Box` stay transparent; `Vec` keeps its list layer.
pub fn scalar_kind(ty: &Type) -> TokenStream {
    if let Some(inner) = generic_arg(ty, "Option").or_else(|| generic_arg(ty, "Box")) {
        return scalar_kind(inner);
    }

    if let Some(inner) = generic_arg(ty, "Vec") {
        let inner = scalar_kind(inner);

        return quote!(::cmswire::model::FieldKind::list(#inner));
    }

    quote!(::cmswire::model::FieldKind::Scalar(
        ::cmswire::model::ScalarKind::Enum
    ))
}

/// `Some(tokens)` or `None`, as an expression.
pub fn quote_option(tokens: Option<TokenStream>) -> TokenStream {
    match tokens {
        Some(tokens) => quote!(::std::option::Option::Some(#tokens)),
        None => quote!(::std::option::Option::None),
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn generic_arg_unwraps_the_named_wrapper_only() {
        let ty: Type = parse_quote!(Option<Vec<Status>>);
        let inner = generic_arg(&ty, "Option").unwrap();

        assert!(is_path_ident(inner, "Vec"));
        assert!(generic_arg(&ty, "Vec").is_none());
    }

    #[test]
    fn scalar_kind_keeps_list_layers() {
        let ty: Type = parse_quote!(Option<Vec<Status>>);
        let tokens = scalar_kind(&ty).to_string();

        assert!(tokens.contains("FieldKind :: list"));
        assert!(tokens.contains("ScalarKind :: Enum"));

        let plain: Type = parse_quote!(Box<Status>);
        assert!(!scalar_kind(&plain).to_string().contains("list"));
    }
}
