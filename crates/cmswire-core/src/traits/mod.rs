use crate::{
    model::{ContentModel, FieldKind, UnionModel},
    read::ReadError,
    registry::{Registry, RegistryError},
    wire::{WireMap, WireNode},
    write::{self, WriteError},
};

// ============================================================================
// CONTENT TYPES
// ============================================================================
//
// These traits are implemented by the derives; hand-written impls must keep
// the same contracts.
//

///
/// Content
///
/// A struct with a declared content model.
///
/// ## Contract
/// - `model()` returns the same `&'static` model on every call and never
///   calls `model()` of another type while building it
/// - `write_fields()` maps every declared field under its wire name, in
///   declaration order, and never collapses `self` to an id
/// - `document_id()` returns the opaque string id of collection and
///   singleton types, and `None` for everything else
///

pub trait Content: 'static {
    fn model() -> &'static ContentModel;

    fn write_fields(&self) -> Result<WireMap, WriteError>;

    fn document_id(&self) -> Option<&str> {
        None
    }
}

///
/// ComponentUnion
///
/// A closed set of component variants (a dynamic zone element type).
/// The registry is built once from `union_model()` and is the only source
/// of discriminators for the contract.
///

pub trait ComponentUnion: Sized + 'static {
    fn union_model() -> &'static UnionModel;

    fn registry() -> Result<&'static Registry, RegistryError>;

    /// Model of the variant held by `self`.
    fn variant_model(&self) -> &'static ContentModel;

    /// Own fields of the variant held by `self`, without a discriminator.
    fn write_variant(&self) -> Result<WireMap, WriteError>;

    /// Build the variant whose model is `model` from its wire form.
    fn decode_variant(model: &ContentModel, node: WireNode) -> Result<Self, ReadError>;
}

///
/// WireField
///
/// Anything that can appear as a field of a content type.
/// `kind()` describes the declared shape; `to_wire()` maps a nested value
/// according to that shape's role.
///

pub trait WireField {
    fn kind() -> FieldKind;

    fn to_wire(&self) -> Result<WireNode, WriteError>;
}

impl<T: WireField> WireField for Option<T> {
    fn kind() -> FieldKind {
        T::kind()
    }

    fn to_wire(&self) -> Result<WireNode, WriteError> {
        match self {
            Some(value) => value.to_wire(),
            None => Ok(WireNode::Null),
        }
    }
}

impl<T: WireField> WireField for Box<T> {
    fn kind() -> FieldKind {
        T::kind()
    }

    fn to_wire(&self) -> Result<WireNode, WriteError> {
        (**self).to_wire()
    }
}

impl<T: WireField> WireField for Vec<T> {
    fn kind() -> FieldKind {
        FieldKind::list(T::kind())
    }

    fn to_wire(&self) -> Result<WireNode, WriteError> {
        write::map_list(self)
    }
}

impl_wire_scalar!(
    String => Text,
    bool => Bool,
    i8 => Integer,
    i16 => Integer,
    i32 => Integer,
    i64 => Integer,
    isize => Integer,
    u8 => Integer,
    u16 => Integer,
    u32 => Integer,
    u64 => Integer,
    usize => Integer,
    f32 => Float,
    f64 => Float,
    chrono::NaiveDate => Date,
    chrono::NaiveTime => Time,
    chrono::NaiveDateTime => DateTime,
    chrono::DateTime<chrono::Utc> => DateTime,
    chrono::DateTime<chrono::FixedOffset> => DateTime,
    uuid::Uuid => Uuid,
    serde_json::Value => Json,
);

///
/// AsDocumentId
///
/// Field types usable as the opaque document id of a collection or
/// singleton type. Blank ids count as absent.
///

pub trait AsDocumentId {
    fn as_document_id(&self) -> Option<&str>;
}

impl AsDocumentId for String {
    fn as_document_id(&self) -> Option<&str> {
        Some(self.as_str()).filter(|id| !id.trim().is_empty())
    }
}

impl AsDocumentId for Option<String> {
    fn as_document_id(&self) -> Option<&str> {
        self.as_ref().and_then(AsDocumentId::as_document_id)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScalarKind;
    use serde_json::json;

    #[test]
    fn option_is_transparent_for_kind_and_null_for_none() {
        assert!(matches!(
            <Option<String>>::kind(),
            FieldKind::Scalar(ScalarKind::Text)
        ));
        assert_eq!(None::<String>.to_wire().unwrap(), WireNode::Null);
        assert_eq!(Some(3_u8).to_wire().unwrap(), json!(3));
    }

    #[test]
    fn scalars_pass_through() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();

        assert_eq!("t".to_string().to_wire().unwrap(), json!("t"));
        assert_eq!(true.to_wire().unwrap(), json!(true));
        assert_eq!(1.5_f64.to_wire().unwrap(), json!(1.5));
        assert_eq!(date.to_wire().unwrap(), json!("2024-05-17"));
        assert_eq!(
            json!({ "raw": [1, 2] }).to_wire().unwrap(),
            json!({ "raw": [1, 2] })
        );
    }

    #[test]
    fn blank_document_ids_are_absent() {
        assert_eq!("a1".to_string().as_document_id(), Some("a1"));
        assert_eq!(" ".to_string().as_document_id(), None);
        assert_eq!(None::<String>.as_document_id(), None);
        assert_eq!(Some(String::new()).as_document_id(), None);
    }
}
