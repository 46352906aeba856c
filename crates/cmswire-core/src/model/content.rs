use crate::model::{FieldModel, ModelError};
use derive_more::Display;
use std::collections::BTreeSet;

///
/// Marker
///
/// Declarative role marker attached to a content type.
/// A type carries at most one.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Marker {
    /// Independently addressable record; the payload is the API collection name.
    #[display("collection({_0})")]
    Collection(&'static str),

    /// Record with exactly one logical instance; the payload is its API name.
    #[display("single({_0})")]
    Singleton(&'static str),

    /// Embeddable shape; the payload is its discriminator string.
    #[display("component({_0})")]
    Component(&'static str),
}

impl Marker {
    /// Resolve the declared markers of a type into its single marker.
    /// Rejects a type that declares more than one, or an empty name.
    pub fn from_declared(
        path: &'static str,
        collection: Option<&'static str>,
        single: Option<&'static str>,
        component: Option<&'static str>,
    ) -> Result<Option<Self>, ModelError> {
        let declared = [
            collection.map(Self::Collection),
            single.map(Self::Singleton),
            component.map(Self::Component),
        ];
        let mut markers = declared.into_iter().flatten();

        let Some(marker) = markers.next() else {
            return Ok(None);
        };

        let rest: Vec<Self> = markers.collect();
        if !rest.is_empty() {
            let markers = std::iter::once(marker)
                .chain(rest)
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(", ");

            return Err(ModelError::ConflictingMarkers { path, markers });
        }

        if marker.name().trim().is_empty() {
            return Err(ModelError::EmptyMarker {
                path,
                marker: marker.kind(),
            });
        }

        Ok(Some(marker))
    }

    /// The marker's payload: API name or discriminator.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Collection(name) | Self::Singleton(name) | Self::Component(name) => name,
        }
    }

    #[must_use]
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Collection(_) => "collection",
            Self::Singleton(_) => "single",
            Self::Component(_) => "component",
        }
    }
}

///
/// ContentModel
/// Declared shape of one content type.
///

#[derive(Debug)]
pub struct ContentModel {
    /// Fully-qualified Rust type path; the type's identity.
    pub path: &'static str,
    /// Bare type name, for diagnostics.
    pub ident: &'static str,
    pub marker: Option<Marker>,
    /// Ordered field list; declaration order drives output order.
    pub fields: Vec<FieldModel>,
}

impl ContentModel {
    #[must_use]
    pub fn new(path: &'static str, ident: &'static str, marker: Option<Marker>) -> Self {
        Self {
            path,
            ident,
            marker,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, field: FieldModel) -> Self {
        self.fields.push(field);
        self
    }

    /// Field by wire name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldModel> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field by Rust identifier.
    #[must_use]
    pub fn field_by_ident(&self, ident: &str) -> Option<&FieldModel> {
        self.fields.iter().find(|f| f.ident == ident)
    }

    #[must_use]
    pub const fn discriminator(&self) -> Option<&'static str> {
        match self.marker {
            Some(Marker::Component(discriminator)) => Some(discriminator),
            _ => None,
        }
    }

    /// API name of a collection or singleton type.
    #[must_use]
    pub const fn api_name(&self) -> Option<&'static str> {
        match self.marker {
            Some(Marker::Collection(name) | Marker::Singleton(name)) => Some(name),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_component(&self) -> bool {
        matches!(self.marker, Some(Marker::Component(_)))
    }

    /// Check the declaration: non-empty marker payload, unique non-empty
    /// wire names.
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(marker) = self.marker
            && marker.name().trim().is_empty()
        {
            return Err(ModelError::EmptyMarker {
                path: self.path,
                marker: marker.kind(),
            });
        }

        let mut seen = BTreeSet::new();
        for field in &self.fields {
            if field.name.is_empty() {
                return Err(ModelError::EmptyFieldName { path: self.path });
            }
            if !seen.insert(field.name) {
                return Err(ModelError::DuplicateField {
                    path: self.path,
                    name: field.name,
                });
            }
        }

        Ok(())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldKind, ScalarKind};

    #[test]
    fn single_declared_marker_is_accepted() {
        let marker = Marker::from_declared("a::Article", Some("articles"), None, None);
        assert_eq!(marker, Ok(Some(Marker::Collection("articles"))));

        let none = Marker::from_declared("a::Seo", None, None, None);
        assert_eq!(none, Ok(None));
    }

    #[test]
    fn conflicting_markers_are_rejected() {
        let err = Marker::from_declared("a::Odd", Some("odds"), None, Some("shared.odd"))
            .expect_err("two markers must be rejected");

        assert_eq!(
            err,
            ModelError::ConflictingMarkers {
                path: "a::Odd",
                markers: "collection(odds), component(shared.odd)".to_string(),
            }
        );
    }

    #[test]
    fn blank_marker_name_is_rejected() {
        let err = Marker::from_declared("a::Quote", None, None, Some("  "))
            .expect_err("blank discriminator must be rejected");

        assert_eq!(
            err,
            ModelError::EmptyMarker {
                path: "a::Quote",
                marker: "component",
            }
        );
    }

    #[test]
    fn validate_rejects_duplicate_wire_names() {
        let model = ContentModel::new("a::Dup", "Dup", None)
            .with_field(FieldModel::new(
                "title",
                "title",
                FieldKind::Scalar(ScalarKind::Text),
            ))
            .with_field(FieldModel::new(
                "heading",
                "title",
                FieldKind::Scalar(ScalarKind::Text),
            ));

        assert_eq!(
            model.validate(),
            Err(ModelError::DuplicateField {
                path: "a::Dup",
                name: "title",
            })
        );
    }

    #[test]
    fn marker_accessors() {
        let model = ContentModel::new("a::Home", "Home", Some(Marker::Singleton("homepage")));

        assert_eq!(model.api_name(), Some("homepage"));
        assert_eq!(model.discriminator(), None);
        assert!(!model.is_component());
        assert!(model.validate().is_ok());
    }
}
