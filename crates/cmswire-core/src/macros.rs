// impl_wire_scalar
/// Declare one or more types as wire scalars of the given `ScalarKind`.
///
/// Scalars are serialized with serde and passed through unchanged by the
/// write mapper. Use this for enum-like types owned by the application:
///
/// `cmswire::impl_wire_scalar!(Status => Enum);`
#[macro_export]
macro_rules! impl_wire_scalar {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl $crate::traits::WireField for $ty {
                fn kind() -> $crate::model::FieldKind {
                    $crate::model::FieldKind::Scalar($crate::model::ScalarKind::$kind)
                }

                fn to_wire(
                    &self,
                ) -> ::std::result::Result<$crate::wire::WireNode, $crate::write::WriteError> {
                    $crate::write::scalar_to_wire(self)
                }
            }
        )*
    };
}
