/// Declares an enum over a set of concrete node kinds.
///
/// The enum is a [`Node`](crate::node::Node) that delegates to its variant and
/// a [`Parse`](crate::node::Parse) target that accepts exactly the listed
/// kinds. Every listed type gets a `From` conversion into the enum.
macro_rules! node_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $expected:literal {
            $( $variant:ident($ty:ty) ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $( $variant($ty), )*
        }

        $(
            impl From<$ty> for $name {
                fn from(node: $ty) -> Self {
                    $name::$variant(node)
                }
            }
        )*

        impl $crate::node::Node for $name {
            fn kind(&self) -> $crate::kind::Kind {
                match self {
                    $( $name::$variant(node) => $crate::node::Node::kind(node), )*
                }
            }

            fn extra(&self) -> &$crate::node::Extra {
                match self {
                    $( $name::$variant(node) => $crate::node::Node::extra(node), )*
                }
            }

            fn extra_mut(&mut self) -> &mut $crate::node::Extra {
                match self {
                    $( $name::$variant(node) => $crate::node::Node::extra_mut(node), )*
                }
            }

            fn validate_in(
                &self,
                cx: $crate::context::Context<'_>,
            ) -> Result<(), $crate::error::ValidationError> {
                match self {
                    $( $name::$variant(node) => $crate::node::Node::validate_in(node, cx), )*
                }
            }

            fn write_fields(
                &self,
                out: &mut $crate::node::FieldWriter<'_>,
            ) -> Result<(), $crate::error::ValidationError> {
                match self {
                    $( $name::$variant(node) => $crate::node::Node::write_fields(node, out), )*
                }
            }
        }

        impl $crate::node::Parse for $name {
            fn expected() -> &'static str {
                $expected
            }

            fn accepts(kind: $crate::kind::Kind) -> bool {
                $( kind == <$ty as $crate::node::Hydrate>::KIND )||*
            }

            fn implied_kind() -> Option<$crate::kind::Kind> {
                None
            }

            fn hydrate_as(
                kind: $crate::kind::Kind,
                data: $crate::JsonMap,
            ) -> Result<Self, $crate::error::Error> {
                $(
                    if kind == <$ty as $crate::node::Hydrate>::KIND {
                        let data = $crate::hydrate::HydrationData::new(data);
                        return <$ty as $crate::node::Hydrate>::hydrate(data).map($name::$variant);
                    }
                )*
                Err($crate::error::TypeMismatch {
                    resolved: kind,
                    expected: $expected,
                }
                .into())
            }
        }
    };
}

pub(crate) use node_union;
