//! Helper macro declaring port error enums.
//!
//! Port errors describe infrastructure failures that callers cannot act on,
//! so every generated enum also converts into an internal [`Error`]. Each
//! variant gets a snake-case constructor accepting anything convertible into
//! its field types.
//!
//! [`Error`]: crate::domain::Error

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),* },
            )+
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = concat!("Build [`", stringify!($name), "::", stringify!($variant), "`].")]
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                        Self::$variant { $($field: $field.into()),* }
                    }
                }
            )+
        }

        impl From<$name> for $crate::domain::Error {
            fn from(err: $name) -> Self {
                ::tracing::error!(error = %err, "port failure promoted to internal error");
                $crate::domain::Error::internal(err.to_string())
            }
        }
    };
}

pub(crate) use define_port_error;
