//! Helper macro for declaring port error enums.
//!
//! Each variant gets a `thiserror` message and a snake_case constructor whose
//! parameters accept anything convertible into the field type, so adapters can
//! write `UserPersistenceError::query("...")`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use crate::domain::ports::{UniqueUserField, UserPersistenceError};

    define_port_error! {
        pub enum ProbePortError {
            Offline => "probe offline",
            Rejected { attempts: u32 } => "rejected after {attempts} attempts",
        }
    }

    #[test]
    fn string_constructors_accept_str() {
        let err = UserPersistenceError::connection("refused");
        assert_eq!(err.to_string(), "user repository connection failed: refused");
    }

    #[test]
    fn typed_constructors_keep_field_values() {
        let err = UserPersistenceError::unique_violation(UniqueUserField::Email);
        assert_eq!(
            err,
            UserPersistenceError::UniqueViolation {
                field: UniqueUserField::Email
            }
        );
        assert!(err.to_string().ends_with("on email"));
    }

    #[test]
    fn unit_variants_get_constructors() {
        assert_eq!(ProbePortError::offline().to_string(), "probe offline");
        assert_eq!(
            ProbePortError::rejected(3_u32).to_string(),
            "rejected after 3 attempts"
        );
    }
}
