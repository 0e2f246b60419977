//! Closed string vocabularies shared by the entity types.
//!
//! Every status, type, and option field on the wire is a fixed label such as
//! `"active"` or `"Fixed Price"`. [`labelled_enum!`] declares the Rust enum,
//! its serde/OpenAPI spelling, and the label accessor in one place so the
//! three never drift apart.

macro_rules! labelled_enum {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
            ::utoipa::ToSchema,
        )]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire label for this variant.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use labelled_enum;

#[cfg(test)]
mod tests {
    labelled_enum! {
        /// Example vocabulary.
        pub enum Shade {
            /// Light.
            Pale => "pale",
            /// Dark.
            Deep => "Deep Shade",
        }
    }

    #[test]
    fn labels_match_serde_spelling() {
        for shade in Shade::ALL {
            let encoded = serde_json::to_value(shade).expect("serialise");
            assert_eq!(encoded, serde_json::json!(shade.as_str()));
        }
    }

    #[test]
    fn labels_parse_back() {
        let parsed: Shade = serde_json::from_str("\"Deep Shade\"").expect("deserialise");
        assert_eq!(parsed, Shade::Deep);
        assert_eq!(parsed.to_string(), "Deep Shade");
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert!(serde_json::from_str::<Shade>("\"pink\"").is_err());
    }
}
