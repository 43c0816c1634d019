//! Macros for declaring typed state and event identifiers.

/// Generate a [`State`](crate::core::State) enum from a list of variants.
///
/// # Example
///
/// ```
/// use rewind::core::State;
/// use rewind::state_enum;
///
/// state_enum! {
///     pub enum Stage {
///         Draft,
///         Review,
///         Published,
///     }
/// }
///
/// assert_eq!(Stage::Review.name(), "Review");
/// ```
#[macro_export]
macro_rules! state_enum {
    ($($body:tt)*) => {
        $crate::__identifier_enum! { $crate::core::State; $($body)* }
    };
}

/// Generate an [`Event`](crate::core::Event) enum from a list of variants.
///
/// # Example
///
/// ```
/// use rewind::core::Event;
/// use rewind::event_enum;
///
/// event_enum! {
///     pub enum Action {
///         Submit,
///         Approve,
///     }
/// }
///
/// assert_eq!(Action::Approve.name(), "Approve");
/// ```
#[macro_export]
macro_rules! event_enum {
    ($($body:tt)*) => {
        $crate::__identifier_enum! { $crate::core::Event; $($body)* }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __identifier_enum {
    (
        $trait:path;
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $trait for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }
    };
}
