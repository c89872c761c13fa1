//! Macros for ergonomic event declarations.

/// Generate an event-name enum and its `Event` implementation.
///
/// Variants are named after themselves unless given an explicit label
/// with `as "label"`.
///
/// # Example
///
/// ```
/// use relayline::core::Event;
/// use relayline::event_enum;
///
/// event_enum! {
///     pub enum CacheEvent {
///         Receive as "receive",
///         Lookup as "lookup",
///         Deliver,
///     }
/// }
///
/// assert_eq!(CacheEvent::Lookup.name(), "lookup");
/// assert_eq!(CacheEvent::Deliver.name(), "Deliver");
/// ```
#[macro_export]
macro_rules! event_enum {
    (@label $variant:ident $label:literal) => {
        $label
    };
    (@label $variant:ident) => {
        stringify!($variant)
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(as $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::event_enum!(@label $variant $($label)?)),*
                }
            }
        }
    };
}
