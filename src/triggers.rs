//! The condition and effect dictionary.
//!
//! Condition and effect records are a fixed size superset of every slot any
//! operation may use. A record's type code selects the operation, and the
//! operation's parameter whitelist selects which of the slots carry meaning.
//! Slots outside the whitelist are leftover storage and are never read.
//!
//! Condition and effect codes are independent code spaces. Code `0` is the
//! no-op in both, and a handful of codes are historical duplicates that
//! resolve to the same operation as another code.
//!
//! ```rust
//! use rge::triggers::{ConditionKind, EffectKind, Opcode, Param};
//! assert_eq!(ConditionKind::from_code(10), Opcode::Known(ConditionKind::Timer));
//! assert_eq!(EffectKind::from_code(0), Opcode::Nop);
//! assert_eq!(EffectKind::from_code(999), Opcode::Unknown(999));
//!
//! let params = EffectKind::DisplayInstructions.params();
//! assert!(params.contains(&Param::Message));
//! assert!(!params.contains(&Param::ObjectListUnitId));
//! ```

/// Declares an operation enum together with its emitted name and parameter
/// whitelist
macro_rules! operations {
    (
        $(#[$meta:meta])*
        $kind:ident {
            $($variant:ident = $name:literal [$($param:ident),* $(,)?],)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $kind {
            $($variant,)*
        }

        impl $kind {
            /// Every operation of this kind
            pub const ALL: &'static [$kind] = &[$($kind::$variant,)*];

            /// Name of the operation as exposed by the scenario editing
            /// library
            pub fn name(&self) -> &'static str {
                match self {
                    $($kind::$variant => $name,)*
                }
            }

            /// The parameters that are meaningful for this operation, in
            /// the order they are emitted
            pub fn params(&self) -> &'static [Param] {
                match self {
                    $($kind::$variant => &[$(Param::$param),*],)*
                }
            }
        }

        impl std::fmt::Display for $kind {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

mod conditions;
mod effects;
mod params;

pub use conditions::ConditionKind;
pub use effects::EffectKind;
pub use params::*;

/// The result of resolving a type code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode<K> {
    /// The reserved no-op code. Records with it are skipped.
    Nop,

    /// A recognized operation
    Known(K),

    /// A code outside of the dictionary
    Unknown(u32),
}
