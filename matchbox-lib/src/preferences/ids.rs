use derive_more::{Deref, Display, From};
use serde::{Deserialize, Serialize};

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Deref, Serialize,
            Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }
    };
}

identifier!(
    /// Identifies a [`Resource`](super::Resource) and the entry built from it.
    ResourceId
);

identifier!(
    /// Identifies a persisted preference record.
    PreferenceId
);

identifier!(
    /// Identifies the user owning preference records.
    UserId
);
