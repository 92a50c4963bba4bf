//! Serde helper macros for case-insensitive enum deserialization

/// Macro to implement case-insensitive deserialization for simple enums
///
/// Language and terminal identifiers arrive from config files and CLI
/// arguments in whatever casing the user typed; all of them canonicalize
/// to lowercase.
#[macro_export]
macro_rules! impl_case_insensitive_deserialize {
    ($enum_type:ty, $($variant:ident => $str_val:expr),+ $(,)?) => {
        impl<'de> serde::Deserialize<'de> for $enum_type {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                match s.trim().to_lowercase().as_str() {
                    $(
                        $str_val => Ok(Self::$variant),
                    )+
                    _ => Err(serde::de::Error::custom(format!(
                        "unknown variant '{}', expected one of: {}",
                        s,
                        vec![$($str_val),+].join(", ")
                    ))),
                }
            }
        }
    };
}
