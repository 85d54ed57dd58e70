/// Trait for loading service configuration from environment variables.
///
/// Implementors should derive `serde::Deserialize` (with `#[serde(default)]`
/// for optional settings) and then call `Config::from_env()` at startup.
/// Field names map to upper-cased variable names (`database_url` ← `DATABASE_URL`).
pub trait Config: Sized + serde::de::DeserializeOwned {
    /// # Panics
    ///
    /// Panics if a variable is present but cannot be deserialized.
    fn from_env() -> Self {
        envy::from_env().expect("failed to load config from environment")
    }

    /// Load from an explicit set of `(NAME, value)` pairs instead of the process env.
    fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }
}
