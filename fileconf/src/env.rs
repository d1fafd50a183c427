//! Lookup of environment variable values

use std::collections::{BTreeMap, HashMap};
use std::env;
use std::hash::BuildHasher;

/// A source of environment variable values, looked up by name.
///
/// The walker only ever asks for single names, so anything that maps a name
/// to a string can stand in for the process environment.
pub trait EnvSource {
    /// Value of the variable `name`, or `None` if it is not set.
    fn get(&self, name: &str) -> Option<String>;
}

/// The real process environment.
///
/// Variables whose value is not valid Unicode are reported as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

/// Adapts a closure into an [`EnvSource`].
///
/// ```rust
/// use fileconf::{EnvSource, FnEnv};
///
/// let env = FnEnv(|name: &str| (name == "PORT").then(|| "9090".to_string()));
/// assert_eq!(env.get("PORT").as_deref(), Some("9090"));
/// assert_eq!(env.get("HOST"), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnEnv<F>(pub F);

impl<F> EnvSource for FnEnv<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, name: &str) -> Option<String> {
        (self.0)(name)
    }
}

impl<S: BuildHasher> EnvSource for HashMap<String, String, S> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        BTreeMap::get(self, name).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_process_env_reads_set_variable() {
        env::set_var("FILECONF_ENV_TEST", "value");
        assert_eq!(ProcessEnv.get("FILECONF_ENV_TEST").as_deref(), Some("value"));
        env::remove_var("FILECONF_ENV_TEST");
    }

    #[test]
    #[serial]
    fn test_process_env_missing_variable() {
        env::remove_var("FILECONF_ENV_MISSING");
        assert_eq!(ProcessEnv.get("FILECONF_ENV_MISSING"), None);
    }

    #[test]
    fn test_map_sources() {
        let hash: HashMap<String, String> = [("A".to_string(), "1".to_string())].into();
        let tree: BTreeMap<String, String> = [("B".to_string(), "2".to_string())].into();

        assert_eq!(EnvSource::get(&hash, "A").as_deref(), Some("1"));
        assert_eq!(EnvSource::get(&hash, "B"), None);
        assert_eq!(EnvSource::get(&tree, "B").as_deref(), Some("2"));
    }

    #[test]
    fn test_reference_and_dyn_sources() {
        let hash: HashMap<String, String> = [("A".to_string(), "1".to_string())].into();
        let dynamic: &dyn EnvSource = &hash;
        assert_eq!((&dynamic).get("A").as_deref(), Some("1"));
    }
}
