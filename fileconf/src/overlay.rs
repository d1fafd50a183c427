//! Environment overlay walk
//!
//! Descends through a value's [`Node`]s, deriving a variable name for every
//! position, and overwrites each scalar whose variable is set.
//!
//! Names are built from the root outward: record fields contribute their
//! uppercased name and sequence elements their index, joined with `_`.
//! `database.replicas[1].port` is therefore read from `DATABASE_REPLICAS_1_PORT`.

use crate::env::EnvSource;
use crate::error::ConfigError;
use crate::node::{Node, Overlay, Scalar};

/// Overlay environment values onto `target`, starting from the root name.
///
/// ```rust
/// use std::collections::HashMap;
/// use fileconf::Overlay;
///
/// #[derive(Overlay)]
/// struct Config {
///     port: u16,
/// }
///
/// let env: HashMap<String, String> = [("PORT".to_string(), "9090".to_string())].into();
/// let mut config = Config { port: 8080 };
/// fileconf::overlay_env(&mut config, &env).unwrap();
/// assert_eq!(config.port, 9090);
/// ```
pub fn overlay_env<T: Overlay>(target: &mut T, env: &dyn EnvSource) -> Result<(), ConfigError> {
    overlay(target, "", env)
}

/// Overlay environment values onto `target`, whose variable name is `prefix`.
///
/// Unset or empty variables leave their field alone, and so do values that do
/// not parse as the field's type. The only error is
/// [`ConfigError::InvalidTarget`], for an indirection that cannot be
/// borrowed exclusively; the walk stops there, keeping overrides already made.
pub fn overlay(
    target: &mut dyn Overlay,
    prefix: &str,
    env: &dyn EnvSource,
) -> Result<(), ConfigError> {
    match target.node() {
        Node::Reference(Some(inner)) => overlay(inner, prefix, env),
        Node::Reference(None) => Err(ConfigError::invalid_target(prefix)),
        Node::Scalar(scalar) => {
            apply(scalar, prefix, env);
            Ok(())
        }
        Node::Sequence(elements) => {
            for (index, element) in elements.into_iter().enumerate() {
                overlay(element, &child_name(prefix, &index.to_string()), env)?;
            }
            Ok(())
        }
        Node::Record(fields) => {
            for field in fields {
                let name = child_name(prefix, &field.name.to_uppercase());
                overlay(field.value, &name, env)?;
            }
            Ok(())
        }
        Node::Opaque => Ok(()),
    }
}

fn child_name(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}_{segment}")
    }
}

fn apply(scalar: &mut dyn Scalar, name: &str, env: &dyn EnvSource) {
    // A bare scalar at the root has no variable of its own.
    if name.is_empty() {
        return;
    }

    let Some(raw) = env.get(name).filter(|v| !v.is_empty()) else {
        return;
    };

    if scalar.assign(&raw) {
        tracing::debug!(var = name, "config value overridden from environment");
    } else {
        tracing::trace!(
            var = name,
            expected = scalar.type_name(),
            "ignoring environment value that does not parse"
        );
    }
}
