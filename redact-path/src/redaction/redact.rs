//! The path walker and its entrypoints.
//!
//! [`walk`] is the whole algorithm: an exhausted path resets the current
//! value; otherwise the value's [`Shape`] decides what happens to the next
//! segment. Records and maps consume it, sequences and references pass the
//! same remaining path on, leaves reject it.

use super::{
    error::{PathPrefix, RedactError, Result},
    traits::{Kind, Redactable, Shape},
};
use crate::policy::{MapEntryPolicy, MissingKeyPolicy, RedactOptions};

// =============================================================================
// Cursor - position of the walk within the path
// =============================================================================

/// Position of the walk: the options in force, the full path and how many
/// segments have been consumed.
///
/// Sequence and reference implementations receive a cursor and hand their
/// children back to the walker through [`Cursor::enter`].
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    options: &'a RedactOptions,
    path: &'a [&'a str],
    depth: usize,
    type_name: &'static str,
}

impl<'a> Cursor<'a> {
    fn root(options: &'a RedactOptions, path: &'a [&'a str]) -> Self {
        Self {
            options,
            path,
            depth: 0,
            type_name: "",
        }
    }

    /// Continues the walk into `value` with the current remaining path.
    pub fn enter(self, value: &mut dyn Redactable) -> Result<()> {
        walk(self, value)
    }

    /// Segments not yet consumed.
    pub fn remaining(&self) -> &'a [&'a str] {
        &self.path[self.depth..]
    }

    /// Segments consumed so far.
    pub fn prefix(&self) -> PathPrefix {
        PathPrefix::new(&self.path[..self.depth])
    }

    /// Error for a reference with no target.
    pub fn nil_reference(self) -> RedactError {
        RedactError::NilReference {
            path: self.prefix(),
            type_name: self.type_name,
        }
    }

    /// Error for a reference whose target cannot be borrowed mutably.
    pub fn not_a_reference(self, reason: &'static str) -> RedactError {
        RedactError::NotAReference {
            path: self.prefix(),
            type_name: self.type_name,
            reason,
        }
    }

    fn at(self, type_name: &'static str) -> Self {
        Self { type_name, ..self }
    }

    fn advance(self) -> Self {
        Self {
            depth: self.depth + 1,
            ..self
        }
    }
}

// =============================================================================
// walk - the recursive traversal
// =============================================================================

fn walk(cursor: Cursor<'_>, value: &mut dyn Redactable) -> Result<()> {
    let Some((&head, rest)) = cursor.remaining().split_first() else {
        #[cfg(feature = "tracing")]
        tracing::trace!(path = %cursor.prefix(), type_name = value.type_name(), "reset");
        value.reset();
        return Ok(());
    };

    let cursor = cursor.at(value.type_name());
    let shape = value.shape();

    #[cfg(feature = "tracing")]
    tracing::trace!(
        path = %cursor.prefix(),
        segment = head,
        kind = %shape.kind(),
        type_name = cursor.type_name,
        "step"
    );

    match shape {
        Shape::Record(record) => {
            let available = record.field_names();
            match record.field_mut(head) {
                Some(field) => walk(cursor.advance(), field),
                None => Err(RedactError::NoSuchField {
                    path: cursor.prefix(),
                    field: head.to_owned(),
                    type_name: cursor.type_name,
                    available,
                }),
            }
        }
        Shape::KeyedMap(map) => {
            if rest.is_empty() {
                // Last segment: the entry itself is zeroed, never walked into.
                if let Some(entry) = map.entry_mut(head) {
                    entry.reset();
                    return Ok(());
                }
                let inserted = match cursor.options.missing_keys {
                    MissingKeyPolicy::Insert => map.insert_zeroed(head),
                    MissingKeyPolicy::Reject => false,
                };
                return if inserted {
                    Ok(())
                } else {
                    Err(no_such_key(cursor, head))
                };
            }

            let addressable = map.entries_addressable()
                || cursor.options.map_entries == MapEntryPolicy::InPlace;
            let Some(entry) = map.entry_mut(head) else {
                return Err(no_such_key(cursor, head));
            };
            // References, sequences and maps reach their elements indirectly.
            let entry_kind = entry.shape().kind();
            if !addressable
                && !matches!(entry_kind, Kind::Reference | Kind::Sequence | Kind::KeyedMap)
            {
                return Err(RedactError::Unaddressable {
                    path: cursor.prefix(),
                    key: head.to_owned(),
                    type_name: cursor.type_name,
                    entry_type: entry.type_name(),
                });
            }
            walk(cursor.advance(), entry)
        }
        Shape::Sequence(sequence) => sequence.visit_elements(cursor),
        Shape::Reference(reference) => reference.visit_target(cursor),
        Shape::Leaf => Err(RedactError::UnsupportedType {
            path: cursor.prefix(),
            type_name: cursor.type_name,
            remaining: cursor
                .remaining()
                .iter()
                .map(|segment| (*segment).to_owned())
                .collect(),
        }),
    }
}

fn no_such_key(cursor: Cursor<'_>, key: &str) -> RedactError {
    RedactError::NoSuchKey {
        path: cursor.prefix(),
        key: key.to_owned(),
        type_name: cursor.type_name,
    }
}

// =============================================================================
// Entrypoints
// =============================================================================

/// Applies path redaction with a fixed set of [`RedactOptions`].
///
/// ```rust
/// use std::collections::HashMap;
///
/// use redact_path::{MissingKeyPolicy, Redactor};
///
/// let mut tokens = HashMap::from([("github".to_string(), "ghp_x".to_string())]);
/// let redactor = Redactor::new().with_missing_keys(MissingKeyPolicy::Reject);
/// redactor.redact(&["github"], &mut tokens).unwrap();
/// assert_eq!(tokens["github"], "");
/// assert!(redactor.redact(&["gitlab"], &mut tokens).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Redactor {
    options: RedactOptions,
}

impl Redactor {
    pub const fn new() -> Self {
        Self {
            options: RedactOptions::new(),
        }
    }

    pub const fn with_options(options: RedactOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn with_missing_keys(mut self, policy: MissingKeyPolicy) -> Self {
        self.options.missing_keys = policy;
        self
    }

    #[must_use]
    pub const fn with_map_entries(mut self, policy: MapEntryPolicy) -> Self {
        self.options.map_entries = policy;
        self
    }

    pub const fn options(&self) -> &RedactOptions {
        &self.options
    }

    /// Resets every value `path` addresses inside `value` to its zero value.
    ///
    /// Records and maps consume one segment each; sequences apply the
    /// remaining path to every element; references are followed without
    /// consuming a segment. An empty path resets `value` itself.
    pub fn redact<S: AsRef<str>>(&self, path: &[S], value: &mut dyn Redactable) -> Result<()> {
        let segments: Vec<&str> = path.iter().map(AsRef::as_ref).collect();
        let result = walk(Cursor::root(&self.options, &segments), value);

        #[cfg(feature = "tracing")]
        if let Err(err) = &result {
            tracing::debug!(
                code = err.code(),
                kind = %err.kind(),
                path = %err.path(),
                type_name = err.type_name(),
                "path redaction failed"
            );
        }

        result
    }
}

/// Resets the value(s) at `path` inside `value` using the default options.
///
/// ```rust
/// use redact_path::redact;
///
/// # fn main() -> redact_path::Result<()> {
/// let mut hosts = vec![Some(Box::new(String::from("db.internal")))];
/// redact::<&str>(&[], &mut hosts[0])?;
/// assert_eq!(hosts[0], None);
/// # Ok(())
/// # }
/// ```
pub fn redact<S: AsRef<str>>(path: &[S], value: &mut dyn Redactable) -> Result<()> {
    Redactor::new().redact(path, value)
}

/// Method form of [`redact`] for any [`Redactable`] value.
pub trait RedactPathExt: Redactable + Sized {
    /// Resets the value(s) at `path` using the default options.
    fn redact_path<S: AsRef<str>>(&mut self, path: &[S]) -> Result<()> {
        redact(path, self)
    }

    /// Resets the value(s) at `path` using `redactor`'s options.
    fn redact_path_with<S: AsRef<str>>(&mut self, redactor: &Redactor, path: &[S]) -> Result<()> {
        redactor.redact(path, self)
    }
}

impl<T> RedactPathExt for T where T: Redactable {}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{RedactPathExt, Redactor, redact};
    use crate::{
        Kind, MapEntryPolicy, MissingKeyPolicy, RedactError,
        redaction::traits::{Record, Redactable, Shape},
    };

    #[derive(Debug, Default, PartialEq)]
    struct Login {
        user: String,
        password: String,
    }

    impl Redactable for Login {
        fn reset(&mut self) {
            *self = Self::zeroed();
        }

        fn shape(&mut self) -> Shape<'_> {
            Shape::Record(self)
        }

        fn zeroed() -> Self {
            Self {
                user: Redactable::zeroed(),
                password: Redactable::zeroed(),
            }
        }
    }

    impl Record for Login {
        fn field_mut(&mut self, name: &str) -> Option<&mut dyn Redactable> {
            match name {
                "user" => Some(&mut self.user),
                "password" => Some(&mut self.password),
                _ => None,
            }
        }

        fn field_names(&self) -> &'static [&'static str] {
            &["user", "password"]
        }
    }

    fn login(user: &str, password: &str) -> Login {
        Login {
            user: user.into(),
            password: password.into(),
        }
    }

    #[test]
    fn empty_path_resets_root() {
        let mut value = login("john", "letmein");
        redact::<&str>(&[], &mut value).unwrap();
        assert_eq!(value, Login::default());
    }

    #[test]
    fn record_field_is_reset() {
        let mut value = login("john", "letmein");
        redact(&["password"], &mut value).unwrap();
        assert_eq!(value, login("john", ""));
    }

    #[test]
    fn unknown_field_fails_with_prefix() {
        let mut value = vec![login("john", "letmein")];
        let err = redact(&["secret"], &mut value).unwrap_err();
        assert!(matches!(err, RedactError::NoSuchField { ref field, .. } if field == "secret"));
        assert_eq!(err.kind(), Kind::Record);
        assert!(err.path().is_root());
    }

    #[test]
    fn leaf_with_remaining_path_fails() {
        let mut value = login("john", "letmein");
        let err = redact(&["user", "first"], &mut value).unwrap_err();
        assert_eq!(err.code(), "unsupported_type");
        assert_eq!(err.path().to_string(), "user");
        assert_eq!(value, login("john", "letmein"));
    }

    #[test]
    fn map_of_values_is_unaddressable_by_default() {
        let mut value = HashMap::from([("a".to_string(), login("john", "letmein"))]);
        let err = redact(&["a", "password"], &mut value).unwrap_err();
        assert!(matches!(err, RedactError::Unaddressable { ref key, .. } if key == "a"));
        assert_eq!(value["a"].password, "letmein");
    }

    #[test]
    fn map_of_sequences_is_walked_by_default() {
        let mut value = HashMap::from([
            ("a".to_string(), vec![Box::new(login("john", "letmein"))]),
            ("b".to_string(), vec![Box::new(login("mary", "123456"))]),
        ]);
        redact(&["a", "password"], &mut value).unwrap();
        assert_eq!(*value["a"][0], login("john", ""));
        assert_eq!(*value["b"][0], login("mary", "123456"));
    }

    #[test]
    fn map_of_maps_is_walked_by_default() {
        let mut value = HashMap::from([(
            "a".to_string(),
            HashMap::from([("b".to_string(), "secret".to_string())]),
        )]);
        redact(&["a", "b"], &mut value).unwrap();
        assert_eq!(value["a"]["b"], "");

        let err = redact(&["a", "b", "c"], &mut value).unwrap_err();
        assert_eq!(err.code(), "unaddressable");
        assert_eq!(err.path().to_string(), "a");
    }

    #[test]
    fn in_place_map_entries_can_be_walked() {
        let mut value = HashMap::from([("a".to_string(), login("john", "letmein"))]);
        let redactor = Redactor::new().with_map_entries(MapEntryPolicy::InPlace);
        redactor.redact(&["a", "password"], &mut value).unwrap();
        assert_eq!(value["a"], login("john", ""));
    }

    #[test]
    fn terminal_missing_key_follows_policy() {
        let mut value: HashMap<String, Login> = HashMap::new();
        redact(&["b"], &mut value).unwrap();
        assert_eq!(value["b"], Login::default());

        let mut value: HashMap<String, Login> = HashMap::new();
        let err = Redactor::new()
            .with_missing_keys(MissingKeyPolicy::Reject)
            .redact(&["b"], &mut value)
            .unwrap_err();
        assert_eq!(err.code(), "no_such_key");
        assert!(value.is_empty());
    }

    #[test]
    fn extension_trait_matches_free_function() {
        let mut value = login("john", "letmein");
        value.redact_path(&["user"]).unwrap();
        assert_eq!(value, login("", "letmein"));

        let redactor = Redactor::new();
        value.redact_path_with(&redactor, &["password"]).unwrap();
        assert_eq!(value, Login::default());
    }

    #[test]
    fn owned_segments_are_accepted() {
        let path = vec!["password".to_string()];
        let mut value = login("john", "letmein");
        redact(&path, &mut value).unwrap();
        assert_eq!(value.password, "");
    }
}
