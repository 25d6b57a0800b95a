/// Resolves a message key into display text.
///
/// Implementations must be total: an unknown key still yields a string.
pub trait MessageLookup {
    fn lookup(&self, key: &str) -> String;
}

impl<F> MessageLookup for F
where
    F: Fn(&str) -> String,
{
    fn lookup(&self, key: &str) -> String {
        self(key)
    }
}

/// Lookup that echoes the key back
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyEcho;

impl MessageLookup for KeyEcho {
    fn lookup(&self, key: &str) -> String {
        key.to_string()
    }
}
