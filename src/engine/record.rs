use std::fmt;

/// One row of a `(name, alerted, discovered, unlocked)` defaults table.
///
/// The key is embedded verbatim: quotes and backslashes are not escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub key: &'a str,
    pub alerted: bool,
    pub discovered: bool,
    pub unlocked: bool,
}

impl<'a> Record<'a> {
    /// A record with every flag cleared.
    pub fn new(key: &'a str) -> Self {
        Self {
            key,
            alerted: false,
            discovered: false,
            unlocked: false,
        }
    }
}

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(\"{}\", {}, {}, {}),",
            self.key, self.alerted, self.discovered, self.unlocked
        )
    }
}
