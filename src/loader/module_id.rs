use std::borrow::Cow;
use std::fmt;

/// Stable key naming one logical module.
///
/// Two libraries carrying equal ids are treated as the same module by
/// [`LoadCache`](super::LoadCache): only the first loader registered for an
/// id is ever invoked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(Cow<'static, str>);

impl ModuleId {
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self(id.into())
    }

    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ModuleId {
    fn from(id: &'static str) -> Self {
        Self::from_static(id)
    }
}

impl From<String> for ModuleId {
    fn from(id: String) -> Self {
        Self(Cow::Owned(id))
    }
}
