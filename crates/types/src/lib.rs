/// Error returned when a remark category string is not recognised.
#[derive(Debug, thiserror::Error)]
#[error("invalid remark type: {0}")]
pub struct UnknownRemarkKind(pub String);

/// The closed set of remark categories.
///
/// A remark is authored either by the client or by the optometrist; no other
/// category exists. Modelling the set as an enum rather than a runtime list
/// makes an unrecognised category unrepresentable past the parse boundary.
///
/// The wire names are the lowercase strings `client` and `optometrist`,
/// matched exactly (no case folding).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemarkKind {
    Client,
    Optometrist,
}

impl RemarkKind {
    /// Returns the lowercase wire name used in the remark store.
    pub fn as_str(&self) -> &'static str {
        match self {
            RemarkKind::Client => "client",
            RemarkKind::Optometrist => "optometrist",
        }
    }
}

impl std::str::FromStr for RemarkKind {
    type Err = UnknownRemarkKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(RemarkKind::Client),
            "optometrist" => Ok(RemarkKind::Optometrist),
            other => Err(UnknownRemarkKind(other.to_owned())),
        }
    }
}

impl std::fmt::Display for RemarkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl serde::Serialize for RemarkKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for RemarkKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
