use std::fmt;

use thiserror::Error;

/// One of the three numeric fields of a version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Patch => "patch",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected version string as \"major.minor\" or \"major.minor.patch\"")]
    MalformedFormat,

    #[error("could not parse {text} as {component} version")]
    InvalidComponent { component: Component, text: String },
}
