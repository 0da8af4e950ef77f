use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
#[non_exhaustive]
pub enum AddChildError {
    TooManyChildren,
}

impl Display for AddChildError {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match self {
            Self::TooManyChildren => write!(fmt, "Node does not accept any more children"),
        }
    }
}

impl std::error::Error for AddChildError {}

pub type AddChildResult = Result<(), AddChildError>;

#[derive(Debug)]
#[non_exhaustive]
pub enum LoadError {
    Yaml(serde_yaml::Error),
    UnknownNodeType(String),
    AddChild(AddChildError, String),
}

impl Display for LoadError {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match self {
            Self::Yaml(e) => e.fmt(fmt),
            Self::UnknownNodeType(ty) => {
                write!(fmt, "Node type not found in the registry {:?}", ty)
            }
            Self::AddChild(e, node) => {
                e.fmt(fmt)?;
                write!(fmt, " in {}", node)
            }
        }
    }
}

impl std::error::Error for LoadError {}

impl From<serde_yaml::Error> for LoadError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err)
    }
}
