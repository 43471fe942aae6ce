use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("{type_name} is not registered")]
    NotRegistered { type_name: &'static str },
    #[error("{type_name} is missing from the command snapshot")]
    MissingSnapshot { type_name: &'static str },
}
