//! Status-tagged results returned by write operations.

/// Outcome tag of a registrar operation.
///
/// The transport layer maps these onto protocol status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    Created,
    NoContent,
    Forbidden,
}

impl Status {
    /// HTTP-equivalent status number.
    pub const fn code(&self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Created => 201,
            Self::NoContent => 204,
            Self::Forbidden => 403,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A write result: the status tag plus whatever the operation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    pub status: Status,
    pub body: T,
}

impl<T> Outcome<T> {
    pub fn created(body: T) -> Self {
        Self {
            status: Status::Created,
            body,
        }
    }
}

impl Outcome<()> {
    pub fn no_content() -> Self {
        Self {
            status: Status::NoContent,
            body: (),
        }
    }
}
