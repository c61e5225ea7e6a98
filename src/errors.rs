use generational_arena::Index;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The index points into a subtree that has been replaced or deleted,
    /// or was never issued by this tree.
    #[error("stale node handle: {0:?}")]
    StaleHandle(Index),
}

pub type TreeResult<T> = Result<T, TreeError>;
