pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown object kind code: {0}")]
    UnknownObjectKind(u8),
}
