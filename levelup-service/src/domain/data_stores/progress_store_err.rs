#[derive(Debug, PartialEq)]
pub enum ProgressStoreError {
    NotFound,
    UnexpectedError,
}
