use crate::error::BlogError;

pub type BlogResult<T> = Result<T, BlogError>;
