use thiserror::Error;

/// Fatal conditions inside the generation core.
///
/// Everything else (unrecognized schema shapes, missing content maps)
/// degrades to a documented fallback instead of erroring; only a broken
/// reference graph aborts the run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
  #[error("schema `{0}` is not defined in components.schemas")]
  UnknownSchema(String),

  #[error("cyclic schema reference through `{0}`")]
  CyclicSchema(String),
}

pub type GeneratorResult<T> = Result<T, GeneratorError>;
