mod generate;
mod list;

use std::path::Path;

pub use generate::{GenerateConfig, generate_client};
pub use list::list_operations;

use crate::{generator::document::Document, utils::spec::SpecLoader};

/// Loads and parses the input document from a local path or an HTTP(S)
/// URL. Any failure here aborts the run before generation starts.
pub(crate) async fn load_document(input: &str) -> anyhow::Result<Document> {
  let loader = if input.starts_with("http://") || input.starts_with("https://") {
    SpecLoader::fetch(input).await?
  } else {
    SpecLoader::open(Path::new(input)).await?
  };
  loader.parse()
}
