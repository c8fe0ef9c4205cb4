use std::{ffi::OsStr, path::Path};

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::generator::document::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecFormat {
  #[default]
  Json,
  Yaml,
}

impl SpecFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    match ext {
      "yaml" | "yml" => Self::Yaml,
      _ => Self::Json,
    }
  }
}

enum SpecContents {
  Mapped(AsyncMmapFile),
  Fetched(String),
}

/// Loads a Swagger/OpenAPI document from a local file or an HTTP(S) URL.
///
/// Local files are memory-mapped; remote documents are downloaded up
/// front. Parsing is separate so the caller can report load and parse
/// failures distinctly — both are fatal for the whole run.
pub struct SpecLoader {
  contents: SpecContents,
  format: SpecFormat,
}

impl SpecLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let format = path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(SpecFormat::default(), SpecFormat::from_extension);

    let file = AsyncMmapFile::open(path)
      .await
      .with_context(|| format!("cannot open input file {}", path.display()))?;

    Ok(Self {
      contents: SpecContents::Mapped(file),
      format,
    })
  }

  pub async fn fetch(url: &str) -> anyhow::Result<Self> {
    let format = url_extension(url).map_or(SpecFormat::default(), SpecFormat::from_extension);

    let body = reqwest::get(url)
      .await
      .and_then(reqwest::Response::error_for_status)
      .with_context(|| format!("cannot download input document from {url}"))?
      .text()
      .await?;

    Ok(Self {
      contents: SpecContents::Fetched(body),
      format,
    })
  }

  pub fn parse(&self) -> anyhow::Result<Document> {
    let bytes = match &self.contents {
      SpecContents::Mapped(file) => file.as_slice(),
      SpecContents::Fetched(body) => body.as_bytes(),
    };

    let document: Document = match self.format {
      SpecFormat::Json => serde_json::from_slice(bytes).context("input does not parse as a JSON OpenAPI document")?,
      SpecFormat::Yaml => serde_yaml::from_slice(bytes).context("input does not parse as a YAML OpenAPI document")?,
    };

    anyhow::ensure!(
      !document.is_empty(),
      "document declares no paths and no schemas; nothing to generate"
    );

    Ok(document)
  }
}

/// File extension of a URL's path component, with query and fragment
/// stripped.
fn url_extension(url: &str) -> Option<&str> {
  let path = url.split(['?', '#']).next().unwrap_or(url);
  let name = path.rsplit('/').next()?;
  let (_, ext) = name.rsplit_once('.')?;
  Some(ext)
}
