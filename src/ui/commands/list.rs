use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use crossterm::style::Stylize;

use crate::{generator::operations, ui::Colors};

/// Prints every operation in the document as a table: method, path,
/// derived function name, and service tag.
pub async fn list_operations(input: &str, colors: &Colors) -> anyhow::Result<()> {
  let document = super::load_document(input).await?;
  let operations = operations::extract_operations(&document);

  let mut table = Table::new();
  table.load_preset(UTF8_FULL_CONDENSED);
  table.set_header(["Method", "Path", "Function", "Tag"]);
  for operation in &operations {
    table.add_row([
      operation.method.to_ascii_uppercase(),
      operation.path.clone(),
      operation.function_name.clone(),
      operation.tag.clone(),
    ]);
  }

  println!("{table}");
  println!(
    "{} operations",
    operations.len().to_string().with(colors.value())
  );
  Ok(())
}
