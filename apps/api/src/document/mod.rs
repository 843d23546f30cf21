// Document Model Builder
// Builds an owned in-memory tree of paragraphs, tables and runs from primitive
// calls, then serializes it to a .docx package. Styling is declarative: callers
// pass descriptors from `style` and never touch package markup.

mod error;
mod model;
mod style;
mod writer;

#[cfg(test)]
pub mod reader;

pub use error::DocumentError;
pub use model::{Document, Paragraph, TableCell};
pub use style::{Alignment, Border, BorderEdge, BorderSet, Length, Margins};
