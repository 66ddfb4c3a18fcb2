pub mod layout;
mod pdf;

pub use layout::{layout_document, wrap_instruction, FontStyle, PageLayout, TextLine};
pub use pdf::PdfRenderer;
