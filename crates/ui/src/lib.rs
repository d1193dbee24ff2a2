pub mod pages;
pub mod render;
pub mod report;
pub mod views;
pub mod vm;

pub use pages::PageChrome;
pub use report::{PdfReport, ReportContext, ReportError};
