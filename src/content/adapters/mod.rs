//! Adapter implementations for the content generation port.

mod template;

pub use template::TemplateContentGenerator;
