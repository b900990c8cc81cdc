/// Email rendering and MIME composition
pub mod composer;
pub mod templates;

pub use composer::compose;
pub use templates::TemplateRenderer;
