//! Template rendering (Handlebars)

pub mod handlebars_renderer;

pub use handlebars_renderer::HandlebarsMenuRenderer;
