pub mod analysis;
pub mod form;
pub mod results;

pub use form::render_form;
pub use results::render_results;
