pub mod analysis;
pub mod joke;
pub mod page;

pub use analysis::Analysis;
pub use joke::{ExternalJoke, Joke, JokeShape};
pub use page::PageResult;
pub(crate) use page::CategoriesResponse;
