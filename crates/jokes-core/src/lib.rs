pub mod client;
pub mod config;
pub mod constants;
pub mod models;
pub mod session;
pub mod tracing_setup;

pub use client::{JokeClient, JokeError};
pub use config::CoreConfig;
pub use models::{Analysis, ExternalJoke, Joke, JokeShape, PageResult};
pub use session::{FetchOutcome, FetchRequest, Session, TabKind, TabState};
