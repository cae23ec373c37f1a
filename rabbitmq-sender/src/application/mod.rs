mod application_env;
mod application_sender;
mod application_tracing;

pub use application_env::*;
pub use application_sender::*;
pub use application_tracing::*;
