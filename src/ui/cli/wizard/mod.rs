#[allow(clippy::module_inception)]
mod wizard;

pub use wizard::{prompt_choice, prompt_form};
