pub mod args;
pub mod drivers;
pub mod interactive;
pub mod wizard;
