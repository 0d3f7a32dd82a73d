pub mod console;
pub mod settings;
