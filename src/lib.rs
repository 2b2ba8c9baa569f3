pub mod alexa;
pub mod narration;
pub mod server;
pub mod settings;
pub mod skill;
pub mod speech;
