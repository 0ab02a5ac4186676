mod about;
mod home;
mod model_config;
mod prediction;

pub use about::About;
pub use home::Home;
pub use model_config::ModelConfig;
pub use prediction::Prediction;
