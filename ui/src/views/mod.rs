mod generator;
mod landing;
mod translator;

pub use generator::RandomGenerator;
pub use landing::Landing;
pub use translator::Translator;
