mod code;
mod engine;
mod results;

pub use code::SecretCode;
pub use code::CODE_LENGTH;
pub use engine::*;
pub use results::*;
