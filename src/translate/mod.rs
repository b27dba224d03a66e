pub mod interface;
pub mod prompt;
pub mod translator;

pub use interface::{TranslateRequest, TranslateResponse};
pub use translator::{JargonTranslator, TranslateError};
