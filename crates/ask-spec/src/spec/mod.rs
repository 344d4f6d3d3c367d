pub mod document;
pub mod profile;
pub mod question;

pub use document::{ConfigDocument, QuestionRecord, document_schema};
pub use profile::{AnswerShape, Profile};
pub use question::{QuestionDefinition, QuestionKind, QuestionType};
