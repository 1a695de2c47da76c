pub mod quiz_question;

pub use quiz_question::{QuestionBody, QuestionType, QuizQuestion};
