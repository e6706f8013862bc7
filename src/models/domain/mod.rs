pub mod image;
pub mod question;
pub mod question_batch;
pub mod quiz;
pub mod quiz_plan;
pub mod session;
pub mod word;

pub use image::EncodedImage;
pub use question::{AnswerKey, Question, QuestionType};
pub use question_batch::{BatchIssue, QuestionBatch};
pub use quiz::{Quiz, ScoreResult};
pub use quiz_plan::{Quota, QuizPlan};
pub use session::Session;
pub use word::Word;
