pub mod answer_grader;
pub mod model_service;
pub mod quiz_assembler;
pub mod quiz_planner;
pub mod session_service;
pub mod word_normalizer;
