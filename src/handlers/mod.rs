pub mod health_handler;
pub mod session_handler;

use actix_web::web;

pub use health_handler::{health_check, health_check_ready};
pub use session_handler::{
    create_session, delete_session, edit_words, extract_words, generate_quiz, get_session,
    preview_plan, record_answer, submit_quiz,
};

/// Registers every route; shared by `main` and the tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(health_check_ready)
        .service(create_session)
        .service(get_session)
        .service(delete_session)
        .service(extract_words)
        .service(edit_words)
        .service(preview_plan)
        .service(generate_quiz)
        .service(record_answer)
        .service(submit_quiz);
}
