use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{EncodedImage, QuizPlan, ScoreResult, Session},
        dto::request::EditWordsRequest,
    },
    repositories::SessionRepository,
    services::{
        answer_grader,
        model_service::ModelService,
        quiz_assembler::{self, AssembledQuiz},
        quiz_planner, word_normalizer,
    },
};

#[derive(Debug, Clone)]
pub struct GeneratedQuiz {
    pub session: Session,
    pub plan: QuizPlan,
    pub warnings: Vec<String>,
}

/// Runs the user actions against one session at a time. Every action loads
/// the session, calls the model if it needs to, and only then writes the
/// changed session back, so a failed model call leaves the stored state as it was.
///
/// Actions that change a session hold that session's lock from load to write,
/// so an answer recorded while a model call is pending waits for it instead of
/// being overwritten by it.
pub struct SessionService {
    repository: Arc<dyn SessionRepository>,
    model_service: Arc<dyn ModelService>,
    session_locks: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl SessionService {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        model_service: Arc<dyn ModelService>,
    ) -> Self {
        Self {
            repository,
            model_service,
            session_locks: Mutex::new(HashMap::new()),
        }
    }

    async fn lock_session(&self, id: &Uuid) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.session_locks.lock().await;
            Arc::clone(locks.entry(*id).or_default())
        };
        lock.lock_owned().await
    }

    pub async fn create_session(&self) -> AppResult<Session> {
        let session = self.repository.create(Session::new()).await?;
        log::info!("Started session {}", session.id);
        Ok(session)
    }

    pub async fn get_session(&self, id: &Uuid) -> AppResult<Session> {
        let session = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Session with id '{}' not found", id)))?;

        Ok(session)
    }

    pub async fn active_sessions(&self) -> AppResult<usize> {
        self.repository.count().await
    }

    pub async fn delete_session(&self, id: &Uuid) -> AppResult<()> {
        let _guard = self.lock_session(id).await;
        self.session_locks.lock().await.remove(id);

        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound(format!(
                "Session with id '{}' not found",
                id
            )));
        }

        log::info!("Ended session {}", id);
        Ok(())
    }

    pub async fn extract_words(&self, id: &Uuid, image: EncodedImage) -> AppResult<Session> {
        let _guard = self.lock_session(id).await;
        let mut session = self.get_session(id).await?;

        let raw_words = self.model_service.extract_words(&image).await.map_err(|e| {
            log::warn!("Word extraction failed for session {}: {}", id, e);
            e
        })?;
        let words = word_normalizer::normalize_words(&raw_words);

        log::info!(
            "Extracted {} words ({} raw) for session {}",
            words.len(),
            raw_words.len(),
            id
        );

        session.set_extracted_words(words);
        self.repository.update(session).await
    }

    pub async fn edit_words(&self, id: &Uuid, request: EditWordsRequest) -> AppResult<Session> {
        let _guard = self.lock_session(id).await;
        let mut session = self.get_session(id).await?;

        if request.words.len() > session.extracted_words.len() {
            return Err(AppError::ValidationError(format!(
                "Received {} edited words but only {} were extracted; use additions for new words",
                request.words.len(),
                session.extracted_words.len()
            )));
        }

        let words = word_normalizer::normalize_words(request.candidates());
        session.replace_words(words);
        self.repository.update(session).await
    }

    pub async fn preview_plan(&self, id: &Uuid) -> AppResult<QuizPlan> {
        let session = self.get_session(id).await?;
        Ok(quiz_planner::plan_for_words(&session.words))
    }

    /// One model call per non-empty quota, issued in A..E order. Any failed
    /// call aborts the whole generation and the previous quiz stays in place.
    pub async fn generate_quiz(&self, id: &Uuid) -> AppResult<GeneratedQuiz> {
        let _guard = self.lock_session(id).await;
        let mut session = self.get_session(id).await?;
        let plan = quiz_planner::plan_for_words(&session.words);

        log::info!(
            "Generating {} questions for session {} from {} words",
            plan.total(),
            id,
            session.words.len()
        );

        let mut batches = Vec::new();
        for (question_type, count) in plan.requested() {
            let batch = self
                .model_service
                .generate_questions(question_type, count, &session.words)
                .await
                .map_err(|e| {
                    log::warn!(
                        "Question generation for type {} failed in session {}: {}",
                        question_type,
                        id,
                        e
                    );
                    e
                })?;
            batches.push(batch);
        }

        let AssembledQuiz { quiz, warnings } =
            quiz_assembler::assemble(batches, &mut rand::thread_rng());

        for warning in &warnings {
            log::warn!("Session {}: {}", id, warning);
        }

        if quiz.is_empty() {
            return Err(AppError::CollaboratorResponse(format!(
                "no usable questions were generated ({})",
                warnings.join("; ")
            )));
        }

        session.install_quiz(quiz);
        let session = self.repository.update(session).await?;

        Ok(GeneratedQuiz {
            session,
            plan,
            warnings,
        })
    }

    pub async fn record_answer(&self, id: &Uuid, index: usize, answer: String) -> AppResult<Session> {
        let _guard = self.lock_session(id).await;
        let mut session = self.get_session(id).await?;
        session.record_answer(index, answer)?;
        self.repository.update(session).await
    }

    /// Grades the recorded answers. Submitting again recomputes the same score.
    pub async fn submit(&self, id: &Uuid) -> AppResult<(Session, ScoreResult)> {
        let _guard = self.lock_session(id).await;
        let mut session = self.get_session(id).await?;

        let score = {
            let quiz = session
                .quiz
                .as_ref()
                .ok_or_else(|| AppError::Conflict("No quiz has been generated yet".to_string()))?;
            answer_grader::score_quiz(quiz, &session.user_answers)
        };

        log::info!(
            "Session {} scored {} / {}",
            id,
            score.correct,
            score.total
        );

        session.mark_submitted(score);
        let session = self.repository.update(session).await?;
        Ok((session, score))
    }
}
