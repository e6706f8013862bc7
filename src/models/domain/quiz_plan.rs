use serde::Serialize;

use crate::models::domain::QuestionType;

/// Per-type question quotas. Built by `services::quiz_planner`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizPlan {
    quotas: [usize; 5],
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Quota {
    pub question_type: QuestionType,
    pub count: usize,
}

impl QuizPlan {
    pub(crate) fn from_quotas(quotas: [usize; 5]) -> Self {
        Self { quotas }
    }

    pub fn quota(&self, question_type: QuestionType) -> usize {
        self.quotas[question_type.index()]
    }

    pub fn total(&self) -> usize {
        self.quotas.iter().sum()
    }

    /// Quotas in the fixed A..E order, zeros included.
    pub fn quotas(&self) -> Vec<Quota> {
        QuestionType::ALL
            .iter()
            .map(|&question_type| Quota {
                question_type,
                count: self.quota(question_type),
            })
            .collect()
    }

    pub fn requested(&self) -> impl Iterator<Item = (QuestionType, usize)> + '_ {
        QuestionType::ALL
            .iter()
            .map(|&t| (t, self.quota(t)))
            .filter(|(_, count)| *count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requested_skips_zero_quotas_and_keeps_order() {
        let plan = QuizPlan::from_quotas([1, 0, 2, 0, 1]);

        let requested: Vec<(QuestionType, usize)> = plan.requested().collect();
        assert_eq!(
            requested,
            vec![
                (QuestionType::A, 1),
                (QuestionType::C, 2),
                (QuestionType::E, 1)
            ]
        );
        assert_eq!(plan.total(), 4);
    }

    #[test]
    fn quotas_lists_every_type() {
        let plan = QuizPlan::from_quotas([0, 0, 0, 0, 0]);
        let quotas = plan.quotas();

        assert_eq!(quotas.len(), 5);
        assert!(quotas.iter().all(|q| q.count == 0));
        assert_eq!(quotas[4].question_type, QuestionType::E);
    }
}
