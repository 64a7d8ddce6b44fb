use percept_base::Tensor;

/// The winning class of one pipeline run. Reported through the log sink,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub class_id: usize,
    pub score: f32,
}

/// Select the class with the highest score.
///
/// Linear scan with the running maximum initialized to 0.0 and the index
/// to 0. Updates on strict `>`, so ties keep the earliest index, and a
/// tensor whose scores are all <= 0.0 reports class 0 with score 0.0.
/// The classifier head ends in a softmax, so a genuine winning score is
/// never negative.
///
/// Deterministic and side-effect free. The scores tensor must be
/// non-empty; an empty tensor is a caller error and degenerates to
/// `(0, 0.0)`.
pub fn argmax(scores: &Tensor<f32>) -> Classification {
    let mut best = Classification {
        class_id: 0,
        score: 0.0,
    };
    for (i, &score) in scores.data.iter().enumerate() {
        if score > best.score {
            best = Classification {
                class_id: i,
                score,
            };
        }
    }
    best
}
