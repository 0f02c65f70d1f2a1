// Multinomial logistic-regression stage
//
// Trained by SGD on the log loss with L2 decay on touched columns. Small
// enough to fit in-process in seconds on the corpora this engine sees;
// prediction is one sparse matrix-vector product per stage.

use ndarray::{Array1, Array2};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainParams {
    pub epochs: usize,
    pub learning_rate: f32,
    pub l2: f32,
    pub seed: u64,
}

impl Default for TrainParams {
    fn default() -> Self {
        Self {
            epochs: 30,
            learning_rate: 0.5,
            l2: 1e-4,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftmaxClassifier {
    classes: Vec<String>,
    weights: Array2<f32>,
    bias: Array1<f32>,
}

impl SoftmaxClassifier {
    /// Fit on sparse feature vectors paired with class indices into `classes`.
    ///
    /// The epoch shuffle is seeded, so identical inputs produce identical
    /// fitted weights.
    pub fn fit(
        classes: Vec<String>,
        samples: &[(Vec<(usize, f32)>, usize)],
        n_features: usize,
        params: &TrainParams,
    ) -> Self {
        let n_classes = classes.len();
        let mut weights = Array2::<f32>::zeros((n_classes, n_features));
        let mut bias = Array1::<f32>::zeros(n_classes);

        let mut order: Vec<usize> = (0..samples.len()).collect();
        let mut rng = SmallRng::seed_from_u64(params.seed);

        for _ in 0..params.epochs {
            order.shuffle(&mut rng);
            for &sample_index in &order {
                let (features, target) = &samples[sample_index];
                let probs = softmax(&scores(&weights, &bias, features));
                for class in 0..n_classes {
                    let gradient = probs[class] - if class == *target { 1.0 } else { 0.0 };
                    bias[class] -= params.learning_rate * gradient;
                    for &(column, value) in features {
                        let w = &mut weights[(class, column)];
                        *w -= params.learning_rate * (gradient * value + params.l2 * *w);
                    }
                }
            }
        }

        Self {
            classes,
            weights,
            bias,
        }
    }

    /// Probability distribution over this stage's classes; sums to 1 within
    /// float tolerance.
    pub fn predict_proba(&self, features: &[(usize, f32)]) -> Vec<f64> {
        softmax(&scores(&self.weights, &self.bias, features))
            .into_iter()
            .map(|p| p as f64)
            .collect()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

fn scores(weights: &Array2<f32>, bias: &Array1<f32>, features: &[(usize, f32)]) -> Vec<f32> {
    let mut scores: Vec<f32> = bias.iter().copied().collect();
    for (class, score) in scores.iter_mut().enumerate() {
        for &(column, value) in features {
            *score += weights[(class, column)] * value;
        }
    }
    scores
}

fn softmax(scores: &[f32]) -> Vec<f32> {
    let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Argmax with deterministic tie-breaking (lowest index wins).
pub(crate) fn argmax_index(values: &[f64]) -> usize {
    let mut best = 0;
    for (index, value) in values.iter().enumerate().skip(1) {
        if *value > values[best] {
            best = index;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_samples() -> (Vec<String>, Vec<(Vec<(usize, f32)>, usize)>) {
        let classes = vec!["a".to_string(), "b".to_string()];
        // Feature 0 marks class a, feature 1 marks class b.
        let samples = vec![
            (vec![(0, 1.0)], 0),
            (vec![(0, 0.9), (2, 0.2)], 0),
            (vec![(1, 1.0)], 1),
            (vec![(1, 0.8), (2, 0.1)], 1),
        ];
        (classes, samples)
    }

    #[test]
    fn test_fit_separates_toy_classes() {
        let (classes, samples) = toy_samples();
        let clf = SoftmaxClassifier::fit(classes, &samples, 3, &TrainParams::default());

        let probs_a = clf.predict_proba(&[(0, 1.0)]);
        let probs_b = clf.predict_proba(&[(1, 1.0)]);
        assert!(probs_a[0] > 0.8, "P(a|a-feature) = {}", probs_a[0]);
        assert!(probs_b[1] > 0.8, "P(b|b-feature) = {}", probs_b[1]);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let (classes, samples) = toy_samples();
        let clf = SoftmaxClassifier::fit(classes, &samples, 3, &TrainParams::default());
        let probs = clf.predict_proba(&[(2, 1.0)]);
        let sum: f64 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_fit_is_deterministic() {
        let (classes, samples) = toy_samples();
        let a = SoftmaxClassifier::fit(classes.clone(), &samples, 3, &TrainParams::default());
        let b = SoftmaxClassifier::fit(classes, &samples, 3, &TrainParams::default());
        assert_eq!(
            a.predict_proba(&[(0, 0.5), (1, 0.5)]),
            b.predict_proba(&[(0, 0.5), (1, 0.5)])
        );
    }

    #[test]
    fn test_empty_features_yield_prior_like_distribution() {
        let (classes, samples) = toy_samples();
        let clf = SoftmaxClassifier::fit(classes, &samples, 3, &TrainParams::default());
        let probs = clf.predict_proba(&[]);
        let sum: f64 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_argmax_breaks_ties_low() {
        assert_eq!(argmax_index(&[0.5, 0.5]), 0);
        assert_eq!(argmax_index(&[0.1, 0.7, 0.2]), 1);
    }
}
