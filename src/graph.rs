use crate::Real;

/// Model for a function-plotting screen: the single-variable function the
/// calculator handed off, plus the y offset the plot starts from. Axes,
/// stroking, and zoom gestures belong to the view layer; the model only
/// produces points.
pub struct GraphModel<R> {
    function: Option<Box<dyn Fn(R) -> R>>,
    initial_y: R,
}

impl<R: Real> GraphModel<R> {
    /// A model with nothing to plot.
    pub fn new() -> Self {
        Self {
            function: None,
            initial_y: R::zero(),
        }
    }

    /// A model plotting `function`, starting from `initial_y`.
    pub fn with_function(function: impl Fn(R) -> R + 'static, initial_y: R) -> Self {
        Self {
            function: Some(Box::new(function)),
            initial_y,
        }
    }

    pub fn initial_y(&self) -> R {
        self.initial_y
    }

    /// Samples the function across `[x_min, x_max]` at `resolution` points
    /// per unit. Points where the function is not finite (poles, domain
    /// faults) are skipped rather than reported, so the caller can draw
    /// every returned point.
    pub fn sample(&self, x_min: R, x_max: R, resolution: usize) -> Vec<(R, R)> {
        let Some(function) = &self.function else {
            return Vec::new();
        };
        if resolution == 0 || x_max <= x_min {
            return Vec::new();
        }
        let step = R::one() / R::from(resolution).unwrap();
        let mut points = Vec::new();
        let mut x = x_min;
        while x <= x_max {
            let y = function(x);
            if y.is_finite() {
                points.push((x, y));
            }
            x = x + step;
        }
        points
    }
}

impl<R: Real> Default for GraphModel<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_model_produces_no_points() {
        let model = GraphModel::<f64>::new();
        assert!(model.sample(-1.0, 1.0, 10).is_empty());
    }

    #[test]
    fn samples_at_the_requested_resolution() {
        let model = GraphModel::with_function(|x: f64| x * x, 0.0);
        let points = model.sample(0.0, 2.0, 4);
        // 4 points per unit over two units, inclusive of both ends.
        assert_eq!(points.len(), 9);
        assert_eq!(points[0], (0.0, 0.0));
        assert_eq!(points[4], (1.0, 1.0));
    }

    #[test]
    fn non_finite_points_are_skipped() {
        let model = GraphModel::with_function(|x: f64| 1.0 / x, 0.0);
        let points = model.sample(-1.0, 1.0, 2);
        assert!(points.iter().all(|(_, y)| y.is_finite()));
        assert!(points.len() < 5);
    }
}
