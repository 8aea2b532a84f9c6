use crate::core::numeric::{finite, ratio};
use crate::schema::{OtherBaseline, OtherPostIa};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct OtherMetrics {
    pub delta: f64,
    pub delta_pct: f64,
}

pub fn compute(baseline: Option<&OtherBaseline>, post: &OtherPostIa) -> OtherMetrics {
    let Some(baseline) = baseline else {
        return OtherMetrics::default();
    };

    let before = finite(baseline.value_before);
    let delta = finite(post.value_after) - before;

    OtherMetrics {
        delta,
        delta_pct: ratio(delta, before.abs()) * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_after_minus_before() {
        let baseline = OtherBaseline {
            value_before: 40.0,
            ..Default::default()
        };
        let post = OtherPostIa {
            value_after: 30.0,
            ..Default::default()
        };
        let m = compute(Some(&baseline), &post);
        assert_eq!(m.delta, -10.0);
        assert_eq!(m.delta_pct, -25.0);
    }
}
