use crate::model::Point;
use crate::pipeline::ChartSpec;

pub fn apply_jitter(points: &mut [Point], label: &str, spec: &ChartSpec) -> f64 {
    let Some(scheme) = spec.jitter.filter(|_| spec.x_axis.is_categorical()) else {
        return 0.0;
    };
    let offset = scheme.offset(label);
    for point in points.iter_mut() {
        point.x += offset;
    }
    offset
}
