use super::annotations::{Frame, ObjectClass};
use super::geometry::Polygon;

/// Per-region class presence within a single frame.
#[derive(Debug, Clone, Copy, Default)]
struct Presence {
    car: bool,
    person: bool,
}

/// "Car and Person": a car and a person must never share a region of
/// interest. A frame where they do is a positive for that region.
#[derive(Debug)]
pub struct CarPersonRule {
    rois: Vec<Polygon>,
    min_frame_gap: u32,
    last_positive: Option<u32>,
    positives: usize,
}

/// Result of evaluating one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameOutcome {
    /// Indices of regions where the rule fired.
    pub alerted_rois: Vec<usize>,
    /// Whether this frame should produce a notification.
    pub notify: bool,
}

impl CarPersonRule {
    pub const NAME: &'static str = "Car and Person";

    pub fn new(rois: Vec<Polygon>, min_frame_gap: u32) -> Self {
        Self {
            rois,
            min_frame_gap,
            last_positive: None,
            positives: 0,
        }
    }

    /// Total positives seen so far.
    pub fn positives(&self) -> usize {
        self.positives
    }

    /// Evaluate one frame. Presence is rebuilt from scratch per frame so
    /// stale detections never leak across frames.
    pub fn evaluate(&mut self, frame: &Frame) -> FrameOutcome {
        let mut presence = vec![Presence::default(); self.rois.len()];

        for detection in &frame.detections {
            let shape = Polygon::from_bbox(&detection.bbox, frame.frame_width, frame.frame_height);
            let centroid = shape.centroid();

            // A detection belongs to the first region containing its centroid.
            if let Some(index) = self.rois.iter().position(|roi| roi.contains(centroid)) {
                match detection.class {
                    ObjectClass::Car => presence[index].car = true,
                    ObjectClass::Person => presence[index].person = true,
                    ObjectClass::Truck | ObjectClass::Other => {}
                }
            }
        }

        let alerted_rois: Vec<usize> = presence
            .iter()
            .enumerate()
            .filter(|(_, p)| p.car && p.person)
            .map(|(index, _)| index)
            .collect();

        let mut notify = false;
        if !alerted_rois.is_empty() {
            self.positives += alerted_rois.len();
            notify = self.should_notify(frame.frame_num);
        }

        FrameOutcome {
            alerted_rois,
            notify,
        }
    }

    /// Debounce: notify only when more than `min_frame_gap` frames passed
    /// since the previous positive.
    fn should_notify(&mut self, frame_num: u32) -> bool {
        let due = match self.last_positive {
            None => true,
            Some(last) => frame_num.saturating_sub(last) > self.min_frame_gap,
        };
        self.last_positive = Some(frame_num);
        due
    }
}
