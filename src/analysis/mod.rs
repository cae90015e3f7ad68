// Detection-stream analysis: the rule engine the detector image applies to
// its camera annotations, minus the in-container video rendering.

pub mod annotations;
pub mod discovery;
pub mod geometry;
pub mod notify;
pub mod report;
pub mod rules;

pub use annotations::{AnnotationFile, ObjectClass};
pub use discovery::find_annotations;
pub use notify::SlackNotifier;
pub use report::EventReport;
pub use rules::CarPersonRule;

use geometry::{Point, Polygon};
use report::{EventRecord, Summary};

use crate::config::Roi;

/// Convert configured ROI vertex lists into polygons.
pub fn roi_polygons(rois: &[Roi]) -> Vec<Polygon> {
    rois.iter()
        .map(|roi| Polygon::new(roi.iter().map(|&[x, y]| Point { x, y }).collect()))
        .collect()
}

/// Run the rule over every frame of the stream and assemble the report.
pub fn analyze(file: &AnnotationFile, rois: Vec<Polygon>, min_frame_gap: u32) -> EventReport {
    let mut rule = CarPersonRule::new(rois, min_frame_gap);
    let mut events = Vec::new();
    let mut notified = 0;

    for frame in &file.frames {
        let outcome = rule.evaluate(frame);
        if outcome.notify {
            notified += 1;
        }
        for roi in outcome.alerted_rois {
            events.push(EventRecord {
                frame_num: frame.frame_num,
                timestamp: frame.timestamp,
                roi,
                notified: outcome.notify,
            });
        }
    }

    EventReport {
        cam_name: file.cam_name.clone(),
        rule: CarPersonRule::NAME.to_string(),
        summary: Summary {
            frames: file.frames.len(),
            positives: rule.positives(),
            notified,
        },
        events,
    }
}
