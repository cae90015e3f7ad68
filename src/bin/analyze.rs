use std::collections::BTreeSet;

use anyhow::{Context, Result};
use tracing::info;

use protexai::analysis::{self, SlackNotifier, annotations};
use protexai::config;
use protexai::launcher;
use protexai::logging;

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

/// Evaluate the detection rules over the annotation stream in the working
/// directory, write the event report, and post any due notifications.
fn run() -> Result<()> {
    let base = std::env::current_dir().context("failed to resolve working directory")?;
    let cfg = config::load(&base)?;

    let path = analysis::find_annotations(&base, cfg.search_depth)?;
    info!("analyzing {}", path.display());
    let file = annotations::load(&path)?;

    let rois = analysis::roi_polygons(&cfg.rois);
    let report = analysis::analyze(&file, rois, cfg.min_frame_gap);
    info!(
        frames = report.summary.frames,
        positives = report.summary.positives,
        "rule evaluation finished"
    );

    let out_dir = launcher::ensure_out_dir(&base, &cfg.out_dir)?;
    let report_path = out_dir.join("events.json");
    analysis::report::write(&report_path, &report)?;
    info!("wrote {}", report_path.display());

    if let Some(notifier) = SlackNotifier::from_env()? {
        // One notification per flagged frame, even when several regions fired.
        let mut seen = BTreeSet::new();
        for event in report.events.iter().filter(|e| e.notified) {
            if seen.insert(event.frame_num) {
                notifier.notify(&report.rule, &report.cam_name, event.timestamp)?;
            }
        }
    }

    Ok(())
}
