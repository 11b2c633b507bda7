use crate::progress::{FilterObserver, Progress};
use crate::style::{Color, EdgeStyler};
use ownership_types::{ClassId, DependencyLookup, OwnershipRecord};
use std::time::Duration;

pub fn owned_by(subject: &str, owner: &str) -> OwnershipRecord {
    OwnershipRecord::owned_by(subject, owner)
}

pub fn unowned(subject: &str) -> OwnershipRecord {
    OwnershipRecord::unowned(subject)
}

/// Add a dependency field on `record` that resolves to `target`.
pub fn depends_on(
    record: OwnershipRecord,
    field: &str,
    target: &OwnershipRecord,
) -> OwnershipRecord {
    record.with_dependency(field, DependencyLookup::resolved(target.clone()))
}

/// The two-team scenario: X owned by TeamA, Y owned by TeamB with a method owned by
/// TeamA and a field pointing at X.
pub fn two_team_domain() -> Vec<OwnershipRecord> {
    let x = owned_by("com.acme.X", "TeamA");
    let y = depends_on(
        owned_by("com.acme.Y", "TeamB").with_method_owner("pay()", "TeamA"),
        "x",
        &x,
    );
    vec![x, y]
}

#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub longest: Vec<Duration>,
    pub subjects: Vec<ClassId>,
    pub progress: Vec<Progress>,
}

impl RecordingObserver {
    pub fn is_empty(&self) -> bool {
        self.longest.is_empty() && self.progress.is_empty()
    }
}

impl FilterObserver for RecordingObserver {
    fn on_longest_so_far(&mut self, subject: &ClassId, elapsed: Duration) {
        self.subjects.push(subject.clone());
        self.longest.push(elapsed);
    }

    fn on_progress(&mut self, progress: Progress) {
        self.progress.push(progress);
    }
}

/// Styler returning the same length and color for every edge.
#[derive(Debug, Clone, Copy)]
pub struct FixedStyler {
    pub length: u8,
    pub color: Color,
}

impl Default for FixedStyler {
    fn default() -> Self {
        Self {
            length: 2,
            color: Color::rgb(0x11, 0x22, 0x33),
        }
    }
}

impl EdgeStyler for FixedStyler {
    fn length(&mut self, _source: &str, _target: &str) -> u8 {
        self.length
    }

    fn color(&mut self, _source: &str, _target: &str) -> Color {
        self.color
    }
}
