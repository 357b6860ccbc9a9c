//! Delay policy for reveals shown side by side.
//!
//! Items start one `item_delay` apart. Within an item, each field waits for the
//! previous field to finish typing plus `field_gap`, so the fields of one item
//! appear one after another.

use std::time::Duration;

use super::RevealParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggerPolicy {
    /// Offset between consecutive items.
    pub item_delay: Duration,
    /// Pause between the end of one field and the start of the next.
    pub field_gap: Duration,
    /// Per-character step for body fields.
    pub text_step: Duration,
    /// Per-character step for the trailing field (e.g. a year column).
    pub trailing_step: Duration,
}

/// Reveal params for the three fields of a project row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectReveal {
    pub title: RevealParams,
    pub description: RevealParams,
    pub year: RevealParams,
}

impl StaggerPolicy {
    pub fn project(&self, index: usize, title: &str, description: &str, year: &str) -> ProjectReveal {
        let mut seq = FieldSequence::new(self, index);
        ProjectReveal {
            title: seq.next(title, self.text_step),
            description: seq.next(description, self.text_step),
            year: seq.next(year, self.trailing_step),
        }
    }
}

/// Running start offset while laying out the fields of one item.
struct FieldSequence {
    delay: Duration,
    gap: Duration,
    started: bool,
}

impl FieldSequence {
    fn new(policy: &StaggerPolicy, index: usize) -> Self {
        let n = u32::try_from(index).unwrap_or(u32::MAX);
        Self {
            delay: policy.item_delay.saturating_mul(n),
            gap: policy.field_gap,
            started: false,
        }
    }

    fn next(&mut self, text: &str, step: Duration) -> RevealParams {
        if self.started {
            self.delay = self.delay.saturating_add(self.gap);
        }
        self.started = true;
        let params = RevealParams::new(text, self.delay, step);
        self.delay = self.delay.saturating_add(typing_time(text, step));
        params
    }
}

fn typing_time(text: &str, step: Duration) -> Duration {
    let n = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
    step.saturating_mul(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn policy() -> StaggerPolicy {
        StaggerPolicy {
            item_delay: ms(100),
            field_gap: ms(25),
            text_step: ms(2),
            trailing_step: ms(5),
        }
    }

    #[test]
    fn test_project_fields_follow_each_other() {
        let reveal = policy().project(2, "Osero", "A simple Othello game.", "2023");

        assert_eq!(reveal.title.delay, ms(200));
        assert_eq!(reveal.title.step, ms(2));
        // 5 title chars * 2ms + 25ms gap
        assert_eq!(reveal.description.delay, ms(235));
        // 22 description chars * 2ms + 25ms gap
        assert_eq!(reveal.year.delay, ms(304));
        assert_eq!(reveal.year.step, ms(5));
        assert_eq!(reveal.year.target, "2023");
    }

    #[test]
    fn test_delays_are_monotonic_across_items() {
        let policy = policy();
        let mut last = Duration::ZERO;
        for index in 0..5 {
            let reveal = policy.project(index, "Title", "Description", "2025");
            assert!(reveal.title.delay >= last);
            assert!(reveal.description.delay > reveal.title.delay);
            assert!(reveal.year.delay > reveal.description.delay);
            last = reveal.title.delay;
        }
    }
}
