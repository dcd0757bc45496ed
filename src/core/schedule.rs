use crate::domain::model::{LocalDateTime, ScheduleWindow, Verdict};
use chrono::Weekday;

const WEEKEND: [Weekday; 2] = [Weekday::Sun, Weekday::Sat];

/// Fixed weekly opening hours. Holidays are handled by the service layer.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySchedule {
    windows: Vec<ScheduleWindow>,
}

impl WeeklySchedule {
    /// Mon–Thu 08:00–20:00, Fri 08:00–19:00, closed on weekends.
    pub fn standard() -> Self {
        Self::new(vec![
            ScheduleWindow::fixed(
                &[Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu],
                8.0,
                20.0,
            ),
            ScheduleWindow::fixed(&[Weekday::Fri], 8.0, 19.0),
        ])
    }

    pub fn new(windows: Vec<ScheduleWindow>) -> Self {
        Self { windows }
    }

    pub fn windows(&self) -> &[ScheduleWindow] {
        &self.windows
    }

    pub fn evaluate(&self, dt: &LocalDateTime) -> Verdict {
        let weekday = dt.weekday();
        if WEEKEND.contains(&weekday) {
            return Verdict::ClosedWeekend;
        }

        let current_hour = dt.fractional_hour();
        let open = self
            .windows
            .iter()
            .filter(|window| window.applies_to(weekday))
            .any(|window| window.contains(current_hour));

        if open {
            Verdict::Open
        } else {
            Verdict::ClosedOutsideHours
        }
    }
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        Self::standard()
    }
}
