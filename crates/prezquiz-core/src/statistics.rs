//! Session scoring counters and the final summary.

use serde::Serialize;

use crate::session::QuestionKind;

/// Asked/correct counters for one question kind.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct KindTally {
    pub asked: u32,
    pub correct: u32,
}

impl KindTally {
    fn record(&mut self, correct: bool) {
        self.asked += 1;
        if correct {
            self.correct += 1;
        }
    }
}

/// Running score for one session. Mutated every turn, never reset.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct QuizStatistics {
    pub total: u32,
    pub correct: u32,
    pub incorrect: u32,
    pub name: KindTally,
    pub order: KindTally,
    pub year: KindTally,
}

impl QuizStatistics {
    pub fn record(&mut self, kind: QuestionKind, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
        match kind {
            QuestionKind::Name => self.name.record(correct),
            QuestionKind::Order => self.order.record(correct),
            QuestionKind::Year => self.year.record(correct),
        }
    }

    /// Fraction of questions answered correctly, 0.0 when none asked.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.correct) / f64::from(self.total)
    }

    /// Consistent snapshot of the score so far.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            total: self.total,
            correct: self.correct,
            incorrect: self.incorrect,
            accuracy: self.accuracy(),
            name: self.name,
            order: self.order,
            year: self.year,
        }
    }
}

/// Final (or mid-session) score report. Serializable for JSON output.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SessionSummary {
    pub total: u32,
    pub correct: u32,
    pub incorrect: u32,
    pub accuracy: f64,
    pub name: KindTally,
    pub order: KindTally,
    pub year: KindTally,
}

/// Format `n / d` as a percent to two decimal places, 0 when `d` is 0.
pub fn format_percent(n: u32, d: u32) -> String {
    let pct = if d > 0 {
        f64::from(n) / f64::from(d) * 100.0
    } else {
        0.0
    };
    format!("{pct:.2}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_seven_of_ten() {
        let mut stats = QuizStatistics::default();
        for _ in 0..7 {
            stats.record(QuestionKind::Name, true);
        }
        for _ in 0..3 {
            stats.record(QuestionKind::Year, false);
        }
        let summary = stats.summary();
        assert_eq!(summary.total, 10);
        assert_eq!(summary.correct, 7);
        assert_eq!(summary.incorrect, 3);
        assert!((summary.accuracy - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn accuracy_zero_when_nothing_asked() {
        assert_eq!(QuizStatistics::default().accuracy(), 0.0);
    }

    #[test]
    fn per_kind_tallies() {
        let mut stats = QuizStatistics::default();
        stats.record(QuestionKind::Order, true);
        stats.record(QuestionKind::Order, false);
        stats.record(QuestionKind::Year, true);
        assert_eq!(stats.order.asked, 2);
        assert_eq!(stats.order.correct, 1);
        assert_eq!(stats.year.asked, 1);
        assert_eq!(stats.name.asked, 0);
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(format_percent(1, 3), "33.33%");
        assert_eq!(format_percent(7, 10), "70.00%");
        assert_eq!(format_percent(0, 0), "0.00%");
    }

    #[test]
    fn summary_serializes() {
        let mut stats = QuizStatistics::default();
        stats.record(QuestionKind::Name, true);
        let json = serde_json::to_string(&stats.summary()).unwrap();
        assert!(json.contains("\"total\":1"));
        assert!(json.contains("\"accuracy\":1.0"));
    }
}
