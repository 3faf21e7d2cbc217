use std::time::Duration;

use crate::runner::FinalReport;

/// Shares are carried as hundredths of a percent.
const PERCENT_DIVISOR: u64 = 100;
const MOSTLY_BLOCKED_X100: u64 = 5_000;
const SOME_BLOCKED_X100: u64 = 1_000;
const RULE_WIDTH: usize = 70;

/// How hard the target's rate limiter pushed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verdict {
    /// More than half of all requests were blocked.
    MostlyBlocked,
    /// More than a tenth were blocked.
    SomeBlocked,
    FewBlocked,
}

impl Verdict {
    pub(crate) const fn from_blocked_x100(blocked_x100: u64) -> Self {
        if blocked_x100 > MOSTLY_BLOCKED_X100 {
            Verdict::MostlyBlocked
        } else if blocked_x100 > SOME_BLOCKED_X100 {
            Verdict::SomeBlocked
        } else {
            Verdict::FewBlocked
        }
    }

    pub(crate) const fn message(self) -> &'static str {
        match self {
            Verdict::MostlyBlocked => "Rate limiter is blocking most requests",
            Verdict::SomeBlocked => "Rate limiter is blocking some requests, may need tuning",
            Verdict::FewBlocked => "Very few blocks detected",
        }
    }
}

pub(crate) fn summary_lines(report: &FinalReport) -> Vec<String> {
    let rule = "=".repeat(RULE_WIDTH);
    let verdict = Verdict::from_blocked_x100(report.blocked_x100());
    vec![
        rule.clone(),
        "FINAL RESULTS".to_owned(),
        rule.clone(),
        format!("Total Duration: {}", format_duration(report.elapsed)),
        format!("Total Requests: {}", report.total),
        format!("Actual RPS: {}", format_x100(report.actual_rps_x100())),
        String::new(),
        "Breakdown:".to_owned(),
        format!(
            "  Success (200):       {:>8} ({}%)",
            report.success,
            format_x100(report.success_x100())
        ),
        format!(
            "  Blocked (429/503):   {:>8} ({}%)",
            report.blocked,
            format_x100(report.blocked_x100())
        ),
        format!(
            "  Failed (errors):     {:>8} ({}%)",
            report.failed,
            format_x100(report.failed_x100())
        ),
        format!(
            "  Timeouts:            {:>8} ({}%)",
            report.timeouts,
            format_x100(report.timeouts_x100())
        ),
        rule,
        verdict.message().to_owned(),
    ]
}

pub(crate) fn print_summary(report: &FinalReport) {
    println!();
    for line in summary_lines(report) {
        println!("{}", line);
    }
}

/// Renders a hundredths value as `12.34`.
pub(crate) fn format_x100(value: u64) -> String {
    let whole = value.checked_div(PERCENT_DIVISOR).unwrap_or(0);
    let frac = value.checked_rem(PERCENT_DIVISOR).unwrap_or(0);
    format!("{}.{:02}", whole, frac)
}

/// Whole seconds as `10s`, anything finer as `1.50s`.
pub(crate) fn format_duration(duration: Duration) -> String {
    if duration.subsec_millis() == 0 {
        return format!("{}s", duration.as_secs());
    }
    let hundredths = duration.as_millis().checked_div(10).unwrap_or(0);
    let hundredths = u64::try_from(hundredths).unwrap_or(u64::MAX);
    format!("{}s", format_x100(hundredths))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, AppResult};

    fn report(total: u64, success: u64, blocked: u64, failed: u64, timeouts: u64) -> FinalReport {
        FinalReport {
            total,
            success,
            blocked,
            failed,
            timeouts,
            elapsed: Duration::from_millis(2_000),
            per_worker_quota: 20,
            workers: Vec::new(),
        }
    }

    #[test]
    fn verdict_thresholds() -> AppResult<()> {
        let cases = [
            (5_001, Verdict::MostlyBlocked),
            (5_000, Verdict::SomeBlocked),
            (1_001, Verdict::SomeBlocked),
            (1_000, Verdict::FewBlocked),
            (0, Verdict::FewBlocked),
        ];
        for (blocked_x100, expected) in cases {
            if Verdict::from_blocked_x100(blocked_x100) != expected {
                return Err(AppError::validation(format!(
                    "{} should map to {:?}",
                    blocked_x100, expected
                )));
            }
        }
        Ok(())
    }

    #[test]
    fn summary_uses_integer_percentages() -> AppResult<()> {
        let lines = summary_lines(&report(200, 120, 60, 20, 5));
        let expected = [
            "Total Duration: 2s",
            "Total Requests: 200",
            "Actual RPS: 100.00",
            "  Success (200):            120 (60.00%)",
            "  Blocked (429/503):         60 (30.00%)",
            "  Failed (errors):           20 (10.00%)",
            "  Timeouts:                   5 (2.50%)",
            "Rate limiter is blocking some requests, may need tuning",
        ];
        for line in expected {
            if !lines.iter().any(|candidate| candidate == line) {
                return Err(AppError::validation(format!(
                    "Missing summary line '{}' in {:?}",
                    line, lines
                )));
            }
        }
        Ok(())
    }

    #[test]
    fn empty_run_reports_zero_shares() -> AppResult<()> {
        let lines = summary_lines(&report(0, 0, 0, 0, 0));
        if !lines.iter().any(|line| line == "Very few blocks detected") {
            return Err(AppError::validation("Expected the low-block verdict"));
        }
        if !lines.iter().any(|line| line.ends_with("(0.00%)")) {
            return Err(AppError::validation("Expected zero shares"));
        }
        Ok(())
    }

    #[test]
    fn durations_render_compactly() -> AppResult<()> {
        let cases = [
            (Duration::from_secs(10), "10s"),
            (Duration::from_millis(1_500), "1.50s"),
            (Duration::from_millis(2_034), "2.03s"),
        ];
        for (duration, expected) in cases {
            let rendered = format_duration(duration);
            if rendered != expected {
                return Err(AppError::validation(format!(
                    "Expected {}, got {}",
                    expected, rendered
                )));
            }
        }
        Ok(())
    }
}
