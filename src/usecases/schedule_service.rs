//! Continuous mode: run the mentor flow on a fixed interval or once a day.
//!
//! Off by default; the binary runs a single cycle unless a schedule is configured.
//! A failed run is logged and the loop waits for the next slot.

use crate::domain::DomainError;
use crate::shared::AppConfig;
use crate::usecases::mentor_flow::MentorFlow;
use chrono::{Local, NaiveDateTime, NaiveTime, TimeDelta};
use std::future::Future;
use std::time::Duration;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Run, then sleep this long.
    Interval(Duration),
    /// Run at this local wall-clock time every day.
    DailyAt(NaiveTime),
}

impl Schedule {
    /// Schedule requested by configuration. `None` means single-run mode.
    pub fn from_config(cfg: &AppConfig) -> Result<Option<Self>, DomainError> {
        if !cfg.is_serve_configured() {
            return Ok(None);
        }
        match (cfg.serve_interval_secs, cfg.serve_daily_at.as_deref()) {
            (Some(_), Some(_)) => Err(DomainError::Config(
                "set either MENTOR_SERVE_INTERVAL_SECS or MENTOR_SERVE_DAILY_AT, not both".into(),
            )),
            (Some(0), _) => Err(DomainError::Config(
                "MENTOR_SERVE_INTERVAL_SECS must be greater than zero".into(),
            )),
            (Some(secs), _) => Ok(Some(Schedule::Interval(Duration::from_secs(secs)))),
            (None, at) => Self::parse_daily(at.unwrap_or_default()).map(Some),
        }
    }

    /// Interval schedules fire on start; daily ones wait for their slot.
    pub fn runs_on_start(&self) -> bool {
        matches!(self, Schedule::Interval(_))
    }

    /// Parse "HH:MM" (24h).
    pub fn parse_daily(at: &str) -> Result<Self, DomainError> {
        NaiveTime::parse_from_str(at.trim(), "%H:%M")
            .map(Schedule::DailyAt)
            .map_err(|e| DomainError::Config(format!("invalid daily time '{}': {}", at, e)))
    }

    /// Time to sleep after a run that finished at `now`.
    pub fn next_delay(&self, now: NaiveDateTime) -> Duration {
        match self {
            Schedule::Interval(every) => *every,
            Schedule::DailyAt(at) => {
                let today = now.date().and_time(*at);
                let next = if today > now {
                    today
                } else {
                    today + TimeDelta::days(1)
                };
                (next - now).to_std().unwrap_or_default()
            }
        }
    }
}

pub struct ScheduleService {
    flow: MentorFlow,
    schedule: Schedule,
}

impl ScheduleService {
    pub fn new(flow: MentorFlow, schedule: Schedule) -> Self {
        Self { flow, schedule }
    }

    /// Run until Ctrl-C.
    pub async fn run_loop(&self) -> usize {
        self.run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "cannot listen for Ctrl-C; running until killed");
                std::future::pending::<()>().await;
            }
        })
        .await
    }

    /// Run cycles until `shutdown` resolves. Returns the number of runs started.
    ///
    /// Shutdown is only observed between runs; an in-flight run completes.
    pub async fn run_until<F>(&self, shutdown: F) -> usize
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        info!(schedule = ?self.schedule, "scheduler started");

        let mut runs = 0usize;
        let mut due = self.schedule.runs_on_start();
        loop {
            if due {
                runs += 1;
                match self.flow.run_once().await {
                    Ok(report) => info!(
                        run = runs,
                        attempts = report.generation_attempts,
                        "scheduled run succeeded"
                    ),
                    Err(e) => error!(run = runs, reason = %e, "scheduled run failed"),
                }
            }
            due = true;

            let delay = self.schedule.next_delay(Local::now().naive_local());
            info!(next_in_secs = delay.as_secs(), "sleeping until next run");

            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = &mut shutdown => {
                    info!(runs, "shutdown requested; scheduler stopped");
                    return runs;
                }
            }
        }
    }
}
