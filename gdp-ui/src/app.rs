//! The render-cycle handler.
//!
//! Every user action runs one synchronous cycle against the session
//! [`AppState`]: apply the action, then (for edits) recompute GDP and redraw.
//! Cycles never overlap, so the state needs no locking.

use std::io::{self, BufRead};

use clap::error::ErrorKind;
use gdp_core::calculations::common::format_amount;
use gdp_core::calculations::{ComponentResult, evaluate_components};
use gdp_core::{HistoryChange, HistoryError, benchmark_series};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::charts::{benchmark_chart, component_chart};
use crate::commands::{Command, parse_line};
use crate::logging::LogControl;
use crate::models::{INVALID_INPUT_MESSAGE, InvalidNumericInput};
use crate::presenter::{MessageKind, Presenter};
use crate::state::AppState;
use crate::utils::parse_real;

/// Label of the GDP readout.
pub const READOUT_LABEL: &str = "PIB final";

/// What a render cycle produced.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    Rendered {
        result: ComponentResult,
        charts: usize,
    },
    /// A coefficient field did not parse; nothing was drawn.
    InvalidInput(InvalidNumericInput),
}

impl CycleOutcome {
    pub fn gdp(&self) -> Option<f64> {
        match self {
            Self::Rendered { result, .. } => Some(result.gdp()),
            Self::InvalidInput(_) => None,
        }
    }
}

/// Errors from history actions.
#[derive(Debug, Error, PartialEq)]
pub enum ActionError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidNumericInput),

    #[error(transparent)]
    History(#[from] HistoryError),
}

/// Whether the session continues after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Dashboard {
    state: AppState,
    log: Option<LogControl>,
}

impl Dashboard {
    pub fn new(state: AppState) -> Self {
        Self { state, log: None }
    }

    /// Lets the `log` command change the live filter.
    pub fn with_log_control(
        mut self,
        log: LogControl,
    ) -> Self {
        self.log = Some(log);
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Runs one render cycle: readout, six component charts (each with its
    /// full curve history), the benchmark chart when enabled, and the saved
    /// history when there is any.
    pub fn render(
        &mut self,
        presenter: &mut dyn Presenter,
    ) -> io::Result<CycleOutcome> {
        let params = match self.state.parameters() {
            Ok(params) => params,
            Err(error) => {
                warn!(%error, "render aborted on invalid input");
                presenter.readout(READOUT_LABEL, INVALID_INPUT_MESSAGE)?;
                presenter.message(MessageKind::Error, &error.to_string())?;
                return Ok(CycleOutcome::InvalidInput(error));
            }
        };

        let result = evaluate_components(&params);
        presenter.readout(READOUT_LABEL, &format_amount(result.gdp()))?;
        presenter.message(MessageKind::Info, &result.to_string())?;

        let mut charts = 0;
        for function in params.functions() {
            let samples = self.state.curve_history.record_if_changed(
                function.component,
                function.params.intercept,
                function.params.slope,
                function.driver,
            );
            presenter.chart(&component_chart(&function, samples))?;
            charts += 1;
        }

        if self.state.show_benchmark {
            presenter.chart(&benchmark_chart(&benchmark_series()))?;
            charts += 1;
        }

        if !self.state.gdp_history.is_empty() {
            presenter.history(&self.state.gdp_history.list_sorted())?;
        }

        debug!(gdp = result.gdp(), charts, "render cycle complete");
        Ok(CycleOutcome::Rendered { result, charts })
    }

    /// Saves the GDP computed from the current form for `year`.
    pub fn save_current(
        &mut self,
        year: i32,
        overwrite: bool,
    ) -> Result<HistoryChange, ActionError> {
        let params = self.state.parameters()?;
        let gdp = evaluate_components(&params).gdp();
        Ok(self.state.gdp_history.save(year, gdp, overwrite)?)
    }

    /// Replaces the saved value of `year` with `value` as typed.
    pub fn update_year(
        &mut self,
        year: i32,
        value: &str,
    ) -> Result<HistoryChange, ActionError> {
        let value = parse_real(value).map_err(|source| InvalidNumericInput {
            field: format!("PIB {year}"),
            source,
        })?;
        Ok(self.state.gdp_history.update(year, value)?)
    }

    pub fn delete_year(
        &mut self,
        year: i32,
    ) -> Result<HistoryChange, ActionError> {
        Ok(self.state.gdp_history.delete(year)?)
    }

    /// Applies one command and reports its outcome.
    pub fn apply(
        &mut self,
        command: Command,
        presenter: &mut dyn Presenter,
    ) -> io::Result<Flow> {
        debug!(?command, "applying command");
        match command {
            Command::Render => {
                self.render(presenter)?;
            }
            Command::Set { field, value } => {
                self.state.form.set(field, value);
                self.render(presenter)?;
            }
            Command::Save { year, overwrite } => {
                let outcome = self.save_current(year, overwrite);
                report(presenter, outcome)?;
            }
            Command::Update { year, value } => {
                let outcome = self.update_year(year, &value);
                report(presenter, outcome)?;
            }
            Command::Delete { year } => {
                let outcome = self.delete_year(year);
                report(presenter, outcome)?;
            }
            Command::List => {
                presenter.history(&self.state.gdp_history.list_sorted())?;
            }
            Command::Params => {
                presenter.message(MessageKind::Info, self.state.form.to_string().trim_end())?;
            }
            Command::Log { level } => match self.log.as_ref().map(|log| log.set_level(&level)) {
                Some(Ok(())) => {
                    presenter.message(MessageKind::Success, &format!("log level set to {level}"))?
                }
                Some(Err(error)) => presenter.message(MessageKind::Error, &format!("{error:#}"))?,
                None => presenter.message(MessageKind::Warning, "logging is not initialized")?,
            },
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Reads commands line by line until `quit` or end of input.
    pub fn run<R: BufRead>(
        &mut self,
        input: R,
        presenter: &mut dyn Presenter,
    ) -> io::Result<()> {
        presenter.prompt()?;
        for line in input.lines() {
            match parse_line(&line?) {
                Ok(None) => {}
                Ok(Some(command)) => {
                    if self.apply(command, presenter)? == Flow::Quit {
                        info!("session ended by user");
                        return Ok(());
                    }
                }
                Err(error) => {
                    let kind = match error.kind() {
                        ErrorKind::DisplayHelp
                        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => MessageKind::Info,
                        _ => MessageKind::Error,
                    };
                    presenter.message(kind, error.to_string().trim_end())?;
                }
            }
            presenter.prompt()?;
        }
        info!("input closed");
        Ok(())
    }
}

fn report(
    presenter: &mut dyn Presenter,
    outcome: Result<HistoryChange, ActionError>,
) -> io::Result<()> {
    match outcome {
        Ok(HistoryChange::Created { year, value }) => presenter.message(
            MessageKind::Success,
            &format!("GDP for {year} saved: {} B", format_amount(value)),
        ),
        Ok(HistoryChange::Updated { year, value, .. }) => presenter.message(
            MessageKind::Success,
            &format!("GDP for {year} updated: {} B", format_amount(value)),
        ),
        Ok(HistoryChange::Deleted { year, .. }) => {
            presenter.message(MessageKind::Warning, &format!("GDP for {year} deleted"))
        }
        Err(ActionError::History(error @ HistoryError::Conflict { year, .. })) => {
            presenter.message(MessageKind::Warning, &error.to_string())?;
            presenter.message(
                MessageKind::Info,
                &format!("run `save {year} --overwrite` to replace it"),
            )
        }
        Err(ActionError::History(error @ HistoryError::NotFound(_))) => {
            presenter.message(MessageKind::Error, &error.to_string())
        }
        Err(ActionError::InvalidInput(error)) => {
            presenter.message(MessageKind::Error, INVALID_INPUT_MESSAGE)?;
            presenter.message(MessageKind::Error, &error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use gdp_core::{Component, HistoryEntry};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::charts::ChartRequest;
    use crate::models::FieldKey;

    #[derive(Default)]
    struct Recorder {
        readouts: Vec<(String, String)>,
        charts: Vec<ChartRequest>,
        messages: Vec<(MessageKind, String)>,
        histories: Vec<Vec<HistoryEntry>>,
    }

    impl Presenter for Recorder {
        fn readout(
            &mut self,
            label: &str,
            value: &str,
        ) -> io::Result<()> {
            self.readouts.push((label.to_string(), value.to_string()));
            Ok(())
        }

        fn chart(
            &mut self,
            chart: &ChartRequest,
        ) -> io::Result<()> {
            self.charts.push(chart.clone());
            Ok(())
        }

        fn message(
            &mut self,
            kind: MessageKind,
            text: &str,
        ) -> io::Result<()> {
            self.messages.push((kind, text.to_string()));
            Ok(())
        }

        fn history(
            &mut self,
            entries: &[HistoryEntry],
        ) -> io::Result<()> {
            self.histories.push(entries.to_vec());
            Ok(())
        }
    }

    fn field(name: &str) -> FieldKey {
        FieldKey::parse(name).unwrap()
    }

    // =========================================================================
    // render tests
    // =========================================================================

    #[test]
    fn default_render_shows_benchmark_gdp_and_seven_charts() {
        let mut dashboard = Dashboard::new(AppState::default());
        let mut recorder = Recorder::default();

        let outcome = dashboard.render(&mut recorder).unwrap();

        assert_eq!(outcome.gdp(), Some(20.0));
        assert!(matches!(outcome, CycleOutcome::Rendered { charts: 7, .. }));
        assert_eq!(
            recorder.readouts,
            vec![("PIB final".to_string(), "20.00".to_string())]
        );
        assert_eq!(recorder.charts.len(), 7);
        assert_eq!(recorder.charts[0].title, "Función C_t");
        assert_eq!(recorder.charts[5].title, "Función M");
        assert_eq!(recorder.charts[6].title, "Evolución histórica del PIB");
    }

    #[test]
    fn render_without_benchmark_emits_six_charts() {
        let mut state = AppState::default();
        state.show_benchmark = false;
        let mut dashboard = Dashboard::new(state);
        let mut recorder = Recorder::default();

        let outcome = dashboard.render(&mut recorder).unwrap();

        assert!(matches!(outcome, CycleOutcome::Rendered { charts: 6, .. }));
        assert_eq!(recorder.charts.len(), 6);
    }

    #[test]
    fn rerender_with_same_inputs_does_not_add_curves() {
        let mut dashboard = Dashboard::new(AppState::default());
        let mut recorder = Recorder::default();

        dashboard.render(&mut recorder).unwrap();
        dashboard.render(&mut recorder).unwrap();

        for component in Component::ALL {
            assert_eq!(dashboard.state().curve_history.samples(component).len(), 1);
        }
        assert_eq!(recorder.charts[7].series.len(), 1);
    }

    #[test]
    fn changed_coefficient_adds_one_curve_to_its_component_only() {
        let mut dashboard = Dashboard::new(AppState::default());
        let mut recorder = Recorder::default();
        dashboard.render(&mut recorder).unwrap();

        dashboard
            .apply(
                Command::Set {
                    field: field("ck"),
                    value: "0.9".to_string(),
                },
                &mut recorder,
            )
            .unwrap();

        let history = &dashboard.state().curve_history;
        assert_eq!(history.samples(Component::CapitalistConsumption).len(), 2);
        assert_eq!(history.samples(Component::WorkerConsumption).len(), 1);
        let ck_chart = &recorder.charts[8];
        assert_eq!(ck_chart.title, "Función C_k");
        assert_eq!(ck_chart.series.len(), 2);
        assert_eq!(ck_chart.series[1].label.as_deref(), Some("C_k v2"));
    }

    #[test]
    fn invalid_field_aborts_cycle_without_touching_history() {
        let mut dashboard = Dashboard::new(AppState::default());
        let mut recorder = Recorder::default();
        dashboard.save_current(2025, false).unwrap();
        dashboard.state.form.set(field("a"), "four");

        let outcome = dashboard.render(&mut recorder).unwrap();

        assert!(matches!(outcome, CycleOutcome::InvalidInput(ref e) if e.field == "C_t_a"));
        assert_eq!(outcome.gdp(), None);
        assert_eq!(
            recorder.readouts,
            vec![("PIB final".to_string(), INVALID_INPUT_MESSAGE.to_string())]
        );
        assert!(recorder.charts.is_empty());
        assert_eq!(dashboard.state().gdp_history.get(2025), Some(20.0));
        assert!(dashboard.state().curve_history.samples(Component::WorkerConsumption).is_empty());
    }

    // =========================================================================
    // history action tests
    // =========================================================================

    #[test]
    fn save_conflict_then_overwrite() {
        let mut dashboard = Dashboard::new(AppState::default());
        dashboard.save_current(2025, false).unwrap();
        dashboard.state.form.set(field("m"), "0.0");

        let conflict = dashboard.save_current(2025, false);
        assert_eq!(
            conflict,
            Err(ActionError::History(HistoryError::Conflict {
                year: 2025,
                existing: 20.0
            }))
        );

        let change = dashboard.save_current(2025, true).unwrap();
        assert_eq!(
            change,
            HistoryChange::Updated {
                year: 2025,
                previous: 20.0,
                value: 21.0
            }
        );
    }

    #[test]
    fn save_with_invalid_form_is_rejected() {
        let mut dashboard = Dashboard::new(AppState::default());
        dashboard.state.form.set(field("x"), "");

        let outcome = dashboard.save_current(2025, false);

        assert!(matches!(outcome, Err(ActionError::InvalidInput(_))));
        assert!(dashboard.state().gdp_history.is_empty());
    }

    #[test]
    fn update_and_delete_require_existing_year() {
        let mut dashboard = Dashboard::new(AppState::default());

        assert_eq!(
            dashboard.update_year(2020, "18"),
            Err(ActionError::History(HistoryError::NotFound(2020)))
        );
        assert_eq!(
            dashboard.delete_year(2020),
            Err(ActionError::History(HistoryError::NotFound(2020)))
        );
    }

    #[test]
    fn update_parses_typed_value() {
        let mut dashboard = Dashboard::new(AppState::default());
        dashboard.save_current(2020, false).unwrap();

        assert!(matches!(
            dashboard.update_year(2020, "1,8"),
            Err(ActionError::InvalidInput(ref e)) if e.field == "PIB 2020"
        ));
        dashboard.update_year(2020, "18.25").unwrap();

        assert_eq!(dashboard.state().gdp_history.get(2020), Some(18.25));
    }

    #[test]
    fn apply_reports_conflict_with_overwrite_hint() {
        let mut dashboard = Dashboard::new(AppState::default());
        let mut recorder = Recorder::default();
        let save = Command::Save {
            year: 2025,
            overwrite: false,
        };

        dashboard.apply(save.clone(), &mut recorder).unwrap();
        dashboard.apply(save, &mut recorder).unwrap();

        let kinds: Vec<MessageKind> = recorder.messages.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            kinds,
            vec![MessageKind::Success, MessageKind::Warning, MessageKind::Info]
        );
        assert_eq!(recorder.messages[0].1, "GDP for 2025 saved: 20.00 B");
        assert_eq!(recorder.messages[2].1, "run `save 2025 --overwrite` to replace it");
    }

    #[test]
    fn apply_list_shows_sorted_history() {
        let mut dashboard = Dashboard::new(AppState::default());
        let mut recorder = Recorder::default();
        for year in [2023, 2021, 2022] {
            dashboard.save_current(year, false).unwrap();
        }

        dashboard.apply(Command::List, &mut recorder).unwrap();

        let years: Vec<i32> = recorder.histories[0].iter().map(|e| e.year).collect();
        assert_eq!(years, vec![2021, 2022, 2023]);
    }

    #[test]
    fn log_without_subscriber_is_a_warning() {
        let mut dashboard = Dashboard::new(AppState::default());
        let mut recorder = Recorder::default();

        dashboard
            .apply(
                Command::Log {
                    level: "debug".to_string(),
                },
                &mut recorder,
            )
            .unwrap();

        assert_eq!(
            recorder.messages,
            vec![(MessageKind::Warning, "logging is not initialized".to_string())]
        );
    }

    #[test]
    fn quit_ends_the_session() {
        let mut dashboard = Dashboard::new(AppState::default());
        let mut recorder = Recorder::default();

        assert_eq!(dashboard.apply(Command::Quit, &mut recorder).unwrap(), Flow::Quit);
        assert_eq!(dashboard.apply(Command::Params, &mut recorder).unwrap(), Flow::Continue);
    }

    // =========================================================================
    // run tests
    // =========================================================================

    #[test]
    fn run_processes_lines_until_quit() {
        let mut dashboard = Dashboard::new(AppState::default());
        let mut recorder = Recorder::default();
        let script = "save 2025\n\nbogus\nsave 1850\nquit\nsave 2024\n";

        dashboard.run(script.as_bytes(), &mut recorder).unwrap();

        assert_eq!(dashboard.state().gdp_history.len(), 1);
        let errors = recorder
            .messages
            .iter()
            .filter(|(kind, _)| *kind == MessageKind::Error)
            .count();
        assert_eq!(errors, 2);
    }
}
