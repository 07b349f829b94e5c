//! Dashboard - Terminal Display Loop
//!
//! Consumes service events, updates the data and chart state, and redraws
//! the ticker, date label, sparkline, and state selector. User selections
//! arrive as stdin commands; every change re-derives the display values.

use std::io::BufRead;

use crossbeam_channel::{Receiver, select};

use crate::chart::adapter::SparkAdapter;
use crate::chart::sparkline;
use crate::constants::SPARKLINE_WIDTH;
use crate::domain::metric::Metric;
use crate::domain::timescale::TimeScale;
use crate::services::{ServiceEvent, ServiceHub};
use crate::state::chart_state::ChartState;
use crate::state::data_state::DataState;
use crate::utils::format::{format_number, format_record_date};

const HELP: &str =
    "commands: state <CODE> | metric <positive|negative|death> | range <week|month|max> | states | quit";

/// Dashboard state: the owned data plus the current chart selection
pub struct Dashboard {
    data: DataState,
    chart: ChartState,
    /// Set once the first national batch has been applied
    ready: bool,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            data: DataState::new(),
            chart: ChartState::default(),
            ready: false,
        }
    }

    /// Apply a service event and redraw what it affects
    pub fn apply_event(&mut self, event: ServiceEvent) {
        match event {
            ServiceEvent::NationalLoaded(records) => {
                tracing::info!("Updating chart with national data");
                self.data.update_national(records);
                self.chart.reset(self.data.national());
                self.ready = true;
                self.render();
            }
            ServiceEvent::StatesLoaded(records) => {
                tracing::info!("Updating selector with state codes");
                self.data.update_states(records);
                self.render_selector();
            }
            ServiceEvent::FetchFailed { feed, message } => {
                tracing::error!("{feed} fetch failed: {message}");
            }
        }
    }

    /// Apply a user command; returns false when the session should end
    pub fn apply_command(&mut self, line: &str) -> bool {
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (None, _) => return true,
            (Some("quit") | Some("exit"), _) => return false,
            (Some("states"), _) => {
                self.render_selector();
                return true;
            }
            (Some("state"), Some(key)) => {
                self.chart.select_series(key, &self.data);
            }
            (Some("metric"), Some(name)) => match Metric::from_name(name) {
                Some(metric) => self.chart.set_metric(metric),
                None => {
                    println!("unknown metric: {name}");
                    return true;
                }
            },
            (Some("range"), Some(name)) => match TimeScale::from_name(name) {
                Some(scale) => self.chart.set_scale(scale),
                None => {
                    println!("unknown range: {name}");
                    return true;
                }
            },
            _ => {
                println!("{HELP}");
                return true;
            }
        }
        self.render();
        true
    }

    /// Redraw the chart, ticker, and date label
    fn render(&self) {
        if !self.ready {
            println!("Waiting for data...");
            return;
        }

        let mut adapter = SparkAdapter::new(self.chart.active().clone());
        adapter.metric = self.chart.metric();
        adapter.scale = self.chart.scale();

        match self.chart.current_value() {
            Ok(value) => {
                let date_label = self
                    .chart
                    .current_date()
                    .map(|date| format_record_date(&date))
                    .unwrap_or_default();
                println!();
                println!("{}", sparkline::render(&adapter, SPARKLINE_WIDTH));
                println!(
                    "{} {} on {} [{}]",
                    format_number(value),
                    self.chart.metric().label().to_lowercase(),
                    date_label,
                    self.chart.scale()
                );
            }
            Err(_) => println!("No data for this selection yet"),
        }
    }

    /// Print the state selector entries
    fn render_selector(&self) {
        println!("States: {}", self.data.selector_keys().join(", "));
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the dashboard loop until the user quits or all channels close
pub fn run(hub: &ServiceHub) {
    println!("{HELP}");
    let events = hub.events();
    let input = spawn_input_thread();
    let mut dashboard = Dashboard::new();

    loop {
        select! {
            recv(events) -> event => match event {
                Ok(event) => dashboard.apply_event(event),
                Err(_) => break,
            },
            recv(input) -> line => match line {
                Ok(line) => {
                    if !dashboard.apply_command(line.trim()) {
                        break;
                    }
                }
                Err(_) => break,
            },
        }
    }
}

/// Forward stdin lines into a channel so the loop can select over them
fn spawn_input_thread() -> Receiver<String> {
    let (tx, rx) = crossbeam_channel::unbounded();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });
    rx
}
