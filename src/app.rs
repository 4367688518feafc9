use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::driver::PresentationSink;
use crate::system::snapshot::{DiskStatus, MetricSnapshot};
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CpuChart {
    #[default]
    Frequency,
    Usage,
}

impl CpuChart {
    pub fn next(self) -> Self {
        match self {
            CpuChart::Frequency => CpuChart::Usage,
            CpuChart::Usage => CpuChart::Frequency,
        }
    }

    pub fn index(self) -> usize {
        match self {
            CpuChart::Frequency => 0,
            CpuChart::Usage => 1,
        }
    }

    pub fn titles() -> [&'static str; 2] {
        ["CPU Frequency", "CPU Usage"]
    }
}

/// Dashboard state. Receives snapshots from the poll driver and is read by
/// `ui::draw`.
pub struct App {
    pub running: bool,
    pub snapshot: Option<MetricSnapshot>,
    pub devices: Vec<String>,
    pub ram_total_gb: f64,
    pub history_capacity: usize,
    pub refresh_interval: Duration,
    pub cpu_chart: CpuChart,
    pub theme: Theme,
    refresh_requested: bool,
}

impl App {
    /// `devices` is the partition registry's key set; storage rows are fixed
    /// to it for the lifetime of the dashboard.
    pub fn new(
        devices: Vec<String>,
        ram_total_gb: f64,
        history_capacity: usize,
        refresh_interval: Duration,
        theme: Theme,
    ) -> Self {
        App {
            running: true,
            snapshot: None,
            devices,
            ram_total_gb,
            history_capacity,
            refresh_interval,
            cpu_chart: CpuChart::default(),
            theme,
            refresh_requested: false,
        }
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Tab | KeyCode::BackTab => Action::SwitchCpuChart,
            KeyCode::Char('r') => Action::Refresh,
            _ => Action::None,
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::SwitchCpuChart => self.cpu_chart = self.cpu_chart.next(),
            Action::Refresh => self.refresh_requested = true,
            Action::None => {}
        }
    }

    /// Returns whether an immediate poll was requested and clears the request.
    pub fn take_refresh_request(&mut self) -> bool {
        std::mem::take(&mut self.refresh_requested)
    }

    pub fn disk_status(&self, device: &str) -> Option<&DiskStatus> {
        self.snapshot.as_ref().and_then(|s| s.disks.get(device))
    }

    pub fn poll_count(&self) -> u64 {
        self.snapshot.as_ref().map_or(0, |s| s.sequence + 1)
    }
}

impl PresentationSink for App {
    fn render(&mut self, snapshot: MetricSnapshot) {
        self.ram_total_gb = snapshot.ram_total_gb;
        self.snapshot = Some(snapshot);
    }
}
