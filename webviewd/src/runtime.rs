//! # Host Runtime
//!
//! The event loop that ties the bridge, the app and the panel together.

use crate::app::DataDisplay;
use crate::commands::HostCommand;
use crate::config::{HostMode, HostRuntimeConfig, TimeMode};
use crate::input_script::{InputScript, InputScriptError, ScriptedInput};
use dev_controls::{ControlError, DevControls};
use services_bridge::{BridgeRegistry, LoggingHost, MockHost};
use sim_clock::{Duration, Instant, SimClock};
use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Instant as WallInstant;
use thiserror::Error;

/// Host runtime error types
#[derive(Debug, Error)]
pub enum HostRuntimeError {
    #[error("Script error: {0}")]
    Script(#[from] InputScriptError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Host runtime state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HostState {
    Running,
    Shutdown,
}

/// Host runtime
pub struct HostRuntime {
    config: HostRuntimeConfig,
    bridge: BridgeRegistry<DataDisplay>,
    /// Present in development mode only
    controls: Option<DevControls>,
    script: Option<InputScript>,
    state: HostState,
    steps: usize,
    alerts: Vec<String>,
    dirty: bool,
    last_frame: String,
    wall_start: WallInstant,
}

impl HostRuntime {
    /// Creates a runtime whose clock starts at the current wall-clock time
    pub fn new(config: HostRuntimeConfig) -> Result<Self, HostRuntimeError> {
        Self::with_clock(config, SimClock::starting_now())
    }

    /// Creates a runtime with an explicit clock
    pub fn with_clock(config: HostRuntimeConfig, clock: SimClock) -> Result<Self, HostRuntimeError> {
        let mut bridge = match config.mode {
            HostMode::Dev => {
                let host = MockHost::with_dataset(config.dataset.clone().unwrap_or_default())
                    .with_delay(config.response_delay);
                BridgeRegistry::with_mock(host, clock)
            }
            HostMode::Production => BridgeRegistry::new(Box::new(LoggingHost::new()), clock),
        };
        bridge.bind_receiver(DataDisplay::new());

        let controls = match config.mode {
            HostMode::Dev => Some(DevControls::with_log_capacity(config.log_capacity)),
            HostMode::Production => None,
        };

        let script = config
            .script
            .as_deref()
            .map(InputScript::from_text)
            .transpose()?;

        tracing::info!(mode = ?config.mode, "web viewer app initialized");

        Ok(Self {
            config,
            bridge,
            controls,
            script,
            state: HostState::Running,
            steps: 0,
            alerts: Vec::new(),
            dirty: true,
            last_frame: String::new(),
            wall_start: WallInstant::now(),
        })
    }

    /// Runs the loaded script to completion
    ///
    /// Returns when:
    /// - Quit command received
    /// - Max steps reached (if configured)
    /// - Script exhausted
    pub fn run(&mut self) -> Result<(), HostRuntimeError> {
        self.render();

        while self.can_continue() {
            let Some(input) = self.script.as_mut().and_then(InputScript::next_input) else {
                break;
            };
            self.step(input);
        }

        self.shutdown();
        Ok(())
    }

    /// Runs commands read line by line from `input`
    ///
    /// Lines are read on a separate thread so responses fall due while the
    /// developer is not typing.
    pub fn run_interactive<B>(&mut self, input: B) -> Result<(), HostRuntimeError>
    where
        B: BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for line in input.lines() {
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
        self.run_lines(rx)
    }

    /// Runs commands received on `lines` until quit or disconnect
    ///
    /// While a response is pending, waits for input only until its deadline,
    /// then delivers it. Lines that fail to parse raise an alert; the loop
    /// continues.
    pub fn run_lines(
        &mut self,
        lines: Receiver<io::Result<String>>,
    ) -> Result<(), HostRuntimeError> {
        self.render();
        let mut line_num = 0;

        while self.can_continue() {
            let received = match self.time_to_next_delivery() {
                Some(timeout) => lines.recv_timeout(timeout),
                None => lines.recv().map_err(|_| RecvTimeoutError::Disconnected),
            };

            let line = match received {
                Ok(line) => line?,
                Err(RecvTimeoutError::Timeout) => {
                    self.sync_wall_clock();
                    self.render();
                    continue;
                }
                Err(RecvTimeoutError::Disconnected) => break,
            };

            line_num += 1;
            self.sync_wall_clock();

            match InputScript::parse_line(&line, line_num) {
                Ok(Some(scripted)) => self.step(scripted),
                Ok(None) => self.render(),
                Err(err) => {
                    self.alert(err.to_string());
                    self.render();
                }
            }
        }

        self.shutdown();
        Ok(())
    }

    /// Wall-clock time until the earliest pending response (realtime mode only)
    fn time_to_next_delivery(&self) -> Option<std::time::Duration> {
        if self.config.time_mode != TimeMode::Realtime {
            return None;
        }
        let deadline = self.bridge.host().next_deadline()?;
        let wall: Duration = self.wall_start.elapsed().into();
        Some((deadline.duration_since(Instant::ZERO) - wall).into())
    }

    /// Executes one input, delivers due responses and renders
    pub fn step(&mut self, input: ScriptedInput) {
        match input {
            ScriptedInput::Command(command) => self.execute_command(command),
            ScriptedInput::Wait(duration) => self.wait(duration),
        }
        self.sync_wall_clock();
        self.steps += 1;
        self.render();
    }

    /// Parses and executes a single line
    pub fn execute_line(&mut self, line: &str) -> Result<(), HostRuntimeError> {
        if let Some(input) = InputScript::parse_line(line, 1)? {
            self.step(input);
        }
        Ok(())
    }

    /// Executes a host command
    ///
    /// Control errors are raised as alerts, never returned.
    pub fn execute_command(&mut self, command: HostCommand) {
        self.dirty = true;

        match command {
            HostCommand::App(action) => match action.script_name() {
                Ok(name) => self.bridge.perform_script(name, action.parameter()),
                Err(err) => self.alert(err.to_string()),
            },
            HostCommand::Show => {}
            HostCommand::Quit => self.state = HostState::Shutdown,
            HostCommand::ShowLog => self.print_script_log(),
            HostCommand::ListScripts => self.print_scripts(),
            command => {
                let result = self.execute_control(command);
                if let Err(err) = result {
                    self.alert(err.to_string());
                }
            }
        }
    }

    /// Commands that go through the developer control panel
    fn execute_control(&mut self, command: HostCommand) -> Result<(), ControlError> {
        let Some(controls) = self.controls.as_mut() else {
            return Err(ControlError::MockUnavailable);
        };
        let bridge = &mut self.bridge;

        match command {
            HostCommand::SendData { dataset } => controls.send_dataset(bridge, dataset),
            HostCommand::SendCustom { json } => controls.send_custom(bridge, &json),
            HostCommand::CallScript { script, parameter } => {
                controls.call_script(bridge, &script, &parameter)
            }
            HostCommand::SetResponse { script, response } => {
                controls.set_response(bridge, &script, &response)
            }
            HostCommand::ClearLog => {
                controls.clear_log(bridge);
                Ok(())
            }
            HostCommand::Toggle => {
                controls.toggle();
                Ok(())
            }
            HostCommand::App(_)
            | HostCommand::Show
            | HostCommand::Quit
            | HostCommand::ShowLog
            | HostCommand::ListScripts => Ok(()),
        }
    }

    /// Lets time pass
    fn wait(&mut self, duration: Duration) {
        match self.config.time_mode {
            TimeMode::Simulated => {
                if self.bridge.advance(duration) > 0 {
                    self.dirty = true;
                }
            }
            TimeMode::Realtime => thread::sleep(duration.into()),
        }
    }

    /// Moves simulated time up to wall-clock time (realtime mode only)
    fn sync_wall_clock(&mut self) {
        if self.config.time_mode != TimeMode::Realtime {
            return;
        }
        let wall: Duration = self.wall_start.elapsed().into();
        let simulated = self.bridge.clock().now().duration_since(Instant::ZERO);
        if self.bridge.advance(wall - simulated) > 0 {
            self.dirty = true;
        }
    }

    fn print_script_log(&self) {
        let Some(mock) = self.bridge.mock_host() else {
            println!("(no mock host)");
            return;
        };
        if mock.script_log().is_empty() {
            println!("(no script calls)");
        }
        for record in mock.script_log() {
            match serde_json::to_string(record) {
                Ok(line) => println!("{}", line),
                Err(err) => tracing::warn!("failed to serialize call record: {}", err),
            }
        }
    }

    fn print_scripts(&self) {
        match self.bridge.mock_host() {
            Some(mock) => {
                for name in mock.available_scripts() {
                    println!("{}", name);
                }
            }
            None => println!("(no mock host)"),
        }
    }

    /// Shows a notice to the developer
    fn alert(&mut self, message: String) {
        tracing::warn!(%message, "alert");
        println!("alert: {}", message);
        self.alerts.push(message);
    }

    /// Renders the app and the panel if anything changed
    fn render(&mut self) {
        if !self.dirty {
            return;
        }

        let mut frame = String::new();
        if let Some(display) = self.bridge.receiver() {
            frame.push_str(&display.render());
        }
        if let Some(controls) = &self.controls {
            frame.push_str(&controls.render(&self.bridge));
        }

        print!("{}", frame);
        self.last_frame = frame;
        self.dirty = false;
    }

    fn can_continue(&self) -> bool {
        if self.state == HostState::Shutdown {
            return false;
        }
        self.config.max_steps == 0 || self.steps < self.config.max_steps
    }

    /// Stops the runtime; responses still in flight are dropped
    fn shutdown(&mut self) {
        let pending = self.bridge.pending_deliveries();
        if pending > 0 {
            tracing::debug!(pending, "dropping responses still in flight");
        }
        self.state = HostState::Shutdown;
    }

    /// The bridge registry
    pub fn bridge(&self) -> &BridgeRegistry<DataDisplay> {
        &self.bridge
    }

    /// The application data display
    pub fn display(&self) -> Option<&DataDisplay> {
        self.bridge.receiver()
    }

    /// The developer control panel (development mode only)
    pub fn controls(&self) -> Option<&DevControls> {
        self.controls.as_ref()
    }

    /// Alerts raised so far
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// The most recently rendered frame
    pub fn last_frame(&self) -> &str {
        &self.last_frame
    }

    /// Returns the step count
    pub fn step_count(&self) -> usize {
        self.steps
    }

    /// Whether the runtime has shut down
    pub fn is_shutdown(&self) -> bool {
        self.state == HostState::Shutdown
    }
}
