//! Headless driver for [`Model`]s.
//!
//! Runs the same init/update/view loop as [`Program`](crate::Program), but
//! messages come from a queue instead of the terminal and commands execute
//! synchronously, which makes whole interactions testable.

use std::collections::VecDeque;

use crate::key::{KeyMsg, KeyType};
use crate::message::{Cmd, Message, Model, QuitMsg};

/// Statistics tracked during simulation.
#[derive(Debug, Clone, Default)]
pub struct SimulationStats {
    /// Number of times init() was called.
    pub init_calls: usize,
    /// Number of times update() was called.
    pub update_calls: usize,
    /// Number of times view() was called.
    pub view_calls: usize,
    /// Commands that were returned from init/update.
    pub commands_returned: usize,
    /// Whether quit was requested.
    pub quit_requested: bool,
}

/// A simulator for driving a model without a terminal.
///
/// # Example
///
/// ```rust
/// use listform::{Form, KeyType, ListInput, ProgramSimulator};
///
/// let form = Form::new(vec![Box::new(ListInput::new().key("fruits"))]);
/// let mut sim = ProgramSimulator::new(form);
/// sim.type_text("kiwi");
/// sim.press(KeyType::Enter);
/// sim.press(KeyType::Enter);
/// sim.run_until_quit(100);
///
/// assert!(sim.is_quit());
/// assert_eq!(sim.model().get_list("fruits").unwrap(), vec!["kiwi", ""]);
/// ```
pub struct ProgramSimulator<M: Model> {
    model: M,
    input_queue: VecDeque<Message>,
    output_views: Vec<String>,
    stats: SimulationStats,
    initialized: bool,
}

impl<M: Model> ProgramSimulator<M> {
    /// Create a new simulator with the given model.
    pub fn new(model: M) -> Self {
        Self {
            model,
            input_queue: VecDeque::new(),
            output_views: Vec::new(),
            stats: SimulationStats::default(),
            initialized: false,
        }
    }

    /// Initialize the model. The message of any returned command is queued.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.stats.init_calls += 1;

        let cmd = self.model.init();
        self.enqueue_result(cmd);

        self.stats.view_calls += 1;
        self.output_views.push(self.model.view());
    }

    fn enqueue_result(&mut self, cmd: Option<Cmd>) {
        if let Some(cmd) = cmd {
            self.stats.commands_returned += 1;
            if let Some(msg) = cmd.execute() {
                self.input_queue.push_back(msg);
            }
        }
    }

    /// Queue a message for processing.
    pub fn send(&mut self, msg: Message) {
        self.input_queue.push_back(msg);
    }

    /// Queue a key press.
    pub fn press(&mut self, key_type: KeyType) {
        self.send(Message::new(KeyMsg::from_type(key_type)));
    }

    /// Queue one key press per character of `text`.
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send(Message::new(KeyMsg::from_char(c)));
        }
    }

    /// Process one message from the queue, calling update and view.
    ///
    /// Returns the command returned by update, if any, without executing it.
    pub fn step(&mut self) -> Option<Cmd> {
        if !self.initialized {
            self.init();
        }

        let msg = self.input_queue.pop_front()?;
        if msg.is::<QuitMsg>() {
            self.stats.quit_requested = true;
            return None;
        }

        self.stats.update_calls += 1;
        let cmd = self.model.update(msg);
        if cmd.is_some() {
            self.stats.commands_returned += 1;
        }

        self.stats.view_calls += 1;
        self.output_views.push(self.model.view());

        cmd
    }

    /// Process messages until the queue is empty or quit is requested.
    ///
    /// Returns the number of messages processed.
    pub fn run_until_empty(&mut self) -> usize {
        self.run_until_quit(usize::MAX)
    }

    /// Run until quit is received, the queue drains, or `max_steps` is
    /// reached. Returns the number of steps processed.
    pub fn run_until_quit(&mut self, max_steps: usize) -> usize {
        if !self.initialized {
            self.init();
        }
        let mut steps = 0;
        while steps < max_steps && !self.stats.quit_requested && !self.input_queue.is_empty() {
            if let Some(cmd) = self.step()
                && let Some(msg) = cmd.execute()
            {
                self.input_queue.push_back(msg);
            }
            steps += 1;
        }
        steps
    }

    /// Get a reference to the current model state.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get a mutable reference to the current model state.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Consume the simulator and return the final model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// Get the simulation statistics.
    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    /// Get all captured view outputs.
    pub fn views(&self) -> &[String] {
        &self.output_views
    }

    /// Get the most recent view output.
    pub fn last_view(&self) -> Option<&str> {
        self.output_views.last().map(String::as_str)
    }

    /// Check if quit has been requested.
    pub fn is_quit(&self) -> bool {
        self.stats.quit_requested
    }

    /// Get the number of pending messages.
    pub fn pending_count(&self) -> usize {
        self.input_queue.len()
    }
}
