pub mod command;
pub mod console_tests;

pub use command::{parse_command, ConsoleCommand, USAGE};

/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use std::thread::Builder;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::Config;
use crate::control::CommandDispatcher;
use crate::layout::BuildingLayout;
use crate::setup::BuildingSetup;
use crate::simulation::StandaloneBuilding;
use crate::surface::AsciiSurface;
use crate::view::{SystemClock, ViewError, ViewModel};

/***************************************/
/*               Enums                 */
/***************************************/
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    Line(String),
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/**
 * Manual override console for a building of standalone collaborators.
 *
 * Owns the view and the dispatcher and runs them on the calling thread. Input
 * lines arrive over a channel, and between lines the view is refreshed and
 * redrawn every `refresh_interval`.
 *
 * # Fields
 * - `building`:            Collaborators the operator can change by hand.
 * - `view`:                The view, shared with the dispatcher as its observer.
 * - `dispatcher`:          Turns `up`/`down` commands into elevator movement.
 * - `refresh_interval`:    Time between two refresh ticks.
 * - `last_frame`:          Frame most recently printed, ticks only print when it changes.
 */
pub struct Console {
    building: StandaloneBuilding,
    view: Rc<RefCell<ViewModel<AsciiSurface>>>,
    dispatcher: CommandDispatcher,
    refresh_interval: Duration,
    last_frame: RefCell<String>,
}

impl Console {
    pub fn new(config: &Config, setup: BuildingSetup) -> Result<Console, ViewError> {
        let building = StandaloneBuilding::new(setup.num_floors, setup.num_elevators);
        let view = ViewModel::new(
            setup.num_floors,
            building.elevators(),
            building.floors(),
            BuildingLayout::new(config.layout.clone()),
            AsciiSurface::new(config.console.px_per_column, config.console.px_per_row),
            Box::new(SystemClock),
        )?;
        let view = Rc::new(RefCell::new(view));

        let mut dispatcher = CommandDispatcher::new(building.elevators());
        dispatcher.subscribe(view.clone());

        Ok(Console {
            building,
            view,
            dispatcher,
            refresh_interval: Duration::from_millis(config.console.refresh_interval_ms.max(1)),
            last_frame: RefCell::new(String::new()),
        })
    }

    pub fn activate(&self) {
        self.view.borrow_mut().activate();
    }

    pub fn frame(&self) -> String {
        self.view.borrow().surface().frame()
    }

    pub fn run<W: Write>(&self, input_rx: cbc::Receiver<ConsoleEvent>, output: &mut W) -> io::Result<()> {
        self.activate();
        self.print_frame(output)?;
        writeln!(output, "{}", USAGE)?;

        loop {
            let flow = cbc::select! {
                recv(input_rx) -> event => {
                    match event {
                        Ok(ConsoleEvent::Line(line)) => self.handle_line(&line, output)?,
                        Ok(ConsoleEvent::InputClosed) | Err(_) => {
                            log::info!("Input closed, leaving console");
                            Flow::Quit
                        }
                    }
                }
                default(self.refresh_interval) => {
                    self.refresh_and_render();
                    self.print_frame_if_changed(output)?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }

        self.view.borrow_mut().shutdown();
        Ok(())
    }

    pub fn handle_line<W: Write>(&self, line: &str, output: &mut W) -> io::Result<Flow> {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                writeln!(output, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };
        log::debug!("Console command {:?}", command);

        match command {
            ConsoleCommand::Up(index) => {
                if self.dispatcher.call_elevator_up(index) {
                    self.print_frame(output)?;
                } else {
                    self.print_bad_index(index, output)?;
                }
            }
            ConsoleCommand::Down(index) => {
                if self.dispatcher.call_elevator_down(index) {
                    self.print_frame(output)?;
                } else {
                    self.print_bad_index(index, output)?;
                }
            }
            ConsoleCommand::Board { index, count } => {
                if self.building.set_passengers(index, count) {
                    self.refresh_and_render();
                    self.print_frame(output)?;
                } else {
                    self.print_bad_index(index as i64, output)?;
                }
            }
            ConsoleCommand::Wait { floor, count } => {
                if self.building.set_waiting(floor, count) {
                    self.refresh_and_render();
                    self.print_frame(output)?;
                } else {
                    writeln!(output, "No floor {}", floor)?;
                }
            }
            ConsoleCommand::Refresh => {
                self.refresh_and_render();
                self.print_frame(output)?;
            }
            ConsoleCommand::Render => {
                self.view.borrow_mut().render();
                self.print_frame(output)?;
            }
            ConsoleCommand::Help => writeln!(output, "{}", USAGE)?,
            ConsoleCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /***************************************/
    /*          Private functions          */
    /***************************************/
    fn refresh_and_render(&self) {
        let mut view = self.view.borrow_mut();
        view.refresh_all();
        view.render();
    }

    fn print_frame<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let frame = self.frame();
        writeln!(output, "{}", frame)?;
        *self.last_frame.borrow_mut() = frame;
        Ok(())
    }

    fn print_frame_if_changed<W: Write>(&self, output: &mut W) -> io::Result<()> {
        if *self.last_frame.borrow() == self.frame() {
            return Ok(());
        }
        self.print_frame(output)
    }

    fn print_bad_index<W: Write>(&self, index: i64, output: &mut W) -> io::Result<()> {
        let names = self.dispatcher.elevator_names();
        writeln!(
            output,
            "No elevator with index {}, valid indices are 0 to {} ({})",
            index,
            self.dispatcher.elevator_count().saturating_sub(1),
            names.join(", ")
        )
    }
}

/// Reads stdin on its own thread and forwards every line to the console.
pub fn spawn_stdin_reader() -> io::Result<cbc::Receiver<ConsoleEvent>> {
    let (input_tx, input_rx) = cbc::unbounded::<ConsoleEvent>();

    let stdin_thread = Builder::new().name("stdin_reader".into());
    stdin_thread.spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if input_tx.send(ConsoleEvent::Line(line)).is_err() {
                        return;
                    }
                }
                Err(e) => {
                    log::error!("Error reading stdin: {}", e);
                    break;
                }
            }
        }
        if input_tx.send(ConsoleEvent::InputClosed).is_err() {
            log::debug!("Console gone before stdin closed");
        }
    })?;

    Ok(input_rx)
}
