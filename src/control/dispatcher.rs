/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use std::cell::RefCell;
use std::rc::Rc;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{CommandApplied, Direction};
use crate::source::SharedElevator;

/// Reacts to movement commands after they reached their elevator.
pub trait CommandObserver {
    fn command_applied(&mut self, event: &CommandApplied);
}

// Forwards events to a consumer on the other end of the channel
impl CommandObserver for cbc::Sender<CommandApplied> {
    fn command_applied(&mut self, event: &CommandApplied) {
        if let Err(e) = self.send(event.clone()) {
            log::warn!("Dropping command event, receiver is gone: {:?}", e.into_inner());
        }
    }
}

/**
 * Translates manual commands by elevator index into collaborator movement.
 *
 * The index refers to the elevator order given at construction. A valid
 * command moves the elevator once and then notifies every observer, in
 * subscription order, before the call returns. An index out of range touches
 * nothing and notifies nobody.
 *
 * # Fields
 * - `elevators`:       Collaborator elevators in index order.
 * - `elevator_names`:  Names of the elevators, fixed at construction.
 * - `observers`:       Notified after every applied command.
 */
pub struct CommandDispatcher {
    elevators: Vec<SharedElevator>,
    elevator_names: Vec<String>,
    observers: Vec<Rc<RefCell<dyn CommandObserver>>>,
}

impl CommandDispatcher {
    pub fn new(elevators: Vec<SharedElevator>) -> CommandDispatcher {
        let elevator_names = elevators
            .iter()
            .map(|elevator| elevator.borrow().name().to_string())
            .collect();

        CommandDispatcher {
            elevators,
            elevator_names,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Rc<RefCell<dyn CommandObserver>>) {
        self.observers.push(observer);
    }

    pub fn elevator_names(&self) -> &[String] {
        &self.elevator_names
    }

    pub fn elevator_count(&self) -> usize {
        self.elevators.len()
    }

    pub fn call_elevator_up(&self, index: i64) -> bool {
        self.dispatch(index, Direction::Up)
    }

    pub fn call_elevator_down(&self, index: i64) -> bool {
        self.dispatch(index, Direction::Down)
    }

    fn dispatch(&self, index: i64, direction: Direction) -> bool {
        let index = match usize::try_from(index) {
            Ok(i) if i < self.elevators.len() => i,
            _ => {
                log::warn!(
                    "Ignoring {} command for elevator {}, only {} elevators",
                    direction,
                    index,
                    self.elevators.len()
                );
                return false;
            }
        };
        let name = &self.elevator_names[index];

        // The collaborator borrow must end before observers read it back
        {
            let mut elevator = self.elevators[index].borrow_mut();
            match direction {
                Direction::Up => elevator.move_up(),
                Direction::Down => elevator.move_down(),
            }
        }
        log::info!("Moved {} {}", name, direction);

        let event = CommandApplied {
            index,
            name: name.clone(),
            direction,
        };
        for observer in self.observers.iter() {
            observer.borrow_mut().command_applied(&event);
        }

        true
    }
}
