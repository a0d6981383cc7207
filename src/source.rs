use std::cell::RefCell;
use std::rc::Rc;

/**
 * Capability the console needs from one simulated elevator.
 *
 * Movement semantics, including shaft limits, belong to the implementor.
 */
pub trait ElevatorSource {
    fn name(&self) -> &str;
    fn current_floor(&self) -> i32;
    fn queue_size(&self) -> usize;
    fn move_up(&mut self);
    fn move_down(&mut self);
}

/// Capability the console needs from one simulated floor.
pub trait FloorSource {
    fn floor_number(&self) -> i32;
    fn num_waiting(&self) -> usize;
}

// Collaborators are shared between the view and the dispatcher on one thread.
pub type SharedElevator = Rc<RefCell<dyn ElevatorSource>>;
pub type SharedFloor = Rc<RefCell<dyn FloorSource>>;
