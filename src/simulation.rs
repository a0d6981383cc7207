/***************************************/
/*           Local modules             */
/***************************************/
use crate::source::{ElevatorSource, FloorSource, SharedElevator, SharedFloor};
use std::cell::RefCell;
use std::rc::Rc;

/**
 * Elevator collaborator used when the console runs without a simulation engine.
 *
 * Moves one floor per command and stays within `1..=n_floors`. The passenger
 * count only changes when the operator sets it.
 *
 * # Fields
 * - `name`:            Stable elevator key.
 * - `current_floor`:   Floor the car is at.
 * - `n_floors`:        Highest floor the car may reach.
 * - `passengers`:      People inside the car.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct StandaloneLift {
    name: String,
    current_floor: i32,
    n_floors: i32,
    passengers: usize,
}

impl StandaloneLift {
    pub fn new(name: &str, n_floors: u32) -> StandaloneLift {
        StandaloneLift {
            name: name.to_string(),
            current_floor: 1,
            n_floors: n_floors as i32,
            passengers: 0,
        }
    }

    pub fn set_passengers(&mut self, passengers: usize) {
        self.passengers = passengers;
    }
}

impl ElevatorSource for StandaloneLift {
    fn name(&self) -> &str {
        &self.name
    }

    fn current_floor(&self) -> i32 {
        self.current_floor
    }

    fn queue_size(&self) -> usize {
        self.passengers
    }

    fn move_up(&mut self) {
        if self.current_floor < self.n_floors {
            self.current_floor += 1;
        } else {
            log::debug!("{} already at top floor {}", self.name, self.current_floor);
        }
    }

    fn move_down(&mut self) {
        if self.current_floor > 1 {
            self.current_floor -= 1;
        } else {
            log::debug!("{} already at bottom floor", self.name);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StandaloneFloor {
    floor_number: i32,
    waiting: usize,
}

impl StandaloneFloor {
    pub fn new(floor_number: i32) -> StandaloneFloor {
        StandaloneFloor {
            floor_number,
            waiting: 0,
        }
    }

    pub fn set_waiting(&mut self, waiting: usize) {
        self.waiting = waiting;
    }
}

impl FloorSource for StandaloneFloor {
    fn floor_number(&self) -> i32 {
        self.floor_number
    }

    fn num_waiting(&self) -> usize {
        self.waiting
    }
}

/**
 * A building of standalone collaborators.
 *
 * Keeps typed handles next to the shared trait objects so the console can set
 * passenger and waiting counts on the same objects the view reads from.
 */
pub struct StandaloneBuilding {
    lifts: Vec<Rc<RefCell<StandaloneLift>>>,
    floors: Vec<Rc<RefCell<StandaloneFloor>>>,
}

impl StandaloneBuilding {
    /// Elevators are named `lift_1..=lift_n`, floors numbered `1..=n_floors`.
    pub fn new(n_floors: u32, n_elevators: u32) -> StandaloneBuilding {
        let lifts = (1..=n_elevators)
            .map(|i| {
                Rc::new(RefCell::new(StandaloneLift::new(
                    &format!("lift_{}", i),
                    n_floors,
                )))
            })
            .collect();
        let floors = (1..=n_floors as i32)
            .map(|f| Rc::new(RefCell::new(StandaloneFloor::new(f))))
            .collect();

        StandaloneBuilding { lifts, floors }
    }

    pub fn elevators(&self) -> Vec<SharedElevator> {
        self.lifts
            .iter()
            .map(|lift| lift.clone() as SharedElevator)
            .collect()
    }

    pub fn floors(&self) -> Vec<SharedFloor> {
        self.floors
            .iter()
            .map(|floor| floor.clone() as SharedFloor)
            .collect()
    }

    /// Returns false when no elevator has that index.
    pub fn set_passengers(&self, index: usize, passengers: usize) -> bool {
        match self.lifts.get(index) {
            Some(lift) => {
                lift.borrow_mut().set_passengers(passengers);
                true
            }
            None => false,
        }
    }

    /// Returns false when no floor has that number.
    pub fn set_waiting(&self, floor_number: i32, waiting: usize) -> bool {
        match self
            .floors
            .iter()
            .find(|floor| floor.borrow().floor_number() == floor_number)
        {
            Some(floor) => {
                floor.borrow_mut().set_waiting(waiting);
                true
            }
            None => false,
        }
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
