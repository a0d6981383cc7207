/*
 * Unit tests for the control module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_dispatcher_names
 * - test_out_of_range_index_touches_nothing
 * - test_call_down_moves_once_and_renders_once
 * - test_call_up_notifies_after_move
 * - test_channel_observer
 * - test_headless_dispatch
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod dispatcher_tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crossbeam_channel::unbounded;

    use crate::config::LayoutConfig;
    use crate::control::{CommandDispatcher, CommandObserver};
    use crate::layout::BuildingLayout;
    use crate::shared::{CommandApplied, Direction};
    use crate::source::{ElevatorSource, SharedElevator};
    use crate::surface::RecordingSurface;
    use crate::view::{SystemClock, ViewModel};

    struct SpyLift {
        name: String,
        floor: i32,
        ups: usize,
        downs: usize,
    }

    impl ElevatorSource for SpyLift {
        fn name(&self) -> &str {
            &self.name
        }
        fn current_floor(&self) -> i32 {
            self.floor
        }
        fn queue_size(&self) -> usize {
            0
        }
        fn move_up(&mut self) {
            self.ups += 1;
            self.floor += 1;
        }
        fn move_down(&mut self) {
            self.downs += 1;
            self.floor -= 1;
        }
    }

    // Records every event together with the floor its elevator reports at that moment
    struct FloorRecorder {
        elevators: Vec<SharedElevator>,
        seen: Vec<(CommandApplied, i32)>,
    }

    impl CommandObserver for FloorRecorder {
        fn command_applied(&mut self, event: &CommandApplied) {
            let floor = self.elevators[event.index].borrow().current_floor();
            self.seen.push((event.clone(), floor));
        }
    }

    fn setup_lifts(n: usize) -> (Vec<Rc<RefCell<SpyLift>>>, Vec<SharedElevator>) {
        let lifts: Vec<Rc<RefCell<SpyLift>>> = (0..n)
            .map(|i| {
                Rc::new(RefCell::new(SpyLift {
                    name: format!("lift_{}", i),
                    floor: 2,
                    ups: 0,
                    downs: 0,
                }))
            })
            .collect();
        let shared = lifts.iter().map(|lift| lift.clone() as SharedElevator).collect();
        (lifts, shared)
    }

    fn setup_view(elevators: Vec<SharedElevator>) -> Rc<RefCell<ViewModel<RecordingSurface>>> {
        let view = ViewModel::new(
            3,
            elevators,
            Vec::new(),
            BuildingLayout::new(LayoutConfig::default()),
            RecordingSurface::new(),
            Box::new(SystemClock),
        )
        .unwrap();
        let view = Rc::new(RefCell::new(view));
        view.borrow_mut().activate();
        view
    }

    fn total_moves(lifts: &[Rc<RefCell<SpyLift>>]) -> usize {
        lifts.iter().map(|lift| lift.borrow().ups + lift.borrow().downs).sum()
    }

    #[test]
    fn test_dispatcher_names() {
        let (_lifts, elevators) = setup_lifts(3);
        let dispatcher = CommandDispatcher::new(elevators);

        assert_eq!(dispatcher.elevator_count(), 3);
        assert_eq!(dispatcher.elevator_names(), &["lift_0", "lift_1", "lift_2"]);
    }

    #[test]
    fn test_out_of_range_index_touches_nothing() {
        // Arrange
        let (lifts, elevators) = setup_lifts(2);
        let view = setup_view(elevators.clone());
        let mut dispatcher = CommandDispatcher::new(elevators);
        dispatcher.subscribe(view.clone());
        let clears_before = view.borrow().surface().clears();

        // Act
        let results = [
            dispatcher.call_elevator_up(-1),
            dispatcher.call_elevator_up(2),
            dispatcher.call_elevator_down(-1),
            dispatcher.call_elevator_down(2),
            dispatcher.call_elevator_down(i64::MAX),
        ];

        // Assert
        assert_eq!(results, [false; 5]);
        assert_eq!(total_moves(&lifts), 0);
        assert_eq!(view.borrow().surface().clears(), clears_before);
    }

    #[test]
    fn test_call_down_moves_once_and_renders_once() {
        // Arrange
        let (lifts, elevators) = setup_lifts(2);
        let view = setup_view(elevators.clone());
        let mut dispatcher = CommandDispatcher::new(elevators);
        dispatcher.subscribe(view.clone());
        let clears_before = view.borrow().surface().clears();

        // Act
        let result = dispatcher.call_elevator_down(0);

        // Assert
        assert!(result);
        assert_eq!(lifts[0].borrow().downs, 1);
        assert_eq!(lifts[0].borrow().ups, 0);
        assert_eq!(total_moves(&lifts), 1);
        assert_eq!(view.borrow().surface().clears(), clears_before + 1);
        assert_eq!(view.borrow().snapshot("lift_0").unwrap().position, 1);
        assert_eq!(view.borrow().snapshot("lift_1").unwrap().position, 2);
    }

    #[test]
    fn test_call_up_notifies_after_move() {
        // Arrange
        let (_lifts, elevators) = setup_lifts(2);
        let recorder = Rc::new(RefCell::new(FloorRecorder {
            elevators: elevators.clone(),
            seen: Vec::new(),
        }));
        let mut dispatcher = CommandDispatcher::new(elevators);
        dispatcher.subscribe(recorder.clone());

        // Act
        dispatcher.call_elevator_up(1);
        dispatcher.call_elevator_up(1);

        // Assert
        let recorder = recorder.borrow();
        let seen = &recorder.seen;
        assert_eq!(seen.len(), 2);
        assert_eq!(
            seen[0],
            (
                CommandApplied {
                    index: 1,
                    name: "lift_1".to_string(),
                    direction: Direction::Up,
                },
                3
            )
        );
        assert_eq!(seen[1].1, 4);
    }

    #[test]
    fn test_channel_observer() {
        // Arrange
        let (_lifts, elevators) = setup_lifts(1);
        let (event_tx, event_rx) = unbounded::<CommandApplied>();
        let mut dispatcher = CommandDispatcher::new(elevators);
        dispatcher.subscribe(Rc::new(RefCell::new(event_tx)));

        // Act
        dispatcher.call_elevator_down(0);
        dispatcher.call_elevator_down(1);

        // Assert
        let event = event_rx.try_recv().unwrap();
        assert_eq!(event.direction, Direction::Down);
        assert_eq!(event.name, "lift_0");
        assert!(event_rx.try_recv().is_err());
    }

    #[test]
    fn test_headless_dispatch() {
        // Arrange
        let (lifts, elevators) = setup_lifts(1);
        let dispatcher = CommandDispatcher::new(elevators);

        // Act
        let result = dispatcher.call_elevator_up(0);

        // Assert
        assert!(result);
        assert_eq!(lifts[0].borrow().floor, 3);
    }
}
