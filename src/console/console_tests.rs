/*
 * Unit tests for the console module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_parse_commands
 * - test_parse_errors
 * - test_console_up_redraws
 * - test_console_bad_index
 * - test_console_board_and_wait
 * - test_console_reports_bad_lines
 * - test_console_run_until_quit
 * - test_console_run_until_input_closed
 * - test_console_tick_prints_changed_frame
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod console_tests {
    use crossbeam_channel::unbounded;
    use std::thread;
    use std::time::Duration;

    use crate::config::Config;
    use crate::console::command::CommandError;
    use crate::console::{parse_command, Console, ConsoleCommand, ConsoleEvent, Flow};
    use crate::setup::BuildingSetup;

    fn setup_console() -> Console {
        let setup = BuildingSetup {
            num_floors: 3,
            num_elevators: 2,
        };
        let console = Console::new(&Config::default(), setup).unwrap();
        console.activate();
        console
    }

    fn run_line(console: &Console, line: &str) -> (Flow, String) {
        let mut output = Vec::new();
        let flow = console.handle_line(line, &mut output).unwrap();
        (flow, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("up 1"), Ok(Some(ConsoleCommand::Up(1))));
        assert_eq!(parse_command("  DOWN   -1 "), Ok(Some(ConsoleCommand::Down(-1))));
        assert_eq!(
            parse_command("board 0 5"),
            Ok(Some(ConsoleCommand::Board { index: 0, count: 5 }))
        );
        assert_eq!(
            parse_command("wait 3 2"),
            Ok(Some(ConsoleCommand::Wait { floor: 3, count: 2 }))
        );
        assert_eq!(parse_command("q"), Ok(Some(ConsoleCommand::Quit)));
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_command("jump 1"),
            Err(CommandError::Unknown("jump".to_string()))
        );
        assert_eq!(
            parse_command("up"),
            Err(CommandError::MissingArgument { command: "up", argument: "index" })
        );
        assert_eq!(
            parse_command("board 1 many"),
            Err(CommandError::BadArgument { argument: "count", input: "many".to_string() })
        );
        assert_eq!(parse_command("render now"), Err(CommandError::TrailingInput("render")));
    }

    #[test]
    fn test_console_up_redraws() {
        // Arrange
        let console = setup_console();

        // Act
        let (flow, output) = run_line(&console, "up 0");

        // Assert
        assert_eq!(flow, Flow::Continue);
        assert_eq!(console.view.borrow().snapshot("lift_1").unwrap().position, 2);
        assert_eq!(console.view.borrow().snapshot("lift_2").unwrap().position, 1);
        assert!(output.contains("Lift_1"));
        assert!(output.contains("Total People: 0"));
    }

    #[test]
    fn test_console_bad_index() {
        // Arrange
        let console = setup_console();

        // Act
        let (_, high) = run_line(&console, "down 2");
        let (_, negative) = run_line(&console, "up -1");

        // Assert
        assert_eq!(
            high,
            "No elevator with index 2, valid indices are 0 to 1 (lift_1, lift_2)\n"
        );
        assert!(negative.starts_with("No elevator with index -1"));
        assert_eq!(console.view.borrow().snapshot("lift_1").unwrap().position, 1);
    }

    #[test]
    fn test_console_board_and_wait() {
        // Arrange
        let console = setup_console();

        // Act
        let (_, boarded) = run_line(&console, "board 1 4");
        let (_, waiting) = run_line(&console, "wait 2 3");
        let (_, missing) = run_line(&console, "wait 9 1");

        // Assert
        assert!(boarded.contains("Inside: 4"));
        assert!(waiting.contains("Waiting: 3"));
        assert!(waiting.contains("Total People: 7"));
        assert_eq!(missing, "No floor 9\n");
        assert_eq!(console.view.borrow().stats().total_people, 7);
    }

    #[test]
    fn test_console_reports_bad_lines() {
        // Arrange
        let console = setup_console();

        // Act
        let (flow, output) = run_line(&console, "frobnicate");
        let (quit, _) = run_line(&console, "quit");

        // Assert
        assert_eq!(flow, Flow::Continue);
        assert!(output.starts_with("unknown command \"frobnicate\""));
        assert_eq!(quit, Flow::Quit);
    }

    #[test]
    fn test_console_run_until_quit() {
        // Arrange
        let console = setup_console();
        let (input_tx, input_rx) = unbounded::<ConsoleEvent>();
        input_tx.send(ConsoleEvent::Line("up 1".to_string())).unwrap();
        input_tx.send(ConsoleEvent::Line("quit".to_string())).unwrap();
        let mut output = Vec::new();

        // Act
        console.run(input_rx, &mut output).unwrap();

        // Assert
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("commands:"));
        assert_eq!(console.view.borrow().snapshot("lift_2").unwrap().position, 2);
        assert!(!console.view.borrow().is_active());
    }

    #[test]
    fn test_console_run_until_input_closed() {
        // Arrange
        let console = setup_console();
        let (input_tx, input_rx) = unbounded::<ConsoleEvent>();
        input_tx.send(ConsoleEvent::InputClosed).unwrap();

        // Act
        let result = console.run(input_rx, &mut Vec::new());

        // Assert
        assert!(result.is_ok());
        assert!(!console.view.borrow().is_active());
    }

    #[test]
    fn test_console_tick_prints_changed_frame() {
        // Arrange
        let mut config = Config::default();
        config.console.refresh_interval_ms = 20;
        let setup = BuildingSetup {
            num_floors: 3,
            num_elevators: 2,
        };
        let console = Console::new(&config, setup).unwrap();
        assert!(console.building.set_waiting(2, 5));

        let (input_tx, input_rx) = unbounded::<ConsoleEvent>();
        let quitter = thread::spawn(move || {
            thread::sleep(Duration::from_millis(300));
            input_tx.send(ConsoleEvent::Line("quit".to_string())).unwrap();
        });
        let mut output = Vec::new();

        // Act
        console.run(input_rx, &mut output).unwrap();
        quitter.join().unwrap();

        // Assert
        let output = String::from_utf8(output).unwrap();
        let first_frame = output.find("Waiting: 0").unwrap();
        let tick_frame = output.find("Waiting: 5").unwrap();
        assert!(first_frame < tick_frame);
    }
}
