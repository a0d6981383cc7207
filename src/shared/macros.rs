/***************************************/
/*               Macros                */
/***************************************/

/// Unwraps a `Result`, or logs `context` with the error and ends the process.
#[macro_export]
macro_rules! unwrap_or_exit {
    ($result:expr, $context:literal) => {
        match $result {
            Ok(value) => value,
            Err(error) => {
                log::error!(concat!($context, ": {}"), error);
                std::process::exit(1);
            }
        }
    };
}
