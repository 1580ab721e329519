/// Keys read from a share event's extras.
pub const EXIT_ON_SENT: &str = "exit_on_sent";
