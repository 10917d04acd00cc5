use crate::core::position::GamePosition;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum CalculateOptions {
    #[default]
    Configured, // Search as deep as the configured difficulty allows
    Depth(u32), // Search exactly this many plies
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DebugState {
    On,
    Off,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Identify,
    ToggleDebug(DebugState),
    IsReady,  // queries whether the engine is finished initializing
    NewGame,
    SetPosition(GamePosition),  // sets the board position for that game
    Calculate(CalculateOptions),  // `go` in UCI: Start calculating
    Stop,  // Nothing to interrupt: search is synchronous
    Quit,  // exit the program
}

/// Turns single input lines into commands of some protocol.
pub trait ProtocolInterpreter {
    type Command;

    fn line_to_command(line: &str) -> Option<Self::Command>;
}
