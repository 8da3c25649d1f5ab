mod state;

pub use state::{App, DialogState, Focus, Mode};
